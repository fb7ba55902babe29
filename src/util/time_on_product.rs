//! Time-on-product table and a person's assignment history.

#[cfg(test)]
#[path = "time_on_product_test.rs"]
mod time_on_product_test;

use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::net::types::{Assignment, Product};
use crate::util::duration::{calculate_duration, duration_unit};
use crate::util::product::UNASSIGNED_PRODUCT_NAME;

const DISPLAY_DATE: &[FormatItem<'static>] = format_description!("[month]/[day]/[year]");

pub const UNASSIGNED_DISPLAY_NAME: &str = "Unassigned";
pub const NO_ROLE_ASSIGNED: &str = "No Role Assigned";
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const CURRENT: &str = "Current";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOnProductItem {
    pub person_name: String,
    pub product_name: String,
    pub person_role: String,
    pub time_on_product: i64,
}

fn display_product_name(name: &str) -> String {
    if name == UNASSIGNED_PRODUCT_NAME { UNASSIGNED_DISPLAY_NAME.to_owned() } else { name.to_owned() }
}

fn display_date(date: Date) -> String {
    date.format(DISPLAY_DATE).unwrap_or_else(|_| date.to_string())
}

/// One row per assignment on the board, in product then assignment order.
#[must_use]
pub fn generate_time_on_product_items(products: &[Product], viewing_date: Date) -> Vec<TimeOnProductItem> {
    products
        .iter()
        .flat_map(|product| {
            let product_name = display_product_name(&product.name);
            product.assignments.iter().map(move |assignment| TimeOnProductItem {
                person_name: assignment.person.name.clone(),
                product_name: product_name.clone(),
                person_role: assignment
                    .person
                    .space_role
                    .as_ref()
                    .map_or_else(|| NO_ROLE_ASSIGNED.to_owned(), |role| role.name.clone()),
                time_on_product: calculate_duration(assignment, viewing_date),
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentHistoryRow {
    pub product_name: String,
    pub start: String,
    pub end: String,
    pub duration: i64,
}

impl fmt::Display for AssignmentHistoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{} - {} ({} {})",
            self.product_name,
            self.start,
            self.end,
            self.duration,
            duration_unit(self.duration)
        )
    }
}

/// History rows for assignments that started before `today`, newest first.
///
/// Product names come from `products`; ids missing there show as
/// "Unknown Product".
#[must_use]
pub fn assignment_history_rows(assignments: &[Assignment], products: &[Product], today: Date) -> Vec<AssignmentHistoryRow> {
    let mut started: Vec<(&Assignment, Date)> = assignments
        .iter()
        .filter_map(|a| a.start_date.filter(|start| *start < today).map(|start| (a, start)))
        .collect();
    started.sort_by_key(|(_, start)| Reverse(*start));

    started
        .into_iter()
        .map(|(assignment, start)| {
            let product_name = products
                .iter()
                .find(|p| p.id == assignment.product_id)
                .map_or_else(|| UNKNOWN_PRODUCT.to_owned(), |p| display_product_name(&p.name));
            AssignmentHistoryRow {
                product_name,
                start: display_date(start),
                end: assignment.end_date.map_or_else(|| CURRENT.to_owned(), display_date),
                duration: calculate_duration(assignment, today),
            }
        })
        .collect()
}
