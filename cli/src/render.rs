//! Plain-text output for the human (non `--json`) mode.
//!
//! Every function returns a `String` so output can be asserted in tests;
//! `main` does the printing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use peoplemover::net::types::{AnyTag, Assignment, Person, Reassignment, Space, UserSpaceMapping};
use peoplemover::state::FilterGroup;
use peoplemover::util::duration::{calculate_duration, duration_unit};
use peoplemover::util::sort::{ProductGroup, sort_assignments_by_role};
use peoplemover::util::time_on_product::TimeOnProductItem;
use serde::Serialize;
use time::Date;

const NO_ROLE: &str = "no role";

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

pub fn spaces(spaces: &[Space]) -> String {
    let mut out = String::new();
    for space in spaces {
        let visibility = if space.today_view_is_public { "public" } else { "private" };
        writeln!(out, "{}\t{}\t{visibility}", space.uuid, space.name).unwrap_or_default();
    }
    out
}

pub fn users(users: &[UserSpaceMapping]) -> String {
    let mut out = String::new();
    for user in users {
        writeln!(out, "{}\t{}", user.user_id, user.permission.as_str()).unwrap_or_default();
    }
    out
}

fn role_name(person: &Person) -> &str {
    person.space_role.as_ref().map_or(NO_ROLE, |role| role.name.as_str())
}

fn assignment_line(out: &mut String, assignment: &Assignment, viewing_date: Date) {
    let days = calculate_duration(assignment, viewing_date);
    let placeholder = if assignment.placeholder { " [placeholder]" } else { "" };
    writeln!(
        out,
        "    {} ({}) {days} {}{placeholder}",
        assignment.person.name,
        role_name(&assignment.person),
        duration_unit(days)
    )
    .unwrap_or_default();
}

/// Board listing: group heading, product line, then one line per assignment
/// ordered by role.
pub fn product_groups(groups: &[ProductGroup], viewing_date: Date) -> String {
    let mut out = String::new();
    for group in groups {
        if let Some(name) = &group.name {
            writeln!(out, "== {name} ==").unwrap_or_default();
        }
        for product in &group.products {
            let location = product.space_location.as_ref().map_or("", |l| l.name.as_str());
            writeln!(out, "{}\t{}\t{location}", product.id, product.name).unwrap_or_default();
            let mut assignments = product.assignments.clone();
            sort_assignments_by_role(&mut assignments);
            for assignment in &assignments {
                assignment_line(&mut out, assignment, viewing_date);
            }
        }
    }
    out
}

pub fn people(people: &[&Person]) -> String {
    let mut out = String::new();
    for person in people {
        let cdsid = person.custom_field1.as_deref().unwrap_or("");
        let tags = person.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ");
        writeln!(out, "{}\t{}\t{cdsid}\t{}\t{tags}", person.id, person.name, role_name(person)).unwrap_or_default();
    }
    out
}

pub fn tags(tags: &[AnyTag]) -> String {
    let mut out = String::new();
    for tag in tags {
        match &tag.color {
            Some(color) => writeln!(out, "{}\t{}\t{}", tag.id, tag.name, color.color),
            None => writeln!(out, "{}\t{}", tag.id, tag.name),
        }
        .unwrap_or_default();
    }
    out
}

pub fn filter_groups(groups: &[FilterGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        writeln!(out, "{}", group.label()).unwrap_or_default();
        for option in &group.options {
            let mark = if option.selected { "x" } else { " " };
            writeln!(out, "  [{mark}] {}", option.label).unwrap_or_default();
        }
    }
    out
}

pub fn time_on_product(items: &[TimeOnProductItem]) -> String {
    let mut out = String::new();
    for item in items {
        writeln!(
            out,
            "{}\t{}\t{}\t{} {}",
            item.person_name,
            item.product_name,
            item.person_role,
            item.time_on_product,
            duration_unit(item.time_on_product)
        )
        .unwrap_or_default();
    }
    out
}

pub fn reassignments(reassignments: &[Reassignment]) -> String {
    let mut out = String::new();
    for reassignment in reassignments {
        let origin = reassignment.origin_product_name.as_deref().unwrap_or("(new)");
        writeln!(out, "{}\t{origin} -> {}", reassignment.person.name, reassignment.destination_product_name)
            .unwrap_or_default();
    }
    out
}

pub fn lines<T: std::fmt::Display>(rows: &[T]) -> String {
    let mut out = String::new();
    for row in rows {
        writeln!(out, "{row}").unwrap_or_default();
    }
    out
}
