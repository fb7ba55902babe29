//! The board for one viewing date and the lists derived from it.
//!
//! DESIGN
//! ======
//! `SpaceView` owns what the backend returned for the viewing date. Every
//! drawer and list on the space page is computed from it on demand, so a
//! reload or a date change only replaces `products` and `people`.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use time::{Date, OffsetDateTime};

use super::filters::ActiveFilters;
use crate::net::types::{Person, Product};
use crate::util::product::{is_active_product, is_archived_on, is_unassigned_product, matches_filters, strip_archived_assignments};
use crate::util::sort::{ProductGroup, ProductSortBy, group_products};
use crate::util::{person, reassign};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceView {
    pub viewing_date: Date,
    pub products: Vec<Product>,
    pub people: Vec<Person>,
    pub sort_by: ProductSortBy,
}

impl Default for SpaceView {
    fn default() -> Self {
        Self::new(OffsetDateTime::now_utc().date())
    }
}

impl SpaceView {
    #[must_use]
    pub fn new(viewing_date: Date) -> Self {
        Self { viewing_date, products: Vec::new(), people: Vec::new(), sort_by: ProductSortBy::default() }
    }

    /// Move to another date; the caller reloads products for it.
    pub fn set_viewing_date(&mut self, date: Date) {
        if self.viewing_date != date {
            self.viewing_date = date;
            self.products.clear();
        }
    }

    /// Products shown on the board: matching the location and product-tag
    /// filters, active on the viewing date, without archived people.
    #[must_use]
    pub fn active_products(&self, filters: &ActiveFilters) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| matches_filters(p, &filters.locations, &filters.product_tags))
            .filter(|p| is_active_product(p, self.viewing_date))
            .map(|p| strip_archived_assignments(p, self.viewing_date))
            .collect()
    }

    #[must_use]
    pub fn grouped_products(&self, filters: &ActiveFilters) -> Vec<ProductGroup> {
        group_products(&self.active_products(filters), self.sort_by)
    }

    #[must_use]
    pub fn archived_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| !is_unassigned_product(p) && is_archived_on(p, self.viewing_date))
            .collect()
    }

    #[must_use]
    pub fn unassigned_product(&self) -> Option<&Product> {
        self.products.iter().find(|p| is_unassigned_product(p))
    }

    /// Unassigned people matching the role and person-tag filters.
    #[must_use]
    pub fn unassigned_people(&self, filters: &ActiveFilters) -> Vec<&Person> {
        self.unassigned_product()
            .map(|unassigned| {
                unassigned
                    .assignments
                    .iter()
                    .map(|a| &a.person)
                    .filter(|p| !person::is_archived(p, self.viewing_date))
                    .filter(|p| person::matches_filters(p, &filters.roles, &filters.person_tags))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn archived_people(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| person::is_archived(p, self.viewing_date)).collect()
    }

    /// Current people matching the role and person-tag filters.
    #[must_use]
    pub fn filtered_people(&self, filters: &ActiveFilters) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|p| !person::is_archived(p, self.viewing_date))
            .filter(|p| person::matches_filters(p, &filters.roles, &filters.person_tags))
            .collect()
    }

    /// Apply a drag locally. Returns the previous products so a failed save
    /// can be rolled back with [`SpaceView::restore_products`].
    pub fn move_locally(&mut self, assignment_id: i64, from_product_id: i64, to_product_id: i64) -> Option<Vec<Product>> {
        let moved = reassign::apply_local_move(&self.products, assignment_id, from_product_id, to_product_id)?;
        Some(std::mem::replace(&mut self.products, moved))
    }

    pub fn restore_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }
}
