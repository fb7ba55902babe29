//! Product predicates used to split the board into active, archived, and
//! unassigned products.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use time::Date;

use crate::net::types::Product;
use crate::util::person;

pub const UNASSIGNED_PRODUCT_NAME: &str = "unassigned";

/// Exact-name check for the backend's catch-all product.
#[must_use]
pub fn is_unassigned_product(product: &Product) -> bool {
    product.name == UNASSIGNED_PRODUCT_NAME
}

#[must_use]
pub fn ends_on_or_after(product: &Product, date: Date) -> bool {
    product.end_date.is_none_or(|end| end >= date)
}

#[must_use]
pub fn is_archived_on(product: &Product, date: Date) -> bool {
    product.archived || !ends_on_or_after(product, date)
}

#[must_use]
pub fn is_active_product(product: &Product, date: Date) -> bool {
    !product.name.eq_ignore_ascii_case(UNASSIGNED_PRODUCT_NAME) && !product.archived && ends_on_or_after(product, date)
}

/// Location and product-tag filters; an empty list matches everything and
/// both must match.
#[must_use]
pub fn matches_filters(product: &Product, location_filters: &[String], product_tag_filters: &[String]) -> bool {
    let location_matches = location_filters.is_empty()
        || product
            .space_location
            .as_ref()
            .is_some_and(|location| location_filters.contains(&location.name));
    let tag_matches =
        product_tag_filters.is_empty() || product.tags.iter().any(|tag| product_tag_filters.contains(&tag.name));
    location_matches && tag_matches
}

/// Copy of `product` without the assignments of people archived on `date`.
#[must_use]
pub fn strip_archived_assignments(product: &Product, date: Date) -> Product {
    Product {
        assignments: product
            .assignments
            .iter()
            .filter(|assignment| !person::is_archived(&assignment.person, date))
            .cloned()
            .collect(),
        ..product.clone()
    }
}

/// Blank product used to seed a create form.
#[must_use]
pub fn empty_product(space_uuid: Option<&str>) -> Product {
    Product {
        id: -1,
        name: String::new(),
        space_uuid: space_uuid.unwrap_or("z").to_owned(),
        start_date: None,
        end_date: None,
        dorf: Some(String::new()),
        space_location: None,
        tags: Vec::new(),
        archived: false,
        notes: Some(String::new()),
        url: Some(String::new()),
        assignments: Vec::new(),
    }
}

/// First product whose name matches, case-sensitively.
#[must_use]
pub fn find_by_name<'a>(products: &'a [Product], name: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.name == name)
}
