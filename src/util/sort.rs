//! Product and person ordering, plus grouping for the product board.
//!
//! DESIGN
//! ======
//! Comparisons are case-insensitive on the lowercased name. All sorts are
//! stable so equal keys keep the order the backend returned them in.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::net::types::{Assignment, Person, Product};

/// Sort key used for products that have no location.
const NO_LOCATION_SORT_KEY: &str = "ZZZZZZZZ";
/// Sort key used for assignments whose person has no role.
const NO_ROLE_SORT_KEY: &str = "ZZZZZZZ";

pub const NO_LOCATION_GROUP: &str = "No Location";
pub const NO_PRODUCT_TAG_GROUP: &str = "No Product Tag";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProductSortBy {
    #[default]
    Name,
    Location,
    ProductTag,
}

impl ProductSortBy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::ProductTag => "product-tag",
        }
    }
}

impl fmt::Display for ProductSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductSortBy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "name" => Ok(Self::Name),
            "location" => Ok(Self::Location),
            "product-tag" => Ok(Self::ProductTag),
            other => Err(format!("unknown sort `{other}`; expected name, location, or product-tag")),
        }
    }
}

/// A heading plus the products under it. `name` is `None` for the single
/// group produced by name sorting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductGroup {
    pub name: Option<String>,
    pub products: Vec<Product>,
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn location_key(product: &Product) -> &str {
    product.space_location.as_ref().map_or(NO_LOCATION_SORT_KEY, |l| l.name.as_str())
}

pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));
}

/// Location first, name second; products without a location sort last.
pub fn sort_by_location(products: &mut [Product]) {
    products.sort_by(|a, b| {
        compare_ignore_case(location_key(a), location_key(b)).then_with(|| compare_ignore_case(&a.name, &b.name))
    });
}

pub fn sort_people_by_name(people: &mut [Person]) {
    people.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));
}

/// Order a product's assignments by role name, then person name; people
/// without a role go last.
pub fn sort_assignments_by_role(assignments: &mut [Assignment]) {
    fn role(a: &Assignment) -> &str {
        a.person.space_role.as_ref().map_or(NO_ROLE_SORT_KEY, |r| r.name.as_str())
    }
    assignments.sort_by(|a, b| role(a).cmp(role(b)).then_with(|| a.person.name.cmp(&b.person.name)));
}

/// Group `products` for display under `sort_by`.
///
/// Tag groups are keyed case-insensitively but keep the first spelling seen.
/// A product with several tags appears under each of them.
#[must_use]
pub fn group_products(products: &[Product], sort_by: ProductSortBy) -> Vec<ProductGroup> {
    match sort_by {
        ProductSortBy::Name => {
            let mut sorted = products.to_vec();
            sort_by_name(&mut sorted);
            if sorted.is_empty() {
                return Vec::new();
            }
            vec![ProductGroup { name: None, products: sorted }]
        }
        ProductSortBy::Location => group_by(products, NO_LOCATION_GROUP, |p| {
            p.space_location.iter().map(|l| l.name.clone()).collect()
        }),
        ProductSortBy::ProductTag => {
            group_by(products, NO_PRODUCT_TAG_GROUP, |p| p.tags.iter().map(|t| t.name.clone()).collect())
        }
    }
}

fn group_by(products: &[Product], fallback: &str, keys: impl Fn(&Product) -> Vec<String>) -> Vec<ProductGroup> {
    let mut named: BTreeMap<String, ProductGroup> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for product in products {
        let product_keys = keys(product);
        if product_keys.is_empty() {
            ungrouped.push(product.clone());
            continue;
        }
        for key in product_keys {
            named
                .entry(key.to_lowercase())
                .or_insert_with(|| ProductGroup { name: Some(key.clone()), products: Vec::new() })
                .products
                .push(product.clone());
        }
    }

    let mut groups: Vec<ProductGroup> = named.into_values().collect();
    if !ungrouped.is_empty() {
        groups.push(ProductGroup { name: Some(fallback.to_owned()), products: ungrouped });
    }
    for group in &mut groups {
        sort_by_name(&mut group.products);
    }
    groups
}
