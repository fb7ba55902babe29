//! Person predicates.

#[cfg(test)]
#[path = "person_test.rs"]
mod person_test;

use time::Date;

use crate::net::types::{Assignment, Person, Product};

/// Archived when the archive date is strictly before `date`.
#[must_use]
pub fn is_archived(person: &Person, date: Date) -> bool {
    person.archive_date.is_some_and(|archived| archived < date)
}

/// Role and person-tag filters; an empty list matches everything and both
/// must match.
#[must_use]
pub fn matches_filters(person: &Person, role_filters: &[String], person_tag_filters: &[String]) -> bool {
    let role_matches =
        role_filters.is_empty() || person.space_role.as_ref().is_some_and(|role| role_filters.contains(&role.name));
    let tag_matches =
        person_tag_filters.is_empty() || person.tags.iter().any(|tag| person_tag_filters.contains(&tag.name));
    role_matches && tag_matches
}

/// The person's assignment in each product that has one, in product order.
#[must_use]
pub fn assignments_for<'a>(person: &Person, products: &'a [Product]) -> Vec<&'a Assignment> {
    products
        .iter()
        .filter_map(|product| product.assignments.iter().find(|a| a.person.id == person.id))
        .collect()
}

/// Blank person used to seed a create form.
#[must_use]
pub fn empty_person() -> Person {
    Person {
        id: -1,
        name: String::new(),
        space_uuid: String::new(),
        space_role: None,
        tags: Vec::new(),
        notes: Some(String::new()),
        new_person: false,
        new_person_date: None,
        archive_date: None,
        custom_field1: Some(String::new()),
    }
}
