//! Assignment changes produced by dragging a person between products, editing
//! an assignment, adding a person, or archiving a product.
//!
//! DESIGN
//! ======
//! The backend replaces a person's whole assignment set for a date, so every
//! move is expressed as the full list of `ProductPlaceholderPair`s the person
//! should hold afterwards. The pure helpers compute that list; `move_assignment`
//! fetches the current set, applies the move, and posts it.

#[cfg(test)]
#[path = "reassign_test.rs"]
mod reassign_test;

use time::Date;
use uuid::Uuid;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::{Assignment, Person, Product, ProductPlaceholderPair};
use crate::util::person;

fn pair(assignment: &Assignment) -> ProductPlaceholderPair {
    ProductPlaceholderPair { product_id: assignment.product_id, placeholder: assignment.placeholder }
}

fn push_unique(pairs: &mut Vec<ProductPlaceholderPair>, next: ProductPlaceholderPair) {
    if !pairs.iter().any(|p| p.product_id == next.product_id) {
        pairs.push(next);
    }
}

/// Pairs a person should hold after moving out of `from_product_id` into `to`.
///
/// Moving into the unassigned product drops every other assignment. Moving
/// into a real product drops the unassigned one.
#[must_use]
pub fn products_after_move(
    existing: &[Assignment],
    from_product_id: i64,
    to: ProductPlaceholderPair,
    unassigned_product_id: Option<i64>,
) -> Vec<ProductPlaceholderPair> {
    if Some(to.product_id) == unassigned_product_id {
        return vec![to];
    }

    let mut pairs = Vec::with_capacity(existing.len() + 1);
    for assignment in existing {
        if assignment.product_id == from_product_id || Some(assignment.product_id) == unassigned_product_id {
            continue;
        }
        push_unique(&mut pairs, pair(assignment));
    }
    push_unique(&mut pairs, to);
    pairs
}

/// Pairs a person should hold after also joining `to`. Joining a product
/// they already hold replaces its placeholder flag.
#[must_use]
pub fn products_after_add(
    existing: &[Assignment],
    to: ProductPlaceholderPair,
    unassigned_product_id: Option<i64>,
) -> Vec<ProductPlaceholderPair> {
    products_after_move(existing, to.product_id, to, unassigned_product_id)
}

/// The person's pairs with the placeholder flag on `product_id` flipped, or
/// `None` when they hold no assignment there.
#[must_use]
pub fn toggle_placeholder(existing: &[Assignment], product_id: i64) -> Option<Vec<ProductPlaceholderPair>> {
    if !existing.iter().any(|a| a.product_id == product_id) {
        return None;
    }
    let mut pairs = Vec::with_capacity(existing.len());
    for assignment in existing {
        let mut next = pair(assignment);
        if next.product_id == product_id {
            next.placeholder = !next.placeholder;
        }
        push_unique(&mut pairs, next);
    }
    Some(pairs)
}

/// Pairs `person` keeps when removed from `product_id`, read from the
/// assignments on the loaded board.
#[must_use]
pub fn products_after_unassign(person: &Person, products: &[Product], product_id: i64) -> Vec<ProductPlaceholderPair> {
    let mut pairs = Vec::new();
    for assignment in person::assignments_for(person, products) {
        if assignment.product_id != product_id {
            push_unique(&mut pairs, pair(assignment));
        }
    }
    pairs
}

/// Board state with one assignment moved, shown while the move is in flight.
///
/// Returns `None` when the source product, the destination product, or the
/// assignment cannot be found, or when source and destination are the same.
#[must_use]
pub fn apply_local_move(
    products: &[Product],
    assignment_id: i64,
    from_product_id: i64,
    to_product_id: i64,
) -> Option<Vec<Product>> {
    if from_product_id == to_product_id {
        return None;
    }
    let moving = products
        .iter()
        .find(|p| p.id == from_product_id)?
        .assignments
        .iter()
        .find(|a| a.id == assignment_id)?
        .clone();
    if !products.iter().any(|p| p.id == to_product_id) {
        return None;
    }

    let moved = products
        .iter()
        .map(|product| {
            let mut next = product.clone();
            if product.id == from_product_id {
                next.assignments.retain(|a| a.id != assignment_id);
            }
            if product.id == to_product_id {
                next.assignments.push(Assignment { product_id: to_product_id, ..moving.clone() });
            }
            next
        })
        .collect();
    Some(moved)
}

/// Move `assignment` to `to_product_id` on `date`, keeping the person's other
/// assignments for that date.
///
/// # Errors
///
/// Returns an error when the current assignments cannot be read or the new
/// set cannot be saved.
pub async fn move_assignment(
    client: &ApiClient,
    space_uuid: Uuid,
    date: Date,
    assignment: &Assignment,
    to_product_id: i64,
    unassigned_product_id: Option<i64>,
) -> Result<Vec<Assignment>, ApiError> {
    let existing = client.assignments_for_person_on(space_uuid, assignment.person.id, date).await?;
    let to = ProductPlaceholderPair { product_id: to_product_id, placeholder: assignment.placeholder };
    let pairs = products_after_move(&existing, assignment.product_id, to, unassigned_product_id);
    client.create_assignments_for_date(space_uuid, assignment.person.id, date, pairs).await
}

/// Add `person_id` to `to` on `date`, keeping their other assignments.
///
/// # Errors
///
/// Returns an error when the current assignments cannot be read or the new
/// set cannot be saved.
pub async fn add_assignment(
    client: &ApiClient,
    space_uuid: Uuid,
    person_id: i64,
    date: Date,
    to: ProductPlaceholderPair,
    unassigned_product_id: Option<i64>,
) -> Result<Vec<Assignment>, ApiError> {
    let existing = client.assignments_for_person_on(space_uuid, person_id, date).await?;
    let pairs = products_after_add(&existing, to, unassigned_product_id);
    client.create_assignments_for_date(space_uuid, person_id, date, pairs).await
}

/// Create `person` and place them on `products` as of `date`. An empty list
/// puts them in unassigned.
///
/// # Errors
///
/// Returns the first failing call's error; a person created before a failed
/// placement is left in the space.
pub async fn create_placed_person(
    client: &ApiClient,
    space_uuid: Uuid,
    person: &Person,
    date: Date,
    products: Vec<ProductPlaceholderPair>,
) -> Result<(Person, Vec<Assignment>), ApiError> {
    let created = client.create_person(space_uuid, person).await?;
    let assignments = client.create_assignments_for_date(space_uuid, created.id, date, products).await?;
    Ok((created, assignments))
}

/// End every assignment on `product` as of `date`, then archive the product
/// the day before.
///
/// # Errors
///
/// Returns the first failing call's error.
pub async fn archive_product_and_release(
    client: &ApiClient,
    space_uuid: Uuid,
    product: &Product,
    products: &[Product],
    date: Date,
) -> Result<Product, ApiError> {
    for assignment in &product.assignments {
        let remaining = products_after_unassign(&assignment.person, products, product.id);
        client.create_assignments_for_date(space_uuid, assignment.person.id, date, remaining).await?;
    }
    client.archive_product(space_uuid, product, date).await
}
