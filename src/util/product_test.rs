use super::*;
use crate::net::fixtures::{person, product};
use crate::net::types::{Assignment, Tag};
use time::macros::date;

fn tag(name: &str) -> Tag {
    Tag { id: 1, name: name.into(), space_uuid: "s".into() }
}

fn located(name: &str, location: &str, tags: &[&str]) -> Product {
    Product {
        space_location: Some(tag(location)),
        tags: tags.iter().map(|t| tag(t)).collect(),
        ..product(1, name)
    }
}

// =============================================================
// Archive / active
// =============================================================

#[test]
fn ends_on_or_after_includes_same_day() {
    let mut p = product(1, "Apollo");
    assert!(ends_on_or_after(&p, date!(2020 - 05 - 14)));
    p.end_date = Some(date!(2020 - 05 - 14));
    assert!(ends_on_or_after(&p, date!(2020 - 05 - 14)));
    assert!(!ends_on_or_after(&p, date!(2020 - 05 - 15)));
}

#[test]
fn archived_flag_or_past_end_date_archives() {
    let viewing = date!(2020 - 05 - 14);
    let mut p = product(1, "Apollo");
    assert!(!is_archived_on(&p, viewing));
    p.end_date = Some(date!(2020 - 05 - 13));
    assert!(is_archived_on(&p, viewing));
    p.end_date = None;
    p.archived = true;
    assert!(is_archived_on(&p, viewing));
}

#[test]
fn unassigned_is_never_active() {
    let viewing = date!(2020 - 05 - 14);
    assert!(is_active_product(&product(1, "Apollo"), viewing));
    assert!(!is_active_product(&product(2, "unassigned"), viewing));
    assert!(!is_active_product(&product(3, "Unassigned"), viewing));
    assert!(is_unassigned_product(&product(2, "unassigned")));
    assert!(!is_unassigned_product(&product(3, "Unassigned")));
}

// =============================================================
// Filters
// =============================================================

#[test]
fn empty_filters_match_everything() {
    assert!(matches_filters(&product(1, "Apollo"), &[], &[]));
}

#[test]
fn location_filter_requires_listed_location() {
    let p = located("Apollo", "Dearborn", &[]);
    assert!(matches_filters(&p, &["Dearborn".into()], &[]));
    assert!(!matches_filters(&p, &["Detroit".into()], &[]));
    assert!(!matches_filters(&product(2, "NoLocation"), &["Dearborn".into()], &[]));
}

#[test]
fn tag_filter_matches_any_tag_and_combines_with_location() {
    let p = located("Apollo", "Dearborn", &["AV", "EV"]);
    assert!(matches_filters(&p, &[], &["EV".into(), "Other".into()]));
    assert!(!matches_filters(&p, &[], &["Other".into()]));
    assert!(!matches_filters(&p, &["Detroit".into()], &["EV".into()]));
    assert!(matches_filters(&p, &["Dearborn".into()], &["EV".into()]));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn strip_archived_assignments_drops_archived_people() {
    let mut archived = person(2, "Gone");
    archived.archive_date = Some(date!(2020 - 01 - 01));
    let assignment = |id, person| Assignment {
        id,
        person,
        product_id: 1,
        space_uuid: "s".into(),
        placeholder: false,
        start_date: None,
        end_date: None,
    };
    let p = Product {
        assignments: vec![assignment(1, person(1, "Here")), assignment(2, archived)],
        ..product(1, "Apollo")
    };

    let stripped = strip_archived_assignments(&p, date!(2020 - 05 - 14));
    assert_eq!(stripped.assignments.len(), 1);
    assert_eq!(stripped.assignments[0].person.name, "Here");
}

#[test]
fn empty_product_defaults() {
    let blank = empty_product(None);
    assert_eq!(blank.id, -1);
    assert_eq!(blank.space_uuid, "z");
    assert_eq!(empty_product(Some("abc")).space_uuid, "abc");
}

#[test]
fn find_by_name_is_exact() {
    let products = vec![product(1, "Apollo"), product(2, "unassigned")];
    assert_eq!(find_by_name(&products, "unassigned").map(|p| p.id), Some(2));
    assert!(find_by_name(&products, "apollo").is_none());
}
