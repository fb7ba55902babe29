use super::*;
use crate::net::fixtures::{person, product};
use crate::net::types::{RoleTag, Tag};
use time::macros::date;

fn engineer_with_tags(tags: &[&str]) -> Person {
    Person {
        space_role: Some(RoleTag { id: 1, name: "Engineer".into(), space_uuid: "s".into(), color: None }),
        tags: tags.iter().map(|t| Tag { id: 2, name: (*t).into(), space_uuid: "s".into() }).collect(),
        ..person(1, "Ada")
    }
}

#[test]
fn archived_only_strictly_before_date() {
    let mut p = person(1, "Ada");
    assert!(!is_archived(&p, date!(2020 - 05 - 14)));
    p.archive_date = Some(date!(2020 - 05 - 14));
    assert!(!is_archived(&p, date!(2020 - 05 - 14)));
    assert!(is_archived(&p, date!(2020 - 05 - 15)));
}

#[test]
fn role_and_tag_filters_both_apply() {
    let p = engineer_with_tags(&["remote"]);
    assert!(matches_filters(&p, &[], &[]));
    assert!(matches_filters(&p, &["Engineer".into()], &[]));
    assert!(!matches_filters(&p, &["PM".into()], &[]));
    assert!(matches_filters(&p, &["Engineer".into()], &["remote".into()]));
    assert!(!matches_filters(&p, &["Engineer".into()], &["onsite".into()]));
}

#[test]
fn person_without_role_fails_role_filter() {
    assert!(!matches_filters(&person(1, "Ada"), &["Engineer".into()], &[]));
}

#[test]
fn assignments_for_collects_across_products() {
    let ada = person(1, "Ada");
    let assign = |id, product_id, person: Person| crate::net::types::Assignment {
        id,
        person,
        product_id,
        space_uuid: "s".into(),
        placeholder: false,
        start_date: None,
        end_date: None,
    };
    let products = vec![
        crate::net::types::Product { assignments: vec![assign(1, 1, ada.clone())], ..product(1, "Apollo") },
        crate::net::types::Product { assignments: vec![assign(2, 2, person(2, "Grace"))], ..product(2, "Gemini") },
        crate::net::types::Product { assignments: vec![assign(3, 3, ada.clone())], ..product(3, "Mercury") },
    ];

    let ids: Vec<i64> = assignments_for(&ada, &products).iter().map(|a| a.product_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn empty_person_is_unsaved() {
    assert_eq!(empty_person().id, -1);
    assert!(empty_person().name.is_empty());
}
