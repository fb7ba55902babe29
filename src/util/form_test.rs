use super::*;

fn tag(id: i64, name: &str) -> AnyTag {
    AnyTag { id, name: name.into(), space_uuid: "s".into(), color: None }
}

#[test]
fn space_name_is_trimmed() {
    assert_eq!(validate_space_name("  Moon  ").unwrap(), "Moon");
}

#[test]
fn space_name_rejects_blank_and_long() {
    assert_eq!(validate_space_name("   "), Err(FormError::Empty { field: "space name" }));
    let long = "x".repeat(41);
    let err = validate_space_name(&long).unwrap_err();
    assert_eq!(err.error_code(), "E_FORM_TOO_LONG");
    assert!(validate_space_name(&"x".repeat(40)).is_ok());
}

#[test]
fn person_name_must_not_be_blank() {
    assert!(validate_person_name("\t").is_err());
    assert_eq!(validate_person_name(" Ada ").unwrap(), "Ada");
}

#[test]
fn product_name_reports_its_own_field() {
    assert_eq!(validate_product_name(""), Err(FormError::Empty { field: "product name" }));
    assert_eq!(validate_product_name("Widgets ").unwrap(), "Widgets");
}

#[test]
fn tag_name_duplicates_ignore_case() {
    let existing = [tag(1, "Detroit"), tag(2, "Dearborn")];
    let err = validate_tag_name("detroit ", "location", &existing, None).unwrap_err();
    assert_eq!(err, FormError::Duplicate { kind: "location", name: "detroit".into() });
    assert_eq!(validate_tag_name("Ann Arbor", "location", &existing, None).unwrap(), "Ann Arbor");
}

#[test]
fn renaming_a_tag_to_its_own_name_is_allowed() {
    let existing = [tag(1, "Detroit")];
    assert_eq!(validate_tag_name("DETROIT", "location", &existing, Some(1)).unwrap(), "DETROIT");
}
