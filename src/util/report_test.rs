use super::*;
use time::macros::date;

#[test]
fn csv_quotes_every_field() {
    let rows = [ReportRow {
        product_name: "Apollo".into(),
        product_location: "Dearborn".into(),
        product_tags: "EV,AV".into(),
        person_name: "Ada \"Countess\" Lovelace".into(),
        custom_field1: "alove1".into(),
        person_role: "Engineer".into(),
        person_note: String::new(),
        person_tags: "remote".into(),
    }];
    let csv = report_to_csv(&rows).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        r#""Product Name","Product Location","Product Tags","Person Name","CDSID","Person Role","Person Note","Person Tags""#
    );
    assert_eq!(
        lines[1],
        r#""Apollo","Dearborn","EV,AV","Ada ""Countess"" Lovelace","alove1","Engineer","","remote""#
    );
    assert!(!csv.ends_with('\n'));
}

#[test]
fn empty_report_is_header_only() {
    let csv = report_to_csv(&[]).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn file_name_uses_space_and_iso_date() {
    assert_eq!(report_file_name("Moon", date!(2020 - 05 - 14)), "Moon_2020-05-14.csv");
}

#[test]
fn file_name_never_points_into_a_directory() {
    let name = report_file_name("R&D/Ops\\East", date!(2021 - 01 - 02));
    assert_eq!(name, "R&D_Ops_East_2021-01-02.csv");
    assert!(!name.contains('/'));
}
