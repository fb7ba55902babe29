use super::*;

#[test]
fn default_flags_are_not_received() {
    let flags = Flags::default();
    assert!(!flags.received());
    assert!(!flags.announcement_banner_enabled);
}

#[test]
fn flags_copy_banner_fields_from_run_config() {
    let config = RunConfig {
        announcement_banner_enabled: true,
        announcement_banner_message: "Maintenance tonight".into(),
        ..RunConfig::default()
    };
    let flags = Flags::from(&config);
    assert!(flags.received());
    assert!(flags.announcement_banner_enabled);
    assert_eq!(flags.announcement_banner_message, "Maintenance tonight");
}
