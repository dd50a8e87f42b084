use super::*;

#[test]
fn defaults_enable_account_and_update_notifications_only() {
    let prefs = NotificationPrefs::default();
    assert!(prefs.account);
    assert!(!prefs.marketing);
    assert!(prefs.updates);
}

#[test]
fn prefs_serialize_to_stable_field_names() {
    let prefs = NotificationPrefs { account: false, marketing: true, updates: false };
    let json = serde_json::to_string(&prefs).unwrap();
    assert_eq!(json, r#"{"account":false,"marketing":true,"updates":false}"#);
}

#[test]
fn native_load_falls_back_to_defaults() {
    assert_eq!(load_notification_prefs(), NotificationPrefs::default());
}
