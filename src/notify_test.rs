use super::*;

// =============================================================
// NotificationKind
// =============================================================

#[test]
fn kinds_map_to_fixed_colors() {
    assert_eq!(NotificationKind::Info.color(), "#003865");
    assert_eq!(NotificationKind::Success.color(), "#006341");
    assert_eq!(NotificationKind::Error.color(), "#dc2626");
}

#[test]
fn kind_names_parse_case_insensitively_with_info_fallback() {
    assert_eq!(NotificationKind::from_name("SUCCESS"), NotificationKind::Success);
    assert_eq!(NotificationKind::from_name(" error "), NotificationKind::Error);
    assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Info);
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

#[test]
fn class_name_includes_kind_modifier() {
    assert_eq!(NotificationKind::Error.class_name(), "notification notification-error");
}

// =============================================================
// NotificationSlot
// =============================================================

#[test]
fn second_show_replaces_first_immediately() {
    let mut slot = NotificationSlot::new();
    let (first, replaced) = slot.open();
    assert_eq!(replaced, None);

    let (second, replaced) = slot.open();
    assert_eq!(replaced, Some(first));
    assert_eq!(slot.current(), Some(second));
}

#[test]
fn stale_timers_do_not_touch_the_replacement() {
    let mut slot = NotificationSlot::new();
    let (first, _) = slot.open();
    let (second, _) = slot.open();

    assert!(!slot.begin_dismiss(first));
    assert!(!slot.finish(first));
    assert_eq!(slot.current(), Some(second));
    assert!(slot.begin_dismiss(second));
}

#[test]
fn dismiss_then_finish_empties_the_slot() {
    let mut slot = NotificationSlot::new();
    let (ticket, _) = slot.open();

    assert!(slot.begin_dismiss(ticket));
    assert!(!slot.begin_dismiss(ticket));
    assert_eq!(slot.current(), Some(ticket));

    assert!(slot.finish(ticket));
    assert_eq!(slot.current(), None);
}

#[test]
fn dismiss_is_idempotent_while_leaving() {
    let mut slot = NotificationSlot::new();
    let (ticket, _) = slot.open();
    assert!(slot.begin_dismiss(ticket));
    // Close button clicked after the auto-dismiss already started.
    assert!(!slot.begin_dismiss(ticket));
}

#[test]
fn show_during_exit_transition_replaces_leaving_toast() {
    let mut slot = NotificationSlot::new();
    let (first, _) = slot.open();
    assert!(slot.begin_dismiss(first));

    let (second, replaced) = slot.open();
    assert_eq!(replaced, Some(first));
    assert!(!slot.finish(first));
    assert_eq!(slot.current(), Some(second));
    assert!(slot.begin_dismiss(second));
}

#[test]
fn exit_animation_runs_as_long_as_the_removal_delay() {
    assert_eq!(exit_animation(300), "slideOut 300ms ease forwards");
    let config = crate::config::SiteConfig { notification_exit_ms: 750, ..Default::default() };
    assert_eq!(exit_animation(config.notification_exit_ms), "slideOut 750ms ease forwards");
}
