// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_generates_an_id() {
    let a = NotificationDescriptor::new("Title", "Body");
    let b = NotificationDescriptor::new("Title", "Body");
    assert_ne!(a.id(), b.id());
    assert_eq!(a.title(), "Title");
    assert_eq!(a.body(), "Body");
}

#[test]
fn with_id_uses_the_given_id() {
    let d = NotificationDescriptor::with_id("a", "Hi", "there");
    assert_eq!(d.id().as_str(), "a");
}

#[test]
fn defaults_are_empty() {
    let d = NotificationDescriptor::new("t", "b");
    assert_eq!(d.subtitle(), "");
    assert_eq!(d.badge(), 0);
    assert_eq!(d.sound(), None);
    assert!(d.user_info().is_empty());
    assert_eq!(d.category(), "");
    assert_eq!(d.attachment(), None);
}

#[test]
fn builder_sets_every_field() {
    let d = NotificationDescriptor::with_id("x", "Reminder", "Stand up")
        .with_subtitle("Posture")
        .with_badge(3)
        .with_sound(Sound::Named("chime".into()))
        .with_user_info("kind", "health")
        .with_user_info("priority", "low")
        .with_category("reminders")
        .with_attachment(Attachment::new("img", "/tmp/pic.png"));

    assert_eq!(d.subtitle(), "Posture");
    assert_eq!(d.badge(), 3);
    assert_eq!(d.sound(), Some(&Sound::Named("chime".into())));
    assert_eq!(d.category(), "reminders");

    let keys: Vec<&str> = d.user_info().keys().map(String::as_str).collect();
    assert_eq!(keys, ["kind", "priority"]);

    let attachment = d.attachment().unwrap();
    assert_eq!(attachment.identifier(), "img");
    assert_eq!(attachment.path(), Path::new("/tmp/pic.png"));
}

#[test]
fn empty_title_is_accepted() {
    // Validation is deferred to scheduling time.
    let d = NotificationDescriptor::new("", "");
    assert_eq!(d.title(), "");
}

#[test]
fn serde_roundtrip() {
    let d = NotificationDescriptor::with_id("rt", "Title", "Body")
        .with_badge(1)
        .with_attachment(Attachment::new("a", "/tmp/f"));
    let json = serde_json::to_string(&d).unwrap();
    let back: NotificationDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}
