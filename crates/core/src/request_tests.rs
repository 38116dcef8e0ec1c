// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::descriptor::Attachment;

#[test]
fn from_descriptor_copies_every_content_field() {
    let descriptor = NotificationDescriptor::with_id("n-1", "Title", "Body")
        .with_subtitle("Sub")
        .with_badge(7)
        .with_sound(Sound::Named("ping".into()))
        .with_user_info("k", "v")
        .with_category("alerts");

    let content = NotificationContent::from_descriptor(&descriptor);
    assert_eq!(content.title, "Title");
    assert_eq!(content.body, "Body");
    assert_eq!(content.subtitle, "Sub");
    assert_eq!(content.badge, 7);
    assert_eq!(content.sound, Sound::Named("ping".into()));
    assert_eq!(content.user_info.get("k").map(String::as_str), Some("v"));
    assert_eq!(content.category, "alerts");
}

#[test]
fn unset_sound_maps_to_default() {
    let descriptor = NotificationDescriptor::with_id("n-2", "t", "b");
    let content = NotificationContent::from_descriptor(&descriptor);
    assert_eq!(content.sound, Sound::Default);
}

#[test]
fn attachment_slot_starts_empty_even_when_descriptor_has_one() {
    let descriptor = NotificationDescriptor::with_id("n-3", "t", "b")
        .with_attachment(Attachment::new("img", "/tmp/pic.png"));
    let content = NotificationContent::from_descriptor(&descriptor);
    assert_eq!(content.attachment, None);
}

#[test]
fn once_trigger_does_not_repeat() {
    let trigger = IntervalTrigger::once(Duration::from_secs(5));
    assert_eq!(trigger.interval, Duration::from_secs(5));
    assert!(!trigger.repeats);
}

#[test]
fn schedule_request_serde_roundtrip() {
    let descriptor = NotificationDescriptor::with_id("rt", "t", "b");
    let request = ScheduleRequest {
        id: descriptor.id().clone(),
        content: NotificationContent::from_descriptor(&descriptor),
        trigger: IntervalTrigger::new(Duration::from_secs(30), true),
    };
    let json = serde_json::to_string(&request).unwrap();
    let back: ScheduleRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}
