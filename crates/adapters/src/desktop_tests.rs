// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use nudge_core::{IntervalTrigger, NotificationContent, NotificationDescriptor, NotificationId};
use std::io::Write;
use std::time::Duration;

fn request(id: &str) -> ScheduleRequest {
    let descriptor = NotificationDescriptor::with_id(id, "Title", "Body");
    ScheduleRequest {
        id: NotificationId::new(id),
        content: NotificationContent::from_descriptor(&descriptor),
        trigger: IntervalTrigger::once(Duration::from_secs(3600)),
    }
}

#[tokio::test]
async fn always_authorized() {
    let notifier = DesktopNotifier::new();
    assert!(notifier.authorization_status().await.is_authorized());
}

#[tokio::test]
async fn request_authorization_grants_immediately() {
    let notifier = DesktopNotifier::new();
    let granted = notifier
        .request_authorization(&[Capability::Alert, Capability::Sound])
        .await
        .unwrap();
    assert!(granted);
}

#[tokio::test]
async fn make_attachment_fails_for_missing_file() {
    let notifier = DesktopNotifier::new();
    let result = notifier
        .make_attachment("img", Path::new("/nonexistent/pic.png"))
        .await;
    assert!(matches!(result, Err(NotifyError::AttachmentFailed(_))));
}

#[tokio::test]
async fn make_attachment_fails_for_directory() {
    let notifier = DesktopNotifier::new();
    let dir = tempfile::tempdir().unwrap();
    let result = notifier.make_attachment("img", dir.path()).await;
    assert!(matches!(result, Err(NotifyError::AttachmentFailed(_))));
}

#[tokio::test]
async fn make_attachment_resolves_real_file_to_absolute_url() {
    let notifier = DesktopNotifier::new();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"png").unwrap();

    let handle = notifier.make_attachment("img", file.path()).await.unwrap();
    assert_eq!(handle.identifier, "img");
    assert!(handle.url.is_absolute());
}

#[tokio::test]
async fn submit_returns_before_the_interval_elapses() {
    // The trigger is an hour out; submit must come back immediately.
    let notifier = DesktopNotifier::new();
    notifier.submit(request("deferred")).await.unwrap();
}

#[test]
fn body_text_folds_subtitle_into_body() {
    let descriptor = NotificationDescriptor::with_id("x", "t", "Body")
        .with_subtitle("Sub");
    let content = NotificationContent::from_descriptor(&descriptor);
    assert_eq!(body_text(&content), "Sub\nBody");

    let plain = NotificationDescriptor::with_id("y", "t", "Body");
    assert_eq!(body_text(&NotificationContent::from_descriptor(&plain)), "Body");
}
