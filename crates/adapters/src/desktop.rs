// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop platform notifier using notify-rust.
//!
//! Desktop notification daemons have no per-app permission prompt, so
//! authorization always reads as granted. Time-interval triggers are
//! emulated: `submit` accepts the request and spawns a task that waits out
//! the interval before showing the notification, again per interval while
//! the trigger repeats.
//!
//! On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to
//! send notifications via the Notification Center. The first notification
//! triggers `ensure_application_set()` which runs an AppleScript to look up
//! a bundle identifier. In a daemon context without Automation permissions,
//! that AppleScript blocks forever. We pre-set the bundle identifier at
//! construction time to bypass the lookup entirely.

use crate::{NotifyError, PlatformNotifier};
use async_trait::async_trait;
use nudge_core::{AttachmentHandle, AuthorizationStatus, Capability, ScheduleRequest, Sound};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            // Pre-set the application bundle identifier so mac-notification-sys
            // skips its NSAppleScript lookup (which blocks forever in processes
            // that lack Automation permissions).
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self
    }
}

#[async_trait]
impl PlatformNotifier for DesktopNotifier {
    async fn request_authorization(
        &self,
        capabilities: &[Capability],
    ) -> Result<bool, NotifyError> {
        // No prompt exists on the desktop; the grant is immediate.
        tracing::debug!(?capabilities, "desktop notifier grants without prompting");
        Ok(true)
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }

    async fn make_attachment(
        &self,
        identifier: &str,
        path: &Path,
    ) -> Result<AttachmentHandle, NotifyError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| NotifyError::AttachmentFailed(format!("{}: {e}", path.display())))?;
        if !metadata.is_file() {
            return Err(NotifyError::AttachmentFailed(format!(
                "{}: not a regular file",
                path.display()
            )));
        }
        let url = tokio::fs::canonicalize(path)
            .await
            .map_err(|e| NotifyError::AttachmentFailed(format!("{}: {e}", path.display())))?;
        Ok(AttachmentHandle {
            identifier: identifier.to_string(),
            url,
        })
    }

    async fn submit(&self, request: ScheduleRequest) -> Result<(), NotifyError> {
        // Delivery is deferred to a background task so submit returns as
        // soon as the request is accepted, matching the platform model.
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(request.trigger.interval).await;
                show(request.clone()).await;
                if !request.trigger.repeats {
                    break;
                }
            }
        });
        Ok(())
    }
}

async fn show(request: ScheduleRequest) {
    // notify_rust::Notification::show() is synchronous on macOS. Run it on
    // tokio's bounded blocking pool to keep the runtime unblocked.
    let join = tokio::task::spawn_blocking(move || {
        let id = request.id;
        tracing::info!(%id, "showing desktop notification");

        let mut notification = notify_rust::Notification::new();
        notification
            .summary(&request.content.title)
            .body(&body_text(&request.content));
        match &request.content.sound {
            Sound::Default => {
                notification.sound_name("message-new-instant");
            }
            Sound::Named(name) => {
                notification.sound_name(name);
            }
        }
        if let Some(attachment) = &request.content.attachment {
            notification.icon(&attachment.url.to_string_lossy());
        }

        match notification.show() {
            Ok(_) => {
                tracing::info!(%id, "desktop notification shown");
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "desktop notification failed");
            }
        }
    });
    if let Err(e) = join.await {
        tracing::warn!(error = %e, "desktop notification task failed");
    }
}

/// Desktop daemons have no subtitle field; fold it into the body.
fn body_text(content: &nudge_core::NotificationContent) -> String {
    if content.subtitle.is_empty() {
        content.body.clone()
    } else {
        format!("{}\n{}", content.subtitle, content.body)
    }
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
