// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered accumulation of notification descriptors and their dispatch.

use nudge_adapters::{NotifyError, PlatformNotifier};
use nudge_core::{
    Capability, IntervalTrigger, NotificationContent, NotificationDescriptor, PermissionOutcome,
    ScheduleOutcome, ScheduleRequest, SubmissionFailure,
};
use std::time::Duration;

/// An ordered, in-memory collection of notification descriptors, plus the
/// operations to request permission and schedule them.
///
/// Descriptors are submitted in append order; nothing is deduplicated and
/// nothing can be removed. Scheduling is read-only with respect to the
/// batch: a second pass re-submits every descriptor, which the platform
/// treats as a replace for identical identifiers.
pub struct NotificationBatch<N: PlatformNotifier> {
    notifier: N,
    notifications: Vec<NotificationDescriptor>,
}

impl<N: PlatformNotifier> NotificationBatch<N> {
    /// Create an empty batch around an injected platform notifier.
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            notifications: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Ask the platform to grant the given capabilities.
    ///
    /// Safe to call repeatedly; the platform coalesces prompts. The outcome
    /// is logged and returned.
    pub async fn request_permission(
        &self,
        capabilities: &[Capability],
    ) -> Result<PermissionOutcome, NotifyError> {
        match self.notifier.request_authorization(capabilities).await {
            Ok(true) => {
                tracing::info!("notification permission granted");
                Ok(PermissionOutcome::Granted)
            }
            Ok(false) => {
                tracing::info!("notification permission denied");
                Ok(PermissionOutcome::Denied)
            }
            Err(e) => {
                tracing::warn!(error = %e, "notification permission request failed");
                Err(e)
            }
        }
    }

    /// Append a descriptor to the batch.
    ///
    /// Nothing is validated here; an empty title or a bad attachment path
    /// only surfaces at scheduling time.
    pub fn add_notification(&mut self, descriptor: NotificationDescriptor) {
        self.notifications.push(descriptor);
    }

    /// Submit every descriptor to the platform with a time-interval trigger.
    ///
    /// Reads the current authorization state first and returns
    /// [`ScheduleOutcome::Unauthorized`] without submitting anything when
    /// permission is missing. Descriptors are submitted independently, in
    /// append order; an attachment that cannot be constructed is dropped
    /// from its notification, and one failed submission never blocks the
    /// rest. An empty batch resolves to an empty `Scheduled` outcome.
    pub async fn schedule_notifications(
        &self,
        interval: Duration,
        repeats: bool,
    ) -> ScheduleOutcome {
        let status = self.notifier.authorization_status().await;
        if !status.is_authorized() {
            tracing::info!(%status, "notifications not authorized, skipping schedule");
            return ScheduleOutcome::Unauthorized;
        }

        let trigger = IntervalTrigger::new(interval, repeats);
        let mut submitted = Vec::new();
        let mut failed = Vec::new();

        for descriptor in &self.notifications {
            let id = descriptor.id().clone();
            let mut content = NotificationContent::from_descriptor(descriptor);

            if let Some(attachment) = descriptor.attachment() {
                match self
                    .notifier
                    .make_attachment(attachment.identifier(), attachment.path())
                    .await
                {
                    Ok(handle) => content.attachment = Some(handle),
                    Err(e) => {
                        // Attachment failure is never fatal to the notification.
                        tracing::warn!(%id, error = %e, "couldn't attach attachment to notification");
                    }
                }
            }

            let request = ScheduleRequest {
                id: id.clone(),
                content,
                trigger,
            };
            match self.notifier.submit(request).await {
                Ok(()) => {
                    tracing::info!(%id, "scheduling notification");
                    submitted.push(id);
                }
                Err(e) => {
                    tracing::warn!(%id, error = %e, "notification submission failed");
                    failed.push(SubmissionFailure {
                        id,
                        message: e.to_string(),
                    });
                }
            }
        }

        if failed.is_empty() {
            ScheduleOutcome::Scheduled { submitted }
        } else {
            ScheduleOutcome::PartiallyFailed { submitted, failed }
        }
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
