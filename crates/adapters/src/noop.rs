// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op platform notifier.

use crate::{NotifyError, PlatformNotifier};
use async_trait::async_trait;
use nudge_core::{AttachmentHandle, AuthorizationStatus, Capability, ScheduleRequest};
use std::path::Path;

/// Platform notifier that never authorizes and discards every request.
///
/// Used when notifications are disabled or not yet configured: schedule
/// passes resolve to the unauthorized outcome without reaching a real
/// platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifier;

impl NoOpNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlatformNotifier for NoOpNotifier {
    async fn request_authorization(
        &self,
        _capabilities: &[Capability],
    ) -> Result<bool, NotifyError> {
        Ok(false)
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Denied
    }

    async fn make_attachment(
        &self,
        _identifier: &str,
        path: &Path,
    ) -> Result<AttachmentHandle, NotifyError> {
        Err(NotifyError::AttachmentFailed(format!(
            "{}: notifications are disabled",
            path.display()
        )))
    }

    async fn submit(&self, _request: ScheduleRequest) -> Result<(), NotifyError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
