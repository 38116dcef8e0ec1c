// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake platform notifier for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{NotifyError, PlatformNotifier};
use async_trait::async_trait;
use nudge_core::{
    AttachmentHandle, AuthorizationStatus, Capability, NotificationId, ScheduleRequest,
};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded authorization request
#[derive(Debug, Clone)]
pub struct AuthorizationCall {
    pub capabilities: Vec<Capability>,
}

/// Recorded attachment construction
#[derive(Debug, Clone)]
pub struct AttachmentCall {
    pub identifier: String,
    pub path: PathBuf,
}

struct FakeState {
    status: AuthorizationStatus,
    grant: bool,
    failing_attachments: HashSet<String>,
    failing_submissions: HashSet<NotificationId>,
    authorization_calls: Vec<AuthorizationCall>,
    attachment_calls: Vec<AttachmentCall>,
    submissions: Vec<ScheduleRequest>,
}

/// Fake platform notifier recording every call in order.
///
/// Starts authorized with grants enabled; tests flip status, grant
/// responses, and per-identifier failures as needed.
#[derive(Clone)]
pub struct FakePlatformNotifier {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakePlatformNotifier {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                status: AuthorizationStatus::Authorized,
                grant: true,
                failing_attachments: HashSet::new(),
                failing_submissions: HashSet::new(),
                authorization_calls: Vec::new(),
                attachment_calls: Vec::new(),
                submissions: Vec::new(),
            })),
        }
    }
}

impl FakePlatformNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake whose authorization status starts at the given value.
    pub fn with_status(status: AuthorizationStatus) -> Self {
        let fake = Self::new();
        fake.set_status(status);
        fake
    }

    pub fn set_status(&self, status: AuthorizationStatus) {
        self.inner.lock().status = status;
    }

    /// Make subsequent authorization requests report denied.
    pub fn deny_grants(&self) {
        self.inner.lock().grant = false;
    }

    /// Make attachment construction fail for the given attachment identifier.
    pub fn fail_attachment(&self, identifier: impl Into<String>) {
        self.inner.lock().failing_attachments.insert(identifier.into());
    }

    /// Make submission fail for the given notification id.
    pub fn fail_submission(&self, id: impl Into<NotificationId>) {
        self.inner.lock().failing_submissions.insert(id.into());
    }

    /// Get all recorded authorization requests
    pub fn authorization_calls(&self) -> Vec<AuthorizationCall> {
        self.inner.lock().authorization_calls.clone()
    }

    /// Get all recorded attachment constructions (attempts included)
    pub fn attachment_calls(&self) -> Vec<AttachmentCall> {
        self.inner.lock().attachment_calls.clone()
    }

    /// Get all recorded submissions, in issuance order (failed attempts included)
    pub fn submissions(&self) -> Vec<ScheduleRequest> {
        self.inner.lock().submissions.clone()
    }
}

#[async_trait]
impl PlatformNotifier for FakePlatformNotifier {
    async fn request_authorization(
        &self,
        capabilities: &[Capability],
    ) -> Result<bool, NotifyError> {
        let mut state = self.inner.lock();
        state.authorization_calls.push(AuthorizationCall {
            capabilities: capabilities.to_vec(),
        });
        Ok(state.grant)
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        self.inner.lock().status
    }

    async fn make_attachment(
        &self,
        identifier: &str,
        path: &Path,
    ) -> Result<AttachmentHandle, NotifyError> {
        let mut state = self.inner.lock();
        state.attachment_calls.push(AttachmentCall {
            identifier: identifier.to_string(),
            path: path.to_path_buf(),
        });
        if state.failing_attachments.contains(identifier) {
            return Err(NotifyError::AttachmentFailed(format!(
                "{identifier}: rejected by fake"
            )));
        }
        Ok(AttachmentHandle {
            identifier: identifier.to_string(),
            url: path.to_path_buf(),
        })
    }

    async fn submit(&self, request: ScheduleRequest) -> Result<(), NotifyError> {
        let mut state = self.inner.lock();
        let failing = state.failing_submissions.contains(&request.id);
        let id = request.id.clone();
        state.submissions.push(request);
        if failing {
            return Err(NotifyError::SubmitFailed(format!("{id}: rejected by fake")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
