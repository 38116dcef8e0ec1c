// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! nudge-adapters: platform notifier implementations

mod desktop;
mod noop;

pub use desktop::DesktopNotifier;
pub use noop::NoOpNotifier;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{AttachmentCall, AuthorizationCall, FakePlatformNotifier};

use async_trait::async_trait;
use nudge_core::{AttachmentHandle, AuthorizationStatus, Capability, ScheduleRequest};
use std::path::Path;
use thiserror::Error;

/// Errors from platform notifier operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("authorization request failed: {0}")]
    AuthorizationFailed(String),
    #[error("attachment construction failed: {0}")]
    AttachmentFailed(String),
    #[error("submit failed: {0}")]
    SubmitFailed(String),
}

/// Injected capability standing in for the platform notification center.
///
/// Core logic never touches a process-wide singleton; everything goes
/// through this trait so tests can substitute [`FakePlatformNotifier`].
#[async_trait]
pub trait PlatformNotifier: Clone + Send + Sync + 'static {
    /// Ask the platform to grant the given capabilities. `Ok(true)` means
    /// granted. Repeat calls are safe; the platform coalesces prompts.
    async fn request_authorization(
        &self,
        capabilities: &[Capability],
    ) -> Result<bool, NotifyError>;

    /// Fresh read of the current grant state.
    async fn authorization_status(&self) -> AuthorizationStatus;

    /// Construct a platform attachment from a local file.
    async fn make_attachment(
        &self,
        identifier: &str,
        path: &Path,
    ) -> Result<AttachmentHandle, NotifyError>;

    /// Hand one scheduling request to the platform.
    ///
    /// Returns once the request is accepted; delivery happens later on the
    /// platform's own execution context.
    async fn submit(&self, request: ScheduleRequest) -> Result<(), NotifyError>;
}
