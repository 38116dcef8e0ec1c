// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observable results of permission and scheduling operations.

use crate::id::NotificationId;
use serde::{Deserialize, Serialize};

/// Result of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionOutcome {
    Granted,
    Denied,
}

/// One descriptor whose platform submission failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFailure {
    pub id: NotificationId,
    pub message: String,
}

/// What a schedule pass actually did.
///
/// A caller can tell "nothing happened because permission is missing" apart
/// from "everything was handed to the platform".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleOutcome {
    /// Permission is missing; nothing was submitted.
    Unauthorized,
    /// Every descriptor was handed to the platform, in append order.
    Scheduled { submitted: Vec<NotificationId> },
    /// At least one submission failed; the rest were still submitted.
    PartiallyFailed {
        submitted: Vec<NotificationId>,
        failed: Vec<SubmissionFailure>,
    },
}

impl ScheduleOutcome {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ScheduleOutcome::Unauthorized)
    }

    /// Identifiers successfully handed to the platform, in submission order.
    pub fn submitted(&self) -> &[NotificationId] {
        match self {
            ScheduleOutcome::Unauthorized => &[],
            ScheduleOutcome::Scheduled { submitted } => submitted,
            ScheduleOutcome::PartiallyFailed { submitted, .. } => submitted,
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
