// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permission capabilities and authorization state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A capability the caller can ask the platform to grant.
///
/// The default request set is empty; the platform decides what an empty
/// request means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Show an alert banner.
    Alert,
    /// Play the notification sound.
    Sound,
    /// Update the application badge count.
    Badge,
}

/// The platform's current permission grant state for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    /// The user declined.
    Denied,
    /// Notifications may be scheduled.
    Authorized,
}

impl AuthorizationStatus {
    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationStatus::Authorized)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthorizationStatus::NotDetermined => "not determined",
            AuthorizationStatus::Denied => "denied",
            AuthorizationStatus::Authorized => "authorized",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
#[path = "authorization_tests.rs"]
mod tests;
