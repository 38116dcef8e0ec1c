// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform request bundle: assembled content, trigger, and the submission
//! envelope handed to a platform notifier.

use crate::descriptor::{NotificationDescriptor, Sound};
use crate::id::NotificationId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// An attachment the platform has validated and resolved.
///
/// Produced only by a platform notifier's attachment construction; a
/// descriptor's raw [`Attachment`](crate::Attachment) never reaches a
/// request directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentHandle {
    pub identifier: String,
    pub url: PathBuf,
}

/// When and how often a notification fires: after `interval`, and again at
/// the same interval while `repeats` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTrigger {
    pub interval: Duration,
    pub repeats: bool,
}

impl IntervalTrigger {
    pub fn new(interval: Duration, repeats: bool) -> Self {
        Self { interval, repeats }
    }

    /// A trigger that fires once.
    pub fn once(interval: Duration) -> Self {
        Self::new(interval, false)
    }
}

/// Assembled notification content, ready for the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub subtitle: String,
    pub badge: u32,
    pub sound: Sound,
    pub user_info: IndexMap<String, String>,
    pub category: String,
    pub attachment: Option<AttachmentHandle>,
}

impl NotificationContent {
    /// Copy a descriptor's fields into platform content.
    ///
    /// An unset sound maps to the platform default. The attachment slot
    /// starts empty; it is filled in only after platform validation.
    pub fn from_descriptor(descriptor: &NotificationDescriptor) -> Self {
        Self {
            title: descriptor.title().to_string(),
            body: descriptor.body().to_string(),
            subtitle: descriptor.subtitle().to_string(),
            badge: descriptor.badge(),
            sound: descriptor.sound().cloned().unwrap_or(Sound::Default),
            user_info: descriptor.user_info().clone(),
            category: descriptor.category().to_string(),
            attachment: None,
        }
    }
}

/// One scheduling request, keyed by the descriptor's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub id: NotificationId,
    pub content: NotificationContent,
    pub trigger: IntervalTrigger,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
