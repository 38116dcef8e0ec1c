// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification descriptor: everything one notification will say and carry.

use crate::id::NotificationId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A notification attachment: a local file plus the identifier the platform
/// files it under.
///
/// Modeled as one value so a path without an identifier (or the reverse)
/// cannot exist. The file is not touched until scheduling time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    identifier: String,
    path: PathBuf,
}

impl Attachment {
    pub fn new(identifier: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            path: path.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Notification sound selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    /// The platform's default notification sound.
    Default,
    /// A platform-defined named sound.
    Named(String),
}

/// Describes one notification pending submission.
///
/// The identifier is fixed at construction. Nothing else is validated here:
/// an empty title or an attachment path that does not exist is accepted and
/// only surfaces at scheduling time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDescriptor {
    id: NotificationId,
    title: String,
    body: String,
    subtitle: String,
    badge: u32,
    sound: Option<Sound>,
    user_info: IndexMap<String, String>,
    category: String,
    attachment: Option<Attachment>,
}

impl NotificationDescriptor {
    /// Create a descriptor with a freshly generated identifier.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_id(NotificationId::generate(), title, body)
    }

    /// Create a descriptor with an explicit identifier.
    pub fn with_id(
        id: impl Into<NotificationId>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            subtitle: String::new(),
            badge: 0,
            sound: None,
            user_info: IndexMap::new(),
            category: String::new(),
            attachment: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = badge;
        self
    }

    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Add one metadata key/value pair. Insertion order is preserved.
    pub fn with_user_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_info.insert(key.into(), value.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn badge(&self) -> u32 {
        self.badge
    }

    pub fn sound(&self) -> Option<&Sound> {
        self.sound.as_ref()
    }

    pub fn user_info(&self) -> &IndexMap<String, String> {
        &self.user_info
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
