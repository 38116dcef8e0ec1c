// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge-core: Core types for the nudge local-notification library

pub mod authorization;
pub mod descriptor;
pub mod id;
pub mod outcome;
pub mod request;

pub use authorization::{AuthorizationStatus, Capability};
pub use descriptor::{Attachment, NotificationDescriptor, Sound};
pub use id::NotificationId;
pub use outcome::{PermissionOutcome, ScheduleOutcome, SubmissionFailure};
pub use request::{AttachmentHandle, IntervalTrigger, NotificationContent, ScheduleRequest};
