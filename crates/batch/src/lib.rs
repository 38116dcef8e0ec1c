// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nudge-batch: accumulate notification descriptors and hand them to a
//! platform notifier.
//!
//! ```no_run
//! use nudge_adapters::DesktopNotifier;
//! use nudge_batch::NotificationBatch;
//! use nudge_core::{Capability, NotificationDescriptor};
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let mut batch = NotificationBatch::new(DesktopNotifier::new());
//! batch
//!     .request_permission(&[Capability::Alert, Capability::Sound])
//!     .await
//!     .ok();
//! batch.add_notification(NotificationDescriptor::new("Tea", "Kettle is ready"));
//! let outcome = batch
//!     .schedule_notifications(Duration::from_secs(180), false)
//!     .await;
//! println!("{outcome:?}");
//! # }
//! ```

pub mod batch;

pub use batch::NotificationBatch;
