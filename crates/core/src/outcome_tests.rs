// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn unauthorized_has_no_submissions() {
    let outcome = ScheduleOutcome::Unauthorized;
    assert!(outcome.is_unauthorized());
    assert!(outcome.submitted().is_empty());
}

#[test]
fn scheduled_exposes_submitted_ids() {
    let outcome = ScheduleOutcome::Scheduled {
        submitted: vec![NotificationId::new("a"), NotificationId::new("b")],
    };
    assert!(!outcome.is_unauthorized());
    assert_eq!(outcome.submitted(), ["a", "b"]);
}

#[test]
fn partially_failed_keeps_both_sides() {
    let outcome = ScheduleOutcome::PartiallyFailed {
        submitted: vec![NotificationId::new("ok")],
        failed: vec![SubmissionFailure {
            id: NotificationId::new("bad"),
            message: "submit failed: rejected".into(),
        }],
    };
    assert_eq!(outcome.submitted(), ["ok"]);
    match outcome {
        ScheduleOutcome::PartiallyFailed { failed, .. } => {
            assert_eq!(failed.len(), 1);
            assert_eq!(failed[0].id, "bad");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
