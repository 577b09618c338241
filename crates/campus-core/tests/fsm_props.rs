// Rust guideline compliant 2026-02-06

//! Property-based tests for the FSM module.
//!
//! These tests validate universal properties that should hold across all
//! valid inputs for status transitions.

use campus_core::{Error, Status, TransitionActor};
use proptest::prelude::*;

/// Generates arbitrary Status values.
fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Open),
        Just(Status::InProgress),
        Just(Status::Done),
        Just(Status::Cancelled),
    ]
}

/// Generates arbitrary actor values.
fn arb_actor() -> impl Strategy<Value = TransitionActor> {
    prop_oneof![Just(TransitionActor::Assignee), Just(TransitionActor::Owner)]
}

proptest! {
    /// Terminal states admit no transition, for any target and any actor.
    #[test]
    fn prop_terminal_states_are_final(
        target in arb_status(),
        actor in arb_actor(),
    ) {
        for terminal in [Status::Done, Status::Cancelled] {
            let result = terminal.can_transition_to(target, actor);
            prop_assert!(
                matches!(result, Err(Error::InvalidTransition { .. })),
                "{:?} → {:?} should be invalid for {:?}",
                terminal,
                target,
                actor
            );
        }
    }

    /// Every transition the assignee may perform, the owner may perform too.
    #[test]
    fn prop_owner_dominates_assignee(
        from in arb_status(),
        target in arb_status(),
    ) {
        if from.can_transition_to(target, TransitionActor::Assignee).is_ok() {
            prop_assert!(
                from.can_transition_to(target, TransitionActor::Owner).is_ok(),
                "Owner should be allowed wherever the assignee is ({:?} → {:?})",
                from,
                target
            );
        }
    }

    /// `valid_transitions` agrees with `can_transition_to` in both directions.
    #[test]
    fn prop_valid_transitions_consistent(
        from in arb_status(),
        actor in arb_actor(),
    ) {
        let allowed = from.valid_transitions(actor);
        for target in [Status::Open, Status::InProgress, Status::Done, Status::Cancelled] {
            let listed = allowed.contains(&target);
            let permitted = from.can_transition_to(target, actor).is_ok();
            prop_assert_eq!(
                listed,
                permitted,
                "Listing and check disagree for {:?} → {:?} ({:?})",
                from,
                target,
                actor
            );
        }
    }
}
