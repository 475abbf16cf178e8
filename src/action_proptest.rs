//! Property-based tests for the decision function.
//!
//! These tests use proptest to generate every combination of states and
//! verify that the decision invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::action::{decide, Action};
    use crate::state::{CurrentState, DesiredState, SourceFileState};
    use proptest::prelude::*;

    fn desired_state() -> impl Strategy<Value = DesiredState> {
        prop_oneof![Just(DesiredState::Enabled), Just(DesiredState::Disabled)]
    }

    fn current_state() -> impl Strategy<Value = CurrentState> {
        proptest::sample::select(CurrentState::ALL.to_vec())
    }

    fn source_state() -> impl Strategy<Value = SourceFileState> {
        proptest::sample::select(SourceFileState::ALL.to_vec())
    }

    proptest! {
        /// Property: an enabled target never produces a disable, and vice versa
        #[test]
        fn decide_never_moves_away_from_desired(
            desired in desired_state(),
            current in current_state(),
            source in source_state(),
        ) {
            let action = decide(desired, current, source);
            match desired {
                DesiredState::Enabled => prop_assert_ne!(action, Action::DisableRepo),
                DesiredState::Disabled => prop_assert_ne!(action, Action::EnableRepo),
            }
        }

        /// Property: a repository that is not installed is left alone when disabling
        #[test]
        fn decide_disabling_missing_repository_is_noop(source in source_state()) {
            prop_assert_eq!(
                decide(DesiredState::Disabled, CurrentState::NotInstalled, source),
                Action::None
            );
        }

        /// Property: the decision only depends on the source state for enabled repositories
        #[test]
        fn decide_ignores_source_state_unless_enabled(
            desired in desired_state(),
            a in source_state(),
            b in source_state(),
        ) {
            for current in [CurrentState::Disabled, CurrentState::NotInstalled] {
                prop_assert_eq!(decide(desired, current, a), decide(desired, current, b));
            }
        }

        /// Property: a consistent, enabled file needs nothing when enabling
        #[test]
        fn decide_is_idempotent_after_enable(source in source_state()) {
            let action = decide(DesiredState::Enabled, CurrentState::Enabled, source);
            if source == SourceFileState::Broken {
                prop_assert_eq!(action, Action::EnableRepo);
            } else {
                prop_assert_eq!(action, Action::None);
            }
        }
    }
}
