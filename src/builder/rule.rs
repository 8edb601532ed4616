//! Builder for priority-ordered conditional rules.

use crate::builder::error::BuildError;
use crate::core::{Branch, Guard, State, TransitionRule};

/// Builder for conditional transition rules with a fluent API.
///
/// Priority is declaration order: the first `when` added is checked
/// first.
pub struct RuleBuilder<S: State, I> {
    branches: Vec<Branch<S, I>>,
}

impl<S: State, I> RuleBuilder<S, I> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
        }
    }

    /// Add a branch taken when `predicate` holds.
    pub fn when<F>(self, target: S, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate), target)
    }

    /// Add a branch with a labelled predicate.
    pub fn when_named<F>(self, label: &'static str, target: S, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::named(label, predicate), target)
    }

    /// Add a branch from an existing guard.
    pub fn guard(mut self, guard: Guard<I>, target: S) -> Self {
        self.branches.push(Branch { guard, target });
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<TransitionRule<S, I>, BuildError> {
        if self.branches.is_empty() {
            return Err(BuildError::EmptyRule);
        }
        Ok(TransitionRule::Conditional(self.branches))
    }
}

impl<S: State, I> Default for RuleBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Main,
        Turn,
        Cross,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Main => "Main",
                Self::Turn => "Turn",
                Self::Cross => "Cross",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Main, Self::Turn, Self::Cross]
        }
    }

    #[derive(Default)]
    struct Inputs {
        turn: bool,
        cross: bool,
    }

    #[test]
    fn builder_requires_a_branch() {
        let result = RuleBuilder::<TestState, Inputs>::new().build();
        assert!(matches!(result, Err(BuildError::EmptyRule)));
    }

    #[test]
    fn fluent_api_keeps_declaration_order() {
        let rule = RuleBuilder::new()
            .when_named("turn", TestState::Turn, |i: &Inputs| i.turn)
            .when(TestState::Cross, |i: &Inputs| i.cross)
            .build()
            .unwrap();

        assert_eq!(rule.targets(), vec![TestState::Turn, TestState::Cross]);
        assert_eq!(
            rule.evaluate(&Inputs {
                turn: true,
                cross: true
            }),
            Some(TestState::Turn)
        );
        assert_eq!(rule.evaluate(&Inputs::default()), None);
    }

    #[test]
    fn reused_guard_builds_branch() {
        let crossing = Guard::named("cross", |i: &Inputs| i.cross);
        let rule = RuleBuilder::new()
            .guard(crossing.clone(), TestState::Cross)
            .build()
            .unwrap();

        assert_eq!(
            rule.evaluate(&Inputs {
                turn: false,
                cross: true
            }),
            Some(TestState::Cross)
        );
    }
}
