// Deferred checks

use crate::CheckFailure;
use std::fmt;

type CheckFn<'a> = Box<dyn Fn() -> Result<(), CheckFailure> + 'a>;

/// A deferred check over values captured at construction.
///
/// Building a check does no work; [`Check::evaluate`] runs it. A check may
/// borrow the values it tests, so it cannot outlive them.
pub struct Check<'a> {
    constraint: &'static str,
    eval: CheckFn<'a>,
}

impl<'a> Check<'a> {
    /// Wrap a closure as a named check.
    ///
    /// ```
    /// use fieldcheck_core::{Check, CheckFailure};
    ///
    /// let tags = vec!["a", "b", "c"];
    /// let check = Check::new("maxTags", || {
    ///     if tags.len() <= 2 {
    ///         Ok(())
    ///     } else {
    ///         Err(CheckFailure::new("maxTags", "too many tags"))
    ///     }
    /// });
    /// assert_eq!(check.message().as_deref(), Some("too many tags"));
    /// ```
    pub fn new<F>(constraint: &'static str, eval: F) -> Self
    where
        F: Fn() -> Result<(), CheckFailure> + 'a,
    {
        Self {
            constraint,
            eval: Box::new(eval),
        }
    }

    /// Build a check from a predicate and a fixed failure message.
    pub fn predicate<F>(constraint: &'static str, message: impl Into<String>, pass: F) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        let message = message.into();
        Self::new(constraint, move || {
            if pass() {
                Ok(())
            } else {
                Err(CheckFailure::new(constraint, message.clone()))
            }
        })
    }

    /// Name of the constraint this check enforces.
    pub fn constraint(&self) -> &'static str {
        self.constraint
    }

    /// Run the check.
    pub fn evaluate(&self) -> Result<(), CheckFailure> {
        (self.eval)()
    }

    /// Run the check and keep only the failure message.
    pub fn message(&self) -> Option<String> {
        self.evaluate().err().map(|failure| failure.message)
    }
}

impl fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("constraint", &self.constraint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_construction_is_lazy() {
        let calls = Cell::new(0);
        let check = Check::predicate("counted", "never", || {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 0);

        assert!(check.evaluate().is_ok());
        assert!(check.evaluate().is_ok());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_predicate_failure_carries_constraint() {
        let check = Check::predicate("alwaysFails", "nope", || false);
        let failure = check.evaluate().unwrap_err();
        assert_eq!(failure.constraint, "alwaysFails");
        assert_eq!(failure.message, "nope");
        assert_eq!(check.constraint(), "alwaysFails");
    }

    #[test]
    fn test_debug_hides_closure() {
        let check = Check::predicate("x", "m", || true);
        assert_eq!(format!("{:?}", check), "Check { constraint: \"x\", .. }");
    }
}
