use crate::type_label;
use std::fmt;
use std::sync::Arc;

/// Maps a string to a simpler form before it is compared or tokenized.
///
/// Implementations must be pure: the same input always yields the same
/// output, and no state is observable between calls.
pub trait Simplifier: Send + Sync {
    /// Returns the simplified form of `input`.
    fn simplify(&self, input: &str) -> String;

    /// Human readable name used when describing a pipeline.
    fn name(&self) -> String {
        type_label::<Self>()
    }
}

/// An ordered, non-empty sequence of simplifiers applied first to last.
///
/// This is the single simplifier slot of an adapted comparator. Adding a
/// simplifier never nests chains; it produces a new, longer chain that
/// shares the existing steps.
#[derive(Clone)]
pub struct Chain {
    steps: Vec<Arc<dyn Simplifier>>,
}

impl Chain {
    /// Creates a chain holding a single step.
    pub fn single(step: Arc<dyn Simplifier>) -> Self {
        Self { steps: vec![step] }
    }

    /// Composes `first` onto `existing`.
    ///
    /// The result computes `existing(first(x))`: the new step runs on the raw
    /// input and the existing steps keep their relative order after it.
    pub fn compose(first: Arc<dyn Simplifier>, existing: &Chain) -> Self {
        let mut steps = Vec::with_capacity(existing.steps.len() + 1);
        steps.push(first);
        steps.extend(existing.steps.iter().cloned());
        Self { steps }
    }

    /// Returns the steps in application order.
    pub fn steps(&self) -> &[Arc<dyn Simplifier>] {
        &self.steps
    }

    /// Returns the number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a chain holds at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Simplifier for Chain {
    fn simplify(&self, input: &str) -> String {
        debug_assert!(!self.steps.is_empty(), "Chain must hold at least one step");

        let mut current = input.to_owned();
        for step in &self.steps {
            current = step.simplify(&current);
        }
        current
    }

    fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&step.name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Chain").field(&self.to_string()).finish()
    }
}

/// A simplifier backed by a closure.
pub struct FnSimplifier<F> {
    name: &'static str,
    function: F,
}

/// Creates a named simplifier from a closure.
///
/// ```rust
/// use simcompose::{simplifier, Simplifier};
///
/// let trim = simplifier::from_fn("trim", |s| s.trim().to_owned());
/// assert_eq!(trim.simplify("  a  "), "a");
/// ```
pub fn from_fn<F>(name: &'static str, function: F) -> FnSimplifier<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    FnSimplifier { name, function }
}

impl<F> Simplifier for FnSimplifier<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn simplify(&self, input: &str) -> String {
        (self.function)(input)
    }

    fn name(&self) -> String {
        self.name.to_owned()
    }
}
