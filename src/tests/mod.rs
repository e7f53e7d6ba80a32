use crate::comparator::Comparator;
use std::marker::PhantomData;

mod scenarios;

/// Scores 1.0 for equal inputs and 0.0 otherwise, over any input shape.
pub(crate) struct Identity<T: ?Sized> {
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Identity<T> {
    pub(crate) fn new() -> Self {
        Self {
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized + PartialEq> Comparator for Identity<T> {
    type Input = T;

    fn compare(&self, a: &T, b: &T) -> f32 {
        if a == b {
            1.0
        } else {
            0.0
        }
    }

    fn name(&self) -> String {
        "Identity".to_owned()
    }
}
