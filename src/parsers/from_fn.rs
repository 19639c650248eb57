use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::ops::BitOr;

/// See [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

impl<X, F, T> Parser<X> for FromFn<F>
where
    X: ?Sized,
    F: Fn(&X) -> Optional<T>,
{
    type Output = T;

    fn parse(&self, input: &X) -> Optional<T> {
        (self.f)(input)
    }
}

impl<F, Rhs> BitOr<Rhs> for FromFn<F> {
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Wraps a raw parsing function, unmodified.
///
/// Plain closures and functions already implement [`Parser`]; wrapping one
/// additionally gives it the `|` operator.
pub const fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}
