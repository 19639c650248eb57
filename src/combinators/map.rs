use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::ops::BitOr;

/// See [`map`].
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<X, P, F, T> Parser<X> for Map<P, F>
where
    X: ?Sized,
    P: Parser<X>,
    F: Fn(P::Output) -> T,
{
    type Output = T;

    fn parse(&self, input: &X) -> Optional<T> {
        self.parser.parse(input).map(|output| (self.f)(output))
    }
}

impl<P, F, Rhs> BitOr<Rhs> for Map<P, F> {
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Applies `parser`, then maps its result through `f`.
///
/// `f` is not invoked when `parser` fails.
pub const fn map<X, P, F, T>(parser: P, f: F) -> Map<P, F>
where
    X: ?Sized,
    P: Parser<X>,
    F: Fn(P::Output) -> T,
{
    Map { parser, f }
}
