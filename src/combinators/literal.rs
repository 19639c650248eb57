use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::ops::BitOr;

/// See [`literal`].
pub struct Literal<P, T, U> {
    parser: P,
    expected: T,
    value: U,
}

impl<X, P, T, U> Parser<X> for Literal<P, T, U>
where
    X: ?Sized,
    P: Parser<X, Output = T>,
    T: PartialEq,
    U: Clone,
{
    type Output = U;

    fn parse(&self, input: &X) -> Optional<U> {
        self.parser.parse(input).flat_map(|output| {
            if output == self.expected {
                Optional::present(self.value.clone())
            } else {
                Optional::absent()
            }
        })
    }
}

impl<P, T, U, Rhs> BitOr<Rhs> for Literal<P, T, U> {
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Succeeds with `value` exactly when `parser` succeeds and its output
/// equals `expected`; fails otherwise.
///
/// This is flat-map with the derived parser selected by an equality check:
/// an unconditional success carrying `value` on a match, an unconditional
/// failure on a mismatch.
pub const fn literal<X, P, T, U>(parser: P, expected: T, value: U) -> Literal<P, T, U>
where
    X: ?Sized,
    P: Parser<X, Output = T>,
    T: PartialEq,
    U: Clone,
{
    Literal { parser, expected, value }
}
