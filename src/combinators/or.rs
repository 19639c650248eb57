use crate::{Optional, Parser};
use std::ops::BitOr;

/// See [`or`].
pub struct Or<P, Q> {
    lhs: P,
    rhs: Q,
}

impl<X, P, Q> Parser<X> for Or<P, Q>
where
    X: ?Sized,
    P: Parser<X>,
    Q: Parser<X, Output = P::Output>,
{
    type Output = P::Output;

    fn parse(&self, input: &X) -> Optional<P::Output> {
        let output = self.lhs.parse(input);

        if output.has_value() {
            output
        } else {
            self.rhs.parse(input)
        }
    }
}

impl<P, Q, Rhs> BitOr<Rhs> for Or<P, Q> {
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        or(self, rhs)
    }
}

/// Left-biased alternation, also available as the `|` operator.
///
/// Tries `lhs` first; `rhs` is never invoked when `lhs` succeeds.
pub const fn or<P, Q>(lhs: P, rhs: Q) -> Or<P, Q> {
    Or { lhs, rhs }
}
