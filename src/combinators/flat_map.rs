use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::ops::BitOr;

/// See [`flat_map`].
pub struct FlatMap<P, F> {
    parser: P,
    f: F,
}

impl<X, P, F, Q> Parser<X> for FlatMap<P, F>
where
    X: ?Sized,
    P: Parser<X>,
    F: Fn(P::Output) -> Q,
    Q: Parser<X>,
{
    type Output = Q::Output;

    fn parse(&self, input: &X) -> Optional<Q::Output> {
        self.parser.parse(input).flat_map(|output| (self.f)(output).parse(input))
    }
}

impl<P, F, Rhs> BitOr<Rhs> for FlatMap<P, F> {
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Applies `parser`; on success, applies the parser selected by `f` to the
/// same input.
///
/// The derived parser sees the very input the source parser saw; nothing is
/// consumed or advanced. Composed parsers are independent checks of one
/// input, not a sequence of tokens. When `parser` fails, the whole parse
/// fails and `f` is not invoked.
pub const fn flat_map<X, P, F, Q>(parser: P, f: F) -> FlatMap<P, F>
where
    X: ?Sized,
    P: Parser<X>,
    F: Fn(P::Output) -> Q,
    Q: Parser<X>,
{
    FlatMap { parser, f }
}
