//! Minimal generic parser combinators over whole inputs.
//!
//! A parser is anything that maps a borrowed input to an [`Optional`] value;
//! absence is the only failure channel. Combinators build new parsers out of
//! old ones without invoking them; invocation happens once, when
//! [`Parser::parse`] is finally applied to an input.
//!
//! Unlike consuming parser combinators, composition here never advances the
//! input: [`ParserExt::flat_map`] runs the derived parser on the same input
//! the source parser saw. Parsers model independent checks of one value, not
//! sequential token consumption.
//!
//! Example:
//!
//! ```rust
//! use parsette::parsers;
//! use parsette::{Optional, Parser, ParserExt};
//!
//! #[derive(Clone, Copy, Debug, Eq, PartialEq)]
//! enum Gender {
//!     Male,
//!     Female,
//! }
//!
//! let gender = parsers::rest().literal("male".to_owned(), Gender::Male)
//!     | parsers::rest().literal("female".to_owned(), Gender::Female)
//!     | parsers::rest().literal("dude".to_owned(), Gender::Male);
//!
//! assert_eq!(gender.parse("female"), Optional::present(Gender::Female));
//! assert_eq!(gender.parse("dude"), Optional::present(Gender::Male));
//! assert_eq!(gender.parse("xxx"), Optional::absent());
//!
//! let int = parsers::number::<f64, str>().map(|value| value.trunc() as i64);
//!
//! assert_eq!(int.parse("123.321"), Optional::present(123));
//! assert_eq!(format!("{}", int.parse("123.321")), "some(123)");
//! assert_eq!(format!("{}", int.parse("haha")), "nil");
//! ```

use self::combinators::{FlatMap, Literal, Map, Or};

pub use self::optional::Optional;

pub mod combinators;
mod optional;
pub mod parsers;

/// A parser of inputs of type `X`.
///
/// Any `Fn(&X) -> Optional<T>` is a parser. Invoking [`parse`] is
/// referentially transparent: parsers hold no mutable state, so parsing the
/// same input twice yields equal results.
///
/// [`parse`]: Parser::parse
pub trait Parser<X>
where
    X: ?Sized,
{
    /// The type of value the parser yields.
    type Output;

    /// Applies the parser to `input`.
    fn parse(&self, input: &X) -> Optional<Self::Output>;
}

impl<X, F, T> Parser<X> for F
where
    X: ?Sized,
    F: Fn(&X) -> Optional<T>,
{
    type Output = T;

    fn parse(&self, input: &X) -> Optional<T> {
        self(input)
    }
}

/// Combinator methods for every [`Parser`].
pub trait ParserExt<X>: Parser<X>
where
    X: ?Sized,
{
    /// See [`combinators::map`].
    fn map<F, T>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        combinators::map(self, f)
    }

    /// See [`combinators::flat_map`].
    fn flat_map<F, Q>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Q,
        Q: Parser<X>,
    {
        combinators::flat_map(self, f)
    }

    /// See [`combinators::or`]. Also available as the `|` operator.
    fn or<Q>(self, rhs: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Parser<X, Output = Self::Output>,
    {
        combinators::or(self, rhs)
    }

    /// See [`combinators::literal`].
    fn literal<U>(self, expected: Self::Output, value: U) -> Literal<Self, Self::Output, U>
    where
        Self: Sized,
        Self::Output: PartialEq,
        U: Clone,
    {
        combinators::literal(self, expected, value)
    }
}

impl<X, P> ParserExt<X> for P
where
    X: ?Sized,
    P: Parser<X> + ?Sized,
{
}
