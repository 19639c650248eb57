use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::marker::PhantomData;
use std::ops::BitOr;

/// See [`rest`].
pub struct Rest<X = str>
where
    X: ?Sized,
{
    _phantom: PhantomData<fn(&X)>,
}

impl<X> Default for Rest<X>
where
    X: ?Sized,
{
    fn default() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<X> Parser<X> for Rest<X>
where
    X: ToOwned + ?Sized,
{
    type Output = X::Owned;

    fn parse(&self, input: &X) -> Optional<X::Owned> {
        Optional::present(input.to_owned())
    }
}

impl<X, Rhs> BitOr<Rhs> for Rest<X>
where
    X: ?Sized,
{
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Succeeds with the whole input, owned.
///
/// Nothing is ever consumed, so the rest of the input is all of it.
pub const fn rest<X>() -> Rest<X>
where
    X: ?Sized,
{
    Rest { _phantom: PhantomData }
}
