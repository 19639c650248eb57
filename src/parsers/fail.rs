use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::marker::PhantomData;
use std::ops::BitOr;

/// See [`fail`].
pub struct Fail<T, X = str>
where
    X: ?Sized,
{
    _phantom: PhantomData<fn(&X) -> T>,
}

impl<T, X> Default for Fail<T, X>
where
    X: ?Sized,
{
    fn default() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<T, X> Parser<X> for Fail<T, X>
where
    X: ?Sized,
{
    type Output = T;

    fn parse(&self, _input: &X) -> Optional<T> {
        Optional::absent()
    }
}

impl<T, X, Rhs> BitOr<Rhs> for Fail<T, X>
where
    X: ?Sized,
{
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Fails for every input.
pub const fn fail<T, X>() -> Fail<T, X>
where
    X: ?Sized,
{
    Fail { _phantom: PhantomData }
}
