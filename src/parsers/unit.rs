use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use std::marker::PhantomData;
use std::ops::BitOr;

/// See [`unit`].
pub struct Unit<T, X = str>
where
    X: ?Sized,
{
    value: T,
    _phantom: PhantomData<fn(&X)>,
}

impl<T, X> Parser<X> for Unit<T, X>
where
    T: Clone,
    X: ?Sized,
{
    type Output = T;

    fn parse(&self, _input: &X) -> Optional<T> {
        Optional::present(self.value.clone())
    }
}

impl<T, X, Rhs> BitOr<Rhs> for Unit<T, X>
where
    X: ?Sized,
{
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Succeeds with a copy of `value` for every input; the input is ignored.
pub const fn unit<T, X>(value: T) -> Unit<T, X>
where
    X: ?Sized,
{
    Unit {
        value,
        _phantom: PhantomData,
    }
}
