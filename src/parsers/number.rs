use crate::combinators::{self, Or};
use crate::{Optional, Parser};
use num_traits::Num;
use std::marker::PhantomData;
use std::ops::BitOr;

/// See [`number`].
pub struct Number<T, X = str>
where
    X: ?Sized,
{
    _phantom: PhantomData<fn(&X) -> T>,
}

impl<T, X> Default for Number<T, X>
where
    X: ?Sized,
{
    fn default() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<T, X> Parser<X> for Number<T, X>
where
    T: Num,
    X: AsRef<str> + ?Sized,
{
    type Output = T;

    fn parse(&self, input: &X) -> Optional<T> {
        match T::from_str_radix(input.as_ref(), 10) {
            Ok(value) => Optional::present(value),
            Err(_) => Optional::absent(),
        }
    }
}

impl<T, X, Rhs> BitOr<Rhs> for Number<T, X>
where
    X: ?Sized,
{
    type Output = Or<Self, Rhs>;

    fn bitor(self, rhs: Rhs) -> Or<Self, Rhs> {
        combinators::or(self, rhs)
    }
}

/// Parses the whole input as a radix-10 number.
///
/// Fails unless the entire input parses; trailing garbage is rejected.
/// Works for any [`Num`] target, integer or float.
pub const fn number<T, X>() -> Number<T, X>
where
    X: ?Sized,
{
    Number { _phantom: PhantomData }
}
