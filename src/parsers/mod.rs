//! Ready-made parsers.
//!
//! The input type defaults to [`str`] but every parser here stays generic
//! over it.

mod fail;
mod from_fn;
mod number;
mod rest;
mod unit;

pub use self::fail::{fail, Fail};
pub use self::from_fn::{from_fn, FromFn};
pub use self::number::{number, Number};
pub use self::rest::{rest, Rest};
pub use self::unit::{unit, Unit};
