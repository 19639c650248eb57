//! Combinators that derive new parsers from existing ones.
//!
//! Every combinator captures its source parsers by value, so a composed
//! parser never outlives what it was built from. Construction is lazy:
//! nothing runs until the composed parser is applied to an input.

mod flat_map;
mod literal;
mod map;
mod or;

pub use self::flat_map::{flat_map, FlatMap};
pub use self::literal::{literal, Literal};
pub use self::map::{map, Map};
pub use self::or::{or, Or};
