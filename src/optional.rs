use std::fmt;

/// A value that is either present or absent.
///
/// Absence is the crate's only error channel: a failed parse, at any level of
/// composition, is an [`Optional::Absent`]. There is no distinction between
/// malformed input and input no rule matched.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Optional<T> {
    /// A present value.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Optional<T> {
    /// Wraps `value`.
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// No value.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Whether a value is present.
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Maps a present value through `f`.
    ///
    /// Absence propagates; `f` is not invoked.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Maps a present value through `f`, returning its result directly
    /// (no double wrapping).
    ///
    /// Absence propagates; `f` is not invoked.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

/// Diagnostic rendering: `nil` when absent, `some(<value>)` when present.
impl<T> fmt::Display for Optional<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "some({value})"),
            Self::Absent => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
mod tests;
