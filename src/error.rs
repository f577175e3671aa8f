//! Error types for contract failures.
//!
//! Operations over well-typed inputs (slices, maps) never fail. The errors in
//! this module surface the contract violations that cannot be ruled out by
//! the type system: folding an empty collection without a seed, invoking a
//! method a value does not have, and dynamic [`Value`](crate::value::Value)
//! arguments of the wrong shape.

use std::fmt;

/// Returned when `reduce` is called on an empty collection without a seed.
///
/// # Examples
///
/// ```rust
/// use underbar::error::EmptyReductionError;
///
/// assert_eq!(
///     EmptyReductionError.to_string(),
///     "reduce of empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyReductionError;

impl fmt::Display for EmptyReductionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "reduce of empty collection with no initial value")
    }
}

impl std::error::Error for EmptyReductionError {}

/// Returned when a method is invoked by name on a value that does not have it.
///
/// # Examples
///
/// ```rust
/// use underbar::error::MethodNotFoundError;
///
/// let error = MethodNotFoundError {
///     method: "toUpperCase".to_string(),
///     receiver: "number",
/// };
/// assert_eq!(error.to_string(), "number has no method named `toUpperCase`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodNotFoundError {
    /// The name that was looked up.
    pub method: String,
    /// The type name of the receiver the lookup failed on.
    pub receiver: &'static str,
}

impl fmt::Display for MethodNotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} has no method named `{}`",
            self.receiver, self.method
        )
    }
}

impl std::error::Error for MethodNotFoundError {}

/// Returned when a dynamic argument does not have the shape an operation needs.
///
/// # Examples
///
/// ```rust
/// use underbar::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     parameter: "nested_array",
///     expected: "array",
///     found: "number",
/// };
/// assert_eq!(
///     error.to_string(),
///     "invalid argument `nested_array`: expected array, found number"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidArgumentError {
    /// The name of the offending parameter.
    pub parameter: &'static str,
    /// The shape the operation expected.
    pub expected: &'static str,
    /// The type name that was actually supplied.
    pub found: &'static str,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "invalid argument `{}`: expected {}, found {}",
            self.parameter, self.expected, self.found
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Unified error type for the library.
///
/// This is the error returned by operations that can fail in more than one
/// way (such as `invoke`) and by [`Callable`](crate::value::Callable)s stored
/// inside dynamic values.
///
/// # Examples
///
/// ```rust
/// use underbar::error::{EmptyReductionError, Error};
///
/// let error: Error = EmptyReductionError.into();
/// assert!(matches!(error, Error::EmptyReduction(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A seedless reduction over an empty collection.
    EmptyReduction(EmptyReductionError),
    /// A method lookup by name failed.
    MethodNotFound(MethodNotFoundError),
    /// An argument had the wrong shape.
    InvalidArgument(InvalidArgumentError),
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReduction(error) => write!(formatter, "{error}"),
            Self::MethodNotFound(error) => write!(formatter, "{error}"),
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyReduction(error) => Some(error),
            Self::MethodNotFound(error) => Some(error),
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<EmptyReductionError> for Error {
    fn from(error: EmptyReductionError) -> Self {
        Self::EmptyReduction(error)
    }
}

impl From<MethodNotFoundError> for Error {
    fn from(error: MethodNotFoundError) -> Self {
        Self::MethodNotFound(error)
    }
}

impl From<InvalidArgumentError> for Error {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn method_not_found_display_names_receiver_and_method() {
        let error = MethodNotFoundError {
            method: "sort".to_string(),
            receiver: "string",
        };
        assert_eq!(format!("{error}"), "string has no method named `sort`");
    }

    #[rstest]
    fn error_display_delegates_to_inner_error() {
        let inner = InvalidArgumentError {
            parameter: "target",
            expected: "object",
            found: "array",
        };
        let error = Error::from(inner);
        assert_eq!(format!("{error}"), format!("{inner}"));
    }

    #[rstest]
    fn error_source_is_inner_error() {
        let error = Error::from(EmptyReductionError);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(EmptyReductionError.to_string()));
    }
}
