//! Function values and method references.

use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::error::Error;

type CallableFunction = dyn Fn(&Value, &[Value]) -> Result<Value, Error>;

/// A function stored inside a [`Value`].
///
/// A callable receives the value it is invoked on (its receiver) together
/// with the argument list. Clones share the same underlying function, and
/// two callables are equal only when they share it.
///
/// # Examples
///
/// ```rust
/// use underbar::value::{Callable, Value};
///
/// let describe = Callable::new(|receiver, arguments| {
///     Ok(Value::from(format!("{receiver}:{}", arguments.len())))
/// });
/// let result = describe.call(&Value::from("moe"), &[Value::Null]).unwrap();
/// assert_eq!(result, Value::from("moe:1"));
///
/// assert_eq!(describe, describe.clone());
/// ```
#[derive(Clone)]
pub struct Callable {
    function: Rc<CallableFunction>,
}

impl Callable {
    /// Wraps a function taking a receiver and an argument list.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, Error> + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Calls the function with `receiver` bound as its receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function returns, unchanged.
    #[inline]
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Result<Value, Error> {
        (self.function)(receiver, arguments)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Callable(..)")
    }
}

/// A method addressed either by name or directly as a function.
///
/// Used by `invoke`: a [`MethodRef::Name`] is resolved on every element
/// (own function-valued properties first, then built-in methods), while a
/// [`MethodRef::Callable`] is called with each element as its receiver.
///
/// # Examples
///
/// ```rust
/// use underbar::value::{Callable, MethodRef, Value};
///
/// let by_name = MethodRef::from("toUpperCase");
/// assert!(matches!(by_name, MethodRef::Name(_)));
///
/// let direct = MethodRef::from(Callable::new(|receiver, _| Ok(receiver.clone())));
/// assert!(matches!(direct, MethodRef::Callable(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MethodRef {
    /// A method looked up on the receiver by name.
    Name(String),
    /// A function called with the element as its receiver.
    Callable(Callable),
}

impl MethodRef {
    /// Calls the referenced method on `receiver`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MethodNotFound`] when a name does not resolve on the
    /// receiver, or the error returned by the method itself.
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Result<Value, Error> {
        match self {
            Self::Name(name) => receiver.call_method(name, arguments),
            Self::Callable(callable) => callable.call(receiver, arguments),
        }
    }
}

impl From<&str> for MethodRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for MethodRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Callable> for MethodRef {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}
