//! The [`Value`] type and its conversions.

use std::collections::BTreeMap;
use std::fmt;

use super::callable::Callable;

/// A string-keyed mapping of values.
///
/// Keys are traversed in sorted order, which is the stable order every
/// operation in this crate observes when walking an object.
pub type Object = BTreeMap<String, Value>;

/// A dynamically typed value.
///
/// See the [module documentation](super) for the equality semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A string-keyed mapping of values.
    Object(Object),
    /// A function value.
    Function(Callable),
}

impl Value {
    /// Returns the type name of the value as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::Value;
    ///
    /// assert_eq!(Value::from(1).type_name(), "number");
    /// assert_eq!(Value::Undefined.type_name(), "undefined");
    /// ```
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` if the value is `undefined`.
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is `undefined` or `null`.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the boolean if the value is one.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the number if the value is one.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if the value is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if the value is an array.
    #[inline]
    pub const fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the mapping if the value is an object.
    #[inline]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the mapping mutably if the value is an object.
    #[inline]
    pub const fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the callable if the value is a function.
    #[inline]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Reads the property `name`, the equivalent of `value[name]`.
    ///
    /// Objects resolve their own keys, arrays resolve numeric indices and
    /// `length`, strings resolve character indices and `length`. Anything
    /// that does not resolve yields [`Value::Undefined`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::Value;
    /// use underbar::array;
    ///
    /// let letters = array!["a", "b"];
    /// assert_eq!(letters.property("1"), Value::from("b"));
    /// assert_eq!(letters.property("length"), Value::from(2));
    /// assert_eq!(Value::from("abc").property("length"), Value::from(3));
    /// assert!(Value::from(5).property("anything").is_undefined());
    /// ```
    pub fn property(&self, name: &str) -> Self {
        match self {
            Self::Object(object) => object.get(name).cloned().unwrap_or_default(),
            Self::Array(elements) if name == "length" => Self::from(elements.len()),
            Self::Array(elements) => array_index(name)
                .and_then(|index| elements.get(index))
                .cloned()
                .unwrap_or_default(),
            Self::String(text) if name == "length" => Self::from(text.chars().count()),
            Self::String(text) => array_index(name)
                .and_then(|index| text.chars().nth(index))
                .map(|character| Self::String(character.to_string()))
                .unwrap_or_default(),
            _ => Self::Undefined,
        }
    }

    /// Converts the value to a number following JavaScript's `Number(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::Value;
    ///
    /// assert_eq!(Value::from(" 42 ").to_number(), 42.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Array(_) => parse_number(&self.to_string()),
            Self::Undefined | Self::Object(_) | Self::Function(_) => f64::NAN,
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

pub(super) fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        // -0 renders as 0
        formatter.write_str("0")
    } else if (1e-6..1e21).contains(&number.abs()) {
        write!(formatter, "{number}")
    } else {
        // Rust omits the `+` on positive exponents
        let exponential = format!("{number:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(formatter, "{mantissa}e+{exponent}")
            }
            _ => formatter.write_str(&exponential),
        }
    }
}

/// Parses `name` as an index only in its canonical decimal form, so `"01"`
/// and `"+1"` name no element.
fn array_index(name: &str) -> Option<usize> {
    name.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == name)
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::String(text) => formatter.write_str(text),
            Self::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !element.is_nullish() {
                        write!(formatter, "{element}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(_) => formatter.write_str("function"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_lossless_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Value {
                fn from(number: $number) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! impl_from_wide_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Value {
                #[allow(clippy::cast_precision_loss)]
                fn from(number: $number) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_wide_number!(i64, u64, isize, usize);

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Function(callable)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::Array(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::Array(iterable.into_iter().map(Into::into).collect())
    }
}
