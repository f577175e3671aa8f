//! Built-in methods callable by name on a [`Value`].

use std::cmp::Ordering;

use super::Value;
use crate::error::{Error, InvalidArgumentError, MethodNotFoundError};

/// Longest string `repeat` builds, in bytes.
const MAX_STRING_LENGTH: usize = (1 << 29) - 24;

impl Value {
    /// Calls the method `name` on this value.
    ///
    /// Resolution order:
    ///
    /// 1. An own function-valued property of an object, called with the
    ///    object as receiver.
    /// 2. `toString` and `valueOf`, available on every non-nullish value.
    /// 3. The built-in methods of the value's type:
    ///    - strings: `toUpperCase`, `toLowerCase`, `trim`, `charAt`, `indexOf`,
    ///      `includes`, `startsWith`, `endsWith`, `concat`, `repeat`, `split`
    ///    - arrays: `sort`, `reverse`, `join`, `indexOf`, `includes`, `concat`
    ///    - numbers: `toFixed`
    ///    - objects: `hasOwnProperty`
    ///
    /// Array methods never modify the receiver: `sort` and `reverse` return
    /// new arrays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MethodNotFound`] if nothing resolves, including every
    /// lookup on `undefined` and `null`, and [`Error::InvalidArgument`] for a
    /// negative or oversized `repeat` count or `toFixed` digits outside
    /// `0..=100`. Errors raised by an own function property are returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::Value;
    /// use underbar::array;
    ///
    /// let sorted = array![5, 1, 7].call_method("sort", &[]).unwrap();
    /// assert_eq!(sorted, array![1, 5, 7]);
    ///
    /// let shout = Value::from("dog").call_method("toUpperCase", &[]).unwrap();
    /// assert_eq!(shout, Value::from("DOG"));
    ///
    /// assert!(Value::from(1).call_method("toUpperCase", &[]).is_err());
    /// ```
    pub fn call_method(&self, name: &str, arguments: &[Self]) -> Result<Self, Error> {
        if let Self::Object(object) = self
            && let Some(Self::Function(callable)) = object.get(name)
        {
            return callable.call(self, arguments);
        }

        let result = match (self, name) {
            (Self::Undefined | Self::Null, _) => None,
            (_, "toString") => Some(Self::String(self.to_string())),
            (_, "valueOf") => Some(self.clone()),
            (Self::String(text), _) => string_method(text, name, arguments)?,
            (Self::Array(elements), _) => array_method(elements, name, arguments),
            (Self::Number(number), "toFixed") => Some(to_fixed(*number, arguments)?),
            (Self::Object(object), "hasOwnProperty") => {
                let key = argument(arguments, 0).to_string();
                Some(Self::Bool(object.contains_key(&key)))
            }
            _ => None,
        };

        result.ok_or_else(|| {
            MethodNotFoundError {
                method: name.to_string(),
                receiver: self.type_name(),
            }
            .into()
        })
    }
}

fn argument(arguments: &[Value], index: usize) -> Value {
    arguments.get(index).cloned().unwrap_or_default()
}

/// The argument truncated toward zero, with `NaN` read as `0`.
fn integer_argument(arguments: &[Value], index: usize) -> f64 {
    let number = argument(arguments, index).to_number();
    if number.is_nan() { 0.0 } else { number.trunc() }
}

fn out_of_range(
    parameter: &'static str,
    expected: &'static str,
    found: &Value,
) -> InvalidArgumentError {
    InvalidArgumentError {
        parameter,
        expected,
        found: found.type_name(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn char_at(text: &str, position: f64) -> Value {
    if position < 0.0 {
        return Value::from("");
    }
    Value::from(
        text.chars()
            .nth(position as usize)
            .map(String::from)
            .unwrap_or_default(),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn repeat(text: &str, arguments: &[Value]) -> Result<Value, InvalidArgumentError> {
    let count = integer_argument(arguments, 0);
    let invalid = || {
        out_of_range(
            "count",
            "a non-negative count within the maximum string length",
            &argument(arguments, 0),
        )
    };
    if count < 0.0 || count.is_infinite() {
        return Err(invalid());
    }
    if text.is_empty() {
        return Ok(Value::from(""));
    }
    let count = count as usize;
    text.len()
        .checked_mul(count)
        .filter(|length| *length <= MAX_STRING_LENGTH)
        .ok_or_else(invalid)?;
    Ok(Value::from(text.repeat(count)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_fixed(number: f64, arguments: &[Value]) -> Result<Value, InvalidArgumentError> {
    let digits = integer_argument(arguments, 0);
    if !(0.0..=100.0).contains(&digits) {
        return Err(out_of_range(
            "digits",
            "a digit count between 0 and 100",
            &argument(arguments, 0),
        ));
    }
    if !number.is_finite() || number.abs() >= 1e21 {
        return Ok(Value::String(Value::Number(number).to_string()));
    }
    // -0 renders without a sign
    let number = if number == 0.0 { 0.0 } else { number };
    let digits = digits as usize;
    Ok(Value::String(format!("{number:.digits$}")))
}

#[allow(clippy::cast_precision_loss)]
fn position_value(position: Option<usize>) -> Value {
    position.map_or(Value::Number(-1.0), |index| Value::Number(index as f64))
}

fn string_method(
    text: &str,
    name: &str,
    arguments: &[Value],
) -> Result<Option<Value>, InvalidArgumentError> {
    let search = || argument(arguments, 0).to_string();
    let value = match name {
        "toUpperCase" => Value::from(text.to_uppercase()),
        "toLowerCase" => Value::from(text.to_lowercase()),
        "trim" => Value::from(text.trim()),
        "charAt" => char_at(text, integer_argument(arguments, 0)),
        "indexOf" => {
            let needle = search();
            position_value(
                text.find(needle.as_str())
                    .map(|byte| text[..byte].chars().count()),
            )
        }
        "includes" => Value::Bool(text.contains(search().as_str())),
        "startsWith" => Value::Bool(text.starts_with(search().as_str())),
        "endsWith" => Value::Bool(text.ends_with(search().as_str())),
        "concat" => {
            let mut joined = text.to_string();
            for piece in arguments {
                joined.push_str(&piece.to_string());
            }
            Value::from(joined)
        }
        "repeat" => repeat(text, arguments)?,
        "split" => match arguments.first() {
            None | Some(Value::Undefined) => Value::Array(vec![Value::from(text)]),
            Some(separator) => {
                let separator = separator.to_string();
                if separator.is_empty() {
                    text.chars().map(String::from).collect()
                } else {
                    text.split(separator.as_str()).collect()
                }
            }
        },
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn array_method(elements: &[Value], name: &str, arguments: &[Value]) -> Option<Value> {
    let value = match name {
        "sort" => {
            let mut sorted = elements.to_vec();
            sorted.sort_by(default_sort_order);
            Value::Array(sorted)
        }
        "reverse" => Value::Array(elements.iter().rev().cloned().collect()),
        "join" => {
            let separator = match arguments.first() {
                None | Some(Value::Undefined) => ",".to_string(),
                Some(separator) => separator.to_string(),
            };
            let pieces: Vec<String> = elements
                .iter()
                .map(|element| {
                    if element.is_nullish() {
                        String::new()
                    } else {
                        element.to_string()
                    }
                })
                .collect();
            Value::from(pieces.join(&separator))
        }
        "indexOf" => {
            let target = argument(arguments, 0);
            position_value(elements.iter().position(|element| *element == target))
        }
        "includes" => {
            let target = argument(arguments, 0);
            Value::Bool(elements.iter().any(|element| same_value_zero(element, &target)))
        }
        "concat" => {
            let mut joined = elements.to_vec();
            for piece in arguments {
                match piece {
                    Value::Array(inner) => joined.extend(inner.iter().cloned()),
                    other => joined.push(other.clone()),
                }
            }
            Value::Array(joined)
        }
        _ => return None,
    };
    Some(value)
}

/// The ordering of an argument-less `Array.prototype.sort`: by string form,
/// with `undefined` last.
fn default_sort_order(left: &Value, right: &Value) -> Ordering {
    match (left.is_undefined(), right.is_undefined()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.to_string().cmp(&right.to_string()),
    }
}

fn same_value_zero(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) if left.is_nan() && right.is_nan() => true,
        _ => left == right,
    }
}
