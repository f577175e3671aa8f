//! JavaScript-style truthiness.
//!
//! Predicates handed to `filter`, `reject`, `every` and `some` may return any
//! [`Truthy`] type, not only `bool`. The omitted-predicate forms
//! (`every_truthy`, `some_truthy`) test the elements themselves.
//!
//! | Type | Falsy when |
//! |------|------------|
//! | `bool` | `false` |
//! | integers | `0` |
//! | floats | `0.0`, `-0.0`, `NaN` |
//! | `str`, `String` | empty |
//! | `Option<T>` | `None`, or `Some` of a falsy value |
//! | `()` | always |
//! | slices, `Vec<T>` | never |
//! | [`Value`] | `undefined`, `null`, `false`, `0`, `NaN`, `""` |

use super::Value;

/// A type with a notion of truthiness.
///
/// # Examples
///
/// ```rust
/// use underbar::value::{Truthy, Value};
///
/// assert!(1_i32.is_truthy());
/// assert!(!0_i32.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(Vec::<i32>::new().is_truthy());
/// assert!(!Value::Null.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true in a boolean context.
    fn is_truthy(&self) -> bool;

    /// Returns `true` if the value counts as false in a boolean context.
    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),*) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($float:ty),*) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    // NaN compares false
                    self.abs() > 0.0
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.is_truthy(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::from(false), false)]
    #[case(Value::from(0), false)]
    #[case(Value::from(-0.0), false)]
    #[case(Value::Number(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("0"), true)]
    #[case(Value::from(-1), true)]
    #[case(Value::Array(Vec::new()), true)]
    #[case(Value::Object(crate::value::Object::new()), true)]
    fn value_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
        assert_eq!(value.is_falsy(), !expected);
    }

    #[rstest]
    fn option_of_falsy_value_is_falsy() {
        assert!(!Some(0_i32).is_truthy());
        assert!(Some(1_i32).is_truthy());
    }

    #[rstest]
    fn references_delegate() {
        let text = String::from("x");
        let reference: &String = &text;
        assert!(reference.is_truthy());
        assert!(!(&&0_u8).is_truthy());
    }
}
