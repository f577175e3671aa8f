//! Construction macros for dynamic values.

/// Builds an [`Object`](crate::value::Object) from `key => value` pairs.
///
/// Keys may be anything convertible into `String`; values anything
/// convertible into [`Value`](crate::value::Value).
///
/// # Examples
///
/// ```rust
/// use underbar::object;
/// use underbar::value::Value;
///
/// let stooge = object! { "name" => "moe", "age" => 40 };
/// assert_eq!(stooge.get("age"), Some(&Value::from(40)));
///
/// let empty = object! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::value::Object::new();
        $(
            object.insert(
                ::std::string::String::from($key),
                $crate::value::Value::from($value),
            );
        )+
        object
    }};
}

/// Builds a [`Value::Array`](crate::value::Value::Array) from its elements.
///
/// Elements may mix types; each is converted with `Value::from`, so arrays
/// nest naturally.
///
/// # Examples
///
/// ```rust
/// use underbar::array;
/// use underbar::value::Value;
///
/// let mixed = array![1, "two", array![3]];
/// assert_eq!(mixed.property("length"), Value::from(3));
/// assert_eq!(array![], Value::Array(Vec::new()));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Value::Array(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::Array(::std::vec![$($crate::value::Value::from($element)),+])
    };
}
