//! Stable sorting by a derived key.

use std::cmp::Ordering;

use crate::error::InvalidArgumentError;
use crate::value::Value;

/// A key that [`sort_by`] can order elements by.
///
/// `sort_cmp` must be a total order. Keys reporting
/// [`is_undefined`](SortKey::is_undefined) are never passed to it; they sort
/// after every defined key instead.
pub trait SortKey {
    /// Compares two defined keys.
    fn sort_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` for keys that sort after every defined key.
    fn is_undefined(&self) -> bool {
        false
    }
}

macro_rules! impl_sort_key_ord {
    ($($key:ty),* $(,)?) => {
        $(
            impl SortKey for $key {
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_sort_key_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

impl SortKey for f32 {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SortKey for f64 {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<K: SortKey> SortKey for Option<K> {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(left), Some(right)) => left.sort_cmp(right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn is_undefined(&self) -> bool {
        self.as_ref().is_none_or(|key| key.is_undefined())
    }
}

impl<K: SortKey + ?Sized> SortKey for &K {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        (**self).sort_cmp(*other)
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

/// Dynamic keys: `null`, booleans and numbers compare numerically and sort
/// before strings, strings compare by code point, and arrays, objects and
/// functions sort last among defined keys without ordering among
/// themselves.
impl SortKey for Value {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::String(left), Self::String(right)) => left.cmp(right),
            _ if value_rank(self) == 0 && value_rank(other) == 0 => {
                self.to_number().total_cmp(&other.to_number())
            }
            _ => value_rank(self).cmp(&value_rank(other)),
        }
    }

    fn is_undefined(&self) -> bool {
        self.is_undefined()
    }
}

const fn value_rank(value: &Value) -> u8 {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Array(_) | Value::Object(_) | Value::Function(_) => 2,
        Value::Undefined => 3,
    }
}

fn compare_keys<K: SortKey>(left: &K, right: &K) -> Ordering {
    match (left.is_undefined(), right.is_undefined()) {
        (false, false) => left.sort_cmp(right),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Returns the elements ordered ascending by `key(element)`.
///
/// The sort is stable, and elements whose key is undefined (`None`,
/// [`Value::Undefined`]) come after all others. Each key is computed once.
///
/// # Examples
///
/// ```rust
/// use underbar::array::sort_by;
///
/// let people = [("moe", Some(40)), ("larry", None), ("curly", Some(30))];
/// let sorted = sort_by(&people, |(_, age)| *age);
/// assert_eq!(sorted, [("curly", Some(30)), ("moe", Some(40)), ("larry", None)]);
/// ```
pub fn sort_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: SortKey,
    F: FnMut(&T) -> K,
{
    let mut decorated: Vec<(K, &T)> = items.iter().map(|item| (key(item), item)).collect();
    decorated.sort_by(|(left, _), (right, _)| compare_keys(left, right));
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

/// [`sort_by`] keyed on `element[property]`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if an element is `undefined` or `null`.
///
/// # Examples
///
/// ```rust
/// use underbar::array::sort_by_property;
/// use underbar::value::Value;
/// use underbar::object;
///
/// let stooges = vec![
///     Value::from(object! { "name" => "moe", "age" => 40 }),
///     Value::from(object! { "name" => "curly", "age" => 30 }),
/// ];
/// let sorted = sort_by_property(&stooges, "age").unwrap();
/// assert_eq!(sorted[0].property("name"), Value::from("curly"));
/// ```
pub fn sort_by_property(
    items: &[Value],
    property: &str,
) -> Result<Vec<Value>, InvalidArgumentError> {
    if let Some(nullish) = items.iter().find(|item| item.is_nullish()) {
        return Err(InvalidArgumentError {
            parameter: "collection",
            expected: "elements with properties",
            found: nullish.type_name(),
        });
    }
    Ok(sort_by(items, |item| item.property(property)))
}
