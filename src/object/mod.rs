//! Object merge helpers.
//!
//! The two helpers here are the only operations in the crate that write
//! into an argument: both copy entries from a list of sources into a target
//! mapping in place and hand the target back.
//!
//! - [`extend`]: every source entry overwrites the target
//! - [`defaults`]: a source entry is copied only if the target lacks the key,
//!   so the first source to supply a key wins
//!
//! Both work on any [`Mapping`] (`BTreeMap`, `HashMap`, and therefore
//! [`Object`](crate::value::Object)). [`extend_value`] and [`defaults_value`]
//! apply the same contracts to dynamic [`Value`]s.
//!
//! # Examples
//!
//! ```rust
//! use underbar::object;
//! use underbar::object::{defaults, extend};
//!
//! let mut target = object! { "a" => 1 };
//! extend(&mut target, &[&object! { "b" => 2 }, &object! { "a" => 3 }]);
//! assert_eq!(target, object! { "a" => 3, "b" => 2 });
//!
//! let mut options = object! { "a" => 1 };
//! defaults(&mut options, &[&object! { "a" => 2, "b" => 2 }]);
//! assert_eq!(options, object! { "a" => 1, "b" => 2 });
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::error::InvalidArgumentError;
use crate::value::{Object, Value};

/// A mapping whose own entries can be read and assigned.
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if the mapping owns an entry for `key`.
    fn has_own(&self, key: &Self::Key) -> bool;

    /// Inserts or overwrites the entry for `key`.
    fn assign(&mut self, key: Self::Key, value: Self::Value);

    /// Returns the mapping's own entries.
    fn own_entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn has_own(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn own_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn has_own(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn own_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// Copies every entry of every source into `target`, in order.
///
/// Later sources overwrite earlier ones, and every source overwrites the
/// target's existing entries. Returns the target.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::object::extend;
///
/// let mut target = HashMap::from([("a", 1)]);
/// let first = HashMap::from([("a", 2), ("b", 2)]);
/// let second = HashMap::from([("b", 3)]);
/// extend(&mut target, &[&first, &second]);
/// assert_eq!(target, HashMap::from([("a", 2), ("b", 3)]));
/// ```
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.own_entries() {
            target.assign(key.clone(), value.clone());
        }
    }
    target
}

/// Copies source entries into `target` only for keys it does not own yet.
///
/// Among the sources the first to supply a key wins. Returns the target.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::object::defaults;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// let first = BTreeMap::from([("b", 2)]);
/// let second = BTreeMap::from([("a", 9), ("b", 9), ("c", 3)]);
/// defaults(&mut target, &[&first, &second]);
/// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]));
/// ```
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.own_entries() {
            if !target.has_own(key) {
                target.assign(key.clone(), value.clone());
            }
        }
    }
    target
}

/// [`extend`] over dynamic values.
///
/// The target must be an object. Object sources contribute their
/// properties, array sources their elements keyed by index, and `undefined`
/// or `null` sources nothing.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the target is not an object or a
/// source is a primitive other than `undefined` or `null`. The target is
/// left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use underbar::object::extend_value;
/// use underbar::value::Value;
/// use underbar::{array, object};
///
/// let mut target = Value::from(object! { "a" => 1 });
/// extend_value(&mut target, &[array!["x"], Value::Null]).unwrap();
/// assert_eq!(target, Value::from(object! { "a" => 1, "0" => "x" }));
///
/// assert!(extend_value(&mut Value::from(1), &[]).is_err());
/// ```
pub fn extend_value<'t>(
    target: &'t mut Value,
    sources: &[Value],
) -> Result<&'t mut Value, InvalidArgumentError> {
    merge_value(target, sources, extend)
}

/// [`defaults`] over dynamic values, with the shape rules of [`extend_value`].
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] under the same conditions as
/// [`extend_value`].
///
/// # Examples
///
/// ```rust
/// use underbar::object::defaults_value;
/// use underbar::value::Value;
/// use underbar::object;
///
/// let mut target = Value::from(object! { "a" => 1 });
/// let source = Value::from(object! { "a" => 2, "b" => 2 });
/// defaults_value(&mut target, &[source]).unwrap();
/// assert_eq!(target, Value::from(object! { "a" => 1, "b" => 2 }));
/// ```
pub fn defaults_value<'t>(
    target: &'t mut Value,
    sources: &[Value],
) -> Result<&'t mut Value, InvalidArgumentError> {
    merge_value(target, sources, defaults)
}

fn merge_value<'t>(
    target: &'t mut Value,
    sources: &[Value],
    merge: for<'a> fn(&'a mut Object, &[&Object]) -> &'a mut Object,
) -> Result<&'t mut Value, InvalidArgumentError> {
    let found = target.type_name();
    let object = target.as_object_mut().ok_or(InvalidArgumentError {
        parameter: "target",
        expected: "object",
        found,
    })?;
    let sources = sources
        .iter()
        .map(source_object)
        .collect::<Result<Vec<_>, _>>()?;
    let borrowed: Vec<&Object> = sources.iter().collect();
    merge(object, &borrowed);
    Ok(target)
}

fn source_object(source: &Value) -> Result<Object, InvalidArgumentError> {
    match source {
        Value::Object(object) => Ok(object.clone()),
        Value::Array(elements) => Ok(elements
            .iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element.clone()))
            .collect()),
        Value::Undefined | Value::Null => Ok(Object::new()),
        other => Err(InvalidArgumentError {
            parameter: "sources",
            expected: "objects",
            found: other.type_name(),
        }),
    }
}
