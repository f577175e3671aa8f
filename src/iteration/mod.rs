//! Iteration primitives.
//!
//! This module provides the leaf layer every other operation can build on:
//!
//! - [`Collection`]: anything that can be walked as `(key, value)` entries,
//!   either a sequence keyed by index or a mapping keyed by name
//! - [`each`]: call a function for every entry
//! - [`index_of`]: position of the first element equal to a target
//!
//! # Traversal Order
//!
//! Sequences are walked by ascending index. `BTreeMap` and
//! [`Object`](crate::value::Object) are walked in key order. `HashMap` is
//! walked in its own iteration order, which is stable for a given map but
//! unspecified.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::iteration::{each, index_of};
//!
//! let mut visited = Vec::new();
//! each(&["a", "b"], |value, index, _| visited.push(format!("{index}={value}")));
//! assert_eq!(visited, vec!["0=a", "1=b"]);
//!
//! let mut ages = BTreeMap::new();
//! ages.insert("moe".to_string(), 40);
//! ages.insert("curly".to_string(), 50);
//! let mut names = Vec::new();
//! each(&ages, |_, name, _| names.push(name.clone()));
//! assert_eq!(names, vec!["curly", "moe"]);
//!
//! assert_eq!(index_of(&[1, 2, 3], &2), Some(1));
//! assert_eq!(index_of(&[1, 2, 3], &4), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use crate::value::Value;

/// A finite collection that can be walked as `(key, value)` entries.
///
/// Sequences use their index as key; mappings use a reference to their own
/// key. Only the collection's own entries are visited.
pub trait Collection {
    /// The element type.
    type Item;

    /// The key type yielded alongside each element.
    type Key<'a>
    where
        Self: 'a;

    /// Returns every entry in traversal order.
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Item)>;

    /// Returns every element in traversal order.
    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, value)| value)
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.iter().enumerate()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// The key of an entry of a dynamic [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// The index of an array element.
    Index(usize),
    /// The name of an object property.
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

/// Arrays yield their elements keyed by index, objects their properties
/// keyed by name. Every other value has no entries.
impl Collection for Value {
    type Item = Self;
    type Key<'a>
        = Key<'a>
    where
        Self: 'a;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self)> {
        let elements = self
            .as_array()
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, element)| (Key::Index(index), element));
        let properties = self
            .as_object()
            .into_iter()
            .flatten()
            .map(|(name, property)| (Key::Name(name.as_str()), property));
        elements.chain(properties)
    }
}

/// Calls `iterator(value, key, collection)` once per entry, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::each;
/// use underbar::value::Value;
/// use underbar::object;
///
/// let stooge = Value::from(object! { "name" => "moe", "age" => 40 });
/// let mut keys = Vec::new();
/// each(&stooge, |_, key, _| keys.push(key.to_string()));
/// assert_eq!(keys, vec!["age", "name"]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    for (key, value) in collection.entries() {
        iterator(value, key, collection);
    }
}

/// Returns the lowest index whose element equals `target`, or `None`.
///
/// `None` plays the role of the conventional `-1` sentinel.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of::<i32>(&[], &10), None);
/// ```
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}
