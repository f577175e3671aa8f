//! Operations over one or more whole arrays.
//!
//! Every function here returns a fresh `Vec` and leaves its inputs
//! untouched. Variadic operations take their extra arrays as an explicit
//! slice of slices.
//!
//! - [`shuffle`] / [`shuffle_with`]: uniform random permutation
//! - [`sort_by`] / [`sort_by_property`]: stable sort by key, undefined keys last
//! - [`zip`]: transpose arrays, padding short ones with `None`
//! - [`flatten`] / [`flatten_value`]: depth-first flattening of nested arrays
//! - [`intersection`] / [`difference`]: membership by equality
//!
//! # Examples
//!
//! ```rust
//! use underbar::array::{Nested, difference, flatten, intersection, sort_by, zip};
//!
//! assert_eq!(sort_by(&["ccc", "a", "bb"], |word| word.len()), vec!["a", "bb", "ccc"]);
//! assert_eq!(
//!     zip(&[&["a", "b", "c"], &["1", "2"]]),
//!     vec![
//!         vec![Some("a"), Some("1")],
//!         vec![Some("b"), Some("2")],
//!         vec![Some("c"), None],
//!     ]
//! );
//! assert_eq!(
//!     flatten(&[Nested::Item(1), Nested::List(vec![Nested::Item(2)])]),
//!     vec![1, 2]
//! );
//! assert_eq!(intersection(&[&[1, 2, 3], &[2, 3, 4], &[2, 5]]), vec![2]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4]]), vec![1, 3]);
//! ```

mod flatten;
mod set;
mod shuffle;
mod sort;
mod zip;

pub use flatten::{Nested, flatten, flatten_value};
pub use set::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{SortKey, sort_by, sort_by_property};
pub use zip::zip;
