//! Collection transforms.
//!
//! Every function here leaves its input untouched and returns a fresh
//! result. Functions taking a slice work on any sequence; functions taking a
//! [`Collection`](crate::iteration::Collection) also accept mappings and
//! dynamic [`Value`](crate::value::Value)s, looking only at their values.
//!
//! - Selection: [`first`], [`first_n`], [`last`], [`last_n`]
//! - Filtering: [`filter`], [`reject`], [`uniq`]
//! - Mapping: [`map`], [`try_map`], [`pluck`], [`invoke`]
//! - Folding: [`reduce`], [`fold`], [`try_fold`]
//! - Testing: [`contains`], [`every`], [`every_truthy`], [`some`],
//!   [`some_truthy`]
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{every, filter, first_n, reduce, some, uniq};
//!
//! let numbers = vec![1, 2, 3, 4, 4];
//! assert_eq!(first_n(&numbers, 2), &[1, 2]);
//! assert_eq!(filter(&numbers, |number| number % 2 == 0), vec![2, 4, 4]);
//! assert_eq!(uniq(&numbers), vec![1, 2, 3, 4]);
//! assert_eq!(reduce(&numbers, |sum, number| sum + number, Some(0)), Ok(14));
//! assert!(every(&numbers, |number| *number > 0));
//! assert!(!some(&Vec::<i32>::new(), |_| true));
//! ```

mod filter;
mod fold;
mod map;
mod predicate;
mod slice;

pub use filter::{filter, reject, uniq};
pub use fold::{fold, reduce, try_fold};
pub use map::{invoke, map, pluck, try_map};
pub use predicate::{contains, every, every_truthy, some, some_truthy};
pub use slice::{first, first_n, last, last_n};
