//! # underbar
//!
//! A functional utility library for Rust providing generic operations over
//! sequences and key-value mappings, function combinators, and multi-array
//! set operations.
//!
//! ## Overview
//!
//! Every operation is a small, independent contract. Operations that return
//! a new sequence never mutate their inputs; the object merge helpers are the
//! only operations that write into an argument. The library is organized in
//! layers:
//!
//! - **Iteration**: [`each`](iteration::each), [`index_of`](iteration::index_of)
//!   and the [`Collection`](iteration::Collection) abstraction
//! - **Collection transforms**: `first`, `last`, `filter`, `reject`, `uniq`,
//!   `map`, `pluck`, `invoke`, `reduce`, `contains`, `every`, `some`
//! - **Object helpers**: `extend`, `defaults`
//! - **Function combinators**: `once`, `memoize`, `delay`
//! - **Array operations**: `shuffle`, `sort_by`, `zip`, `flatten`,
//!   `intersection`, `difference`
//! - **Dynamic values**: [`Value`](value::Value), a JavaScript-shaped value used
//!   by the operations that address properties and methods by name
//!
//! ## Feature Flags
//!
//! - `collection`: Collection transforms
//! - `object`: Object merge helpers
//! - `function`: `once` and `memoize` combinators (plus thread-safe variants)
//! - `async`: `delay` on top of a shared tokio runtime
//! - `array`: Array operations
//! - `serde`: Serialization support for [`Value`](value::Value)
//! - `fxhash`: Use `FxHashMap` for memoization caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let numbers = vec![1, 2, 2, 3, 1];
//! assert_eq!(uniq(&numbers), vec![1, 2, 3]);
//! assert_eq!(map(&numbers, |number| number * 2), vec![2, 4, 4, 6, 2]);
//! assert_eq!(reduce(&numbers, |sum, number| sum + number, None), Ok(9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled operation and type.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::iteration::*;
    pub use crate::value::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "array")]
    pub use crate::array::*;
}

pub mod error;
pub mod iteration;
pub mod value;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "array")]
pub mod array;
