//! Dynamic, JavaScript-shaped values.
//!
//! Most operations in this crate are generic over plain Rust slices and maps.
//! A handful of contracts, however, address data by *name*: `pluck` reads a
//! named property, `invoke` calls a named method, `sort_by_property` sorts by
//! a named field, and `flatten_value` walks arrays nested to arbitrary depth.
//! Those operations work on [`Value`].
//!
//! - [`Value`]: `undefined`, `null`, booleans, numbers, strings, arrays,
//!   objects, and functions
//! - [`Object`]: string-keyed mapping with stable (sorted) key order
//! - [`Callable`]: a shared function value with a receiver
//! - [`MethodRef`]: a method addressed by name or given directly
//! - [`Truthy`]: JavaScript truthiness for Rust types
//!
//! # Equality
//!
//! `Value` equality is strict equality: numbers compare by IEEE equality
//! (`NaN` is never equal to itself, `0` equals `-0`), strings, arrays and
//! objects compare structurally, and functions compare by identity.
//!
//! # Examples
//!
//! ```rust
//! use underbar::value::Value;
//! use underbar::{array, object};
//!
//! let person = Value::from(object! { "name" => "moe", "age" => 40 });
//! assert_eq!(person.property("name"), Value::from("moe"));
//! assert!(person.property("missing").is_undefined());
//!
//! let nested = array![1, array![2, 3]];
//! assert_eq!(nested.property("length"), Value::from(2));
//! assert_eq!(nested.to_string(), "1,2,3");
//! ```

mod callable;
mod dynamic;
mod macros;
mod methods;
#[cfg(feature = "serde")]
mod serde;
mod truthy;

pub use callable::{Callable, MethodRef};
pub use dynamic::{Object, Value};
pub use truthy::Truthy;
