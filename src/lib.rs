//! Parse command-line flags into typed values, either one at a time through chainable accessors
//! or all at once into a struct deriving [`Flags`].
//!
//! ```
//!# use flagrant::prelude::*;
//! #[derive(FlagEnum, Debug, PartialEq)]
//! enum Color {
//!     Red,
//!     Green,
//! }
//!
//! #[derive(Flags)]
//! struct Config {
//!     #[flag(short = "n")]
//!     name: String,
//!     age: i32,
//!     verbose: bool,
//!     production: bool,
//!     color: Color,
//!
//!     #[flag(name = "volume", custom = "clamp")]
//!     vol: i32,
//!
//!     #[flag(skip)]
//!     _internal: Vec<u8>,
//! }
//!
//! let mut config = Config {
//!     name: String::new(),
//!     age: 0,
//!     verbose: false,
//!     production: true,
//!     color: Color::Red,
//!     vol: 50,
//!     _internal: Vec::new(),
//! };
//!
//! Flagrant::from_args([
//!     "-n", "John",
//!     "--age", "25",
//!     "--verbose",
//!     "--production=0",
//!     "--color", "Green",
//!     "--volume", "130",
//! ])
//! .register_custom_handler("clamp", |raw: &str| raw.parse::<i32>().map_or(0, |v| v.clamp(0, 100)))
//! .bind(&mut config);
//!
//! assert_eq!(config.name, "John");
//! assert_eq!(config.age, 25);
//! assert!(config.verbose);
//! assert!(!config.production);
//! assert_eq!(config.color, Color::Green);
//! assert_eq!(config.vol, 100);
//! ```
//!
//! # Flags
//!
//! A flag is `-name` or `--name`, where the name has no `-` or `=` in it. Its value is either
//! attached (`--name=value`) or the next argument, as long as that argument isn't shaped like a
//! flag itself. Other arguments are ignored. A flag given twice keeps the last value.
//!
//! # Field options
//!
//! | Attribute | Description |
//! |---|---|
//! | `flag(name = "new_name")` | Flag name. Defaults to the field name; required on tuple struct fields |
//! | `flag(short = "n")` | Alias used when the main name isn't given |
//! | `flag(custom = "handler")` | Convert with a handler registered through [`Flagrant::register_custom_handler`] |
//! | `flag(skip)` | Don't bind this field |
//!
//! # Booleans
//!
//! There are two readings of a boolean value and they don't agree:
//!
//! - [`Flagrant::bind`] reads `--flag=value` as `false` for `0`, `n` and `no` and `true` for
//!   anything else, including `false`.
//! - [`Flagrant::bool`] reads any value as `true` unless it is exactly `false`.
//!
//! A flag given without a value is `true` in both.

#![warn(missing_docs)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

extern crate self as flagrant;

pub use binder::{run, FlagSpec, Flags};
pub use error::FlagError;
pub use flag_map::{FlagMap, FlagValue};
pub use from_flag::{FlagEnum, FromFlag};
pub use handlers::HandlerRegistry;
pub use parser::Flagrant;
pub use tokenizer::is_flag;

mod accessors;
mod binder;
mod error;
mod flag_map;
mod from_flag;
mod from_flag_impls;
mod handlers;
mod parser;
mod tokenizer;

#[allow(missing_docs)]
pub mod prelude {
    pub use crate::{FlagEnum, Flagrant, Flags, FromFlag};
}
