//! # Kata Core
//!
//! Small pure utility functions, the properties each one must satisfy, and
//! the case battery that exercises them.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! The two operations with an undefined domain (`factorial` of a negative
//! number, `find_max` of an empty slice) return `Result<T, Error>`.
//! Everything else is total.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod arithmetic;
pub mod battery;
pub mod config;
mod error;
mod output_format;
pub mod sequence;
pub mod text;

pub use arithmetic::{add, factorial, is_even, multiply};
pub use battery::{
    Case, CaseResult, CaseStatus, Expectation, Item, Operation, Outcome, Report, Suite,
};
pub use config::Config;
pub use error::{Error, Result};
pub use output_format::OutputFormat;
pub use sequence::{find_max, remove_duplicates};
pub use text::{count_vowels, is_palindrome, is_valid_email_format, reverse};
