//! Drive iterators and coroutines in lockstep through a uniform
//! resume/raise/close protocol.
//!
//! A [`Coroutine`] can be resumed with an optional value, can have an error
//! injected at its suspension point, and can be closed early. Most sources
//! only know how to produce their next value; wrapping them in an [`Adapter`]
//! gives them the full protocol by synthesizing whatever they lack.
//!
//! # Operations
//!
//! This library provides the following operations on arrays and vecs of
//! steppers:
//!
//! - [`Combine`]: Apply a function to one output of every stepper at a time.
//! - [`Zip`]: ‘Zips up’ multiple steppers into a single coroutine of rows.
//!
//! Every protocol call on a combinator is forwarded to each inner stepper in
//! input order. The first stepper to run out ends the combinator.
//!
//! # Examples
//!
//! Zip three sources:
//!
//! ```rust
//! use lockstep::prelude::*;
//! use lockstep::{plain, Error};
//!
//! let letters = plain("abc".chars());
//! let upper = plain("ABC".chars());
//! let digits = plain("123".chars());
//!
//! let mut z = [letters, upper, digits].zip().unwrap();
//! assert_eq!(z.resume(None), Ok(['a', 'A', '1']));
//! assert_eq!(z.resume(None), Ok(['b', 'B', '2']));
//! assert_eq!(z.resume(None), Ok(['c', 'C', '3']));
//! assert_eq!(z.resume(None), Err(Error::Exhausted));
//! ```
//!
//! # Limitations
//!
//! Combinators hold steppers of a single type. Sources of different types
//! can still be driven together by boxing them with
//! [`CoroutineExt::boxed`], as long as their protocol types agree.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

extern crate alloc;

mod adapter;
mod combine;
mod coroutine;
mod error;
mod ext;
mod reconstruct;
mod sentinel;
mod state;
mod stepper;
mod utils;
mod zip;

pub use adapter::{wrap, Adapter, Origin};
pub use combine::Combine;
pub use coroutine::{BoxCoroutine, Coroutine};
pub use error::{Error, NotIterable};
pub use ext::{CoroutineExt, IntoStream};
pub use reconstruct::Reconstruct;
pub use sentinel::{empty, Empty, Sentinel, SENTINEL};
pub use state::State;
#[cfg(feature = "std")]
pub use stepper::from_stream;
pub use stepper::{
    native, plain, try_plain, CloseFn, IntoStepper, Native, Op, Plain, RaiseFn, ResumeFn, Stepper,
    TryPlain,
};
pub use zip::Zip;

/// The lockstep prelude.
pub mod prelude {
    pub use super::Coroutine;
    pub use super::CoroutineExt;
    pub use super::Reconstruct;

    pub use super::Combine as _;
    pub use super::Zip as _;
}

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::combine::array::Combine;
    pub use crate::zip::array::Zip;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::combine::vec::Combine;
    pub use crate::zip::vec::{Row, Zip};
}
