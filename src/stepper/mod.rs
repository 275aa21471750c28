//! Sources that can be driven by an [`Adapter`](crate::Adapter).
//!
//! A [`Stepper`] only has to know how to produce its next value. Steppers that
//! understand more of the protocol report the operations they implement
//! natively, and the adapter binds those instead of its own fallbacks.

use core::fmt;

use crate::{Error, NotIterable};

mod native;
mod plain;

pub use native::{native, Native};
#[cfg(feature = "std")]
pub use plain::from_stream;
pub use plain::{plain, try_plain, Plain, TryPlain};

/// The three operations of the coroutine protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Advance, optionally sending a value in.
    Resume,
    /// Inject an error at the suspension point.
    Raise,
    /// Terminate early.
    Close,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Resume => "resume",
            Op::Raise => "raise",
            Op::Close => "close",
        })
    }
}

/// A native implementation of [`Op::Resume`].
pub type ResumeFn<S> = fn(
    &mut S,
    Option<<S as Stepper>::Input>,
) -> Result<<S as Stepper>::Output, Error<<S as Stepper>::Error>>;

/// A native implementation of [`Op::Raise`].
pub type RaiseFn<S> = fn(
    &mut S,
    <S as Stepper>::Error,
) -> Result<<S as Stepper>::Output, Error<<S as Stepper>::Error>>;

/// A native implementation of [`Op::Close`].
pub type CloseFn<S> = fn(&mut S) -> Result<(), Error<<S as Stepper>::Error>>;

/// Something that produces a sequence of values one at a time.
///
/// Plain steppers implement only [`next_value`](Stepper::next_value). Native
/// steppers additionally return their own implementation of an operation from
/// the matching `*_op` lookup; the lookups are consulted once, when the
/// stepper is wrapped.
///
/// # Examples
///
/// ```
/// use lockstep::{wrap, Coroutine, Error, ResumeFn, Stepper};
///
/// /// Echoes back whatever is sent in, starting with `0`.
/// struct Echo(Option<u32>);
///
/// impl Echo {
///     fn send(&mut self, input: Option<u32>) -> Result<u32, Error<()>> {
///         let out = self.0.take().or(input).ok_or(Error::Exhausted)?;
///         Ok(out)
///     }
/// }
///
/// impl Stepper for Echo {
///     type Input = u32;
///     type Output = u32;
///     type Error = ();
///
///     fn next_value(&mut self) -> Result<u32, Error<()>> {
///         self.send(None)
///     }
///
///     fn resume_op(&self) -> Result<Option<ResumeFn<Self>>, ()> {
///         Ok(Some(Self::send as ResumeFn<Self>))
///     }
/// }
///
/// let mut echo = wrap(Echo(Some(0))).unwrap();
/// assert_eq!(echo.resume(None), Ok(0));
/// assert_eq!(echo.resume(Some(5)), Ok(5));
/// assert_eq!(echo.resume(None), Err(Error::Exhausted));
/// ```
pub trait Stepper: Sized {
    /// The value that may be sent in on resume.
    type Input;

    /// The value produced at each step.
    type Output;

    /// The error type of this stepper.
    type Error;

    /// Produces the next value, or [`Error::Exhausted`] once nothing is left.
    fn next_value(&mut self) -> Result<Self::Output, Error<Self::Error>>;

    /// Looks up a native resume. `Ok(None)` means there is none.
    fn resume_op(&self) -> Result<Option<ResumeFn<Self>>, Self::Error> {
        Ok(None)
    }

    /// Looks up a native raise. `Ok(None)` means there is none.
    fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, Self::Error> {
        Ok(None)
    }

    /// Looks up a native close. `Ok(None)` means there is none.
    fn close_op(&self) -> Result<Option<CloseFn<Self>>, Self::Error> {
        Ok(None)
    }
}

/// Conversion into a [`Stepper`].
///
/// This is the "obtain an iteration handle" step of wrapping. Every stepper
/// converts into itself; other types may refuse with [`NotIterable`].
pub trait IntoStepper {
    /// The stepper we are converting into.
    type Stepper: Stepper;

    /// Obtains the stepper.
    fn into_stepper(self) -> Result<Self::Stepper, NotIterable>;
}

impl<S: Stepper> IntoStepper for S {
    type Stepper = S;

    fn into_stepper(self) -> Result<Self::Stepper, NotIterable> {
        Ok(self)
    }
}
