use core::fmt;

use crate::Op;

/// The error type of every protocol call in this crate.
///
/// `E` is the error type of the wrapped steppers: it is what gets injected
/// through [`raise`](crate::Coroutine::raise), and what surfaces again as
/// [`Error::Raised`] when nothing recovers from it.
#[derive(Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The stepper has nothing left to produce.
    ///
    /// This is the normal end of a sequence, not a fault.
    Exhausted,
    /// An error of the stepper's own type, surfaced unchanged.
    Raised(E),
    /// The input at position `argument` (1-based) could not produce an
    /// iteration handle.
    NotIterable {
        /// Which input failed.
        argument: usize,
    },
    /// A combine was built from fewer than one stepper.
    Arity {
        /// How many steppers were supplied.
        found: usize,
    },
    /// A zip over zero steppers was driven.
    EmptyZip,
    /// Looking up a native operation failed for a reason other than the
    /// operation being absent.
    Lookup {
        /// The operation being bound.
        op: Op,
        /// The reason the lookup failed.
        error: E,
    },
}

impl<E> Error<E> {
    /// Returns `true` if this is the end-of-sequence signal.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::Exhausted)
    }

    /// Returns the raised error, if any.
    pub fn raised(&self) -> Option<&E> {
        match self {
            Error::Raised(e) => Some(e),
            _ => None,
        }
    }

    /// Converts into the raised error, if any.
    pub fn into_raised(self) -> Option<E> {
        match self {
            Error::Raised(e) => Some(e),
            _ => None,
        }
    }

    /// Re-attributes a [`NotIterable`](Error::NotIterable) to another input
    /// position. Other errors pass through unchanged.
    pub(crate) fn at_argument(self, argument: usize) -> Self {
        match self {
            Error::NotIterable { .. } => Error::NotIterable { argument },
            other => other,
        }
    }
}

impl<E> From<NotIterable> for Error<E> {
    fn from(_: NotIterable) -> Self {
        Error::NotIterable { argument: 1 }
    }
}

impl<E: fmt::Debug> fmt::Debug for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Exhausted => f.write_str("Exhausted"),
            Error::Raised(e) => f.debug_tuple("Raised").field(e).finish(),
            Error::NotIterable { argument } => f
                .debug_struct("NotIterable")
                .field("argument", argument)
                .finish(),
            Error::Arity { found } => f.debug_struct("Arity").field("found", found).finish(),
            Error::EmptyZip => f.write_str("EmptyZip"),
            Error::Lookup { op, error } => f
                .debug_struct("Lookup")
                .field("op", op)
                .field("error", error)
                .finish(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Exhausted => f.write_str("stepper is exhausted"),
            Error::Raised(e) => write!(f, "{e}"),
            Error::NotIterable { argument } => {
                write!(f, "argument #{argument} must support iteration")
            }
            Error::Arity { found } => {
                write!(f, "combine takes at least one stepper ({found} given)")
            }
            Error::EmptyZip => f.write_str("cannot drive a zip over zero steppers"),
            Error::Lookup { op, error } => write!(f, "failed to look up `{op}`: {error}"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for Error<E> {}

/// The input cannot produce an iteration handle.
///
/// Returned by [`IntoStepper::into_stepper`](crate::IntoStepper::into_stepper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotIterable;

impl fmt::Display for NotIterable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value does not support iteration")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotIterable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e: Error<&str> = Error::NotIterable { argument: 2 };
        assert_eq!(e.to_string(), "argument #2 must support iteration");

        let e: Error<&str> = Error::Raised("boom");
        assert_eq!(e.to_string(), "boom");

        let e: Error<&str> = Error::Lookup {
            op: Op::Raise,
            error: "denied",
        };
        assert_eq!(e.to_string(), "failed to look up `raise`: denied");
    }

    #[test]
    fn renumber_not_iterable() {
        let e: Error<()> = NotIterable.into();
        assert_eq!(e, Error::NotIterable { argument: 1 });
        assert_eq!(e.at_argument(3), Error::NotIterable { argument: 3 });
        assert_eq!(Error::<()>::Exhausted.at_argument(3), Error::Exhausted);
    }

    #[test]
    fn raised_accessors() {
        let e: Error<u8> = Error::Raised(7);
        assert_eq!(e.raised(), Some(&7));
        assert!(!e.is_exhausted());
        assert_eq!(e.into_raised(), Some(7));
        assert_eq!(Error::<u8>::Exhausted.into_raised(), None);
    }
}
