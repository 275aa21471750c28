use crate::Error;

pub(crate) mod array;
pub(crate) mod vec;

/// Applies a function across several steppers driven in lockstep.
///
/// Every protocol call is forwarded to each stepper in input order, and the
/// function is applied to the collected outputs. The first stepper to signal
/// exhaustion, or to let an injected error through, ends the round: later
/// steppers are not called for that round.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
/// use lockstep::{plain, Error};
///
/// let a = plain(vec![1, 2, 3]);
/// let b = plain(vec![10, 20, 30]);
/// let mut c = [a, b].combine(|[a, b]: [i32; 2]| a + b).unwrap();
///
/// assert_eq!(c.resume(None), Ok(11));
/// assert_eq!(c.resume(None), Ok(22));
/// assert_eq!(c.resume(None), Ok(33));
/// assert_eq!(c.resume(None), Err(Error::Exhausted));
/// ```
pub trait Combine<F> {
    /// The error type of the steppers being combined.
    type Error;

    /// What coroutine do we return?
    type Coroutine;

    /// Wraps every stepper and combines their outputs with `f`.
    ///
    /// Fails with [`Error::Arity`] if there are no steppers, and with the
    /// wrapping error of the first stepper that cannot be wrapped.
    fn combine(self, f: F) -> Result<Self::Coroutine, Error<Self::Error>>;
}
