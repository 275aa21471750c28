use crate::Error;

pub(crate) mod array;
pub(crate) mod vec;

/// ‘Zips up’ several steppers driven in lockstep into a single coroutine of
/// rows.
///
/// Every protocol call is forwarded to each stepper in input order, and their
/// outputs are collected in that order. The first stepper to signal
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
/// let mut z = vec![a, b].zip().unwrap();
///
/// assert_eq!(z.resume(None).unwrap(), [1, 10]);
/// assert_eq!(z.resume(None).unwrap(), [2, 20]);
/// assert_eq!(z.resume(None).unwrap(), [3, 30]);
/// assert_eq!(z.resume(None), Err(Error::Exhausted));
/// ```
pub trait Zip {
    /// The error type of the steppers being zipped.
    type Error;

    /// What coroutine do we return?
    type Coroutine;

    /// Wraps every stepper and zips their outputs.
    ///
    /// Fails with the wrapping error of the first stepper that cannot be
    /// wrapped.
    fn zip(self) -> Result<Self::Coroutine, Error<Self::Error>>;
}
