use crate::Error;

/// Reports the inputs an instance was built from, and rebuilds an equivalent
/// fresh instance from them.
///
/// This is structural. Parts hold the steppers as they are now, so a rebuilt
/// instance carries on from their current positions, but combinator state is
/// fresh: a rebuilt zip is active again even if the original was exhausted.
/// Closed adapters report no stepper and are rebuilt closed.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
/// use lockstep::{plain, vec::Zip, Reconstruct};
///
/// let zip = vec![plain(1..3), plain(10..13)].zip().unwrap();
/// let mut again = Zip::from_parts(zip.parts()).unwrap();
/// assert_eq!(again.resume(None).unwrap(), [1, 10]);
/// ```
pub trait Reconstruct: Sized {
    /// The minimal inputs sufficient to build an equivalent instance.
    type Parts;

    /// The error type of the steppers involved.
    type Error;

    /// Reports this instance's inputs.
    fn parts(&self) -> Self::Parts;

    /// Builds a fresh instance from `parts`.
    fn from_parts(parts: Self::Parts) -> Result<Self, Error<Self::Error>>;
}
