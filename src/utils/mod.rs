//! Utilities to implement the different combinators of this crate.

mod array;
mod fan_out;
mod round;

pub(crate) use array::{into_array, ArrayBuf};
pub(crate) use fan_out::FanOut;
pub(crate) use round::{close_all, drive, wrap_all, Round};

use crate::Error;

/// Maps a protocol result onto plain iteration: exhaustion ends the
/// iteration, every other outcome is yielded.
pub(crate) fn step<T, E>(res: Result<T, Error<E>>) -> Option<Result<T, Error<E>>> {
    match res {
        Err(Error::Exhausted) => None,
        res => Some(res),
    }
}
