use core::fmt;
use core::marker::PhantomData;

use crate::stepper::{CloseFn, RaiseFn, ResumeFn};
use crate::{Coroutine, Error, Reconstruct, Stepper};

/// The canonical exhausted, already-closed coroutine.
///
/// Resuming it always signals [`Error::Exhausted`], raising into it always
/// hands the error straight back, and closing it does nothing. An
/// [`Adapter`](crate::Adapter) behaves like this once it has been closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sentinel;

/// The process-wide [`Sentinel`].
pub static SENTINEL: Sentinel = Sentinel;

impl Sentinel {
    /// Always signals exhaustion. The input is ignored.
    pub fn resume<I, T, E>(&self, _input: Option<I>) -> Result<T, Error<E>> {
        Err(Error::Exhausted)
    }

    /// Always propagates `error`.
    pub fn raise<T, E>(&self, error: E) -> Result<T, Error<E>> {
        Err(Error::Raised(error))
    }

    /// Does nothing.
    pub fn close<E>(&self) -> Result<(), Error<E>> {
        Ok(())
    }
}

/// A [`Sentinel`] with fixed protocol types, usable wherever a coroutine or
/// stepper is expected.
///
/// This `struct` is created by the [`empty`] function. See its documentation
/// for more.
pub struct Empty<I, T, E> {
    _protocol: PhantomData<fn(I) -> Result<T, E>>,
}

/// Creates a coroutine that produces nothing.
///
/// # Examples
///
/// ```
/// use lockstep::{empty, Coroutine, Error};
///
/// let mut e = empty::<(), u8, &str>();
/// assert_eq!(e.resume(None), Err(Error::Exhausted));
/// assert_eq!(e.raise("boom"), Err(Error::Raised("boom")));
/// assert_eq!(e.close(), Ok(()));
/// assert_eq!(e.count(), 0);
/// ```
pub fn empty<I, T, E>() -> Empty<I, T, E> {
    Empty {
        _protocol: PhantomData,
    }
}

impl<I, T, E> Coroutine for Empty<I, T, E> {
    type Input = I;
    type Output = T;
    type Error = E;

    fn resume(&mut self, input: Option<I>) -> Result<T, Error<E>> {
        SENTINEL.resume(input)
    }

    fn raise(&mut self, error: E) -> Result<T, Error<E>> {
        SENTINEL.raise(error)
    }

    fn close(&mut self) -> Result<(), Error<E>> {
        SENTINEL.close()
    }
}

impl<I, T, E> Stepper for Empty<I, T, E> {
    type Input = I;
    type Output = T;
    type Error = E;

    fn next_value(&mut self) -> Result<T, Error<E>> {
        SENTINEL.resume::<I, T, E>(None)
    }

    fn resume_op(&self) -> Result<Option<ResumeFn<Self>>, E> {
        Ok(Some(<Self as Coroutine>::resume as ResumeFn<Self>))
    }

    fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, E> {
        Ok(Some(<Self as Coroutine>::raise as RaiseFn<Self>))
    }

    fn close_op(&self) -> Result<Option<CloseFn<Self>>, E> {
        Ok(Some(<Self as Coroutine>::close as CloseFn<Self>))
    }
}

impl<I, T, E> Iterator for Empty<I, T, E> {
    type Item = Result<T, Error<E>>;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<I, T, E> Reconstruct for Empty<I, T, E> {
    type Parts = ();
    type Error = E;

    fn parts(&self) -> Self::Parts {}

    fn from_parts(_parts: ()) -> Result<Self, Error<E>> {
        Ok(empty())
    }
}

impl<I, T, E> Clone for Empty<I, T, E> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<I, T, E> Copy for Empty<I, T, E> {}

impl<I, T, E> Default for Empty<I, T, E> {
    fn default() -> Self {
        empty()
    }
}

impl<I, T, E> fmt::Debug for Empty<I, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}
