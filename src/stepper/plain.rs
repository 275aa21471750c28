use core::fmt;
use core::marker::PhantomData;

use super::Stepper;
use crate::Error;

/// A stepper that walks an iterator.
///
/// Plain steppers have no notion of sent-in values or graceful close: the
/// adapter synthesizes both. The `In` and `E` parameters only fix the
/// protocol types this stepper is driven with.
///
/// This `struct` is created by the [`plain`] function. See its documentation
/// for more.
pub struct Plain<I, In = (), E = core::convert::Infallible> {
    iter: I,
    _protocol: PhantomData<fn(In) -> E>,
}

/// Creates a plain stepper from anything iterable.
///
/// # Examples
///
/// ```
/// use lockstep::{plain, wrap, Coroutine, Error};
///
/// let mut a = wrap(plain([1, 2])).unwrap();
/// assert_eq!(a.resume(None), Ok(1));
/// assert_eq!(a.resume(None), Ok(2));
/// assert_eq!(a.resume(None), Err(Error::Exhausted));
/// ```
pub fn plain<I: IntoIterator>(iter: I) -> Plain<I::IntoIter> {
    Plain::new(iter)
}

impl<I: Iterator, In, E> Plain<I, In, E> {
    /// Creates a plain stepper with explicit protocol types.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            _protocol: PhantomData,
        }
    }

    /// Returns the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator, In, E> Stepper for Plain<I, In, E> {
    type Input = In;
    type Output = I::Item;
    type Error = E;

    fn next_value(&mut self) -> Result<Self::Output, Error<Self::Error>> {
        self.iter.next().ok_or(Error::Exhausted)
    }
}

impl<I: Clone, In, E> Clone for Plain<I, In, E> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            _protocol: PhantomData,
        }
    }
}

impl<I: fmt::Debug, In, E> fmt::Debug for Plain<I, In, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plain").field(&self.iter).finish()
    }
}

/// A stepper that walks an iterator of results.
///
/// `Ok` items are produced as values; an `Err` item surfaces as
/// [`Error::Raised`] from that step.
///
/// This `struct` is created by the [`try_plain`] function. See its
/// documentation for more.
pub struct TryPlain<I, In = ()> {
    iter: I,
    _protocol: PhantomData<fn(In)>,
}

/// Creates a plain stepper from an iterator of results.
///
/// # Examples
///
/// ```
/// use lockstep::{try_plain, wrap, Coroutine, Error};
///
/// let mut a = wrap(try_plain([Ok(1), Err("bad")])).unwrap();
/// assert_eq!(a.resume(None), Ok(1));
/// assert_eq!(a.resume(None), Err(Error::Raised("bad")));
/// assert_eq!(a.resume(None), Err(Error::Exhausted));
/// ```
pub fn try_plain<I, T, E>(iter: I) -> TryPlain<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    TryPlain::new(iter)
}

impl<I, In, T, E> TryPlain<I, In>
where
    I: Iterator<Item = Result<T, E>>,
{
    /// Creates a fallible plain stepper with an explicit input type.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            _protocol: PhantomData,
        }
    }
}

impl<I, In, T, E> Stepper for TryPlain<I, In>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Input = In;
    type Output = T;
    type Error = E;

    fn next_value(&mut self) -> Result<Self::Output, Error<Self::Error>> {
        match self.iter.next() {
            Some(Ok(item)) => Ok(item),
            Some(Err(e)) => Err(Error::Raised(e)),
            None => Err(Error::Exhausted),
        }
    }
}

impl<I: Clone, In> Clone for TryPlain<I, In> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            _protocol: PhantomData,
        }
    }
}

impl<I: fmt::Debug, In> fmt::Debug for TryPlain<I, In> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TryPlain").field(&self.iter).finish()
    }
}

/// Creates a plain stepper that blocks on a stream for each value.
///
/// # Examples
///
/// ```
/// use futures_lite::stream;
/// use lockstep::{from_stream, wrap, Coroutine, Error};
///
/// let mut a = wrap(from_stream(stream::iter([1, 2]))).unwrap();
/// assert_eq!(a.resume(None), Ok(1));
/// assert_eq!(a.resume(None), Ok(2));
/// assert_eq!(a.resume(None), Err(Error::Exhausted));
/// ```
#[cfg(feature = "std")]
pub fn from_stream<S>(stream: S) -> Plain<futures_lite::stream::BlockOn<S>>
where
    S: futures_core::Stream + Unpin,
{
    Plain::new(futures_lite::stream::block_on(stream))
}
