use alloc::boxed::Box;
use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::stream::{FusedStream, Stream};

use crate::{BoxCoroutine, Coroutine, Error};

/// An extension trait for the `Coroutine` trait.
pub trait CoroutineExt: Coroutine {
    /// Erases the concrete type of this coroutine.
    ///
    /// Boxed coroutines with matching protocol types can be driven together by
    /// the same combinator.
    ///
    /// # Examples
    ///
    /// ```
    /// use lockstep::prelude::*;
    /// use lockstep::{empty, plain, wrap};
    ///
    /// let a = wrap(plain(vec![1, 2])).unwrap().boxed();
    /// let b = empty::<(), i32, core::convert::Infallible>().boxed();
    /// let mut z = vec![a, b].zip().unwrap();
    /// assert!(z.resume(None).unwrap_err().is_exhausted());
    /// ```
    fn boxed<'a>(self) -> BoxCoroutine<'a, Self::Input, Self::Output, Self::Error>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Turns this coroutine into a `Stream` of resumed values.
    ///
    /// The stream ends at the first [`Error::Exhausted`]; any other error is
    /// yielded as an item.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use futures_lite::StreamExt;
    /// use lockstep::prelude::*;
    /// use lockstep::{plain, wrap};
    ///
    /// block_on(async {
    ///     let mut s = wrap(plain(1..=3)).unwrap().into_stream();
    ///     let mut seen = vec![];
    ///     while let Some(n) = s.next().await {
    ///         seen.push(n.unwrap());
    ///     }
    ///     assert_eq!(seen, [1, 2, 3]);
    /// })
    /// ```
    fn into_stream(self) -> IntoStream<Self>
    where
        Self: Sized,
    {
        IntoStream {
            coroutine: self,
            done: false,
        }
    }
}

impl<C> CoroutineExt for C where C: Coroutine + ?Sized {}

/// A stream that resumes a coroutine once per item.
///
/// This `struct` is created by the [`into_stream`] method on the
/// [`CoroutineExt`] trait. See its documentation for more.
///
/// [`into_stream`]: CoroutineExt::into_stream
pub struct IntoStream<C> {
    coroutine: C,
    done: bool,
}

impl<C> IntoStream<C> {
    /// Returns the underlying coroutine.
    pub fn into_inner(self) -> C {
        self.coroutine
    }
}

impl<C> Stream for IntoStream<C>
where
    C: Coroutine + Unpin,
{
    type Item = Result<C::Output, Error<C::Error>>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }
        match this.coroutine.resume(None) {
            Err(Error::Exhausted) => {
                this.done = true;
                Poll::Ready(None)
            }
            res => Poll::Ready(Some(res)),
        }
    }
}

impl<C> FusedStream for IntoStream<C>
where
    C: Coroutine + Unpin,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<C: fmt::Debug> fmt::Debug for IntoStream<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoStream")
            .field("coroutine", &self.coroutine)
            .field("done", &self.done)
            .finish()
    }
}
