use alloc::boxed::Box;

use super::{CloseFn, RaiseFn, ResumeFn, Stepper};
use crate::{Coroutine, Error};

/// A stepper that implements every protocol operation natively by
/// delegating to a [`Coroutine`].
///
/// This `struct` is created by the [`native`] function. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Native<C> {
    inner: C,
}

/// Exposes a coroutine as a fully native stepper.
///
/// Use this to feed an adapter or a combinator into another combinator.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
/// use lockstep::{native, plain, wrap, Op, Origin};
///
/// let inner = vec![plain([1, 2]), plain([10, 20])].zip().unwrap();
/// let outer = wrap(native(inner)).unwrap();
/// assert_eq!(outer.origin(Op::Raise), Origin::Native);
/// ```
pub fn native<C: Coroutine>(coroutine: C) -> Native<C> {
    Native { inner: coroutine }
}

impl<C> Native<C> {
    /// Returns the wrapped coroutine.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Coroutine> Native<C> {
    fn resume(&mut self, input: Option<C::Input>) -> Result<C::Output, Error<C::Error>> {
        self.inner.resume(input)
    }

    fn raise(&mut self, error: C::Error) -> Result<C::Output, Error<C::Error>> {
        self.inner.raise(error)
    }

    fn close(&mut self) -> Result<(), Error<C::Error>> {
        self.inner.close()
    }
}

impl<C: Coroutine> Stepper for Native<C> {
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn next_value(&mut self) -> Result<Self::Output, Error<Self::Error>> {
        self.inner.resume(None)
    }

    fn resume_op(&self) -> Result<Option<ResumeFn<Self>>, Self::Error> {
        Ok(Some(Self::resume as ResumeFn<Self>))
    }

    fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, Self::Error> {
        Ok(Some(Self::raise as RaiseFn<Self>))
    }

    fn close_op(&self) -> Result<Option<CloseFn<Self>>, Self::Error> {
        Ok(Some(Self::close as CloseFn<Self>))
    }
}

impl<C: Coroutine + ?Sized> Stepper for Box<C> {
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn next_value(&mut self) -> Result<C::Output, Error<C::Error>> {
        (**self).resume(None)
    }

    fn resume_op(&self) -> Result<Option<ResumeFn<Self>>, C::Error> {
        Ok(Some(resume_boxed::<C> as ResumeFn<Self>))
    }

    fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, C::Error> {
        Ok(Some(raise_boxed::<C> as RaiseFn<Self>))
    }

    fn close_op(&self) -> Result<Option<CloseFn<Self>>, C::Error> {
        Ok(Some(close_boxed::<C> as CloseFn<Self>))
    }
}

fn resume_boxed<C: Coroutine + ?Sized>(
    this: &mut Box<C>,
    input: Option<C::Input>,
) -> Result<C::Output, Error<C::Error>> {
    (**this).resume(input)
}

fn raise_boxed<C: Coroutine + ?Sized>(
    this: &mut Box<C>,
    error: C::Error,
) -> Result<C::Output, Error<C::Error>> {
    (**this).raise(error)
}

fn close_boxed<C: Coroutine + ?Sized>(this: &mut Box<C>) -> Result<(), Error<C::Error>> {
    (**this).close()
}
