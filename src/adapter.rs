//! Gives any stepper full resume/raise/close conformance.

use core::fmt;

use crate::stepper::{CloseFn, RaiseFn, ResumeFn};
use crate::utils;
use crate::{Coroutine, Error, IntoStepper, Op, Reconstruct, Stepper, SENTINEL};

/// Where an adapter's implementation of an operation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The wrapped stepper implements the operation itself.
    Native,
    /// The adapter synthesizes the operation from `next_value`.
    Fallback,
}

#[derive(Clone, Copy)]
struct Bound<F> {
    call: F,
    origin: Origin,
}

impl<F> Bound<F> {
    fn fallback(call: F) -> Self {
        Self {
            call,
            origin: Origin::Fallback,
        }
    }
}

/// Binds the native implementation of `op` if the lookup found one, and the
/// fallback otherwise.
fn bind<F, E>(op: Op, lookup: Result<Option<F>, E>, fallback: F) -> Result<Bound<F>, Error<E>> {
    match lookup {
        Ok(Some(call)) => Ok(Bound {
            call,
            origin: Origin::Native,
        }),
        Ok(None) => Ok(Bound::fallback(fallback)),
        Err(error) => Err(Error::Lookup { op, error }),
    }
}

fn fallback_resume<S: Stepper>(
    stepper: &mut S,
    _input: Option<S::Input>,
) -> Result<S::Output, Error<S::Error>> {
    stepper.next_value()
}

fn fallback_raise<S: Stepper>(
    _stepper: &mut S,
    error: S::Error,
) -> Result<S::Output, Error<S::Error>> {
    Err(Error::Raised(error))
}

fn fallback_close<S: Stepper>(_stepper: &mut S) -> Result<(), Error<S::Error>> {
    Ok(())
}

/// A stepper driven through the full coroutine protocol.
///
/// Each operation is bound once, at construction: to the stepper's native
/// implementation when it has one, and to a fallback synthesized from
/// [`Stepper::next_value`] otherwise.
///
/// | Operation | Fallback                                              |
/// | ---       | ---                                                   |
/// | `resume`  | Produce the next value; the input is ignored.         |
/// | `raise`   | Hand the error straight back as [`Error::Raised`].    |
/// | `close`   | Nothing beyond releasing the stepper.                 |
///
/// Closing releases the stepper whichever way `close` is bound, after which
/// the adapter behaves like the [`Sentinel`](crate::Sentinel). Dropping an
/// adapter does not close its stepper.
///
/// This `struct` is created by the [`wrap`] function. See its documentation
/// for more.
#[derive(Clone)]
pub struct Adapter<S: Stepper> {
    inner: Option<S>,
    resume: Bound<ResumeFn<S>>,
    raise: Bound<RaiseFn<S>>,
    close: Bound<CloseFn<S>>,
}

/// Wraps a stepper in an [`Adapter`].
///
/// Fails with [`Error::NotIterable`] if `stepper` cannot produce a stepper,
/// and with [`Error::Lookup`] if looking up one of its native operations
/// fails.
///
/// # Examples
///
/// ```
/// use lockstep::{plain, wrap, Coroutine, Error};
///
/// let mut a = wrap(plain(["a", "b", "c"])).unwrap();
/// assert_eq!(a.resume(None), Ok("a"));
/// a.close().unwrap();
/// assert_eq!(a.resume(None), Err(Error::Exhausted));
/// ```
pub fn wrap<T: IntoStepper>(
    stepper: T,
) -> Result<Adapter<T::Stepper>, Error<<T::Stepper as Stepper>::Error>> {
    Adapter::new(stepper)
}

impl<S: Stepper> Adapter<S> {
    /// Wraps `stepper`, binding each protocol operation.
    pub fn new<T>(stepper: T) -> Result<Self, Error<S::Error>>
    where
        T: IntoStepper<Stepper = S>,
    {
        let inner = stepper.into_stepper()?;
        let resume = bind(
            Op::Resume,
            inner.resume_op(),
            fallback_resume::<S> as ResumeFn<S>,
        )?;
        let raise = bind(Op::Raise, inner.raise_op(), fallback_raise::<S> as RaiseFn<S>)?;
        let close = bind(Op::Close, inner.close_op(), fallback_close::<S> as CloseFn<S>)?;
        tracing::trace!(
            resume = ?resume.origin,
            raise = ?raise.origin,
            close = ?close.origin,
            "bound adapter operations"
        );
        Ok(Self {
            inner: Some(inner),
            resume,
            raise,
            close,
        })
    }

    /// An adapter that has already been closed.
    pub(crate) fn closed() -> Self {
        Self {
            inner: None,
            resume: Bound::fallback(fallback_resume::<S> as ResumeFn<S>),
            raise: Bound::fallback(fallback_raise::<S> as RaiseFn<S>),
            close: Bound::fallback(fallback_close::<S> as CloseFn<S>),
        }
    }

    /// Reports whether `op` is bound to the stepper's own implementation.
    ///
    /// A closed adapter rebuilt with [`Reconstruct::from_parts`] has no
    /// stepper to look operations up on, and reports [`Origin::Fallback`] for
    /// every operation.
    pub fn origin(&self, op: Op) -> Origin {
        match op {
            Op::Resume => self.resume.origin,
            Op::Raise => self.raise.origin,
            Op::Close => self.close.origin,
        }
    }

    /// Returns `true` once [`close`](Coroutine::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the wrapped stepper, or `None` once closed.
    pub fn get_ref(&self) -> Option<&S> {
        self.inner.as_ref()
    }
}

impl<S: Stepper> Coroutine for Adapter<S> {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn resume(&mut self, input: Option<S::Input>) -> Result<S::Output, Error<S::Error>> {
        match self.inner.as_mut() {
            Some(inner) => (self.resume.call)(inner, input),
            None => SENTINEL.resume(input),
        }
    }

    fn raise(&mut self, error: S::Error) -> Result<S::Output, Error<S::Error>> {
        match self.inner.as_mut() {
            Some(inner) => (self.raise.call)(inner, error),
            None => SENTINEL.raise(error),
        }
    }

    fn close(&mut self) -> Result<(), Error<S::Error>> {
        let res = match self.inner.as_mut() {
            Some(inner) => (self.close.call)(inner),
            None => return SENTINEL.close(),
        };
        self.inner = None;
        res
    }
}

impl<S: Stepper> Iterator for Adapter<S> {
    type Item = Result<S::Output, Error<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        utils::step(self.resume(None))
    }
}

impl<S: Stepper + Clone> Reconstruct for Adapter<S> {
    type Parts = Option<S>;
    type Error = S::Error;

    fn parts(&self) -> Self::Parts {
        self.inner.clone()
    }

    fn from_parts(parts: Self::Parts) -> Result<Self, Error<S::Error>> {
        match parts {
            Some(stepper) => Self::new(stepper),
            None => Ok(Self::closed()),
        }
    }
}

impl<S> fmt::Debug for Adapter<S>
where
    S: Stepper + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("inner", &self.inner)
            .field("resume", &self.resume.origin)
            .field("raise", &self.raise.origin)
            .field("close", &self.close.origin)
            .finish()
    }
}
