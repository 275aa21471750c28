use alloc::boxed::Box;

use crate::Error;

/// A stepper with full support for the resume/raise/close protocol.
///
/// Every call runs to completion before returning: the coroutine suspends by
/// returning a value, and nothing happens until the next call.
pub trait Coroutine {
    /// The value that may be sent in on [`resume`](Coroutine::resume).
    type Input;

    /// The value produced at each suspension point.
    type Output;

    /// The error type that can be injected with [`raise`](Coroutine::raise).
    type Error;

    /// Advances the coroutine, optionally sending `input` to the suspension
    /// point. `None` means "no value"; it is what plain iteration sends.
    ///
    /// Returns [`Error::Exhausted`] once nothing is left.
    fn resume(&mut self, input: Option<Self::Input>) -> Result<Self::Output, Error<Self::Error>>;

    /// Injects `error` at the suspension point.
    ///
    /// The coroutine may recover and produce its next value, or the error
    /// comes back out as [`Error::Raised`].
    fn raise(&mut self, error: Self::Error) -> Result<Self::Output, Error<Self::Error>>;

    /// Terminates the coroutine early. Closing is idempotent.
    fn close(&mut self) -> Result<(), Error<Self::Error>>;
}

impl<C: Coroutine + ?Sized> Coroutine for &mut C {
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn resume(&mut self, input: Option<C::Input>) -> Result<C::Output, Error<C::Error>> {
        (**self).resume(input)
    }

    fn raise(&mut self, error: C::Error) -> Result<C::Output, Error<C::Error>> {
        (**self).raise(error)
    }

    fn close(&mut self) -> Result<(), Error<C::Error>> {
        (**self).close()
    }
}

impl<C: Coroutine + ?Sized> Coroutine for Box<C> {
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn resume(&mut self, input: Option<C::Input>) -> Result<C::Output, Error<C::Error>> {
        (**self).resume(input)
    }

    fn raise(&mut self, error: C::Error) -> Result<C::Output, Error<C::Error>> {
        (**self).raise(error)
    }

    fn close(&mut self) -> Result<(), Error<C::Error>> {
        (**self).close()
    }
}

/// A type-erased coroutine.
///
/// Combinators hold steppers of a single type; boxing lets coroutines of
/// different concrete types be driven together.
pub type BoxCoroutine<'a, I, O, E> = Box<dyn Coroutine<Input = I, Output = O, Error = E> + 'a>;
