use super::Combine as CombineTrait;
use crate::utils::{self, ArrayBuf, Round};
use crate::{Adapter, Coroutine, Error, IntoStepper, Reconstruct, State, Stepper};

use core::array;
use core::fmt;

/// A coroutine that applies a function across a fixed-size array of
/// steppers.
///
/// The function receives the outputs of one round as an array, so its arity
/// is checked at compile time.
///
/// This `struct` is created by the [`combine`] method on the [`Combine`] trait.
/// See its documentation for more.
///
/// [`combine`]: crate::Combine::combine
/// [`Combine`]: crate::Combine
pub struct Combine<F, S, const N: usize>
where
    S: Stepper,
{
    f: F,
    steppers: [Adapter<S>; N],
    state: State,
}

impl<F, S, const N: usize> Combine<F, S, N>
where
    S: Stepper,
{
    /// Wraps every stepper in `steppers` and combines their outputs with `f`.
    pub fn new<T>(f: F, steppers: [T; N]) -> Result<Self, Error<S::Error>>
    where
        T: IntoStepper<Stepper = S>,
    {
        if N == 0 {
            return Err(Error::Arity { found: 0 });
        }
        let steppers = utils::wrap_all(steppers)?.into_iter().collect();
        let steppers = utils::into_array(steppers).map_err(|found| Error::Arity { found })?;
        tracing::trace!(width = N, "built combine");
        Ok(Self {
            f,
            steppers,
            state: State::Active,
        })
    }

    /// Where this combine is in its lifecycle.
    pub fn state(&self) -> State {
        self.state
    }
}

impl<F, S, O, const N: usize> Combine<F, S, N>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
    F: FnMut([S::Output; N]) -> O,
{
    fn round(&mut self, round: Round<S::Input, S::Error>) -> Result<O, Error<S::Error>> {
        if !self.state.is_active() {
            return round.finished();
        }
        let mut outputs = ArrayBuf::<S::Output, N>::new();
        let res = utils::drive(&mut self.steppers, round, |_, output| outputs.push(output));
        let res = res.and_then(|()| {
            utils::into_array(outputs).map_err(|found| Error::Arity { found })
        });
        match res {
            Ok(outputs) => Ok((self.f)(outputs)),
            Err(e) => {
                self.state = State::Exhausted;
                Err(e)
            }
        }
    }
}

impl<F, S, O, const N: usize> Coroutine for Combine<F, S, N>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
    F: FnMut([S::Output; N]) -> O,
{
    type Input = S::Input;
    type Output = O;
    type Error = S::Error;

    fn resume(&mut self, input: Option<S::Input>) -> Result<O, Error<S::Error>> {
        self.round(Round::Resume(input))
    }

    fn raise(&mut self, error: S::Error) -> Result<O, Error<S::Error>> {
        self.round(Round::Raise(error))
    }

    fn close(&mut self) -> Result<(), Error<S::Error>> {
        utils::close_all(&mut self.steppers);
        self.state = State::Closed;
        Ok(())
    }
}

impl<F, S, O, const N: usize> Iterator for Combine<F, S, N>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
    F: FnMut([S::Output; N]) -> O,
{
    type Item = Result<O, Error<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        utils::step(self.resume(None))
    }
}

impl<F, S, const N: usize> Reconstruct for Combine<F, S, N>
where
    F: Clone,
    S: Stepper + Clone,
{
    type Parts = (F, [Option<S>; N]);
    type Error = S::Error;

    fn parts(&self) -> Self::Parts {
        (self.f.clone(), array::from_fn(|i| self.steppers[i].parts()))
    }

    fn from_parts((f, parts): Self::Parts) -> Result<Self, Error<S::Error>> {
        if N == 0 {
            return Err(Error::Arity { found: 0 });
        }
        let steppers = parts
            .into_iter()
            .map(Adapter::from_parts)
            .collect::<Result<ArrayBuf<_, N>, _>>()?;
        let steppers = utils::into_array(steppers).map_err(|found| Error::Arity { found })?;
        Ok(Self {
            f,
            steppers,
            state: State::Active,
        })
    }
}

impl<F, S, const N: usize> fmt::Debug for Combine<F, S, N>
where
    S: Stepper + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steppers.iter()).finish()
    }
}

impl<T, F, O, const N: usize> CombineTrait<F> for [T; N]
where
    T: IntoStepper,
    F: FnMut([<T::Stepper as Stepper>::Output; N]) -> O,
{
    type Error = <T::Stepper as Stepper>::Error;
    type Coroutine = Combine<F, T::Stepper, N>;

    fn combine(
        self,
        f: F,
    ) -> Result<Combine<F, T::Stepper, N>, Error<<T::Stepper as Stepper>::Error>> {
        Combine::new(f, self)
    }
}
