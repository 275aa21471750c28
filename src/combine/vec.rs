use super::Combine as CombineTrait;
use crate::utils::{self, Round};
use crate::{Adapter, Coroutine, Error, IntoStepper, Reconstruct, State, Stepper};

use alloc::vec::Vec;
use core::fmt;

/// A coroutine that applies a function across a list of steppers.
///
/// The function receives the outputs of one round as a `Vec`, in input order.
///
/// This `struct` is created by the [`combine`] method on the [`Combine`] trait.
/// See its documentation for more.
///
/// [`combine`]: crate::Combine::combine
/// [`Combine`]: crate::Combine
pub struct Combine<F, S>
where
    S: Stepper,
{
    f: F,
    steppers: Vec<Adapter<S>>,
    state: State,
}

impl<F, S> Combine<F, S>
where
    S: Stepper,
{
    /// Wraps every stepper in `steppers` and combines their outputs with `f`.
    pub fn new<T>(f: F, steppers: Vec<T>) -> Result<Self, Error<S::Error>>
    where
        T: IntoStepper<Stepper = S>,
    {
        if steppers.is_empty() {
            return Err(Error::Arity { found: 0 });
        }
        let steppers = utils::wrap_all(steppers)?;
        tracing::trace!(width = steppers.len(), "built combine");
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

    /// The number of steppers driven per round.
    pub fn width(&self) -> usize {
        self.steppers.len()
    }
}

impl<F, S, O> Combine<F, S>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
    F: FnMut(Vec<S::Output>) -> O,
{
    fn round(&mut self, round: Round<S::Input, S::Error>) -> Result<O, Error<S::Error>> {
        if !self.state.is_active() {
            return round.finished();
        }
        let mut outputs = Vec::with_capacity(self.steppers.len());
        match utils::drive(&mut self.steppers, round, |_, output| outputs.push(output)) {
            Ok(()) => Ok((self.f)(outputs)),
            Err(e) => {
                self.state = State::Exhausted;
                Err(e)
            }
        }
    }
}

impl<F, S, O> Coroutine for Combine<F, S>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
    F: FnMut(Vec<S::Output>) -> O,
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

impl<F, S, O> Iterator for Combine<F, S>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
    F: FnMut(Vec<S::Output>) -> O,
{
    type Item = Result<O, Error<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        utils::step(self.resume(None))
    }
}

impl<F, S> Reconstruct for Combine<F, S>
where
    F: Clone,
    S: Stepper + Clone,
{
    type Parts = (F, Vec<Option<S>>);
    type Error = S::Error;

    fn parts(&self) -> Self::Parts {
        let steppers = self.steppers.iter().map(Reconstruct::parts).collect();
        (self.f.clone(), steppers)
    }

    fn from_parts((f, parts): Self::Parts) -> Result<Self, Error<S::Error>> {
        if parts.is_empty() {
            return Err(Error::Arity { found: 0 });
        }
        let steppers = parts
            .into_iter()
            .map(Adapter::from_parts)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            f,
            steppers,
            state: State::Active,
        })
    }
}

impl<F, S> fmt::Debug for Combine<F, S>
where
    S: Stepper + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steppers.iter()).finish()
    }
}

impl<T, F, O> CombineTrait<F> for Vec<T>
where
    T: IntoStepper,
    F: FnMut(Vec<<T::Stepper as Stepper>::Output>) -> O,
{
    type Error = <T::Stepper as Stepper>::Error;
    type Coroutine = Combine<F, T::Stepper>;

    fn combine(
        self,
        f: F,
    ) -> Result<Combine<F, T::Stepper>, Error<<T::Stepper as Stepper>::Error>> {
        Combine::new(f, self)
    }
}
