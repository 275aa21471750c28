use super::Zip as ZipTrait;
use crate::utils::{self, ArrayBuf, Round};
use crate::{Adapter, Coroutine, Error, IntoStepper, Reconstruct, State, Stepper};

use core::array;
use core::fmt;

/// A coroutine that ‘zips up’ a fixed-size array of steppers.
///
/// Each round is returned by value as an array, so there is no storage to
/// share between rounds.
///
/// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See
/// its documentation for more.
///
/// [`zip`]: crate::Zip::zip
/// [`Zip`]: crate::Zip
pub struct Zip<S, const N: usize>
where
    S: Stepper,
{
    steppers: [Adapter<S>; N],
    state: State,
}

impl<S, const N: usize> Zip<S, N>
where
    S: Stepper,
{
    /// Wraps every stepper in `steppers` and zips their outputs.
    pub fn new<T>(steppers: [T; N]) -> Result<Self, Error<S::Error>>
    where
        T: IntoStepper<Stepper = S>,
    {
        let steppers = utils::wrap_all(steppers)?.into_iter().collect();
        let steppers = utils::into_array(steppers).map_err(|found| Error::Arity { found })?;
        tracing::trace!(width = N, "built zip");
        Ok(Self {
            steppers,
            state: State::Active,
        })
    }

    /// Where this zip is in its lifecycle.
    pub fn state(&self) -> State {
        self.state
    }
}

impl<S, const N: usize> Zip<S, N>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    fn round(
        &mut self,
        round: Round<S::Input, S::Error>,
    ) -> Result<[S::Output; N], Error<S::Error>> {
        if N == 0 {
            // Every call fails, but iteration only reports it once.
            self.state = State::Exhausted;
            return Err(Error::EmptyZip);
        }
        if !self.state.is_active() {
            return round.finished();
        }
        let mut outputs = ArrayBuf::<S::Output, N>::new();
        let res = utils::drive(&mut self.steppers, round, |_, output| outputs.push(output));
        let res = res.and_then(|()| {
            utils::into_array(outputs).map_err(|found| Error::Arity { found })
        });
        if res.is_err() {
            self.state = State::Exhausted;
        }
        res
    }
}

impl<S, const N: usize> Coroutine for Zip<S, N>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    type Input = S::Input;
    type Output = [S::Output; N];
    type Error = S::Error;

    fn resume(&mut self, input: Option<S::Input>) -> Result<Self::Output, Error<S::Error>> {
        self.round(Round::Resume(input))
    }

    fn raise(&mut self, error: S::Error) -> Result<Self::Output, Error<S::Error>> {
        self.round(Round::Raise(error))
    }

    fn close(&mut self) -> Result<(), Error<S::Error>> {
        utils::close_all(&mut self.steppers);
        self.state = State::Closed;
        Ok(())
    }
}

impl<S, const N: usize> Iterator for Zip<S, N>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    type Item = Result<[S::Output; N], Error<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.state.is_active() {
            return None;
        }
        utils::step(self.resume(None))
    }
}

impl<S, const N: usize> Reconstruct for Zip<S, N>
where
    S: Stepper + Clone,
{
    type Parts = [Option<S>; N];
    type Error = S::Error;

    fn parts(&self) -> Self::Parts {
        array::from_fn(|i| self.steppers[i].parts())
    }

    fn from_parts(parts: Self::Parts) -> Result<Self, Error<S::Error>> {
        let steppers = parts
            .into_iter()
            .map(Adapter::from_parts)
            .collect::<Result<ArrayBuf<_, N>, _>>()?;
        let steppers = utils::into_array(steppers).map_err(|found| Error::Arity { found })?;
        Ok(Self {
            steppers,
            state: State::Active,
        })
    }
}

impl<S, const N: usize> fmt::Debug for Zip<S, N>
where
    S: Stepper + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steppers.iter()).finish()
    }
}

impl<T, const N: usize> ZipTrait for [T; N]
where
    T: IntoStepper,
{
    type Error = <T::Stepper as Stepper>::Error;
    type Coroutine = Zip<T::Stepper, N>;

    fn zip(self) -> Result<Zip<T::Stepper, N>, Error<<T::Stepper as Stepper>::Error>> {
        Zip::new(self)
    }
}
