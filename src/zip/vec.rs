use super::Zip as ZipTrait;
use crate::utils::{self, Round};
use crate::{Adapter, Coroutine, Error, IntoStepper, Reconstruct, State, Stepper};

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// One round of outputs from a [`Zip`], in input order.
///
/// Rows are shared, read-only views. While a caller keeps a row alive the zip
/// writes the next round into fresh storage; once every copy of the latest row
/// has been dropped, the zip reuses its storage for the next round instead of
/// allocating.
#[derive(Clone)]
pub struct Row<T>(Arc<Vec<T>>);

impl<T> Row<T> {
    /// Returns `true` if both rows share the same storage.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Extracts the outputs, cloning them only if the storage is still
    /// shared.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T> Deref for Row<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsRef<[T]> for Row<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Row<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Row<T> {}

impl<T: PartialEq> PartialEq<[T]> for Row<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.0.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Row<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Row<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.0 == *other
    }
}

/// A coroutine that ‘zips up’ a list of steppers into rows.
///
/// This `struct` is created by the [`zip`] method on the [`Zip`] trait. See
/// its documentation for more.
///
/// [`zip`]: crate::Zip::zip
/// [`Zip`]: crate::Zip
pub struct Zip<S>
where
    S: Stepper,
{
    steppers: Vec<Adapter<S>>,
    row: Arc<Vec<S::Output>>,
    state: State,
}

impl<S> Zip<S>
where
    S: Stepper,
{
    /// Wraps every stepper in `steppers` and zips their outputs.
    ///
    /// Zero steppers are accepted, but such a zip fails every call with
    /// [`Error::EmptyZip`].
    pub fn new<T>(steppers: Vec<T>) -> Result<Self, Error<S::Error>>
    where
        T: IntoStepper<Stepper = S>,
    {
        let steppers = utils::wrap_all(steppers)?;
        tracing::trace!(width = steppers.len(), "built zip");
        Ok(Self::from_adapters(steppers))
    }

    fn from_adapters(steppers: Vec<Adapter<S>>) -> Self {
        let row = Arc::new(Vec::with_capacity(steppers.len()));
        Self {
            steppers,
            row,
            state: State::Active,
        }
    }

    /// Where this zip is in its lifecycle.
    pub fn state(&self) -> State {
        self.state
    }

    /// The number of steppers driven per round.
    pub fn width(&self) -> usize {
        self.steppers.len()
    }
}

impl<S> Zip<S>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    fn round(
        &mut self,
        round: Round<S::Input, S::Error>,
    ) -> Result<Row<S::Output>, Error<S::Error>> {
        if self.steppers.is_empty() {
            // Every call fails, but iteration only reports it once.
            self.state = State::Exhausted;
            return Err(Error::EmptyZip);
        }
        if !self.state.is_active() {
            return round.finished();
        }

        let res = match Arc::get_mut(&mut self.row) {
            // Nobody kept the last row: overwrite it in place.
            Some(row) => utils::drive(&mut self.steppers, round, |index, output| {
                match row.get_mut(index) {
                    Some(slot) => *slot = output,
                    None => row.push(output),
                }
            }),
            // The last row escaped to a caller, leave it untouched.
            None => {
                let mut row = Vec::with_capacity(self.steppers.len());
                let res = utils::drive(&mut self.steppers, round, |_, output| row.push(output));
                if res.is_ok() {
                    self.row = Arc::new(row);
                }
                res
            }
        };

        match res {
            Ok(()) => Ok(Row(Arc::clone(&self.row))),
            Err(e) => {
                self.state = State::Exhausted;
                Err(e)
            }
        }
    }
}

impl<S> Coroutine for Zip<S>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    type Input = S::Input;
    type Output = Row<S::Output>;
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

impl<S> Iterator for Zip<S>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    type Item = Result<Row<S::Output>, Error<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.state.is_active() {
            return None;
        }
        utils::step(self.resume(None))
    }
}

impl<S> Reconstruct for Zip<S>
where
    S: Stepper + Clone,
{
    type Parts = Vec<Option<S>>;
    type Error = S::Error;

    fn parts(&self) -> Self::Parts {
        self.steppers.iter().map(Reconstruct::parts).collect()
    }

    fn from_parts(parts: Self::Parts) -> Result<Self, Error<S::Error>> {
        let steppers = parts
            .into_iter()
            .map(Adapter::from_parts)
            .collect::<Result<_, _>>()?;
        Ok(Self::from_adapters(steppers))
    }
}

impl<S> fmt::Debug for Zip<S>
where
    S: Stepper + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steppers.iter()).finish()
    }
}

impl<T> ZipTrait for Vec<T>
where
    T: IntoStepper,
{
    type Error = <T::Stepper as Stepper>::Error;
    type Coroutine = Zip<T::Stepper>;

    fn zip(self) -> Result<Zip<T::Stepper>, Error<<T::Stepper as Stepper>::Error>> {
        Zip::new(self)
    }
}
