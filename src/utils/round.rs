use alloc::vec::Vec;

use super::FanOut;
use crate::{Adapter, Coroutine, Error, IntoStepper, Stepper, SENTINEL};

/// What a combinator forwards to each of its adapters in one round.
#[derive(Debug, Clone)]
pub(crate) enum Round<I, E> {
    Resume(Option<I>),
    Raise(E),
}

impl<I, E> Round<I, E> {
    fn call<S>(self, adapter: &mut Adapter<S>) -> Result<S::Output, Error<E>>
    where
        S: Stepper<Input = I, Error = E>,
    {
        match self {
            Round::Resume(input) => adapter.resume(input),
            Round::Raise(error) => adapter.raise(error),
        }
    }

    /// Answers the round the way the sentinel would, without touching any
    /// adapter.
    pub(crate) fn finished<T>(self) -> Result<T, Error<E>> {
        match self {
            Round::Resume(input) => SENTINEL.resume(input),
            Round::Raise(error) => SENTINEL.raise(error),
        }
    }
}

/// Forwards `round` to every adapter in order, handing each result and its
/// position to `sink`.
///
/// The first error ends the round: later adapters are not called, and
/// earlier ones stay advanced.
pub(crate) fn drive<S>(
    adapters: &mut [Adapter<S>],
    round: Round<S::Input, S::Error>,
    mut sink: impl FnMut(usize, S::Output),
) -> Result<(), Error<S::Error>>
where
    S: Stepper,
    S::Input: Clone,
    S::Error: Clone,
{
    let rounds = FanOut::new(round, adapters.len());
    for ((index, adapter), round) in adapters.iter_mut().enumerate().zip(rounds) {
        sink(index, round.call(adapter)?);
    }
    Ok(())
}

/// Closes every adapter in order. Failures are ignored, and do not stop the
/// remaining adapters from being closed.
pub(crate) fn close_all<S: Stepper>(adapters: &mut [Adapter<S>]) {
    for (index, adapter) in adapters.iter_mut().enumerate() {
        if adapter.close().is_err() {
            tracing::debug!(argument = index + 1, "ignoring failed close of inner stepper");
        }
    }
}

/// Wraps every input in order. A failure drops the adapters built so far and
/// reports which input (1-based) could not be iterated.
pub(crate) fn wrap_all<T, I>(
    inputs: I,
) -> Result<Vec<Adapter<T::Stepper>>, Error<<T::Stepper as Stepper>::Error>>
where
    T: IntoStepper,
    I: IntoIterator<Item = T>,
{
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| Adapter::new(input).map_err(|e| e.at_argument(index + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{plain, Plain, RaiseFn};

    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn drive_stops_at_first_error() {
        let mut adapters = wrap_all([
            Plain::<_, (), &str>::new(vec![1, 2]),
            Plain::new(vec![]),
            Plain::new(vec![3, 4]),
        ])
        .unwrap();

        let mut seen = vec![];
        let res = drive(&mut adapters, Round::Resume(None), |index, item| {
            seen.push((index, item))
        });
        assert_eq!(res, Err(Error::Exhausted));
        assert_eq!(seen, [(0, 1)]);

        // The third adapter was never advanced, the first one was.
        assert_eq!(adapters[0].resume(None), Ok(2));
        assert_eq!(adapters[2].resume(None), Ok(3));
    }

    /// Counts the errors raised into it, and never recovers.
    #[derive(Debug, Default)]
    struct Tally {
        raised: Rc<Cell<usize>>,
    }

    impl Tally {
        fn throw(&mut self, error: &'static str) -> Result<u8, Error<&'static str>> {
            self.raised.set(self.raised.get() + 1);
            Err(Error::Raised(error))
        }
    }

    impl Stepper for Tally {
        type Input = ();
        type Output = u8;
        type Error = &'static str;

        fn next_value(&mut self) -> Result<u8, Error<&'static str>> {
            Ok(0)
        }

        fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, &'static str> {
            Ok(Some(Self::throw as RaiseFn<Self>))
        }
    }

    #[test]
    fn drive_raise_reaches_first_adapter_only() {
        let (first, second) = (Tally::default(), Tally::default());
        let (first_raised, second_raised) = (first.raised.clone(), second.raised.clone());
        let mut adapters = wrap_all([first, second]).unwrap();

        let res = drive(&mut adapters, Round::Raise("boom"), |_, _| unreachable!());
        assert_eq!(res, Err(Error::Raised("boom")));
        assert_eq!(first_raised.get(), 1);
        assert_eq!(second_raised.get(), 0);
    }

    #[test]
    fn close_all_closes_every_adapter() {
        let mut adapters = wrap_all([plain(0..2), plain(0..3)]).unwrap();
        close_all(&mut adapters);
        assert!(adapters.iter().all(Adapter::is_closed));
    }

    #[test]
    fn finished_round() {
        let resume: Round<(), &str> = Round::Resume(None);
        assert_eq!(resume.finished::<u8>(), Err(Error::Exhausted));
        let raise: Round<(), &str> = Round::Raise("boom");
        assert_eq!(raise.finished::<u8>(), Err(Error::Raised("boom")));
    }
}
