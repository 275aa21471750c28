#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use lockstep::{CloseFn, Error, RaiseFn, ResumeFn, Stepper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Recoverable: a counter resets its total when this is raised into it.
    Reset,
    Fatal,
}

/// A native stepper that adds whatever is sent in to a running total.
///
/// Resuming with no value adds one. `limit` bounds the number of steps.
#[derive(Debug, Clone)]
pub struct Counter {
    pub total: i64,
    pub steps: usize,
    pub limit: usize,
    pub raised: Rc<Cell<usize>>,
    pub closed: Rc<Cell<usize>>,
}

impl Counter {
    pub fn new(limit: usize) -> Self {
        Self {
            total: 0,
            steps: 0,
            limit,
            raised: Rc::new(Cell::new(0)),
            closed: Rc::new(Cell::new(0)),
        }
    }

    fn send(&mut self, input: Option<i64>) -> Result<i64, Error<Fault>> {
        if self.steps == self.limit {
            return Err(Error::Exhausted);
        }
        self.steps += 1;
        self.total += input.unwrap_or(1);
        Ok(self.total)
    }

    fn throw(&mut self, fault: Fault) -> Result<i64, Error<Fault>> {
        self.raised.set(self.raised.get() + 1);
        match fault {
            Fault::Reset => {
                self.total = 0;
                Ok(0)
            }
            fault => Err(Error::Raised(fault)),
        }
    }

    fn shut(&mut self) -> Result<(), Error<Fault>> {
        self.closed.set(self.closed.get() + 1);
        Ok(())
    }
}

impl Stepper for Counter {
    type Input = i64;
    type Output = i64;
    type Error = Fault;

    fn next_value(&mut self) -> Result<i64, Error<Fault>> {
        self.send(None)
    }

    fn resume_op(&self) -> Result<Option<ResumeFn<Self>>, Fault> {
        Ok(Some(Self::send as ResumeFn<Self>))
    }

    fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, Fault> {
        Ok(Some(Self::throw as RaiseFn<Self>))
    }

    fn close_op(&self) -> Result<Option<CloseFn<Self>>, Fault> {
        Ok(Some(Self::shut as CloseFn<Self>))
    }
}

/// A native stepper whose close always fails.
#[derive(Debug, Clone, Default)]
pub struct Stubborn {
    pub close_attempts: Rc<Cell<usize>>,
}

impl Stubborn {
    fn shut(&mut self) -> Result<(), Error<Fault>> {
        self.close_attempts.set(self.close_attempts.get() + 1);
        Err(Error::Raised(Fault::Fatal))
    }
}

impl Stepper for Stubborn {
    type Input = i64;
    type Output = i64;
    type Error = Fault;

    fn next_value(&mut self) -> Result<i64, Error<Fault>> {
        Ok(7)
    }

    fn close_op(&self) -> Result<Option<CloseFn<Self>>, Fault> {
        Ok(Some(Self::shut as CloseFn<Self>))
    }
}

/// A stepper whose raise lookup fails outright.
#[derive(Debug, Clone, Default)]
pub struct Broken;

impl Stepper for Broken {
    type Input = i64;
    type Output = i64;
    type Error = Fault;

    fn next_value(&mut self) -> Result<i64, Error<Fault>> {
        Err(Error::Exhausted)
    }

    fn raise_op(&self) -> Result<Option<RaiseFn<Self>>, Fault> {
        Err(Fault::Fatal)
    }
}
