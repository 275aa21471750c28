/// Hands out one copy of a value per consumer.
///
/// The first `n - 1` consumers get clones; the last one gets the original,
/// so a single consumer never causes a clone.
#[derive(Debug)]
pub(crate) struct FanOut<T> {
    value: Option<T>,
    remaining: usize,
}

impl<T> FanOut<T> {
    pub(crate) fn new(value: T, consumers: usize) -> Self {
        Self {
            value: Some(value),
            remaining: consumers,
        }
    }
}

impl<T: Clone> Iterator for FanOut<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.remaining {
            0 => None,
            1 => {
                self.remaining = 0;
                self.value.take()
            }
            _ => {
                self.remaining -= 1;
                self.value.clone()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::FanOut;

    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Counted(Rc<Cell<usize>>);

    impl Clone for Counted {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Counted(self.0.clone())
        }
    }

    #[test]
    fn clones_all_but_the_last() {
        let clones = Rc::new(Cell::new(0));
        let copies: Vec<_> = FanOut::new(Counted(clones.clone()), 3).collect();
        assert_eq!(copies.len(), 3);
        assert_eq!(clones.get(), 2);
    }

    #[test]
    fn single_consumer_moves() {
        let clones = Rc::new(Cell::new(0));
        assert_eq!(FanOut::new(Counted(clones.clone()), 1).count(), 1);
        assert_eq!(clones.get(), 0);
    }

    #[test]
    fn no_consumers() {
        assert_eq!(FanOut::new(1, 0).next(), None);
    }
}
