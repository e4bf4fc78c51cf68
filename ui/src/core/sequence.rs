//! Current-attribute index state machine.
//!
//! One controller owns the "which month is on display" index for the whole
//! page. The two discrete skip buttons and the continuous slider both funnel
//! through its transition methods; anything that needs to react (symbol set,
//! legend) registers an observer rather than polling shared state.

use crate::core::error::DataError;

/// Observer invoked synchronously with the new index on every transition.
pub type IndexObserver = Box<dyn FnMut(usize)>;

/// Owns the current attribute index, cyclic over `[0, len)`.
pub struct SequenceController {
    index: usize,
    len: usize,
    observers: Vec<IndexObserver>,
}

impl SequenceController {
    /// Controller over `len` attribute keys, starting at index 0.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            observers: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register an observer. Observers run in registration order and always
    /// see the fully-updated index before the triggering transition returns.
    pub fn subscribe(&mut self, observer: IndexObserver) {
        self.observers.push(observer);
    }

    /// Step forward one month, wrapping from the last back to the first.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
            self.notify();
        }
        self.index
    }

    /// Step backward one month, wrapping from the first to the last.
    pub fn retreat(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
            self.notify();
        }
        self.index
    }

    /// Jump straight to `index` (slider input). Out-of-range input fails
    /// without touching the current state.
    pub fn set_index(&mut self, index: usize) -> Result<usize, DataError> {
        if index >= self.len {
            return Err(DataError::InvalidIndex {
                given: index,
                len: self.len,
            });
        }
        self.index = index;
        self.notify();
        Ok(self.index)
    }

    fn notify(&mut self) {
        let index = self.index;
        for observer in &mut self.observers {
            observer(index);
        }
    }
}

impl std::fmt::Debug for SequenceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceController")
            .field("index", &self.index)
            .field("len", &self.len)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn advancing_a_full_cycle_returns_to_start() {
        let mut seq = SequenceController::new(12);
        for _ in 0..12 {
            seq.advance();
        }
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn retreating_from_zero_wraps_to_last() {
        let mut seq = SequenceController::new(12);
        assert_eq!(seq.retreat(), 11);
    }

    #[test]
    fn set_index_validates_range() {
        let mut seq = SequenceController::new(12);
        assert_eq!(seq.set_index(7), Ok(7));
        assert_eq!(
            seq.set_index(12),
            Err(DataError::InvalidIndex { given: 12, len: 12 })
        );
        // Failed transition leaves the state untouched.
        assert_eq!(seq.index(), 7);
    }

    #[test]
    fn observers_see_the_updated_index_synchronously() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = seen.clone();

        let mut seq = SequenceController::new(3);
        seq.subscribe(Box::new(move |index| sink.borrow_mut().push(index)));

        seq.advance();
        seq.advance();
        seq.retreat();
        seq.set_index(0).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 1, 0]);
    }

    #[test]
    fn failed_set_index_does_not_notify() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = seen.clone();

        let mut seq = SequenceController::new(2);
        seq.subscribe(Box::new(move |index| sink.borrow_mut().push(index)));

        assert!(seq.set_index(5).is_err());
        assert!(seen.borrow().is_empty());
    }
}
