use std::collections::VecDeque;

/// Undo/redo over full snapshots of some state `T`.
///
/// `past` is a stack whose top is the most recent checkpoint; `future` holds
/// undone states with the next redo at the front.
#[derive(Debug, Clone, Default)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: VecDeque<T>,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Pushes the present state onto `past` and forgets every redoable state.
    /// Called once before each user action.
    pub fn record_checkpoint(&mut self) {
        self.past.push(self.present.clone());
        self.future.clear();
    }

    /// Replaces the present state. Leaves `past` and `future` alone.
    pub fn apply_edit(&mut self, next: T) {
        self.present = next;
    }

    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Returns `false` (and does nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_on_fresh_history_is_a_noop() {
        let mut history = History::new(0);
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(*history.present(), 0);
    }

    #[test]
    fn checkpoint_clears_redo() {
        let mut history = History::new(0);
        history.record_checkpoint();
        history.apply_edit(1);
        assert!(history.undo());
        assert!(history.can_redo());

        history.record_checkpoint();
        history.apply_edit(2);
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(*history.present(), 2);
    }
}
