//! Undo and redo stacks for visited states.

/// Two LIFO stacks of previously visited states.
///
/// `past` holds states reachable by undo, oldest first, with the most recent
/// previous state at the tail. `undone` holds states reachable by redo, with
/// the most recently undone state at the tail.
///
/// # Example
///
/// ```rust
/// use daycycle::core::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// history.record("normal".to_string());
///
/// let mut current = "busy".to_string();
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "normal");
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "busy");
/// assert!(!history.redo(&mut current));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoHistory<T> {
    past: Vec<T>,
    undone: Vec<T>,
}

impl<T> Default for UndoHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UndoHistory<T> {
    /// Create empty stacks.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Rebuild stacks from their raw contents.
    pub fn from_parts(past: Vec<T>, undone: Vec<T>) -> Self {
        Self { past, undone }
    }

    /// Record the state being left by a new transition.
    ///
    /// Pushes `previous` onto the undo stack and invalidates the redo stack.
    pub fn record(&mut self, previous: T) {
        self.past.push(previous);
        self.undone.clear();
    }

    /// Step back one state.
    ///
    /// Moves `current` onto the redo stack and replaces it with the most
    /// recent previous state. Returns `false` and leaves everything
    /// untouched when there is nothing to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let left = std::mem::replace(current, previous);
        self.undone.push(left);
        true
    }

    /// Step forward one undone state.
    ///
    /// The state being replaced is not pushed onto the undo stack.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.undone.pop() else {
            return false;
        };
        *current = next;
        true
    }

    /// Empty the undo stack. The redo stack is kept.
    pub fn clear_past(&mut self) {
        self.past.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// States reachable by undo, oldest first.
    pub fn past(&self) -> &[T] {
        &self.past
    }

    /// States reachable by redo, most recently undone last.
    pub fn undone(&self) -> &[T] {
        &self.undone
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.past, self.undone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history: UndoHistory<u8> = UndoHistory::new();
        assert!(history.past().is_empty());
        assert!(history.undone().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_and_clears_redo() {
        let mut history = UndoHistory::from_parts(vec![1], vec![3]);
        history.record(2);

        assert_eq!(history.past(), &[1, 2]);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn undo_on_empty_is_noop() {
        let mut history = UndoHistory::new();
        let mut current = 7;

        assert!(!history.undo(&mut current));
        assert_eq!(current, 7);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn undo_moves_current_to_redo_stack() {
        let mut history = UndoHistory::new();
        history.record(1);
        history.record(2);
        let mut current = 3;

        assert!(history.undo(&mut current));
        assert_eq!(current, 2);
        assert_eq!(history.past(), &[1]);
        assert_eq!(history.undone(), &[3]);
    }

    #[test]
    fn redo_does_not_touch_past() {
        let mut history = UndoHistory::new();
        history.record(1);
        let mut current = 2;

        history.undo(&mut current);
        assert!(history.redo(&mut current));
        assert_eq!(current, 2);
        assert!(history.past().is_empty());
        assert!(!history.redo(&mut current));
    }

    #[test]
    fn clear_past_keeps_redo_stack() {
        let mut history = UndoHistory::new();
        history.record(1);
        history.record(2);
        let mut current = 3;
        history.undo(&mut current);

        history.clear_past();

        assert!(!history.can_undo());
        assert_eq!(history.undone(), &[3]);
        assert!(history.redo(&mut current));
        assert_eq!(current, 3);
    }
}
