use crate::board::Board;

/// Matches the bounded undo list of the interactive flow.
pub const DEFAULT_CAPACITY: usize = 20;

/// Undo stack of board snapshots. Push before every mutation; popping
/// hands back the most recent pre-mutation state. Bounded: once full, the
/// oldest snapshot falls off.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Board>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        History {
            snapshots: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, board: Board) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.remove(0);
        }
        self.snapshots.push(board);
    }

    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
