use anyhow::Result;

use crate::blocks::Container;
use crate::board::Board;
use crate::history::History;
use crate::problem::Problem;
use crate::share;
use crate::steps::{compute_steps, DivisionStep};

/// One student session: the problem, the current block layout, and the
/// undo stack. Every mutation snapshots the board first; a failed
/// operation leaves neither a board change nor a history entry.
pub struct Exercise {
    problem: Problem,
    board: Board,
    history: History,
}

impl Exercise {
    pub fn new(problem: Problem) -> Self {
        let board = Board::new(&problem);
        Exercise {
            problem,
            board,
            history: History::new(),
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn record<T>(&mut self, op: impl FnOnce(&mut Board) -> Result<T>) -> Result<T> {
        let before = self.board.clone();
        match op(&mut self.board) {
            Ok(v) => {
                self.history.push(before);
                Ok(v)
            }
            Err(e) => {
                self.board = before;
                Err(e)
            }
        }
    }

    pub fn move_block(&mut self, index: usize, dest: Container) -> Result<()> {
        self.record(|b| b.move_block(index, dest))
    }

    pub fn move_batch(&mut self, index: usize, dest: Container, count: usize) -> Result<usize> {
        self.record(|b| b.move_batch(index, dest, count))
    }

    pub fn split(&mut self, index: usize) -> Result<()> {
        self.record(|b| b.split(index))
    }

    pub fn merge_all(&mut self) {
        self.history.push(self.board.clone());
        self.board.merge_all();
    }

    pub fn reset(&mut self) {
        self.history.push(self.board.clone());
        self.board.reset();
    }

    /// Restores the latest snapshot. False when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.board = prev;
                true
            }
            None => false,
        }
    }

    /// The precomputed long-division rows for this problem.
    pub fn steps(&self) -> Vec<DivisionStep> {
        compute_steps(self.problem.dividend(), self.problem.divisor())
    }

    /// How many of `steps()` the current board layout reveals.
    pub fn completed_steps(&self) -> usize {
        share::completed_steps(&self.board, &self.problem)
    }

    pub fn is_solved(&self) -> bool {
        share::board_solved(&self.board, &self.problem)
    }
}
