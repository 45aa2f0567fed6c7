use crate::blocks::{BlockKind, Container};
use crate::board::Board;
use crate::problem::Problem;

const DEBUG: bool = false;
macro_rules! debug {
    ($($arg:tt)*) => {
        if DEBUG {
            eprint!("  ");
            eprintln!($($arg)*);
        }
    };
}

/// Whether the sharing of one place value is finished on this board.
///
/// Vacuously true when no block of the kind exists anywhere. Otherwise
/// every plate must hold the same count, and the source must be fully
/// drained for hundreds and tens (those have to be split down before the
/// final remainder can stand), while ones may leave fewer than divisor
/// behind as the remainder.
pub fn place_value_complete(board: &Board, kind: BlockKind) -> bool {
    let total = board.kind_total(kind);
    if total == 0 {
        return true;
    }
    let in_source = board.count_in(kind, Container::Source);
    // nothing on any plate yet: not started
    if in_source == total {
        return false;
    }
    let counts = board.plate_counts(kind);
    if counts.iter().any(|&c| c != counts[0]) {
        debug!("unequal {:?} counts {:?}", kind, counts);
        return false;
    }
    match kind {
        BlockKind::Hundred | BlockKind::Ten => in_source == 0,
        BlockKind::One => in_source < board.divisor() as usize,
    }
}

/// Number of long-division rows revealed, given per-place doneness flags
/// ordered most significant place first. Revelation is strictly
/// left-to-right: a position counts only while every position before it
/// does too.
pub fn completed_step_count(done: &[bool]) -> usize {
    done.iter().take_while(|&&d| d).count()
}

/// Revealed-row count for a live board: evaluates the trailing
/// `num_digits` places of hundred/ten/one, most significant first. A
/// two-digit dividend uses tens then ones, one digit just ones.
pub fn completed_steps(board: &Board, problem: &Problem) -> usize {
    const PLACES: [BlockKind; 3] = [BlockKind::Hundred, BlockKind::Ten, BlockKind::One];
    // a zero dividend has no rows to reveal, matching compute_steps
    if problem.dividend() == 0 {
        return 0;
    }
    let n = problem.num_digits().min(PLACES.len());
    let done: Vec<bool> = PLACES[PLACES.len() - n..]
        .iter()
        .map(|&kind| place_value_complete(board, kind))
        .collect();
    completed_step_count(&done)
}

/// The overall solved predicate: every plate carries exactly the
/// quotient, the source holds exactly the remainder, and that remainder
/// is too small to share further. Deliberately independent of the
/// per-place reveal above; plates can sum correctly while splitting work
/// is still pending in the source.
pub fn fully_distributed(
    plate_values: &[u32],
    quotient: u32,
    source_value: u32,
    remainder: u32,
    divisor: u32,
) -> bool {
    !plate_values.is_empty()
        && plate_values.iter().all(|&v| v == quotient)
        && source_value == remainder
        && source_value < divisor
}

/// `fully_distributed` over a live board.
pub fn board_solved(board: &Board, problem: &Problem) -> bool {
    fully_distributed(
        &board.plate_values(),
        problem.quotient(),
        board.source_value(),
        problem.remainder(),
        problem.divisor(),
    )
}
