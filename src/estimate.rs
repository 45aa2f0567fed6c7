use std::cmp::Ordering;

use crate::problem::Problem;

/// How `estimate * divisor` relates to the dividend; the comparison the
/// student is coached to make.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Hint {
    ProductLow,
    ProductExact,
    ProductHigh,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EstimateReview {
    pub estimate: u32,
    /// estimate * divisor.
    pub product: u32,
    /// Close enough by the grading rule: within 2 for one-digit
    /// quotients, same tens bucket otherwise.
    pub on_target: bool,
    pub hint: Hint,
}

/// Grades an estimated quotient the way the tutoring flow does: one-digit
/// answers allow a slack of 2, larger answers only need the right tens.
pub fn review_estimate(problem: &Problem, estimate: u32) -> EstimateReview {
    let quotient = problem.quotient();
    let on_target = if quotient < 10 {
        estimate.abs_diff(quotient) <= 2
    } else {
        estimate / 10 == quotient / 10
    };
    let product = estimate * problem.divisor();
    let hint = match product.cmp(&problem.dividend()) {
        Ordering::Less => Hint::ProductLow,
        Ordering::Equal => Hint::ProductExact,
        Ordering::Greater => Hint::ProductHigh,
    };
    EstimateReview {
        estimate,
        product,
        on_target,
        hint,
    }
}

/// Seam for an external feedback source (an LLM tutor, canned text).
/// The evaluator core never depends on an implementation; None means no
/// feedback is available and the exercise continues without it.
pub trait FeedbackProvider {
    fn feedback(&self, problem: &Problem, review: &EstimateReview) -> Option<String>;
}
