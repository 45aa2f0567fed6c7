/// One row of the long-division grid: the number brought down, the
/// quotient digit chosen for it, and what is left over for the next
/// position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DivisionStep {
    /// 0-based position of the dividend digit, most significant first.
    pub position: usize,
    /// The dividend digit at this position.
    pub digit: u32,
    /// Previous remainder times ten, plus this digit.
    pub bring_down: u32,
    pub q_digit: u32,
    /// q_digit * divisor, the amount subtracted at this row.
    pub product: u32,
    /// bring_down - product; carried into the next step.
    pub remainder: u32,
}

/// Simulates schoolbook long division, one step per dividend digit, most
/// significant digit first.
///
/// A zero divisor or zero dividend yields no steps; callers validate both
/// upstream, this is only a defensive no-op. q_digit is not clamped to a
/// single digit: with a single-digit divisor every bring-down stays below
/// 10 * divisor, anything wider is the caller's precondition to keep.
pub fn compute_steps(dividend: u32, divisor: u32) -> Vec<DivisionStep> {
    if divisor == 0 || dividend == 0 {
        return vec![];
    }
    let mut remainder = 0;
    digits(dividend)
        .into_iter()
        .enumerate()
        .map(|(position, digit)| {
            let bring_down = remainder * 10 + digit;
            let q_digit = bring_down / divisor;
            let product = q_digit * divisor;
            remainder = bring_down - product;
            DivisionStep {
                position,
                digit,
                bring_down,
                q_digit,
                product,
                remainder,
            }
        })
        .collect()
}

/// Decimal digits of n, most significant first.
fn digits(mut n: u32) -> Vec<u32> {
    let mut ds = vec![];
    while n > 0 {
        ds.push(n % 10);
        n /= 10;
    }
    ds.reverse();
    ds
}
