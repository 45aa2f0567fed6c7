use anyhow::{ensure, Result};

/// A validated division problem. The divisor is checked once here so the
/// evaluators downstream can stay pure predicates that never fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Problem {
    dividend: u32,
    divisor: u32,
}

impl Problem {
    pub fn new(dividend: u32, divisor: u32) -> Result<Self> {
        ensure!(divisor > 0, "divisor must be positive");
        Ok(Problem { dividend, divisor })
    }

    pub fn dividend(&self) -> u32 {
        self.dividend
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    pub fn quotient(&self) -> u32 {
        self.dividend / self.divisor
    }

    pub fn remainder(&self) -> u32 {
        self.dividend % self.divisor
    }

    /// Decimal digit count of the dividend; 0 still occupies one digit.
    pub fn num_digits(&self) -> usize {
        num_digits(self.dividend)
    }
}

pub(crate) fn num_digits(n: u32) -> usize {
    let mut len = 1;
    let mut n = n / 10;
    while n > 0 {
        len += 1;
        n /= 10;
    }
    len
}
