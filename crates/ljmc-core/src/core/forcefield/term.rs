use std::ops::{Add, AddAssign};

/// Breakdown of a system energy into the directly evaluated pairwise sum and
/// the analytic tail correction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SystemEnergy {
    pub pair: f64,
    pub tail: f64,
}

impl SystemEnergy {
    pub fn new(pair: f64, tail: f64) -> Self {
        Self { pair, tail }
    }

    /// The physically reported system energy.
    #[inline]
    pub fn total(&self) -> f64 {
        self.pair + self.tail
    }
}

impl Add for SystemEnergy {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            pair: self.pair + rhs.pair,
            tail: self.tail + rhs.tail,
        }
    }
}

impl AddAssign for SystemEnergy {
    fn add_assign(&mut self, rhs: Self) {
        self.pair += rhs.pair;
        self.tail += rhs.tail;
    }
}
