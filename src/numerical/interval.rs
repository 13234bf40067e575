use crate::numerical::quad_errors::ValidationError;
use std::f64::consts::PI;
use std::fmt;

/// Closed numeric range [left_bound, right_bound] on which sin(x) is integrated.
/// Instances built by `Interval::new` satisfy 0 <= left <= pi and left < right;
/// sub-intervals produced while partitioning are derived from a valid one and are not re-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left_bound: f64,
    right_bound: f64,
}

impl Interval {
    /// Validate bounds and build the interval.
    ///
    /// Checks run in a fixed order and the first failing one is returned:
    /// 1) left < 0 -> NegativeLeftBound
    /// 2) left > pi -> RightBoundTooLarge (the left bound is the one compared with pi)
    /// 3) left >= right -> DegenerateOrReversed
    pub fn new(left_bound: f64, right_bound: f64) -> Result<Interval, ValidationError> {
        Self::check_left_bound(left_bound)?;
        if left_bound > PI {
            return Err(ValidationError::RightBoundTooLarge(left_bound));
        }
        if left_bound >= right_bound {
            return Err(ValidationError::DegenerateOrReversed {
                left: left_bound,
                right: right_bound,
            });
        }
        Ok(Interval {
            left_bound,
            right_bound,
        })
    }

    /// First check of `new`, exposed so a reader can reject a bad left bound
    /// before asking for the right one.
    pub fn check_left_bound(left_bound: f64) -> Result<(), ValidationError> {
        if left_bound < 0.0 {
            return Err(ValidationError::NegativeLeftBound(left_bound));
        }
        Ok(())
    }

    /// No validation: used for the moving window of the partitioned approximator
    pub(crate) fn from_bounds(left_bound: f64, right_bound: f64) -> Interval {
        Interval {
            left_bound,
            right_bound,
        }
    }

    pub fn left_bound(&self) -> f64 {
        self.left_bound
    }

    pub fn right_bound(&self) -> f64 {
        self.right_bound
    }

    pub fn midpoint(&self) -> f64 {
        (self.left_bound + self.right_bound) / 2.0
    }

    pub fn length(&self) -> f64 {
        self.right_bound - self.left_bound
    }

    /// both bounds moved by `step`; self stays untouched
    pub(crate) fn shifted(&self, step: f64) -> Interval {
        Interval {
            left_bound: self.left_bound + step,
            right_bound: self.right_bound + step,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.left_bound, self.right_bound)
    }
}
