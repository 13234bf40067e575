//! Single-window quadrature rules for the fixed integrand sin(x).
use crate::numerical::interval::Interval;
use strum_macros::{Display, EnumIter};

/// the integrand
pub fn target_function(x: f64) -> f64 {
    x.sin()
}

/// Closed set of per-window area estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum QuadRule {
    /// width * f(midpoint)
    Midpoint,
    /// width/6 * (f(left) + 4 f(midpoint) + f(right))
    Simpson,
}

impl QuadRule {
    /// Signed area of sin(x) over `interval`
    pub fn estimate(&self, interval: &Interval) -> f64 {
        self.estimate_for(&target_function, interval)
    }

    /// Same rule applied to an arbitrary integrand. Only the crate uses this, to check the
    /// rules and the partitioning driver against functions with known exact integrals.
    pub(crate) fn estimate_for<F>(&self, f: &F, interval: &Interval) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            QuadRule::Midpoint => midpoint_rectangle_area(f, interval),
            QuadRule::Simpson => simpsons_rule_area(f, interval),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuadRule::Midpoint => "midpoint rectangle rule: width times f at the midpoint",
            QuadRule::Simpson => {
                "Simpson's rule: width/6 times (f(left) + 4 f(midpoint) + f(right))"
            }
        }
    }

    /// highest polynomial degree integrated without error on a single window
    pub fn exact_for_degree(&self) -> u32 {
        match self {
            QuadRule::Midpoint => 1,
            QuadRule::Simpson => 3,
        }
    }
}

fn midpoint_rectangle_area<F: Fn(f64) -> f64>(f: &F, interval: &Interval) -> f64 {
    interval.length() * f(interval.midpoint())
}

fn simpsons_rule_area<F: Fn(f64) -> f64>(f: &F, interval: &Interval) -> f64 {
    interval.length() / 6.0
        * (f(interval.left_bound()) + 4.0 * f(interval.midpoint()) + f(interval.right_bound()))
}
