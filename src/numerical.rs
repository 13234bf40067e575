//! Composite quadrature of sin(x) over a user interval.
//!
//! Example
//! ```
//! use RustedQuad::numerical::interval::Interval;
//! use RustedQuad::numerical::partitioned_quad::approximate;
//! use RustedQuad::numerical::quadrature_rules::QuadRule;
//! let interval = Interval::new(0.0, std::f64::consts::PI).unwrap();
//! let simpson = approximate(&interval, 100, QuadRule::Simpson).unwrap();
//! assert!((simpson - 2.0).abs() < 1e-6);
//! ```
/// error taxonomy of a quadrature session
pub mod quad_errors;
/// validated interval with midpoint and length
pub mod interval;
/// midpoint rectangle rule and Simpson's rule on a single window
pub mod quadrature_rules;
/// equal-width partitioning driver summing a per-window rule
pub mod partitioned_quad;
/// partition counts, output precision, loglevel
pub mod experiment_config;
/// runs every configured experiment and formats the results
pub mod experiment_runner;
