//! Runs the composite midpoint and Simpson rules for every configured partition count
//! and turns the results into output lines.
use crate::Utils::console_io::{LineSink, ScalarSource};
use crate::numerical::experiment_config::ExperimentConfig;
use crate::numerical::interval::Interval;
use crate::numerical::partitioned_quad::approximate;
use crate::numerical::quad_errors::QuadError;
use crate::numerical::quadrature_rules::QuadRule;
use log::{debug, info};
use std::fmt::{self, Write};
use tabled::{builder::Builder, settings::Style};

pub const LEFT_BOUND_LABEL: &str = "interval's left bound";
pub const RIGHT_BOUND_LABEL: &str = "interval's right bound";

/// Estimates of one experiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
    pub partition_count: u32,
    pub midpoint_estimate: f64,
    pub simpson_estimate: f64,
}

impl ExperimentResult {
    /// "<count> <midpoint> <simpson>" with both estimates rounded to `decimal_places`
    pub fn format_line(&self, decimal_places: usize) -> Result<String, fmt::Error> {
        let mut line = String::new();
        write!(
            line,
            "{} {:.*} {:.*}",
            self.partition_count,
            decimal_places,
            self.midpoint_estimate,
            decimal_places,
            self.simpson_estimate
        )?;
        Ok(line)
    }
}

pub struct ExperimentRunner {
    config: ExperimentConfig,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Self {
        ExperimentRunner { config }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Read the left bound, reject it early if negative, then read the right bound and
    /// validate the pair.
    pub fn read_interval<S: ScalarSource>(source: &mut S) -> Result<Interval, QuadError> {
        let left_bound = source.read_scalar(LEFT_BOUND_LABEL)?;
        Interval::check_left_bound(left_bound)?;
        let right_bound = source.read_scalar(RIGHT_BOUND_LABEL)?;
        let interval = Interval::new(left_bound, right_bound)?;
        info!("integrating sin(x) over {}", interval);
        Ok(interval)
    }

    /// One result per configured partition count, same order, duplicates computed again.
    /// Within an experiment Midpoint is evaluated before Simpson.
    pub fn run(&self, interval: &Interval) -> Result<Vec<ExperimentResult>, QuadError> {
        self.config.validate()?;
        let mut results = Vec::with_capacity(self.config.partition_counts.len());
        for (index, &partition_count) in self.config.partition_counts.iter().enumerate() {
            let experiment_error = |source: QuadError| QuadError::ExperimentError {
                index,
                source: Box::new(source),
            };
            let midpoint_estimate = approximate(interval, partition_count, QuadRule::Midpoint)
                .map_err(|e| experiment_error(e.into()))?;
            let simpson_estimate = approximate(interval, partition_count, QuadRule::Simpson)
                .map_err(|e| experiment_error(e.into()))?;
            debug!(
                "experiment #{}: n = {}, midpoint = {}, Simpson = {}",
                index, partition_count, midpoint_estimate, simpson_estimate
            );
            results.push(ExperimentResult {
                partition_count,
                midpoint_estimate,
                simpson_estimate,
            });
        }
        Ok(results)
    }

    /// All lines or none: the first formatting failure discards the whole batch
    pub fn render(&self, results: &[ExperimentResult]) -> Result<Vec<String>, QuadError> {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                result
                    .format_line(self.config.decimal_places)
                    .map_err(|_| QuadError::FormattingError { index })
            })
            .collect()
    }

    /// stops at the first line that cannot be written
    pub fn emit<W: LineSink>(lines: &[String], sink: &mut W) -> Result<(), QuadError> {
        for line in lines {
            sink.emit_line(line)?;
        }
        Ok(())
    }

    /// Whole session: read interval, compute, format everything, then print.
    pub fn execute<IO>(&self, io: &mut IO) -> Result<Vec<ExperimentResult>, QuadError>
    where
        IO: ScalarSource + LineSink,
    {
        let interval = Self::read_interval(io)?;
        let results = self.run(&interval)?;
        let lines = self.render(&results)?;
        Self::emit(&lines, io)?;
        self.log_summary(&results);
        Ok(results)
    }

    fn log_summary(&self, results: &[ExperimentResult]) {
        let precision = self.config.decimal_places;
        let mut builder = Builder::default();
        builder.push_record(["partitions", "midpoint", "Simpson", "|midpoint - Simpson|"]);
        for result in results {
            builder.push_record([
                result.partition_count.to_string(),
                format!("{:.*}", precision, result.midpoint_estimate),
                format!("{:.*}", precision, result.simpson_estimate),
                format!(
                    "{:e}",
                    (result.midpoint_estimate - result.simpson_estimate).abs()
                ),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n \n RESULTS \n \n {}", table.to_string());
    }
}
