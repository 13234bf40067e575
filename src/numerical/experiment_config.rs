use crate::numerical::quad_errors::{QuadError, ValidationError};

/// partition counts the program evaluates, in output order
pub const DEFAULT_PARTITION_COUNTS: [u32; 6] = [6, 10, 20, 100, 500, 1000];
/// digits after the decimal point in every printed estimate
pub const DEFAULT_DECIMAL_PLACES: usize = 5;

/// Immutable settings handed to the experiment runner
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub partition_counts: Vec<u32>,
    pub decimal_places: usize,
    /// debug, info, warn, error, off/none
    pub loglevel: Option<String>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            partition_counts: DEFAULT_PARTITION_COUNTS.to_vec(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            loglevel: Some("info".to_string()),
        }
    }
}

impl ExperimentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition_counts(mut self, partition_counts: Vec<u32>) -> Self {
        self.partition_counts = partition_counts;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_loglevel(mut self, loglevel: Option<String>) -> Self {
        self.loglevel = loglevel;
        self
    }

    /// A zero partition count is reported as failure of the experiment that holds it,
    /// before anything is computed.
    pub fn validate(&self) -> Result<(), QuadError> {
        if let Some(index) = self.partition_counts.iter().position(|&n| n == 0) {
            return Err(QuadError::ExperimentError {
                index,
                source: Box::new(ValidationError::ZeroPartitions.into()),
            });
        }
        Ok(())
    }
}
