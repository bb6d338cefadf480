use crate::core::data::iteration_cap::IterationCapError;
use crate::core::data::logical_region::LogicalRegionError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum iteration cap {min_iterations} is below the smallest palette size {minimum}")]
    PaletteTooSmall { min_iterations: u32, minimum: usize },
    #[error("iteration increment must be greater than zero")]
    ZeroIncrement,
    #[error("invalid iteration cap: {0}")]
    IterationCap(#[from] IterationCapError),
    #[error("invalid initial region: {0}")]
    InitialRegion(#[from] LogicalRegionError),
}
