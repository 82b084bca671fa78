//! Data module - embedded score loading and series extraction

mod loader;
mod processor;

pub use loader::{
    ArchitectureDataset, ArchitectureRecord, DataError, EMBEDDED_DATA, MAX_SCORE, MIN_SCORE,
};
pub use processor::{DataProcessor, ScoreDimension, SeriesTable};
