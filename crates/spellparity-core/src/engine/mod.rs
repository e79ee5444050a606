pub mod batch;

pub use batch::{BatchRunner, GroundTruthRun, DEFAULT_BATCH_SIZE, PROGRESS_EVERY};
