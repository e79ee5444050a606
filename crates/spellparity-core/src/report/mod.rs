pub mod ground_truth;
pub mod json;
pub mod markdown;
pub mod progress;

/// Human-readable time used inside report bodies.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
