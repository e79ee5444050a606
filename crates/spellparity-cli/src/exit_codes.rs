//! Process exit codes. Argument errors are reported by clap with its own code (2).

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1; // Oracle unavailable, missing input, no overlap, unsupported checker
