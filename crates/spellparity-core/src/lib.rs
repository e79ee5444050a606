pub mod candidate;
pub mod compare;
pub mod config;
pub mod engine;
pub mod errors;
pub mod input;
pub mod model;
pub mod oracle;
pub mod process;
pub mod report;
pub mod storage;

pub use compare::{ComparisonResult, Comparator};
pub use errors::ParityError;
pub use model::{Verdict, VerdictMap};
pub use oracle::{OracleClient, OracleOutcome};
