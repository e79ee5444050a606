use clap::{Parser, Subcommand};

pub mod common;
pub mod generate;
pub mod validate;
pub use common::*;
pub use generate::*;
pub use validate::*;

#[derive(Parser)]
#[command(
    name = "spellparity",
    version,
    about = "Oracle ground truth and compatibility scoring for spell checkers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Query the oracle for every word and save the answers as ground truth
    Generate(GenerateArgs),
    /// Score a candidate spell checker against saved ground truth
    Validate(ValidateArgs),
    /// Check that the oracle can be launched and answers
    Probe(ProbeArgs),
    Version,
}
