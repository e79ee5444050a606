use chrono::Local;
use spellparity_core::engine::BatchRunner;
use spellparity_core::input::{default_words, load_words};
use spellparity_core::report::ground_truth::{base_name, write_ground_truth};
use spellparity_core::{OracleClient, ParityError};

use crate::cli::args::GenerateArgs;
use crate::console::{self, Level};
use crate::exit_codes::SUCCESS;

pub fn run(args: GenerateArgs) -> anyhow::Result<i32> {
    console::banner("COF Ground Truth Generation");
    let runner = BatchRunner::new(args.batch_size)?.with_progress(console::progress_sink());
    tracing::debug!(batch_size = runner.batch_size(), "batch runner ready");

    let config = args.oracle.to_config();
    console::emit(
        Level::Info,
        &format!("Checking oracle at {}", config.script.display()),
    );
    let mut oracle = OracleClient::from_config(config);
    oracle.check_availability()?;
    console::emit(Level::Success, "Oracle is available");

    let words = match &args.input {
        Some(path) => load_words(path)?,
        None => {
            console::emit(Level::Info, "No input file given, using the built-in sample words");
            default_words()
        }
    };
    if words.is_empty() {
        return Err(ParityError::NoWords.into());
    }
    console::emit(Level::Info, &format!("Processing {} words", words.len()));

    let run = runner.run(&mut oracle, &words);
    let base = base_name(args.input.as_deref());
    let artifacts = write_ground_truth(&run, &args.output_dir(), &base, &Local::now())?;

    console::print_ground_truth_summary(&run, &artifacts);
    Ok(SUCCESS)
}
