use spellparity_core::OracleClient;

use crate::cli::args::ProbeArgs;
use crate::console::{self, Level};
use crate::exit_codes::{FAILURE, SUCCESS};

pub fn run(args: ProbeArgs) -> anyhow::Result<i32> {
    let mut oracle = OracleClient::from_config(args.oracle.to_config());
    match oracle.check_availability() {
        Ok(()) => {
            let script = &oracle.transport().config().script;
            console::emit(
                Level::Success,
                &format!("Oracle is available ({})", script.display()),
            );
            Ok(SUCCESS)
        }
        Err(e) => {
            console::emit(Level::Error, &e.to_string());
            Ok(FAILURE)
        }
    }
}
