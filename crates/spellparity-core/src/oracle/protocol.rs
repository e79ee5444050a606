//! Line protocol spoken by the oracle process.
//!
//! Request: `s <word>` then `q`, one per line. The word is sent verbatim.
//! Response: the first line that is `ok`, `no`, or `no<TAB>a, b, c` decides the
//! answer; anything else is not an answer.

use super::OracleOutcome;

pub const SUGGEST_COMMAND: &str = "s";
pub const QUIT_COMMAND: &str = "q";

pub fn encode_request(word: &str) -> String {
    format!("{SUGGEST_COMMAND} {word}\n{QUIT_COMMAND}\n")
}

/// Interpret oracle stdout. Returns `None` when no line matches the protocol.
pub fn parse_response(stdout: &str) -> Option<OracleOutcome> {
    for line in stdout.lines() {
        let line = line.trim();
        if line == "ok" {
            return Some(OracleOutcome::Correct);
        }
        if !line.starts_with("no") {
            continue;
        }
        if let Some((_, tail)) = line.split_once('\t') {
            return Some(OracleOutcome::Incorrect {
                suggestions: split_suggestions(tail),
            });
        }
        if line == "no" {
            return Some(OracleOutcome::Incorrect {
                suggestions: Vec::new(),
            });
        }
    }
    None
}

fn split_suggestions(tail: &str) -> Vec<String> {
    tail.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
