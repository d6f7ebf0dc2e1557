//! JSON-lines request loop
//!
//! Reads one request per line and writes one response per line. Runs until
//! the input closes.

use crate::game::GameService;
use crate::protocol::handle_line;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Counters for one serve run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeSummary {
    pub requests: usize,
    pub errors: usize,
}

/// Serve requests from `input` until EOF
///
/// # Errors
/// Returns an error if reading a line or writing a response fails.
pub fn run_serve(
    service: &GameService,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<ServeSummary> {
    let mut summary = ServeSummary::default();
    info!("serving JSON requests on stdin");

    for line in input.lines() {
        let line = line.context("failed to read request")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(service, line);
        summary.requests += 1;
        if response.is_error() {
            summary.errors += 1;
        }

        serde_json::to_writer(&mut output, &response).context("failed to encode response")?;
        writeln!(output).context("failed to write response")?;
        output.flush().context("failed to flush response")?;
    }

    if summary.errors > 0 {
        warn!(errors = summary.errors, "some requests failed");
    }
    info!(requests = summary.requests, "input closed");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::SessionStore;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{Catalog, WordList};
    use serde_json::Value;
    use std::io::Cursor;
    use std::sync::Arc;
    use std::time::Duration;

    fn service() -> GameService {
        let mut catalog = Catalog::new();
        catalog.insert(
            WordList::new(
                "test",
                "Test",
                "",
                words_from_slice(&["CRANE"]),
                words_from_slice(&["CRATE"]),
            )
            .unwrap(),
        );
        GameService::new(
            Arc::new(SessionStore::new(Duration::from_secs(60))),
            Arc::new(catalog),
            &GameConfig::default(),
        )
    }

    fn replies(output: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(output)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn one_reply_per_request_and_blank_lines_skipped() {
        let service = service();
        let input = "\n{\"op\":\"dictionaries\"}\n\n garbage \n";
        let mut output = Vec::new();

        let summary = run_serve(&service, Cursor::new(input), &mut output).unwrap();

        assert_eq!(summary, ServeSummary { requests: 2, errors: 1 });
        let replies = replies(&output);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["dictionaries"][0]["id"], "test");
        assert!(replies[1]["error"].is_string());
    }

    #[test]
    fn plays_a_game_across_lines() {
        let service = service();

        let mut output = Vec::new();
        run_serve(
            &service,
            Cursor::new("{\"op\":\"start\",\"dictName\":\"test\"}\n"),
            &mut output,
        )
        .unwrap();
        let id = replies(&output)[0]["id"].as_str().unwrap().to_string();

        let script = format!(
            "{{\"op\":\"submit\",\"id\":\"{id}\",\"guess\":\"crate\"}}\n\
             {{\"op\":\"submit\",\"id\":\"{id}\",\"guess\":\"crane\"}}\n"
        );
        let mut output = Vec::new();
        let summary = run_serve(&service, Cursor::new(script), &mut output).unwrap();

        assert_eq!(summary.errors, 0);
        let replies = replies(&output);
        assert_eq!(replies[0]["result"], "22202");
        assert_eq!(replies[1]["won"], true);
    }
}
