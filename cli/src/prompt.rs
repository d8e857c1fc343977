use arcmarks::error::{ArcmarksError, Result};
use arcmarks::operations;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn editor() -> Result<DefaultEditor> {
    DefaultEditor::new().map_err(|e| ArcmarksError::Other(e.to_string()))
}

/// Ask for a line of text, pre-filled with `initial`.
///
/// Returns `None` when the user cancels (Ctrl-C / Ctrl-D) or enters nothing.
pub fn input(prompt: &str, initial: &str) -> Result<Option<String>> {
    let mut rl = editor()?;
    match rl.readline_with_initial(prompt, (initial, "")) {
        Ok(line) => {
            let line = line.trim();
            if line.is_empty() {
                Ok(None)
            } else {
                Ok(Some(line.to_string()))
            }
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(ArcmarksError::Other(err.to_string())),
    }
}

/// Ask for a URL until a valid one is entered or the user cancels
pub fn input_url(prompt: &str, initial: &str) -> Result<Option<String>> {
    let mut current = initial.to_string();
    loop {
        let Some(url) = input(prompt, &current)? else {
            return Ok(None);
        };
        match operations::validate_url(&url) {
            Ok(()) => return Ok(Some(url)),
            Err(e) => {
                eprintln!("{}. Enter a valid URL.", e);
                current = url;
            }
        }
    }
}

/// Parse a multi-selection over `len` numbered options.
///
/// Supports:
/// - "*" for everything
/// - Single numbers: "5"
/// - Ranges: "1-5"
/// - Multiple: "1 3 5-7" or "1,3"
///
/// Numbers are 1-based; the result holds 0-based positions in ascending
/// order without duplicates. Out-of-range or malformed tokens are skipped.
pub fn parse_selection(input: &str, len: usize) -> Vec<usize> {
    let mut picked = Vec::new();

    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if token == "*" {
            return (0..len).collect();
        }

        let (start, end) = match token.split_once('-') {
            Some((a, b)) => match (a.parse::<usize>(), b.parse::<usize>()) {
                (Ok(a), Ok(b)) => (a, b),
                _ => {
                    eprintln!("Warning: Invalid range format: {}", token);
                    continue;
                }
            },
            None => match token.parse::<usize>() {
                Ok(n) => (n, n),
                Err(_) => {
                    eprintln!("Warning: Invalid number: {}", token);
                    continue;
                }
            },
        };

        // Clamp before walking so huge bounds stay cheap
        for n in start.max(1)..=end.min(len) {
            picked.push(n - 1);
        }
    }

    picked.sort_unstable();
    picked.dedup();
    picked
}
