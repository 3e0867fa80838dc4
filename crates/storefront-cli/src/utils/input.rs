//! User input utilities for interactive command-line prompts.
//!
//! Each prompt has a reader-generic variant so tests can feed input
//! without a terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

/// Read one line from `reader`, trimmed. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok((read > 0).then(|| input.trim().to_string()))
}

/// Like [`read_line`], but end of input is an error.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<String> {
    match read_line(reader)? {
        Some(line) => Ok(line),
        None => bail!("Input closed"),
    }
}

/// Show `prompt` and read a line from stdin. `None` at end of input.
pub fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;
    read_line(&mut io::stdin().lock())
}

/// Prompts the user for a string input.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// Prompts for a value, returning `default` when the user just presses Enter.
pub fn prompt_string_with_default(prompt: &str, default: Option<&str>) -> Result<String> {
    let input = match default {
        Some(default_val) => prompt_string(&format!("{prompt} [{default_val}]"))?,
        None => prompt_string(prompt)?,
    };
    Ok(parse_with_default(input, default))
}

fn parse_with_default(input: String, default: Option<&str>) -> String {
    match default {
        Some(default_val) if input.is_empty() => default_val.to_string(),
        _ => input,
    }
}

/// Interpret a yes/no answer. `None` means the answer was not understood.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}
