//! Reading surface forms from arguments, files or stdin

use crate::error::{CliError, CliResult};
use shabda_api::Input;
use std::path::Path;

/// Forms given on the command line, or one per line from `input`
///
/// An input path of `-` reads stdin. Blank lines and lines starting with
/// `#` are skipped.
pub fn read_forms(words: &[String], input: Option<&Path>) -> CliResult<Vec<String>> {
    let Some(path) = input else {
        if words.is_empty() {
            return Err(CliError::NoInput.into());
        }
        return Ok(words.to_vec());
    };

    let text = read_lines_source(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Whole text of a file, or of stdin for `-`
pub fn read_lines_source(path: &Path) -> CliResult<String> {
    let input = if path == Path::new("-") {
        Input::Stdin
    } else {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        Input::from_file(path)
    };
    log::debug!("Reading forms from {}", path.display());
    Ok(input.read_text()?)
}
