//! Canonicalizers: transformations applied to the output of a program before comparing it with
//! the expected one.

use std::path::Path;

use anyhow::{anyhow, Context, Error};
use autograde_exec::fs::remove_file_if_present;

/// Split the text into lines, without the terminators. `\n`, `\r\n` and a lone `\r` all end a
/// line, and a terminator at the end of the text does not start an empty line.
///
/// ```
/// use autograde_tools::canonical::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
/// assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Sort the lines of the text, for outputs whose order is not relevant. The result has no
/// trailing newline.
///
/// ```
/// use autograde_tools::canonical::sort_lines;
///
/// assert_eq!(sort_lines("b\nc\na\n"), "a\nb\nc");
/// ```
pub fn sort_lines(text: &str) -> String {
    let mut lines = split_lines(text);
    lines.sort_unstable();
    lines.join("\n")
}

/// Sort the lines of the text by their integer value. Every line must contain an integer,
/// optionally surrounded by whitespace; the numbers are written back without it.
///
/// ```
/// use autograde_tools::canonical::sort_num_lines;
///
/// assert_eq!(sort_num_lines("10\n9\n1\n").unwrap(), "1\n9\n10");
/// assert!(sort_num_lines("10\nten\n").is_err());
/// ```
pub fn sort_num_lines(text: &str) -> Result<String, Error> {
    let mut numbers = split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            line.trim()
                .parse::<i128>()
                .map_err(|e| anyhow!("Line {} is not an integer: {:?} ({})", index + 1, line, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    numbers.sort_unstable();
    Ok(numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Apply `canonicalizer` to the content of `input`, writing the result to `output`.
///
/// When the input cannot be read or canonicalized any previous `output` is removed, so no stale
/// canonical output is left around.
pub fn canonicalize_file<F>(canonicalizer: F, input: &Path, output: &Path) -> Result<(), Error>
where
    F: FnOnce(&str) -> Result<String, Error>,
{
    let canonical = std::fs::read_to_string(input)
        .map_err(Error::from)
        .and_then(|content| canonicalizer(&content));
    let canonical = match canonical {
        Ok(canonical) => canonical,
        Err(e) => {
            remove_file_if_present(output)
                .with_context(|| format!("Failed to remove {}", output.display()))?;
            return Err(e).with_context(|| format!("Failed to canonicalize {}", input.display()));
        }
    };
    std::fs::write(output, canonical)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
