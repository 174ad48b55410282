use std::io::BufRead;

use crate::error::Result;

/// Reads every line from `reader`, keeping each line's terminator.
///
/// The reader is consumed, so a file handle behind it is closed as soon as
/// loading finishes.
pub fn load_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }

    tracing::debug!(count = lines.len(), "loaded lines");
    Ok(lines)
}

/// Trims surrounding whitespace from each line. Length and order are kept.
pub fn normalize(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| line.trim().to_owned()).collect()
}
