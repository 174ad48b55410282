use crate::error::{Error, Result};

/// Padding signature of a Base64 string whose input length leaves two
/// padding characters.
pub const DEFAULT_MARKER: &str = "==";

/// Every line containing `marker`, in file order.
pub fn find_payload_lines<'a, S: AsRef<str>>(lines: &'a [S], marker: &str) -> Vec<&'a str> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| line.contains(marker))
        .collect()
}

/// The first line containing `marker`. Finding none is fatal.
pub fn first_payload<'a, S: AsRef<str>>(lines: &'a [S], marker: &str) -> Result<&'a str> {
    let candidates = find_payload_lines(lines, marker);

    if candidates.len() > 1 {
        tracing::warn!(
            count = candidates.len(),
            "several payload lines found, using the first"
        );
    }

    let payload = candidates.first().copied().ok_or(Error::PayloadNotFound)?;
    tracing::trace!(payload, "located payload");
    Ok(payload)
}
