use base64::{Engine, engine::general_purpose};

use crate::error::Result;

/// Decodes padded standard Base64 and reads the bytes as UTF-8.
pub fn base64_decode(payload: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD.decode(payload)?;
    let text = String::from_utf8(bytes)?;
    tracing::trace!(decoded = %text, "base64 decoded");
    Ok(text)
}

pub fn base64_encode(bytes: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(bytes)
}
