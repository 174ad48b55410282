//! Recover the easter egg hidden in a text file.
//!
//! One line of the file carries padded Base64 whose decoded text is ROT13
//! ciphertext. [`reveal`] finds that line, undoes both layers and returns the
//! plaintext. [`conceal`] goes the other way.

pub mod decode;
pub mod error;
pub mod lines;
pub mod locate;
pub mod rot13;
pub mod util;

use std::{io::BufRead, path::Path};

pub use error::{Error, Result};
pub use rot13::Rot13Codec;

#[derive(Debug, Clone)]
pub struct RevealOptions {
    /// Substring that marks the payload line.
    pub marker: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            marker: locate::DEFAULT_MARKER.to_owned(),
        }
    }
}

pub fn reveal<R: BufRead>(reader: R, options: &RevealOptions) -> Result<String> {
    let raw = lines::load_lines(reader)?;
    let normalized = lines::normalize(&raw);
    let payload = locate::first_payload(&normalized, &options.marker)?;
    let decoded = decode::base64_decode(payload)?;
    Ok(Rot13Codec.decode(decoded))
}

pub fn reveal_file(path: impl AsRef<Path>, options: &RevealOptions) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "revealing");
    reveal(util::data_source(path)?, options)
}

/// ROT13 then Base64, producing a payload line [`reveal`] can read back
/// when it ends in the marker.
pub fn conceal(plaintext: &str) -> String {
    decode::base64_encode(Rot13Codec.encode(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const EGG_LINE: &str =
        "L2d1ci9xcmlmL25lci9mYi9zaGFhbC9ndXJsL3V2cS9uYS9ybmZncmUvcnR0L2p2Z3V2YS9ndXIvcm5mZ3JlL3J0dA==";
    const EGG: &str = "/the/devs/are/so/funny/they/hid/an/easter/egg/within/the/easter/egg";

    fn reveal_str(content: &str) -> Result<String> {
        reveal(Cursor::new(content), &RevealOptions::default())
    }

    #[test]
    fn test_reveal_without_payload() {
        assert!(matches!(
            reveal_str("hello\nworld\n"),
            Err(Error::PayloadNotFound)
        ));
    }

    #[test]
    fn test_reveal_egg() {
        let content = format!("intro\n{EGG_LINE}\noutro\n");
        assert_eq!(reveal_str(&content).unwrap(), EGG);
    }

    #[test]
    fn test_reveal_skips_plain_lines() {
        assert_eq!(reveal_str("not-base64-just-text\nQQ==\n").unwrap(), "N");
    }

    #[test]
    fn test_reveal_malformed_payload() {
        assert!(matches!(reveal_str("abc==\n"), Err(Error::Base64(_))));
    }

    #[test]
    fn test_reveal_trims_surrounding_whitespace() {
        let content = format!("\"Congratulations, you found the easter egg!\"\r\n  {EGG_LINE}\t\r\nGood luck, egg hunter!");
        assert_eq!(reveal_str(&content).unwrap(), EGG);
    }

    #[test]
    fn test_reveal_with_custom_marker() {
        let options = RevealOptions {
            marker: "=".to_owned(),
        };
        // "QUI=" is "AB", rotated to "NO"
        assert_eq!(reveal(Cursor::new("x\nQUI=\n"), &options).unwrap(), "NO");
    }

    #[test]
    fn test_reveal_file() {
        let mut tmp = NamedTempFile::new().expect("temp file failed");
        writeln!(tmp, "intro").unwrap();
        writeln!(tmp, "{EGG_LINE}").unwrap();
        writeln!(tmp, "outro").unwrap();

        assert_eq!(
            reveal_file(tmp.path(), &RevealOptions::default()).unwrap(),
            EGG
        );
    }

    #[test]
    fn test_reveal_missing_file() {
        assert!(matches!(
            reveal_file("NotARealFile.txt", &RevealOptions::default()),
            Err(Error::Resource { .. })
        ));
    }

    #[test]
    fn test_conceal_produces_egg_line() {
        assert_eq!(conceal(EGG), EGG_LINE);
        assert_eq!(conceal("A"), "Tg==");
    }
}
