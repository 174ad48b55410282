use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::Path,
};

use crate::error::{Error, Result};

/// Opens `path` for line reading. The path must name an existing regular file.
pub fn data_source(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(Error::Resource {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a readable file"),
        });
    }

    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Resource {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads `input` as a file when it names one, otherwise hands the literal
/// text back.
pub fn input_source(input: &str) -> io::Result<Vec<u8>> {
    let path = Path::new(input);

    if path.is_file() {
        fs::read(path)
    } else {
        Ok(input.as_bytes().to_vec())
    }
}
