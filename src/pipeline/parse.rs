//! Digest input stage.

use crate::error::{DigestError, Result};
use crate::model::Bulletin;
use crate::parsers::parse_digest_reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and parse a digest file.
///
/// Invalid UTF-8 is replaced rather than rejected; a missing or unreadable
/// file is an error that carries the path.
pub fn read_digest(path: &Path) -> Result<Vec<Bulletin>> {
    tracing::info!("Parsing digest: {}", path.display());

    let file = File::open(path).map_err(|e| DigestError::io(path, e))?;
    let bulletins =
        parse_digest_reader(BufReader::new(file)).map_err(|e| DigestError::io(path, e))?;

    tracing::info!("Parsed {} notices", bulletins.len());
    Ok(bulletins)
}
