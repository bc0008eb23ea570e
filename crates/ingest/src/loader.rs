use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn, Level};

use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::types::RawText;

/// Reads the whole file at `path` and decodes it with `cfg.encoding`.
///
/// The file handle is owned by the inner call and closed when it returns,
/// whether the read succeeded or not.
pub fn load_text(path: impl AsRef<Path>, cfg: &IngestConfig) -> Result<RawText, IngestError> {
    let start = Instant::now();
    let path = path.as_ref();

    let span = tracing::span!(
        Level::INFO,
        "ingest.load",
        path = %path.display(),
        encoding = %cfg.encoding
    );
    let _guard = span.enter();

    match load_inner(path, cfg) {
        Ok(raw) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                byte_len = raw.byte_len(),
                char_len = raw.as_str().chars().count(),
                elapsed_micros,
                "load_success"
            );
            Ok(raw)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "load_failure");
            Err(err)
        }
    }
}

fn load_inner(path: &Path, cfg: &IngestConfig) -> Result<RawText, IngestError> {
    let mut file = File::open(path).map_err(|err| IngestError::io(path, &err))?;

    // Reject oversized files before pulling them into memory.
    if let Some(limit) = cfg.max_input_bytes {
        let size = file
            .metadata()
            .map_err(|err| IngestError::io(path, &err))?
            .len();
        if size > limit as u64 {
            return Err(IngestError::InputTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|err| IngestError::io(path, &err))?;

    let byte_len = bytes.len();
    let text = cfg
        .encoding
        .decode(bytes)
        .map_err(|failure| IngestError::InvalidEncoding {
            path: path.to_path_buf(),
            encoding: cfg.encoding,
            offset: failure.offset,
        })?;

    Ok(RawText::new(path.to_path_buf(), cfg.encoding, byte_len, text))
}
