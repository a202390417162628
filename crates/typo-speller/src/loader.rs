// Locating and reading dictionary source files

use std::path::{Path, PathBuf};

use crate::TypoError;

/// Paths of the affix file and word list of `dictionary` under `base`:
/// `<base>/<dictionary>/<dictionary>.aff` and `.dic`.
pub fn source_paths(base: &Path, dictionary: &str) -> (PathBuf, PathBuf) {
    let dir = base.join(dictionary);
    (
        dir.join(format!("{dictionary}.aff")),
        dir.join(format!("{dictionary}.dic")),
    )
}

/// Read a source file, reporting failures as errors.
pub fn read_source_strict(path: &Path) -> Result<String, TypoError> {
    std::fs::read_to_string(path).map_err(|source| TypoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a source file. A file that cannot be read is logged and treated
/// as empty, so the handle still loads (with empty tables).
pub fn read_source(path: &Path) -> String {
    read_source_strict(path).unwrap_or_else(|err| {
        log::error!("{err}");
        String::new()
    })
}

/// Asynchronous [`read_source`].
#[cfg(feature = "async")]
pub async fn read_source_async(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(source) => {
            let err = TypoError::Io {
                path: path.to_path_buf(),
                source,
            };
            log::error!("{err}");
            String::new()
        }
    }
}
