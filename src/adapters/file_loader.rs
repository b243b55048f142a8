use crate::domain::model::{HtmlDocument, DEFAULT_HTML_PATH};
use crate::domain::ports::DocumentSource;
use crate::utils::error::{Result, ViewerError};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reads an HTML file relative to the working directory.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new(DEFAULT_HTML_PATH)
    }
}

impl DocumentSource for FileLoader {
    fn load(&self) -> Result<HtmlDocument> {
        let access_error = |source: std::io::Error| ViewerError::FileAccess {
            path: self.path.clone(),
            source,
        };

        // The handle is dropped at the end of this block on both paths.
        let bytes = {
            let mut file = File::open(&self.path).map_err(access_error)?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).map_err(access_error)?;
            bytes
        };

        let content = String::from_utf8(bytes).map_err(|source| ViewerError::Decode {
            path: self.path.clone(),
            source,
        })?;

        Ok(HtmlDocument {
            path: self.path.clone(),
            content,
        })
    }
}
