use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_HTML_PATH: &str = "index.html";
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_SCROLLING: bool = true;

const MAX_HEIGHT: u32 = 10_000;

/// Text of an HTML file, exactly as decoded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub path: PathBuf,
    pub content: String,
}

/// How the embedded viewer is sized inside the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmbedOptions {
    /// Viewport height in pixels.
    pub height: u32,
    pub scrolling: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            scrolling: DEFAULT_SCROLLING,
        }
    }
}

impl Validate for EmbedOptions {
    fn validate(&self) -> Result<()> {
        validate_range("embed.height", self.height, 1, MAX_HEIGHT)
    }
}

/// A host page with the document embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub markup: String,
    pub options: EmbedOptions,
}
