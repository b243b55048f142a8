use crate::domain::model::{EmbedOptions, HtmlDocument};
use crate::utils::error::Result;

/// Where the HTML document comes from.
pub trait DocumentSource {
    fn load(&self) -> Result<HtmlDocument>;
}

/// Hands document text to an embedded HTML viewer.
pub trait Renderer {
    type Output;

    fn render(&self, html: &str, options: &EmbedOptions) -> Result<Self::Output>;
}
