pub mod viewer;

pub use crate::domain::model::{EmbedOptions, HtmlDocument, RenderedPage};
pub use crate::domain::ports::{DocumentSource, Renderer};
pub use crate::utils::error::Result;
