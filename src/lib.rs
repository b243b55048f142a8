pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileLoader, IframeRenderer};
pub use config::ServerSettings;
pub use crate::core::viewer::Viewer;
pub use domain::model::{EmbedOptions, HtmlDocument, RenderedPage};
pub use utils::error::{Result, ViewerError};
