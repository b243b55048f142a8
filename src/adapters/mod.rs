// Adapters layer: concrete implementations of the domain ports.

pub mod file_loader;
pub mod iframe;

pub use file_loader::FileLoader;
pub use iframe::IframeRenderer;
