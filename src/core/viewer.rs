use crate::core::{DocumentSource, EmbedOptions, Renderer};
use crate::utils::error::Result;

/// Loads a document and hands it to a renderer, in that order.
pub struct Viewer<S: DocumentSource, R: Renderer> {
    source: S,
    renderer: R,
    options: EmbedOptions,
}

impl<S: DocumentSource, R: Renderer> Viewer<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            options: EmbedOptions::default(),
        }
    }

    pub fn options(&self) -> &EmbedOptions {
        &self.options
    }

    /// A load failure is returned as-is and the renderer is never called.
    pub fn run(&self) -> Result<R::Output> {
        tracing::info!("📄 Loading HTML document...");
        let document = self.source.load()?;
        tracing::info!(
            "Loaded {} ({} bytes)",
            document.path.display(),
            document.content.len()
        );

        tracing::info!(
            "🖼️  Rendering with height={}px, scrolling={}",
            self.options.height,
            self.options.scrolling
        );
        self.renderer.render(&document.content, &self.options)
    }
}
