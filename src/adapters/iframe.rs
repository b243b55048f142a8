use crate::domain::model::{EmbedOptions, RenderedPage};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const DEFAULT_TITLE: &str = "HTML Viewer";

/// Embeds a document in a host page through `<iframe srcdoc>`.
///
/// The document text goes into the `srcdoc` attribute as-is (attribute
/// escaped only), so the browser sees exactly what was loaded.
#[derive(Debug, Clone)]
pub struct IframeRenderer {
    title: String,
}

impl IframeRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for IframeRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl Renderer for IframeRenderer {
    type Output = RenderedPage;

    fn render(&self, html: &str, options: &EmbedOptions) -> Result<RenderedPage> {
        options.validate()?;

        let (scrolling, overflow) = if options.scrolling {
            ("yes", "auto")
        } else {
            ("no", "hidden")
        };
        let title = html_escape::encode_text(&self.title);
        let title_attr = html_escape::encode_double_quoted_attribute(&self.title);
        let srcdoc = html_escape::encode_double_quoted_attribute(html);

        let markup = format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{title}</title>\n",
                "<style>body {{ margin: 0; padding: 1rem; }} ",
                "iframe {{ display: block; border: none; width: 100%; }}</style>\n",
                "</head>\n",
                "<body>\n",
                "<iframe title=\"{title_attr}\" srcdoc=\"{srcdoc}\" height=\"{height}\" ",
                "scrolling=\"{scrolling}\" style=\"height: {height}px; overflow: {overflow};\">",
                "</iframe>\n",
                "</body>\n",
                "</html>\n",
            ),
            title = title,
            title_attr = title_attr,
            srcdoc = srcdoc,
            height = options.height,
            scrolling = scrolling,
            overflow = overflow,
        );

        tracing::debug!(
            "Rendered {} bytes of HTML into a {}px viewer (scrolling: {})",
            html.len(),
            options.height,
            options.scrolling
        );

        Ok(RenderedPage {
            markup,
            options: *options,
        })
    }
}
