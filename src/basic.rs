use crate::page::Page;
use crate::sink::{Sink, SinkError};

/// The leaf page: a fixed text payload.
///
/// Renders as a single line, `Basic Web Page: <content>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPage {
    content: String,
}

impl BasicPage {
    /// Creates a page with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the page content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Page for BasicPage {
    fn render(&self, sink: &dyn Sink) -> Result<(), SinkError> {
        tracing::debug!(page = "basic", "rendering page");
        sink.write_line(&format!("Basic Web Page: {}", self.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VecSink;

    #[test]
    fn renders_single_prefixed_line() {
        let sink = VecSink::new();
        BasicPage::new("X").render(&sink).unwrap();
        assert_eq!(sink.into_vec(), vec!["Basic Web Page: X"]);
    }

    #[test]
    fn empty_content_keeps_prefix() {
        let sink = VecSink::new();
        BasicPage::new("").render(&sink).unwrap();
        assert_eq!(sink.into_vec(), vec!["Basic Web Page: "]);
    }

    #[test]
    fn content_accessor() {
        let page = BasicPage::new(String::from("Welcome"));
        assert_eq!(page.content(), "Welcome");
    }
}
