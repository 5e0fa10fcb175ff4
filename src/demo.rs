//! The web page decorator walkthrough.
//!
//! Builds three chains and renders each under a heading:
//!
//! 1. a bare [`BasicPage`]
//! 2. a [`BasicPage`] behind an [`AccessGate`]
//! 3. a [`Paginator`] around an [`AccessGate`] around a [`BasicPage`],
//!    listing eleven search results
//!
//! The full transcript is available through [`run`]:
//!
//! ```
//! use page_decor::{demo, VecSink};
//!
//! let sink = VecSink::new();
//! demo::run(&sink).unwrap();
//! let lines = sink.into_vec();
//!
//! assert_eq!(lines[0], "Basic Web Page:");
//! assert_eq!(lines.last().unwrap(), "Page 2: [Result 11]");
//! ```

use crate::basic::BasicPage;
use crate::gate::AccessGate;
use crate::page::Page;
use crate::paginate::Paginator;
use crate::sink::{Sink, SinkError};

/// Content of the public pages.
pub const BASIC_CONTENT: &str = "Welcome to the Basic Web Page!";
/// Content of the access-gated page.
pub const PROTECTED_CONTENT: &str = "Welcome to the Protected Web Page!";
/// Number of search results listed by the paginated page.
pub const RESULT_COUNT: usize = 11;

/// Returns the demo search results, `Result 1` through `Result 11`.
pub fn search_results() -> Vec<String> {
    (1..=RESULT_COUNT).map(|i| format!("Result {}", i)).collect()
}

/// A titled page chain.
pub struct Section {
    /// Heading written before the page.
    pub title: &'static str,
    /// Outermost page of the chain.
    pub page: Box<dyn Page>,
}

/// Builds the three demo chains in display order.
pub fn sections() -> Vec<Section> {
    vec![
        Section {
            title: "Basic Web Page:",
            page: Box::new(BasicPage::new(BASIC_CONTENT)),
        },
        Section {
            title: "Protected Web Page:",
            page: Box::new(AccessGate::new(BasicPage::new(PROTECTED_CONTENT))),
        },
        Section {
            title: "Paginated Web Page:",
            page: Box::new(Paginator::new(
                AccessGate::new(BasicPage::new(BASIC_CONTENT)),
                search_results(),
            )),
        },
    ]
}

/// Renders every demo section to `sink`, separated by blank lines.
///
/// # Errors
///
/// Returns the first `SinkError` raised by `sink`.
pub fn run(sink: &dyn Sink) -> Result<(), SinkError> {
    for (index, section) in sections().iter().enumerate() {
        if index > 0 {
            sink.write_line("")?;
        }
        tracing::info!(section = section.title, "rendering demo section");
        sink.write_line(section.title)?;
        section.page.render(sink)?;
    }
    Ok(())
}
