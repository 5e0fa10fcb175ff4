//! Composable web page rendering with decorators.
//!
//! A page is anything that can write itself to a line-oriented [`Sink`].
//! Decorators wrap a page, own it exclusively, and add behavior around its
//! output:
//!
//! - [`BasicPage`]: leaf page with fixed content
//! - [`AccessGate`]: shows its page only when an [`AccessPolicy`] allows it
//! - [`Paginator`]: shows its page, then a list of results in pages of ten
//!
//! Wrapping order is significant: a paginator around a gate is not the same
//! page as a gate around a paginator.
//!
//! # Examples
//!
//! ```
//! use page_decor::{AccessGate, BasicPage, Page, Paginator, VecSink};
//!
//! let results = (1..=11).map(|i| format!("Result {}", i)).collect();
//! let page = Paginator::new(AccessGate::new(BasicPage::new("Search")), results);
//!
//! let sink = VecSink::new();
//! page.render(&sink).unwrap();
//!
//! let lines = sink.into_vec();
//! assert_eq!(lines[0], "Basic Web Page: Search");
//! assert_eq!(lines[1], "Displaying 10 results per page:");
//! assert_eq!(lines[3], "Page 2: [Result 11]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod basic;
pub mod demo;
mod error;
mod gate;
mod page;
mod paginate;
mod policy;
mod sink;

pub use basic::BasicPage;
pub use error::Error;
pub use gate::{ACCESS_DENIED, AccessGate};
pub use page::{Page, PageExt};
pub use paginate::{DEFAULT_PAGE_SIZE, PageSize, Paginator, windows};
pub use policy::{AccessPolicy, AllowAll, DenyAll};
pub use sink::{Sink, SinkError, SinkErrorKind, StdoutSink, VecSink};
