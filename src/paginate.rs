//! Pagination decorator.
//!
//! A [`Paginator`] renders its wrapped page first, then a header line and one
//! line per window of results:
//!
//! ```text
//! Basic Web Page: ...
//! Displaying 10 results per page:
//! Page 1: [Result 1, ..., Result 10]
//! Page 2: [Result 11]
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::Error;
use crate::page::Page;
use crate::sink::{Sink, SinkError};

/// Results per page when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of results shown per page. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validates `size` as a page size.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use page_decor::PageSize;
    ///
    /// assert_eq!(PageSize::new(25).unwrap().get(), 25);
    /// assert!(PageSize::new(0).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, Error> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| Error::invalid_argument("page size must be greater than zero"))
    }

    /// Returns the size as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Splits `items` into consecutive windows of `size`, numbered from 1.
///
/// Window `k` covers `[(k-1)*size, min(k*size, len))`; only the last window
/// may be short. An empty slice yields no windows.
///
/// # Examples
///
/// ```
/// use page_decor::{windows, PageSize};
///
/// let items = [1, 2, 3, 4, 5];
/// let pages: Vec<_> = windows(&items, PageSize::new(2).unwrap()).collect();
/// assert_eq!(pages, vec![(1, &[1, 2][..]), (2, &[3, 4][..]), (3, &[5][..])]);
/// ```
pub fn windows<T>(items: &[T], size: PageSize) -> impl Iterator<Item = (usize, &[T])> + '_ {
    items
        .chunks(size.get())
        .enumerate()
        .map(|(index, window)| (index + 1, window))
}

/// Formats a window as `[a, b, c]`.
fn format_window(window: &[String]) -> String {
    format!("[{}]", window.join(", "))
}

/// Decorator that appends a paginated list of results after its page.
///
/// The wrapped page always renders first; the results are fixed when the
/// paginator is built.
pub struct Paginator {
    page: Box<dyn Page>,
    results: Vec<String>,
    page_size: PageSize,
}

impl Paginator {
    /// Wraps `page` and shows `results` ten at a time.
    pub fn new(page: impl Page + 'static, results: Vec<String>) -> Self {
        Self::with_page_size(page, results, PageSize::default())
    }

    /// Wraps `page` and shows `results` `page_size` at a time.
    pub fn with_page_size(
        page: impl Page + 'static,
        results: Vec<String>,
        page_size: PageSize,
    ) -> Self {
        Self {
            page: Box::new(page),
            results,
            page_size,
        }
    }

    /// Returns the results shown by this paginator.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Returns the number of results per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns how many page lines a render produces.
    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.page_size.get())
    }
}

impl Page for Paginator {
    fn render(&self, sink: &dyn Sink) -> Result<(), SinkError> {
        self.page.render(sink)?;

        tracing::debug!(
            page = "paginator",
            results = self.results.len(),
            pages = self.page_count(),
            "rendering page"
        );

        sink.write_line(&format!(
            "Displaying {} results per page:",
            self.page_size
        ))?;
        for (number, window) in windows(&self.results, self.page_size) {
            sink.write_line(&format!("Page {}: {}", number, format_window(window)))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("results", &self.results)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
