use crate::error::Error;
use crate::gate::AccessGate;
use crate::paginate::{PageSize, Paginator};
use crate::policy::AccessPolicy;
use crate::sink::{Sink, SinkError};

/// Something that can render itself as lines of text.
///
/// `Page` is the single capability shared by the leaf [`BasicPage`] and every
/// decorator. Decorators own the page they wrap, so a chain is built
/// inside-out and rendered outside-in:
///
/// ```text
/// Paginator ──owns──> AccessGate ──owns──> BasicPage
/// ```
///
/// Because wrapping moves the inner page, a chain can never contain itself.
///
/// # Examples
///
/// ```
/// use page_decor::{BasicPage, Page, VecSink};
///
/// let sink = VecSink::new();
/// BasicPage::new("Hello").render(&sink).unwrap();
/// assert_eq!(sink.into_vec(), vec!["Basic Web Page: Hello"]);
/// ```
///
/// [`BasicPage`]: crate::BasicPage
pub trait Page {
    /// Writes this page to `sink`.
    ///
    /// # Errors
    ///
    /// Pages themselves never fail; the only error is a `SinkError`
    /// raised by the sink, returned unchanged.
    fn render(&self, sink: &dyn Sink) -> Result<(), SinkError>;
}

impl<P: Page + ?Sized> Page for Box<P> {
    fn render(&self, sink: &dyn Sink) -> Result<(), SinkError> {
        (**self).render(sink)
    }
}

impl<P: Page + ?Sized> Page for &P {
    fn render(&self, sink: &dyn Sink) -> Result<(), SinkError> {
        (**self).render(sink)
    }
}

/// Fluent wrapping for any [`Page`].
///
/// Each method moves `self` into a new decorator, so chains read in the
/// order they are built (innermost first).
///
/// # Examples
///
/// ```
/// use page_decor::{AllowAll, BasicPage, Page, PageExt, VecSink};
///
/// let page = BasicPage::new("Home")
///     .gated(AllowAll)
///     .paginated(vec!["a".to_string(), "b".to_string()]);
///
/// let sink = VecSink::new();
/// page.render(&sink).unwrap();
/// assert_eq!(
///     sink.into_vec(),
///     vec![
///         "Basic Web Page: Home",
///         "Displaying 10 results per page:",
///         "Page 1: [a, b]",
///     ]
/// );
/// ```
pub trait PageExt: Page + Sized + 'static {
    /// Boxes this page for use as a trait object.
    fn boxed(self) -> Box<dyn Page> {
        Box::new(self)
    }

    /// Wraps this page in an [`AccessGate`] guarded by `policy`.
    fn gated<A: AccessPolicy>(self, policy: A) -> AccessGate<A> {
        AccessGate::with_policy(self, policy)
    }

    /// Wraps this page in a [`Paginator`] with the default page size.
    fn paginated(self, results: Vec<String>) -> Paginator {
        Paginator::new(self, results)
    }

    /// Wraps this page in a [`Paginator`] with `page_size` results per page.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `page_size` is zero.
    fn paginated_by(self, results: Vec<String>, page_size: usize) -> Result<Paginator, Error> {
        Ok(Paginator::with_page_size(
            self,
            results,
            PageSize::new(page_size)?,
        ))
    }
}

impl<P: Page + 'static> PageExt for P {}
