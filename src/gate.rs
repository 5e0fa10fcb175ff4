use std::fmt;

use crate::page::Page;
use crate::policy::{AccessPolicy, AllowAll};
use crate::sink::{Sink, SinkError};

/// Line written in place of the wrapped page when access is denied.
pub const ACCESS_DENIED: &str = "Access denied!";

/// Decorator that shows its page only when an access policy allows it.
///
/// On render the gate consults its [`AccessPolicy`] once. When access is
/// granted the wrapped page renders and the gate adds nothing; when it is
/// denied the gate writes [`ACCESS_DENIED`] and the wrapped page is never
/// touched.
///
/// # Examples
///
/// ```
/// use page_decor::{AccessGate, BasicPage, Page, VecSink};
///
/// let sink = VecSink::new();
/// AccessGate::new(BasicPage::new("Members area")).render(&sink).unwrap();
/// assert_eq!(sink.into_vec(), vec!["Basic Web Page: Members area"]);
///
/// let sink = VecSink::new();
/// AccessGate::with_policy(BasicPage::new("Members area"), || false)
///     .render(&sink)
///     .unwrap();
/// assert_eq!(sink.into_vec(), vec!["Access denied!"]);
/// ```
pub struct AccessGate<A = AllowAll> {
    page: Box<dyn Page>,
    policy: A,
}

impl AccessGate<AllowAll> {
    /// Wraps `page` with the allow-all policy.
    pub fn new(page: impl Page + 'static) -> Self {
        Self::with_policy(page, AllowAll)
    }
}

impl<A: AccessPolicy> AccessGate<A> {
    /// Wraps `page` behind `policy`.
    pub fn with_policy(page: impl Page + 'static, policy: A) -> Self {
        Self {
            page: Box::new(page),
            policy,
        }
    }

    /// Returns the policy guarding this gate.
    pub fn policy(&self) -> &A {
        &self.policy
    }
}

impl<A: AccessPolicy> Page for AccessGate<A> {
    fn render(&self, sink: &dyn Sink) -> Result<(), SinkError> {
        if self.policy.check_access() {
            tracing::debug!(page = "access_gate", granted = true, "rendering page");
            self.page.render(sink)
        } else {
            tracing::warn!(page = "access_gate", granted = false, "access denied");
            sink.write_line(ACCESS_DENIED)
        }
    }
}

impl<A> fmt::Debug for AccessGate<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate")
            .field("policy", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicPage, DenyAll, SinkErrorKind, VecSink};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Page that counts how often it is rendered.
    struct SpyPage {
        renders: Rc<Cell<usize>>,
    }

    impl Page for SpyPage {
        fn render(&self, sink: &dyn Sink) -> Result<(), SinkError> {
            self.renders.set(self.renders.get() + 1);
            sink.write_line("spy")
        }
    }

    #[test]
    fn granted_renders_only_inner_output() {
        let sink = VecSink::new();
        AccessGate::new(BasicPage::new("X")).render(&sink).unwrap();
        assert_eq!(sink.into_vec(), vec!["Basic Web Page: X"]);
    }

    #[test]
    fn denied_never_touches_inner() {
        let renders = Rc::new(Cell::new(0));
        let gate = AccessGate::with_policy(
            SpyPage {
                renders: Rc::clone(&renders),
            },
            DenyAll,
        );

        let sink = VecSink::new();
        gate.render(&sink).unwrap();

        assert_eq!(sink.into_vec(), vec![ACCESS_DENIED]);
        assert_eq!(renders.get(), 0);
    }

    #[test]
    fn granted_renders_inner_exactly_once() {
        let renders = Rc::new(Cell::new(0));
        let gate = AccessGate::new(SpyPage {
            renders: Rc::clone(&renders),
        });

        gate.render(&VecSink::new()).unwrap();
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn policy_is_checked_per_render() {
        let open = Rc::new(Cell::new(true));
        let flag = Rc::clone(&open);
        let gate = AccessGate::with_policy(BasicPage::new("X"), move || flag.get());

        let sink = VecSink::new();
        gate.render(&sink).unwrap();
        open.set(false);
        gate.render(&sink).unwrap();

        assert_eq!(
            sink.into_vec(),
            vec!["Basic Web Page: X", "Access denied!"]
        );
    }

    #[test]
    fn denial_propagates_sink_error() {
        let sink = VecSink::new();
        sink.close();
        let err = AccessGate::with_policy(BasicPage::new("X"), DenyAll)
            .render(&sink)
            .unwrap_err();
        assert_eq!(err.kind(), SinkErrorKind::Closed);
    }

    #[test]
    fn debug_names_policy_type() {
        let gate = AccessGate::new(BasicPage::new("X"));
        let out = format!("{:?}", gate);
        assert!(out.contains("AccessGate"));
        assert!(out.contains("AllowAll"));
        assert_eq!(gate.policy(), &AllowAll);
    }
}
