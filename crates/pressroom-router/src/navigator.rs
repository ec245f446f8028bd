/// Navigation state machine over a [`Router`]
///
/// One state per resolved route plus an empty state. Path changes are the only
/// transitions, and each transition is applied synchronously.
use tracing::debug;

use crate::{RouteMatch, Router};

/// Outcome of a single navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A view became active from the empty state
    Mounted,
    /// The previous view was unmounted and a different one mounted
    Replaced,
    /// Same route with the same parameters; nothing was remounted
    Unchanged,
    /// Nothing matched; the previous view, if any, was unmounted
    Cleared,
}

impl Transition {
    /// Whether this transition mounted a view
    pub fn mounted(self) -> bool {
        matches!(self, Transition::Mounted | Transition::Replaced)
    }
}

/// Tracks the active route across navigations
///
/// # Examples
///
/// ```
/// use pressroom_router::{Navigator, Router, Transition};
///
/// let router = Router::new()
///     .with_route("/", "home").unwrap()
///     .with_route("/orders", "orders").unwrap();
///
/// let mut nav = Navigator::new(&router);
/// assert_eq!(nav.navigate("/"), Transition::Mounted);
/// assert_eq!(nav.navigate("/"), Transition::Unchanged);
/// assert_eq!(nav.navigate("/orders"), Transition::Replaced);
/// assert_eq!(nav.navigate("/missing"), Transition::Cleared);
/// assert_eq!(nav.mount_count(), 2);
/// ```
#[derive(Debug)]
pub struct Navigator<'r, V> {
    router: &'r Router<V>,
    current: Option<RouteMatch<'r, V>>,
    location: Option<String>,
    mounts: usize,
}

impl<'r, V> Navigator<'r, V> {
    /// Starts in the empty state
    pub fn new(router: &'r Router<V>) -> Self {
        Self {
            router,
            current: None,
            location: None,
            mounts: 0,
        }
    }

    /// Moves to `path` and reports what changed
    pub fn navigate(&mut self, path: &str) -> Transition {
        let next = self.router.resolve(path);
        self.location = Some(path.to_string());

        let transition = match (&self.current, &next) {
            (_, None) => Transition::Cleared,
            (None, Some(_)) => Transition::Mounted,
            (Some(current), Some(next)) if current.is_same_as(next) => Transition::Unchanged,
            (Some(_), Some(_)) => Transition::Replaced,
        };

        if transition != Transition::Unchanged {
            self.current = next;
        }

        if transition.mounted() {
            self.mounts += 1;
        }

        debug!(path, ?transition, mounts = self.mounts, "navigated");
        transition
    }

    /// The active match, if any
    pub fn current(&self) -> Option<&RouteMatch<'r, V>> {
        self.current.as_ref()
    }

    /// The last requested path, as given
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Number of mounts performed so far
    pub fn mount_count(&self) -> usize {
        self.mounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router<&'static str> {
        Router::new()
            .with_route("/", "home")
            .and_then(|r| r.with_route("/single/:id", "single"))
            .and_then(|r| r.with_route("*", "not-found"))
            .unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let router = router();
        let nav = Navigator::new(&router);
        assert!(nav.current().is_none());
        assert_eq!(nav.location(), None);
        assert_eq!(nav.mount_count(), 0);
    }

    #[test]
    fn test_same_params_do_not_remount() {
        let router = router();
        let mut nav = Navigator::new(&router);

        assert_eq!(nav.navigate("/single/1"), Transition::Mounted);
        assert_eq!(nav.navigate("/single/1/"), Transition::Unchanged);
        assert_eq!(nav.location(), Some("/single/1/"));
        assert_eq!(nav.mount_count(), 1);
    }

    #[test]
    fn test_param_change_replaces() {
        let router = router();
        let mut nav = Navigator::new(&router);

        nav.navigate("/single/1");
        assert_eq!(nav.navigate("/single/2"), Transition::Replaced);
        assert_eq!(nav.current().and_then(|m| m.param("id")), Some("2"));
    }

    #[test]
    fn test_not_found_is_a_regular_state() {
        let router = router();
        let mut nav = Navigator::new(&router);

        assert_eq!(nav.navigate("/nope"), Transition::Mounted);
        assert_eq!(nav.current().map(|m| *m.view()), Some("not-found"));
        assert_eq!(nav.navigate("/nope"), Transition::Unchanged);
        assert_eq!(nav.navigate("/"), Transition::Replaced);
    }

    #[test]
    fn test_cleared_without_fallback() {
        let router: Router<&str> = Router::new().with_route("/", "home").unwrap();
        let mut nav = Navigator::new(&router);

        nav.navigate("/");
        assert_eq!(nav.navigate("/elsewhere"), Transition::Cleared);
        assert!(nav.current().is_none());
        assert_eq!(nav.navigate("/"), Transition::Mounted);
        assert_eq!(nav.mount_count(), 2);
    }
}
