//! # Navigation
//!
//! A fixed stack navigator over a closed set of routes, in the spirit
//! of a mobile stack navigator: push on navigate, pop on back.
//!
//! Each [`Route`] variant carries exactly the parameters its screen
//! needs, so a malformed navigation (details without an item id) is
//! unrepresentable rather than checked at render time.

use log::info;

/// The closed set of reachable screens and their parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Details { item_id: String },
}

impl Route {
    /// Human-readable screen title for the title bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Details { .. } => "Details",
        }
    }
}

/// Stack of routes; the top is the visible screen.
///
/// The initial route is the root and is never popped, so `current()`
/// always has something to return.
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// The route whose screen is currently visible.
    pub fn current(&self) -> &Route {
        self.stack.last().expect("navigator stack is never empty")
    }

    /// Push a new route on top.
    pub fn navigate(&mut self, route: Route) {
        info!("navigate: {} -> {}", self.current().title(), route.title());
        self.stack.push(route);
    }

    /// Pop the top route. Returns `false` (and changes nothing) when
    /// already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            info!("back: now on {}", self.current().title());
            true
        } else {
            false
        }
    }

    /// Number of routes on the stack (1 = at the root).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
