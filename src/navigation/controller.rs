use log::debug;
use yew_router::Routable;

/// Top-level pages of the site. The `at` attributes are the address bar mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Page {
    #[not_found]
    #[at("/")]
    Home,
    #[at("/policy")]
    PrivacyPolicy,
    #[at("/service")]
    TermsOfService,
}

impl Page {
    pub fn path(&self) -> String {
        self.to_path()
    }

    /// Resolves an address bar path. Only exact matches count; anything else,
    /// trailing slashes included, lands on `Home`.
    pub fn from_location(pathname: &str) -> Page {
        Page::recognize(pathname)
            .filter(|page| page.path() == pathname)
            .unwrap_or(Page::Home)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Anchor(String),
}

impl ScrollTarget {
    pub fn from_anchor(anchor: Option<&str>) -> Self {
        match anchor {
            Some(anchor) if !anchor.is_empty() => ScrollTarget::Anchor(anchor.to_string()),
            _ => ScrollTarget::Top,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavigationToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollResult {
    Performed,
    AnchorMissing,
    Superseded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Target was already showing; the scroll ran immediately.
    Scrolled(ScrollResult),
    /// Page changed; the scroll waits for `flush_pending_scroll` with this token.
    Committed(NavigationToken),
}

pub trait HistoryPort {
    fn pathname(&self) -> String;
    fn push_path(&self, path: &str);
    fn back(&self);
}

pub trait ScrollPort {
    /// Returns false when no element carries `anchor`.
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
    fn scroll_to_top(&self);
}

struct PendingScroll {
    token: NavigationToken,
    target: ScrollTarget,
}

/// Keeps the showing page, the address bar and the scroll position in step.
///
/// Cross-page navigation is two-phase: the page and history entry change
/// synchronously, the scroll runs once the shell reports the new page has
/// rendered. Only the newest deferred scroll is ever performed.
pub struct NavigationController<H, S> {
    history: H,
    scroller: S,
    current: Page,
    pending: Option<PendingScroll>,
    last_token: NavigationToken,
}

impl<H: HistoryPort, S: ScrollPort> NavigationController<H, S> {
    pub fn new(history: H, scroller: S) -> Self {
        let mut controller = Self {
            history,
            scroller,
            current: Page::Home,
            pending: None,
            last_token: NavigationToken::default(),
        };
        controller.on_history_pop();
        controller
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    /// Token of the deferred scroll still waiting for a render, if any.
    pub fn pending_token(&self) -> Option<NavigationToken> {
        self.pending.as_ref().map(|pending| pending.token)
    }

    pub fn navigate(&mut self, target: Page, anchor: Option<&str>) -> NavigationOutcome {
        let scroll = ScrollTarget::from_anchor(anchor);

        if target == self.current {
            // Any deferred scroll from an earlier navigation is now stale.
            self.next_token();
            self.pending = None;
            debug!("Same-page navigation on {:?}, scrolling to {:?}", target, scroll);
            return NavigationOutcome::Scrolled(self.perform(&scroll));
        }

        debug!("Navigating {:?} -> {:?}", self.current, target);
        self.current = target;
        self.history.push_path(&target.path());
        NavigationOutcome::Committed(self.defer(scroll))
    }

    /// Re-derives the page from the address bar after a back/forward step.
    pub fn on_history_pop(&mut self) -> NavigationToken {
        let pathname = self.history.pathname();
        self.current = Page::from_location(&pathname);
        debug!("History moved to {} ({:?})", pathname, self.current);
        self.defer(ScrollTarget::Top)
    }

    /// Post-render signal from the shell. A stale token leaves the newer
    /// pending scroll alone.
    pub fn flush_pending_scroll(&mut self, token: NavigationToken) -> ScrollResult {
        match self.pending.take() {
            Some(pending) if pending.token == token => self.perform(&pending.target),
            Some(pending) => {
                debug!("Dropping scroll {:?}, superseded by {:?}", token, pending.token);
                self.pending = Some(pending);
                ScrollResult::Superseded
            }
            None => ScrollResult::Superseded,
        }
    }

    pub fn go_back(&self) {
        self.history.back();
    }

    fn defer(&mut self, target: ScrollTarget) -> NavigationToken {
        let token = self.next_token();
        self.pending = Some(PendingScroll { token, target });
        token
    }

    fn next_token(&mut self) -> NavigationToken {
        self.last_token = NavigationToken(self.last_token.0 + 1);
        self.last_token
    }

    fn perform(&self, target: &ScrollTarget) -> ScrollResult {
        match target {
            ScrollTarget::Top => {
                self.scroller.scroll_to_top();
                ScrollResult::Performed
            }
            ScrollTarget::Anchor(anchor) => {
                if self.scroller.scroll_to_anchor(anchor) {
                    ScrollResult::Performed
                } else {
                    debug!("No element with id {}, skipping scroll", anchor);
                    ScrollResult::AnchorMissing
                }
            }
        }
    }
}
