use std::cell::Cell;
use std::rc::Rc;

use log::debug;

/// Progress of the widget script. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScriptLoadState {
    NotRequested,
    Loading,
    Ready,
}

/// The third-party side of an embedded widget.
pub trait EmbedHost {
    /// Starts fetching the widget script. `on_load` runs once it has executed.
    fn request_script(&self, on_load: Box<dyn FnOnce()>);

    /// Calls the widget's global render entry point. Returns false when that
    /// entry point is not defined yet.
    fn render_embeds(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// First activation; the script was requested.
    Requested,
    /// Script already present; the render hook ran.
    Rendered,
    /// Script still in flight; its own continuation will render.
    RenderSkipped,
}

struct LoaderInner<H> {
    host: H,
    state: Cell<ScriptLoadState>,
}

impl<H> LoaderInner<H> {
    fn advance(&self, next: ScriptLoadState) {
        if next > self.state.get() {
            self.state.set(next);
        }
    }
}

/// Fetches a widget script at most once and re-renders the widget on every
/// later activation. Clones share the same load record.
pub struct ScriptEmbedLoader<H> {
    inner: Rc<LoaderInner<H>>,
}

impl<H> Clone for ScriptEmbedLoader<H> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<H> PartialEq for ScriptEmbedLoader<H> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<H: EmbedHost + 'static> ScriptEmbedLoader<H> {
    pub fn new(host: H) -> Self {
        Self {
            inner: Rc::new(LoaderInner {
                host,
                state: Cell::new(ScriptLoadState::NotRequested),
            }),
        }
    }

    pub fn state(&self) -> ScriptLoadState {
        self.inner.state.get()
    }

    pub fn ensure_loaded(&self) -> EnsureOutcome {
        if self.inner.state.get() == ScriptLoadState::NotRequested {
            self.inner.advance(ScriptLoadState::Loading);
            debug!("Requesting embed script");

            let weak = Rc::downgrade(&self.inner);
            self.inner.host.request_script(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.advance(ScriptLoadState::Ready);
                    if !inner.host.render_embeds() {
                        debug!("Embed script loaded but render hook is missing");
                    }
                }
            }));
            return EnsureOutcome::Requested;
        }

        if self.inner.host.render_embeds() {
            EnsureOutcome::Rendered
        } else {
            debug!("Render hook not available yet, leaving it to the pending load");
            EnsureOutcome::RenderSkipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct FakeWidget {
        fetches: Rc<Cell<u32>>,
        renders: Rc<Cell<u32>>,
        hook_defined: Rc<Cell<bool>>,
        in_flight: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    }

    impl FakeWidget {
        /// Script arrives: it defines the global hook, then fires onload.
        fn finish_loading(&self) {
            self.hook_defined.set(true);
            let callbacks: Vec<_> = self.in_flight.borrow_mut().drain(..).collect();
            for on_load in callbacks {
                on_load();
            }
        }
    }

    impl EmbedHost for FakeWidget {
        fn request_script(&self, on_load: Box<dyn FnOnce()>) {
            self.fetches.set(self.fetches.get() + 1);
            self.in_flight.borrow_mut().push(on_load);
        }

        fn render_embeds(&self) -> bool {
            if self.hook_defined.get() {
                self.renders.set(self.renders.get() + 1);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_first_activation_requests_the_script() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());
        assert_eq!(loader.state(), ScriptLoadState::NotRequested);

        assert_eq!(loader.ensure_loaded(), EnsureOutcome::Requested);
        assert_eq!(loader.state(), ScriptLoadState::Loading);
        assert_eq!(widget.fetches.get(), 1);
        assert_eq!(widget.renders.get(), 0);

        widget.finish_loading();
        assert_eq!(loader.state(), ScriptLoadState::Ready);
        assert_eq!(widget.renders.get(), 1);
    }

    #[test]
    fn test_repeat_activations_fetch_once() {
        for n in 1..=5 {
            let widget = FakeWidget::default();
            let loader = ScriptEmbedLoader::new(widget.clone());
            for _ in 0..n {
                loader.ensure_loaded();
            }
            widget.finish_loading();
            assert_eq!(widget.fetches.get(), 1);
            assert!(widget.renders.get() >= 1);
        }
    }

    #[test]
    fn test_activation_during_load_is_rendered_by_the_first_requester() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());

        assert_eq!(loader.ensure_loaded(), EnsureOutcome::Requested);
        assert_eq!(loader.ensure_loaded(), EnsureOutcome::RenderSkipped);
        assert_eq!(widget.fetches.get(), 1);
        assert_eq!(widget.renders.get(), 0);

        widget.finish_loading();
        assert_eq!(widget.renders.get(), 1);
    }

    #[test]
    fn test_remount_after_ready_re_renders() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());
        loader.ensure_loaded();
        widget.finish_loading();

        assert_eq!(loader.ensure_loaded(), EnsureOutcome::Rendered);
        assert_eq!(loader.ensure_loaded(), EnsureOutcome::Rendered);
        assert_eq!(widget.fetches.get(), 1);
        assert_eq!(widget.renders.get(), 3);
    }

    #[test]
    fn test_clones_share_one_record() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());
        let other_view = loader.clone();
        assert!(loader == other_view);

        loader.ensure_loaded();
        assert_eq!(other_view.ensure_loaded(), EnsureOutcome::RenderSkipped);
        assert_eq!(other_view.state(), ScriptLoadState::Loading);
        assert_eq!(widget.fetches.get(), 1);

        let unrelated = ScriptEmbedLoader::new(FakeWidget::default());
        assert!(loader != unrelated);
    }

    #[test]
    fn test_failed_load_never_renders_and_never_retries() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());
        loader.ensure_loaded();
        // onerror: the continuation is dropped without running.
        widget.in_flight.borrow_mut().clear();

        assert_eq!(loader.ensure_loaded(), EnsureOutcome::RenderSkipped);
        assert_eq!(loader.state(), ScriptLoadState::Loading);
        assert_eq!(widget.fetches.get(), 1);
        assert_eq!(widget.renders.get(), 0);
    }

    #[test]
    fn test_state_never_regresses() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());
        loader.ensure_loaded();
        widget.finish_loading();

        loader.inner.advance(ScriptLoadState::Loading);
        loader.inner.advance(ScriptLoadState::NotRequested);
        assert_eq!(loader.state(), ScriptLoadState::Ready);
    }

    #[test]
    fn test_dropped_loader_ignores_late_script() {
        let widget = FakeWidget::default();
        let loader = ScriptEmbedLoader::new(widget.clone());
        loader.ensure_loaded();
        drop(loader);

        widget.finish_loading();
        assert_eq!(widget.renders.get(), 0);
    }
}
