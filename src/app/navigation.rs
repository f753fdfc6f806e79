use std::sync::{Arc, Mutex};

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};

use crate::nav::{
    scroll::{is_scroll_key, ScrollAnimation, ScrollAnimator},
    Layout, NavigationState, SectionBounds,
};

/// Viewport width at which the desktop navigation replaces the menu.
const WIDE_VIEWPORT_QUERY: &str = "(min-width: 768px)";

/// Reads section geometry from the live document.
struct DomLayout;

impl Layout for DomLayout {
    fn bounds(&self, section: &str) -> Option<SectionBounds> {
        let el = document().get_element_by_id(section)?;
        let rect = el.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top() + scroll_y(),
            height: rect.height(),
        })
    }
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

fn now_ms() -> f64 {
    window()
        .performance()
        .map(|perf| perf.now())
        .unwrap_or_default()
}

/// Browser handle on the page's [`NavigationState`]. Views read and mutate
/// navigation only through this.
#[derive(Clone, Copy)]
pub struct NavController {
    state: RwSignal<NavigationState>,
    animator: StoredValue<Arc<Mutex<ScrollAnimator>>>,
}

impl NavController {
    fn new(sections: Vec<String>) -> Self {
        let state = NavigationState::new(sections).expect("site should define sections");
        Self {
            state: RwSignal::new(state),
            animator: StoredValue::new(Arc::new(Mutex::new(ScrollAnimator::new()))),
        }
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.state.with(|s| s.is_active(section))
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.with(|s| s.is_menu_open())
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.with(|s| s.is_scrolled())
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
    }

    pub fn set_overlay_open(&self, open: bool) {
        self.state.maybe_update(|s| s.set_overlay_open(open));
    }

    fn observe_scroll(&self) {
        let y = scroll_y();
        self.state.maybe_update(|s| s.observe_scroll(y, &DomLayout));
    }

    fn set_viewport_wide(&self, wide: bool) {
        self.state.maybe_update(|s| s.set_viewport_wide(wide));
    }

    fn scroll_locked(&self) -> bool {
        self.state.with(|s| s.scroll_locked())
    }

    fn cancel_animation(&self) {
        self.animator.with_value(|a| {
            a.lock()
                .expect("should be able to lock scroll animator")
                .cancel()
        });
    }

    /// Activates `section` right away and smooth-scrolls to it. Unknown
    /// sections are ignored.
    pub fn navigate_to(&self, section: &str) {
        let mut accepted = false;
        self.state.maybe_update(|s| {
            accepted = s.navigate_to(section);
            accepted
        });
        if !accepted {
            log::debug!("ignoring navigation to unknown section {section}");
            return;
        }

        let Some(target) = self
            .state
            .with_untracked(|s| s.scroll_target(section, &DomLayout))
        else {
            return;
        };
        let animation = ScrollAnimation::new(scroll_y(), target);
        let generation = self.animator.with_value(|a| {
            a.lock()
                .expect("should be able to lock scroll animator")
                .begin(animation)
        });
        run_animation(self.animator, generation);
    }
}

fn run_animation(animator: StoredValue<Arc<Mutex<ScrollAnimator>>>, generation: u64) {
    request_animation_frame(move || {
        let frame = animator.with_value(|a| {
            a.lock()
                .expect("should be able to lock scroll animator")
                .step(generation, now_ms())
        });
        // superseded or cancelled
        let Some(frame) = frame else {
            return;
        };
        window().scroll_to_with_x_and_y(0.0, frame.position);
        if !frame.finished {
            run_animation(animator, generation);
        }
    });
}

/// Creates the page's navigation controller, binds it to window events and
/// provides it as context.
pub fn use_navigation(sections: Vec<String>) -> NavController {
    let controller = NavController::new(sections);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        controller.observe_scroll();
    });
    // manual scrolling wins over a running navigation
    let _ = use_event_listener(use_window(), ev::wheel, move |_| {
        controller.cancel_animation();
    });
    let _ = use_event_listener(use_window(), ev::touchstart, move |_| {
        controller.cancel_animation();
    });
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if is_scroll_key(&ev.key()) {
            controller.cancel_animation();
        }
    });

    let is_wide = use_media_query(WIDE_VIEWPORT_QUERY);
    Effect::new(move |_| {
        controller.set_viewport_wide(is_wide.get());
    });

    Effect::new(move |_| {
        let locked = controller.scroll_locked();
        let Some(body) = document().body() else {
            return;
        };
        let overflow = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            log::warn!("couldn't update body scroll lock: {err:?}");
        }
    });

    // first observation once the sections are laid out
    Effect::new(move |_| {
        controller.observe_scroll();
    });

    provide_context(controller);
    controller
}

pub fn use_nav() -> NavController {
    expect_context::<NavController>()
}
