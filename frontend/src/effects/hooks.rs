use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::frame::{self, CountUpAnimation};
use super::observer;
use super::scroll_lock::ModalScope;
use super::subscription::Subscription;
use crate::view_state::active_section::{ActiveSection, SectionEntry};
use crate::view_state::count_up::CountUpSpec;
use crate::view_state::gallery::{Gallery, GalleryAction, GalleryState};
use crate::view_state::scroll::ScrollMetrics;
use crate::view_state::visibility::ObserverOptions;

/// True once the element behind `node` has scrolled into view. Always true
/// when `enabled` is false, and falls back to true if the browser can't observe.
#[hook]
pub fn use_in_view_once(node: NodeRef, options: ObserverOptions, enabled: bool) -> bool {
    let seen = use_state_eq(|| false);
    let already_seen = *seen;

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |(node, already_seen, enabled)| {
                let mut subscription: Option<Subscription> = None;
                if *enabled && !*already_seen {
                    if let Some(element) = node.cast::<Element>() {
                        let on_seen = {
                            let seen = seen.clone();
                            move || seen.set(true)
                        };
                        match observer::observe_once(&element, &options, on_seen) {
                            Ok(sub) => subscription = Some(sub),
                            Err(err) => {
                                warn!("visibility observer unavailable, showing content: {:?}", err);
                                seen.set(true);
                            }
                        }
                    }
                }
                move || {
                    if let Some(subscription) = subscription {
                        subscription.cancel();
                    }
                }
            },
            (node, already_seen, enabled),
        );
    }

    !enabled || *seen
}

/// Displayed value of a count-up that starts once `started` turns true.
#[hook]
pub fn use_count_up(spec: CountUpSpec, started: bool, enabled: bool) -> f64 {
    let value = use_state_eq(|| 0.0_f64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(spec, started, enabled)| {
                let mut animation: Option<CountUpAnimation> = None;
                if *enabled && *started {
                    let on_value = {
                        let value = value.clone();
                        move |v: f64| value.set(v)
                    };
                    match frame::animate(spec.clone(), on_value) {
                        Ok(running) => animation = Some(running),
                        Err(err) => {
                            warn!("animation frames unavailable, showing {}: {:?}", spec.target, err);
                            value.set(spec.target);
                        }
                    }
                }
                move || drop(animation)
            },
            (spec.clone(), started, enabled),
        );
    }

    if enabled {
        *value
    } else {
        spec.target
    }
}

fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: root.scroll_top() as f64,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

/// Scroll position of the page as a ratio in [0, 1].
#[hook]
pub fn use_scroll_progress(enabled: bool) -> f64 {
    let ratio = use_state_eq(|| 0.0_f64);

    {
        let ratio = ratio.clone();
        use_effect_with_deps(
            move |enabled| {
                let mut listener: Option<EventListener> = None;
                if *enabled {
                    let update = move || {
                        if let Some(metrics) = read_scroll_metrics() {
                            ratio.set(metrics.ratio());
                        }
                    };
                    update();
                    match web_sys::window() {
                        Some(window) => {
                            let options = EventListenerOptions {
                                phase: EventListenerPhase::Bubble,
                                passive: true,
                            };
                            listener = Some(EventListener::new_with_options(&window, "scroll", options, move |_| update()));
                        }
                        None => warn!("no window, scroll progress stays at 0"),
                    }
                }
                move || drop(listener)
            },
            enabled,
        );
    }

    *ratio
}

/// Id of the section currently occupying the upper-middle band of the viewport.
#[hook]
pub fn use_active_section(ids: Vec<String>, enabled: bool) -> String {
    let initial = ids.first().cloned().unwrap_or_default();
    let active = use_state_eq(move || initial);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(ids, enabled)| {
                let tracker = Rc::new(RefCell::new(ActiveSection::new((*active).clone())));
                let mut subscription: Option<Subscription> = None;

                let document = web_sys::window().and_then(|w| w.document());
                let sections: Vec<Element> = match (&document, *enabled) {
                    (Some(document), true) => ids.iter().filter_map(|id| document.get_element_by_id(id)).collect(),
                    _ => Vec::new(),
                };

                if !sections.is_empty() {
                    let on_batch = {
                        let tracker = tracker.clone();
                        move |batch: &[SectionEntry]| {
                            let mut tracker = tracker.borrow_mut();
                            if tracker.apply(batch) {
                                debug!("active section: {}", tracker.current());
                                active.set(tracker.current().to_string());
                            }
                        }
                    };
                    match observer::observe_sections(&sections, &ObserverOptions::SECTIONS, on_batch) {
                        Ok(sub) => subscription = Some(sub),
                        Err(err) => warn!("section tracking unavailable: {:?}", err),
                    }
                }

                move || {
                    tracker.borrow_mut().release();
                    if let Some(subscription) = subscription {
                        subscription.cancel();
                    }
                }
            },
            (ids, enabled),
        );
    }

    (*active).clone()
}

fn enter_lightbox(dispatcher: UseReducerDispatcher<Gallery>) -> (Option<EventListener>, Option<HtmlElement>) {
    let Some(window) = web_sys::window() else {
        warn!("no window, lightbox keys and scroll lock skipped");
        return (None, None);
    };

    let keys = EventListener::new(&window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(action) = GalleryAction::from_key(&event.key()) {
            dispatcher.dispatch(action);
        }
    });
    let body = window.document().and_then(|d| d.body());
    if body.is_none() {
        warn!("no document body, scroll lock skipped");
    }

    (Some(keys), body)
}

/// Locks page scroll and binds Escape/arrow keys for as long as the gallery
/// is open. Moving between images keeps the same lock and listener.
#[hook]
pub fn use_lightbox_scope(state: GalleryState, dispatcher: UseReducerDispatcher<Gallery>) {
    let scope = use_mut_ref(ModalScope::<HtmlElement, EventListener>::closed);

    {
        let scope = scope.clone();
        use_effect_with_deps(
            move |state| {
                scope.borrow_mut().sync(state.is_open(), || enter_lightbox(dispatcher));
                || ()
            },
            state,
        );
    }

    use_effect_with_deps(move |_| move || scope.borrow_mut().close(), ());
}
