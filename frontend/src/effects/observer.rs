use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::subscription::Subscription;
use crate::view_state::active_section::SectionEntry;
use crate::view_state::visibility::{ObserverOptions, SeenLatch};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether the browser has `IntersectionObserver` at all.
pub fn supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn observer_init(options: &ObserverOptions) -> IntersectionObserverInit {
    let thresholds = Array::new();
    for t in options.thresholds {
        thresholds.push(&JsValue::from_f64(*t));
    }
    let init = IntersectionObserverInit::new();
    init.set_threshold(&thresholds);
    init.set_root_margin(&options.root_margin.to_string());
    init
}

fn entries(records: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    records.iter().filter_map(|r| r.dyn_into::<IntersectionObserverEntry>().ok())
}

fn connect(callback: &ObserverCallback, options: &ObserverOptions) -> Result<IntersectionObserver, JsValue> {
    if !supported() {
        return Err(JsValue::from_str("IntersectionObserver is not available"));
    }
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &observer_init(options))
}

/// Watches `target` until it first intersects, then disconnects and calls `on_seen`.
pub fn observe_once<F>(target: &Element, options: &ObserverOptions, on_seen: F) -> Result<Subscription, JsValue>
where
    F: FnOnce() + 'static,
{
    let latch = Rc::new(RefCell::new(SeenLatch::new()));
    let mut on_seen = Some(on_seen);

    let callback: ObserverCallback = {
        let latch = latch.clone();
        Closure::wrap(Box::new(move |records: Array, observer: IntersectionObserver| {
            let flipped = latch.borrow_mut().observe(entries(&records).map(|e| e.is_intersecting()));
            if flipped {
                observer.disconnect();
                if let Some(on_seen) = on_seen.take() {
                    on_seen();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let observer = connect(&callback, options)?;
    observer.observe(target);

    Ok(Subscription::new(move || {
        let mut latch = latch.borrow_mut();
        if !latch.is_seen() {
            log::debug!("visibility watch released before first intersection");
        }
        latch.release();
        observer.disconnect();
        drop(callback);
    }))
}

/// Watches every element in `targets` with one observer and hands each batch
/// of records to `on_batch`, in delivery order. Stays connected until released.
pub fn observe_sections<F>(targets: &[Element], options: &ObserverOptions, mut on_batch: F) -> Result<Subscription, JsValue>
where
    F: FnMut(&[SectionEntry]) + 'static,
{
    let callback: ObserverCallback = Closure::wrap(Box::new(move |records: Array, _observer: IntersectionObserver| {
        let batch: Vec<SectionEntry> = entries(&records)
            .map(|e| SectionEntry::new(e.target().id(), e.is_intersecting(), e.intersection_ratio()))
            .collect();
        on_batch(&batch);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = connect(&callback, options)?;
    for target in targets {
        observer.observe(target);
    }

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}
