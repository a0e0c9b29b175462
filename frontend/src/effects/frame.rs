use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsValue;

use crate::view_state::count_up::{CountUpRun, CountUpSpec};

struct FrameLoop {
    spec: CountUpSpec,
    run: RefCell<CountUpRun>,
    on_value: RefCell<Box<dyn FnMut(f64)>>,
    frame: RefCell<Option<AnimationFrame>>,
}

fn schedule(state: Rc<FrameLoop>) {
    let next = state.clone();
    let handle = request_animation_frame(move |now| step(next, now));
    *state.frame.borrow_mut() = Some(handle);
}

fn step(state: Rc<FrameLoop>, now: f64) {
    // the handle that fired is spent
    state.frame.borrow_mut().take();
    let Some(value) = state.run.borrow_mut().tick(&state.spec, now) else {
        return;
    };
    (state.on_value.borrow_mut())(value);
    if state.run.borrow().is_running() {
        schedule(state);
    }
}

/// A count-up pass in flight. Dropping it cancels the pending frame.
#[must_use = "dropping a CountUpAnimation stops it immediately"]
pub struct CountUpAnimation {
    state: Rc<FrameLoop>,
}

impl Drop for CountUpAnimation {
    fn drop(&mut self) {
        self.state.run.borrow_mut().cancel();
        self.state.frame.borrow_mut().take();
    }
}

/// Runs one count-up pass on `requestAnimationFrame`, reporting each sampled
/// value until the run finishes.
pub fn animate<F>(spec: CountUpSpec, on_value: F) -> Result<CountUpAnimation, JsValue>
where
    F: FnMut(f64) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let start = window
        .performance()
        .ok_or_else(|| JsValue::from_str("no performance clock"))?
        .now();

    let state = Rc::new(FrameLoop {
        spec,
        run: RefCell::new(CountUpRun::start(start)),
        on_value: RefCell::new(Box::new(on_value)),
        frame: RefCell::new(None),
    });
    schedule(state.clone());

    Ok(CountUpAnimation { state })
}
