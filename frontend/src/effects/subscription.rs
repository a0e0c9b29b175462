/// Handle for an observer registered with the browser. Dropping it (or
/// calling `cancel`) disconnects it and releases its callback, exactly once.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    pub fn cancel(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        (released, sub)
    }

    #[test]
    fn drop_releases_once() {
        let (released, sub) = counting();
        assert_eq!(released.get(), 0);
        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cancel_releases_once() {
        let (released, sub) = counting();
        sub.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn replacing_a_slot_releases_the_old_registration() {
        let (first, sub) = counting();
        let mut slot = Some(sub);
        assert_eq!(first.get(), 0);
        let (second, next) = counting();
        slot = Some(next);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        drop(slot.take());
        assert_eq!(second.get(), 1);
    }
}
