use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Something with an inline `overflow` style.
pub trait OverflowTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str) -> Result<(), JsValue>;
}

impl OverflowTarget for HtmlElement {
    fn overflow(&self) -> String {
        self.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) -> Result<(), JsValue> {
        if value.is_empty() {
            self.style().remove_property("overflow").map(|_| ())
        } else {
            self.style().set_property("overflow", value)
        }
    }
}

/// Holds `overflow: hidden` on the target until dropped, then puts back
/// whatever inline value was there before.
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
    previous: String,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Result<Self, JsValue> {
        let previous = target.overflow();
        target.set_overflow("hidden")?;
        Ok(Self { target, previous })
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        if let Err(err) = self.target.set_overflow(&self.previous) {
            log::warn!("failed to restore overflow: {:?}", err);
        }
    }
}

/// What a modal holds while it is open: a guard for its key bindings and the
/// page scroll lock. Both are taken on the closed to open edge and dropped on
/// the way back, so moving between items inside the modal keeps the same ones.
pub struct ModalScope<T: OverflowTarget, K> {
    held: Option<Held<T, K>>,
}

struct Held<T: OverflowTarget, K> {
    _keys: Option<K>,
    _lock: Option<ScrollLock<T>>,
}

impl<T: OverflowTarget, K> ModalScope<T, K> {
    pub fn closed() -> Self {
        Self { held: None }
    }

    pub fn is_open(&self) -> bool {
        self.held.is_some()
    }

    /// Follows the modal's open flag. `enter` runs only when the modal goes
    /// from closed to open and supplies the key guard and the element to lock.
    pub fn sync<F>(&mut self, open: bool, enter: F)
    where
        F: FnOnce() -> (Option<K>, Option<T>),
    {
        if open == self.is_open() {
            return;
        }
        if !open {
            self.close();
            return;
        }
        let (keys, target) = enter();
        let lock = target.and_then(|target| {
            ScrollLock::acquire(target)
                .map_err(|err| log::warn!("scroll lock not applied: {:?}", err))
                .ok()
        });
        self.held = Some(Held { _keys: keys, _lock: lock });
    }

    pub fn close(&mut self) {
        self.held = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::gallery::{GalleryAction, GalleryState};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowTarget for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) -> Result<(), JsValue> {
            *self.0.borrow_mut() = value.to_string();
            Ok(())
        }
    }

    struct KeyGuard(Rc<Cell<u32>>);

    impl Drop for KeyGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn restores_previous_value() {
        let body = FakeBody::default();
        body.set_overflow("auto").unwrap();

        let lock = ScrollLock::acquire(body.clone()).unwrap();
        assert_eq!(body.overflow(), "hidden");
        drop(lock);
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn restores_unset_value() {
        let body = FakeBody::default();
        let lock = ScrollLock::acquire(body.clone()).unwrap();
        drop(lock);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn gallery_navigation_keeps_one_lock_and_close_restores() {
        let body = FakeBody::default();
        body.set_overflow("auto").unwrap();
        let entered = Rc::new(Cell::new(0));
        let keys_released = Rc::new(Cell::new(0));
        let mut scope: ModalScope<FakeBody, KeyGuard> = ModalScope::closed();
        let mut state = GalleryState::Closed;

        let steps = [
            (GalleryAction::Select(2), 1, "hidden"),
            (GalleryAction::Next, 1, "hidden"),
            (GalleryAction::Prev, 1, "hidden"),
            (GalleryAction::Next, 1, "hidden"),
            (GalleryAction::Close, 1, "auto"),
            (GalleryAction::Select(0), 2, "hidden"),
            (GalleryAction::Close, 2, "auto"),
        ];
        for (action, expected_entries, expected_overflow) in steps {
            state = state.apply(action, 6);
            scope.sync(state.is_open(), || {
                entered.set(entered.get() + 1);
                (Some(KeyGuard(keys_released.clone())), Some(body.clone()))
            });
            assert_eq!(scope.is_open(), state.is_open(), "after {:?}", action);
            assert_eq!(entered.get(), expected_entries, "after {:?}", action);
            assert_eq!(body.overflow(), expected_overflow, "after {:?}", action);
        }
        assert_eq!(keys_released.get(), 2);
    }

    #[test]
    fn closing_releases_keys_and_lock_together() {
        let body = FakeBody::default();
        let keys_released = Rc::new(Cell::new(0));
        let mut scope: ModalScope<FakeBody, KeyGuard> = ModalScope::closed();

        scope.sync(true, || (Some(KeyGuard(keys_released.clone())), Some(body.clone())));
        assert_eq!(body.overflow(), "hidden");
        assert_eq!(keys_released.get(), 0);

        scope.close();
        assert_eq!(body.overflow(), "");
        assert_eq!(keys_released.get(), 1);
        assert!(!scope.is_open());
    }

    #[test]
    fn open_without_a_body_still_counts_as_open() {
        let mut scope: ModalScope<FakeBody, ()> = ModalScope::closed();
        scope.sync(true, || (Some(()), None));
        assert!(scope.is_open());
        scope.sync(false, || unreachable!("closing never enters"));
        assert!(!scope.is_open());
    }
}
