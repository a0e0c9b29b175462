use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Closed,
    Open(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryAction {
    Select(usize),
    Next,
    Prev,
    Close,
}

impl GalleryAction {
    /// Keyboard bindings while the lightbox is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(GalleryAction::Close),
            "ArrowRight" => Some(GalleryAction::Next),
            "ArrowLeft" => Some(GalleryAction::Prev),
            _ => None,
        }
    }
}

impl GalleryState {
    pub fn is_open(&self) -> bool {
        matches!(self, GalleryState::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            GalleryState::Open(i) => Some(*i),
            GalleryState::Closed => None,
        }
    }

    /// Transition over a list of `len` items. Open indices stay in `0..len`.
    pub fn apply(self, action: GalleryAction, len: usize) -> Self {
        match (self, action) {
            (_, GalleryAction::Select(i)) if i < len => GalleryState::Open(i),
            (_, GalleryAction::Select(_)) => self,
            (GalleryState::Open(i), GalleryAction::Next) => GalleryState::Open((i + 1) % len),
            (GalleryState::Open(i), GalleryAction::Prev) => GalleryState::Open((i + len - 1) % len),
            (GalleryState::Open(_), GalleryAction::Close) => GalleryState::Closed,
            (GalleryState::Closed, _) => GalleryState::Closed,
        }
    }
}

/// Lightbox state for a fixed project list, driven through `use_reducer`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    pub len: usize,
    pub state: GalleryState,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, state: GalleryState::Closed }
    }
}

impl Reducible for Gallery {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.state.apply(action, self.len);
        if next == self.state {
            return self;
        }
        debug!("gallery {:?} -> {:?}", self.state, next);
        Rc::new(Gallery { len: self.len, state: next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(gallery: Rc<Gallery>, actions: &[GalleryAction]) -> Rc<Gallery> {
        actions.iter().fold(gallery, |g, a| g.reduce(*a))
    }

    #[test]
    fn next_three_then_prev() {
        let g = Rc::new(Gallery::new(6));
        let g = run(g, &[GalleryAction::Select(2), GalleryAction::Next, GalleryAction::Next, GalleryAction::Next]);
        assert_eq!(g.state, GalleryState::Open(5));

        let g = g.reduce(GalleryAction::Prev);
        assert_eq!(g.state, GalleryState::Open(4));
    }

    #[test]
    fn navigation_wraps_both_ways() {
        assert_eq!(GalleryState::Open(5).apply(GalleryAction::Next, 6), GalleryState::Open(0));
        assert_eq!(GalleryState::Open(0).apply(GalleryAction::Prev, 6), GalleryState::Open(5));
    }

    #[test]
    fn escape_closes_from_any_index() {
        for i in 0..6 {
            let state = GalleryState::Open(i).apply(GalleryAction::from_key("Escape").unwrap(), 6);
            assert_eq!(state, GalleryState::Closed);
        }
    }

    #[test]
    fn key_bindings() {
        assert_eq!(GalleryAction::from_key("ArrowRight"), Some(GalleryAction::Next));
        assert_eq!(GalleryAction::from_key("ArrowLeft"), Some(GalleryAction::Prev));
        assert_eq!(GalleryAction::from_key("Enter"), None);
    }

    #[test]
    fn closed_ignores_navigation() {
        let closed = GalleryState::Closed;
        assert_eq!(closed.apply(GalleryAction::Next, 6), GalleryState::Closed);
        assert_eq!(closed.apply(GalleryAction::Prev, 6), GalleryState::Closed);
        assert_eq!(closed.apply(GalleryAction::Close, 6), GalleryState::Closed);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        assert_eq!(GalleryState::Closed.apply(GalleryAction::Select(6), 6), GalleryState::Closed);
        assert_eq!(GalleryState::Open(1).apply(GalleryAction::Select(9), 6), GalleryState::Open(1));
        assert_eq!(GalleryState::Closed.apply(GalleryAction::Select(0), 0), GalleryState::Closed);
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let g = Rc::new(Gallery::new(6));
        let same = Rc::clone(&g).reduce(GalleryAction::Close);
        assert!(Rc::ptr_eq(&g, &same));
    }
}
