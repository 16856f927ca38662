// Drives the store's transition fields from swipe input: live progress while
// a drag is latched, page change on commit, and a delayed settle.

use std::cell::Cell;
use std::rc::Rc;

use super::navigation::NavigationStore;
use crate::model::SwipeDirection;

pub struct SwipeTransition {
    store: Rc<NavigationStore>,
    /// Drag distance that maps to full progress.
    full_drag: f64,
    next_ticket: Cell<u64>,
    /// Ticket of the committed swipe waiting to settle.
    pending: Cell<Option<u64>>,
}

impl SwipeTransition {
    pub fn new(store: Rc<NavigationStore>, full_drag: f64) -> Self {
        Self {
            store,
            full_drag: full_drag.max(1.0),
            next_ticket: Cell::new(0),
            pending: Cell::new(None),
        }
    }

    /// Progress feedback for a latched drag with signed horizontal `offset`.
    pub fn drag(&self, offset: f64) {
        // A new drag owns the transition; an earlier commit no longer settles it.
        self.pending.set(None);
        let dir = if offset > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        let state = self.store.state();
        if state.current_page.neighbour(dir).is_none() {
            if state.is_transitioning {
                self.store.cancel_swipe();
            }
            return;
        }
        if state.swipe_direction != Some(dir) {
            self.store.start_swipe(dir);
        }
        self.store
            .update_swipe_progress((offset.abs() / self.full_drag).min(1.0));
    }

    /// Moves to the neighbour in `dir`. Returns the ticket to pass to
    /// [`settle`](Self::settle) once the transition should end, or `None`
    /// when there is no page that way.
    pub fn commit(&self, dir: SwipeDirection) -> Option<u64> {
        let current = self.store.state().current_page;
        let target = current.neighbour(dir)?;
        self.store.start_swipe(dir);
        self.store.navigate(target);
        self.store.update_swipe_progress(1.0);
        let ticket = self.next_ticket.get();
        self.next_ticket.set(ticket + 1);
        self.pending.set(Some(ticket));
        Some(ticket)
    }

    /// Ends the transition started by the commit holding `ticket`. Stale
    /// tickets are ignored. Returns whether the transition was completed.
    pub fn settle(&self, ticket: u64) -> bool {
        if self.pending.get() != Some(ticket) {
            return false;
        }
        self.pending.set(None);
        self.store.complete_swipe();
        true
    }

    /// Contact ended or was cancelled without a committed swipe.
    pub fn release(&self) {
        if self.pending.get().is_none() && self.store.state().is_transitioning {
            self.store.cancel_swipe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NavigationState, Page};

    fn driver() -> (Rc<NavigationStore>, SwipeTransition) {
        let store = Rc::new(NavigationStore::default());
        let t = SwipeTransition::new(store.clone(), 100.0);
        (store, t)
    }

    #[test]
    fn drag_starts_transition_and_tracks_progress() {
        let (store, t) = driver();
        t.drag(-40.0);
        let s = store.state();
        assert!(s.is_transitioning);
        assert_eq!(s.swipe_direction, Some(SwipeDirection::Left));
        assert_eq!(s.swipe_progress, 0.4);
        t.drag(-250.0);
        assert_eq!(store.state().swipe_progress, 1.0);
        assert_eq!(store.state().current_page, Page::Home);
    }

    #[test]
    fn drag_towards_missing_page_stays_idle() {
        let (store, t) = driver();
        t.drag(60.0);
        assert!(store.state().is_idle());
    }

    #[test]
    fn drag_reversing_to_missing_page_cancels() {
        let (store, t) = driver();
        t.drag(-50.0);
        t.drag(30.0);
        assert!(store.state().is_idle());
        assert_eq!(store.state().swipe_progress, 0.0);
    }

    #[test]
    fn release_without_commit_cancels_drag() {
        let (store, t) = driver();
        t.drag(-80.0);
        t.release();
        let s = store.state();
        assert!(s.is_idle());
        assert_eq!(s.current_page, Page::Home);
    }

    #[test]
    fn commit_navigates_and_settles() {
        let (store, t) = driver();
        t.drag(-120.0);
        let ticket = t.commit(SwipeDirection::Left).unwrap();
        let s = store.state();
        assert_eq!(s.current_page, Page::Settings);
        assert!(s.is_transitioning);
        assert_eq!(s.swipe_progress, 1.0);
        // touchend after the commit must not cut the transition short
        t.release();
        assert!(store.state().is_transitioning);
        assert!(t.settle(ticket));
        assert!(store.state().is_idle());
        assert_eq!(store.state().current_page, Page::Settings);
    }

    #[test]
    fn commit_without_neighbour_does_nothing() {
        let (store, t) = driver();
        assert_eq!(t.commit(SwipeDirection::Right), None);
        assert_eq!(*store.state(), NavigationState::default());
    }

    #[test]
    fn earlier_settle_does_not_end_later_swipe() {
        let (store, t) = driver();
        let first = t.commit(SwipeDirection::Left).unwrap();
        let second = t.commit(SwipeDirection::Right).unwrap();
        assert_eq!(store.state().current_page, Page::Home);
        assert!(!t.settle(first));
        assert!(store.state().is_transitioning);
        assert!(t.settle(second));
        assert!(store.state().is_idle());
    }

    #[test]
    fn drag_after_commit_invalidates_its_settle() {
        let (store, t) = driver();
        let ticket = t.commit(SwipeDirection::Left).unwrap();
        t.drag(50.0);
        assert!(!t.settle(ticket));
        assert_eq!(store.state().swipe_direction, Some(SwipeDirection::Right));
        assert_eq!(store.state().swipe_progress, 0.5);
    }
}
