//! Navigation store: owns the current [`NavigationState`] and broadcasts
//! every replacement to its subscribers.
//!
//! All commands run synchronously on the UI thread. Subscribers are called in
//! registration order once the new state is in place. A subscriber must not
//! issue commands from inside its own notification; doing so will not panic,
//! but the order in which other subscribers see the nested states is
//! unspecified.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use yew::{Callback, Reducible};

use crate::model::{NavAction, NavigationState, Page, SwipeDirection};
use crate::util::clog;

type SubscriberList = RefCell<Vec<(u64, Callback<Rc<NavigationState>>)>>;

pub struct NavigationStore {
    state: RefCell<Rc<NavigationState>>,
    subscribers: Rc<SubscriberList>,
    next_id: Cell<u64>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(NavigationState::default())
    }
}

impl NavigationStore {
    pub fn new(initial: NavigationState) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Rc<NavigationState> {
        self.state.borrow().clone()
    }

    pub fn navigate(&self, page: Page) {
        self.dispatch(NavAction::Navigate(page));
    }

    pub fn start_swipe(&self, direction: SwipeDirection) {
        self.dispatch(NavAction::StartSwipe(direction));
    }

    pub fn update_swipe_progress(&self, progress: f64) {
        self.dispatch(NavAction::UpdateSwipeProgress(progress));
    }

    pub fn complete_swipe(&self) {
        self.dispatch(NavAction::CompleteSwipe);
    }

    pub fn cancel_swipe(&self) {
        self.dispatch(NavAction::CancelSwipe);
    }

    /// Registers `cb`, calls it with the current state, and keeps calling it
    /// on every change until the returned handle is dropped.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, cb: Callback<Rc<NavigationState>>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, cb.clone()));
        cb.emit(self.state());
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    fn dispatch(&self, action: NavAction) {
        let next = {
            let current = self.state.borrow().clone();
            current.reduce(action)
        };
        *self.state.borrow_mut() = next.clone();
        clog(&format!("nav: {:?} -> {:?}", action, next));
        // Snapshot so callbacks may subscribe or unsubscribe while being notified.
        let subs: Vec<Callback<Rc<NavigationState>>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in subs {
            cb.emit(next.clone());
        }
    }
}

/// Handle returned by [`NavigationStore::subscribe`]. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    subscribers: Weak<SubscriberList>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subs) = self.subscribers.upgrade() {
            subs.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(store: &NavigationStore) -> (Rc<RefCell<Vec<NavigationState>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = store.subscribe(Callback::from(move |s: Rc<NavigationState>| {
            sink.borrow_mut().push((*s).clone())
        }));
        (seen, sub)
    }

    #[test]
    fn subscribe_delivers_current_state_first() {
        let store = NavigationStore::default();
        store.navigate(Page::Settings);
        let (seen, _sub) = recorder(&store);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].current_page, Page::Settings);
    }

    #[test]
    fn every_command_broadcasts_whole_state() {
        let store = NavigationStore::default();
        let (seen, _sub) = recorder(&store);
        store.start_swipe(SwipeDirection::Left);
        store.update_swipe_progress(0.5);
        store.navigate(Page::Settings);
        store.complete_swipe();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 5);
        assert!(seen[1].is_transitioning);
        assert_eq!(seen[2].swipe_progress, 0.5);
        assert_eq!(seen[3].current_page, Page::Settings);
        assert_eq!(seen[3].swipe_direction, Some(SwipeDirection::Left));
        assert_eq!(
            seen[4],
            NavigationState {
                current_page: Page::Settings,
                ..Default::default()
            }
        );
    }

    #[test]
    fn navigate_to_same_page_still_broadcasts() {
        let store = NavigationStore::default();
        let (seen, _sub) = recorder(&store);
        store.navigate(Page::Home);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[0], seen.borrow()[1]);
    }

    #[test]
    fn cancel_on_idle_is_noop_state() {
        let store = NavigationStore::default();
        let before = store.state();
        store.cancel_swipe();
        assert_eq!(*before, *store.state());
    }

    #[test]
    fn restart_resets_progress() {
        let store = NavigationStore::default();
        store.start_swipe(SwipeDirection::Right);
        store.update_swipe_progress(0.9);
        store.start_swipe(SwipeDirection::Left);
        let s = store.state();
        assert!(s.is_transitioning);
        assert_eq!(s.swipe_direction, Some(SwipeDirection::Left));
        assert_eq!(s.swipe_progress, 0.0);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let store = NavigationStore::default();
        let (seen, sub) = recorder(&store);
        let (other, _keep) = recorder(&store);
        sub.unsubscribe();
        store.navigate(Page::Settings);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(other.borrow().len(), 2);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = NavigationStore::default();
        let (_, sub) = recorder(&store);
        drop(store);
        drop(sub);
    }

    #[test]
    fn subscribers_notified_in_registration_order() {
        let store = NavigationStore::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<Subscription> = (0..3)
            .map(|i| {
                let order = order.clone();
                store.subscribe(Callback::from(move |_: Rc<NavigationState>| {
                    order.borrow_mut().push(i)
                }))
            })
            .collect();
        order.borrow_mut().clear();
        store.complete_swipe();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn reentrant_command_does_not_panic() {
        let store = Rc::new(NavigationStore::default());
        let weak = Rc::downgrade(&store);
        let _sub = store.subscribe(Callback::from(move |s: Rc<NavigationState>| {
            if s.is_transitioning {
                if let Some(store) = weak.upgrade() {
                    store.complete_swipe();
                }
            }
        }));
        store.start_swipe(SwipeDirection::Left);
        assert!(store.state().is_idle());
    }
}
