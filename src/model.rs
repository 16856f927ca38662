//! Core data models for the Untime page shell.
//! Pages, swipe directions and the navigation state driven by swipes.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Countdown page shown at startup.
    #[default]
    Home,
    Settings,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Settings];

    /// Page revealed by a left swipe, if any.
    pub fn next(self) -> Option<Page> {
        match self {
            Page::Home => Some(Page::Settings),
            Page::Settings => None,
        }
    }

    /// Page revealed by a right swipe, if any.
    pub fn previous(self) -> Option<Page> {
        match self {
            Page::Home => None,
            Page::Settings => Some(Page::Home),
        }
    }

    /// Neighbour reached by a swipe in `dir`.
    pub fn neighbour(self, dir: SwipeDirection) -> Option<Page> {
        match dir {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.previous(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Untime",
            Page::Settings => "Settings",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_page: Page,
    /// A page transition is in flight.
    pub is_transitioning: bool,
    /// Direction of the transition in flight; `None` when idle.
    pub swipe_direction: Option<SwipeDirection>,
    /// Transition progress, conventionally 0..=1. Stored as given.
    pub swipe_progress: f64,
}

impl NavigationState {
    pub fn is_idle(&self) -> bool {
        !self.is_transitioning
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Navigate(Page),
    StartSwipe(SwipeDirection),
    UpdateSwipeProgress(f64),
    CompleteSwipe,
    CancelSwipe,
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use NavAction::*;
        let mut new = (*self).clone();
        match action {
            Navigate(page) => {
                new.current_page = page;
            }
            StartSwipe(dir) => {
                new.swipe_direction = Some(dir);
                new.is_transitioning = true;
                new.swipe_progress = 0.0;
            }
            UpdateSwipeProgress(progress) => {
                new.swipe_progress = progress;
            }
            // Both settle the transition; the page itself is left to the caller.
            CompleteSwipe | CancelSwipe => {
                new.is_transitioning = false;
                new.swipe_direction = None;
                new.swipe_progress = 0.0;
            }
        }
        Rc::new(new)
    }
}
