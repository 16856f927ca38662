pub mod navigation;
pub mod swipe;
pub mod touch;
pub mod transition;

pub use navigation::{NavigationStore, Subscription};
pub use swipe::{SwipeConfig, SwipeRecognizer};
pub use touch::{ContactPoint, GestureSample};
pub use transition::SwipeTransition;
