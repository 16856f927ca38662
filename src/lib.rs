//! Untime: a countdown page shell with swipe navigation between pages.

pub mod components;
pub mod model;
pub mod pwa;
pub mod state;
pub mod util;
