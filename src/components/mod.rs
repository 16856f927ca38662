pub mod app;
pub mod home_page;
pub mod page_dots;
pub mod settings_page;

pub use app::{App, AppProps};
