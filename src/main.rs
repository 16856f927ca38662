use untime::components::{App, AppProps};
use untime::state::SwipeConfig;
use untime::util::clog;

/// Optional `<script id="swipe-config" type="application/json">` block in index.html.
fn load_swipe_config() -> SwipeConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("swipe-config"))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => SwipeConfig::from_json(&raw).unwrap_or_else(|err| {
            clog(&format!("config: ignoring swipe-config ({err})"));
            SwipeConfig::default()
        }),
        None => SwipeConfig::default(),
    }
}

fn main() {
    let props = AppProps {
        swipe: load_swipe_config(),
    };
    yew::Renderer::<App>::with_props(props).render();
}
