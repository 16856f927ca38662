use crate::model::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PageDotsProps {
    pub current: Page,
}

#[function_component(PageDots)]
pub fn page_dots(props: &PageDotsProps) -> Html {
    html! {<div style="position:absolute; bottom:16px; left:50%; transform:translateX(-50%); display:flex; gap:8px;">
        { for Page::ALL.iter().map(|p| {
            let color = if *p == props.current { "#8be9fd" } else { "#44475a" };
            html! {<div title={p.title()} style={format!("width:8px; height:8px; border-radius:50%; background:{};", color)}></div>}
        }) }
    </div>}
}
