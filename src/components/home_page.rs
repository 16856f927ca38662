use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub to_settings: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let settings_cb = {
        let cb = props.to_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; flex-direction:column; align-items:center; justify-content:center; height:100vh; gap:12px; background:#282a36; color:#f8f8f2;">
        <h1 style="margin:0; font-size:32px; color:#8be9fd;">{ "Untime" }</h1>
        <div style="font-size:13px; opacity:0.7;">{ "Swipe left for settings" }</div>
        <button onclick={settings_cb} style="padding:4px 10px; font-size:12px;">{ "Settings" }</button>
    </div>}
}
