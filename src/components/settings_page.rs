use crate::state::SwipeConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPageProps {
    pub swipe: SwipeConfig,
    pub to_home: Callback<()>,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let home_cb = {
        let cb = props.to_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row = |label: &str, value: String| {
        html! {<div style="display:flex; justify-content:space-between; gap:16px;">
            <span>{ label.to_string() }</span>
            <span style="opacity:0.8;">{ value }</span>
        </div>}
    };

    html! {<div style="display:flex; align-items:center; justify-content:center; height:100vh; background:#282a36; color:#f8f8f2;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:280px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={home_cb} style="padding:4px 8px;">{"Back"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:8px; font-size:13px;">
                { row("Swipe distance", format!("{:.0} px", props.swipe.threshold)) }
                { row("Swipe speed", format!("{:.2} px/ms", props.swipe.velocity)) }
                { row("Horizontal lock", format!("{:.0} px", props.swipe.lock_distance)) }
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Swipe right to return to the timer."}</div>
        </div>
    </div>}
}
