use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use super::{home_page::HomePage, page_dots::PageDots, settings_page::SettingsPage};
use crate::model::{NavigationState, Page, SwipeDirection};
use crate::state::{ContactPoint, NavigationStore, SwipeConfig, SwipeRecognizer, SwipeTransition};
use crate::util::{clog, now_ms};

/// How long a committed swipe stays in the transitioning state.
const TRANSITION_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub swipe: SwipeConfig,
}

/// Settles the commit holding `ticket` after the transition time, replacing
/// any settle still scheduled for an earlier commit.
fn settle_later(transition: Rc<SwipeTransition>, ticket: u64, timer: Rc<RefCell<Option<i32>>>) {
    let Some(win) = web_sys::window() else {
        transition.settle(ticket);
        return;
    };
    if let Some(id) = timer.borrow_mut().take() {
        win.clear_timeout_with_handle(id);
    }
    let done = Closure::once_into_js(move || {
        transition.settle(ticket);
    });
    if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        done.unchecked_ref(),
        TRANSITION_MS,
    ) {
        *timer.borrow_mut() = Some(id);
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let store = use_memo((), |_| NavigationStore::default());
    let nav = use_state(|| store.state());
    let transition = {
        let store = store.clone();
        let full_drag = props.swipe.threshold;
        use_memo((), move |_| SwipeTransition::new(store, full_drag))
    };
    let settle_timer = use_mut_ref(|| None::<i32>);

    // Mirror store broadcasts into component state
    {
        let store = store.clone();
        let nav = nav.clone();
        use_effect_with((), move |_| {
            let sub = store.subscribe(Callback::from(move |s: Rc<NavigationState>| nav.set(s)));
            move || drop(sub)
        });
    }

    // Swipe -> page change, composed here so the recognizer and store stay independent
    let go = {
        let transition = transition.clone();
        let timer = settle_timer.clone();
        Callback::from(move |dir: SwipeDirection| match transition.commit(dir) {
            Some(ticket) => settle_later(transition.clone(), ticket, timer.clone()),
            None => clog(&format!("nav: no page to the {}", dir.as_str())),
        })
    };
    let to_page = {
        let store = store.clone();
        Callback::from(move |page: Page| store.navigate(page))
    };

    let recognizer = {
        let go = go.clone();
        let config = props.swipe.clone();
        use_mut_ref(move || {
            SwipeRecognizer::new(config)
                .on_swipe_left(go.reform(|_| SwipeDirection::Left))
                .on_swipe_right(go.reform(|_| SwipeDirection::Right))
        })
    };

    let root_ref = use_node_ref();
    {
        let root_ref = root_ref.clone();
        let recognizer = recognizer.clone();
        let transition = transition.clone();
        use_effect_with((), move |_| {
            let root: Option<HtmlElement> = root_ref.cast::<HtmlElement>();
            let start_rec = recognizer.clone();
            let touch_start_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(t0) = e.touches().item(0) {
                    let p = ContactPoint::new(t0.client_x() as f64, t0.client_y() as f64);
                    start_rec.borrow_mut().on_contact_start(p, now_ms());
                }
            }) as Box<dyn FnMut(_)>);
            let move_rec = recognizer.clone();
            let move_transition = transition.clone();
            let touch_move_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(t0) = e.touches().item(0) {
                    let p = ContactPoint::new(t0.client_x() as f64, t0.client_y() as f64);
                    let mut rec = move_rec.borrow_mut();
                    if rec.on_contact_move(p) {
                        e.prevent_default();
                    }
                    if let Some(offset) = rec.drag_offset() {
                        move_transition.drag(offset);
                    }
                }
            }) as Box<dyn FnMut(_)>);
            let end_rec = recognizer.clone();
            let end_transition = transition.clone();
            let touch_end_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
                let committed = match e.changed_touches().item(0) {
                    Some(t0) => {
                        let p = ContactPoint::new(t0.client_x() as f64, t0.client_y() as f64);
                        end_rec.borrow_mut().on_contact_end(p, now_ms())
                    }
                    None => None,
                };
                if committed.is_none() {
                    end_transition.release();
                }
            }) as Box<dyn FnMut(_)>);
            let cancel_rec = recognizer.clone();
            let cancel_transition = transition.clone();
            let touch_cancel_cb = Closure::wrap(Box::new(move |_e: TouchEvent| {
                cancel_rec.borrow_mut().on_contact_cancel();
                cancel_transition.release();
            }) as Box<dyn FnMut(_)>);

            if let Some(root) = root.as_ref() {
                let listeners: [(&str, &Closure<dyn FnMut(TouchEvent)>); 4] = [
                    ("touchstart", &touch_start_cb),
                    ("touchmove", &touch_move_cb),
                    ("touchend", &touch_end_cb),
                    ("touchcancel", &touch_cancel_cb),
                ];
                for (name, cb) in listeners {
                    root.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                        .ok();
                }
            }
            // Cleanup
            move || {
                if let Some(root) = root.as_ref() {
                    let listeners: [(&str, &Closure<dyn FnMut(TouchEvent)>); 4] = [
                        ("touchstart", &touch_start_cb),
                        ("touchmove", &touch_move_cb),
                        ("touchend", &touch_end_cb),
                        ("touchcancel", &touch_cancel_cb),
                    ];
                    for (name, cb) in listeners {
                        let _ = root.remove_event_listener_with_callback(
                            name,
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                }
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb, &touch_cancel_cb);
            }
        });
    }

    let state = (**nav).clone();
    let page_class = classes!(
        "page",
        state.is_transitioning.then_some("transitioning"),
        state.swipe_direction.map(|d| format!("slide-{}", d.as_str())),
    );
    let content = match state.current_page {
        Page::Home => html! { <HomePage to_settings={to_page.reform(|_| Page::Settings)} /> },
        Page::Settings => html! { <SettingsPage
            swipe={props.swipe.clone()}
            to_home={to_page.reform(|_| Page::Home)}
        /> },
    };

    html! {
        <div id="root" ref={root_ref} style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:pan-y;">
            <div class={page_class} style={format!("opacity:{};", 1.0 - 0.2 * state.swipe_progress.clamp(0.0, 1.0))}>
                { content }
            </div>
            <PageDots current={state.current_page} />
        </div>
    }
}
