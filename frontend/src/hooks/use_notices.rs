use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use shared::{Notice, NoticeLevel};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CustomEvent, CustomEventInit, Event};
use yew::prelude::*;

pub const NOTICE_EVENT: &str = "rouletteNotice";
const TOAST_MS: u32 = 3000;

/// Payload carried in the `rouletteNotice` event detail, as JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

impl Toast {
    pub fn from_notice(id: u32, notice: &Notice) -> Self {
        Self {
            id,
            level: notice.level(),
            message: notice.message(),
        }
    }
}

/// Logs the notice and broadcasts it on the window.
pub fn dispatch_notice(id: u32, notice: &Notice) {
    let toast = Toast::from_notice(id, notice);
    match toast.level {
        NoticeLevel::Error | NoticeLevel::Warning => log::warn!("{}", toast.message),
        NoticeLevel::Success | NoticeLevel::Info => log::info!("{}", toast.message),
    }

    let Ok(detail) = serde_json::to_string(&toast) else {
        return;
    };
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(&detail));
        if let Ok(event) = CustomEvent::new_with_event_init_dict(NOTICE_EVENT, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Toasts currently on screen. Each one disappears after a few seconds.
#[hook]
pub fn use_notice_feed() -> UseStateHandle<Vec<Toast>> {
    let toasts = use_state(Vec::<Toast>::new);
    let latest = use_mut_ref(Vec::<Toast>::new);

    {
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTICE_EVENT, move |event: &Event| {
                    let Some(custom_event) = event.dyn_ref::<CustomEvent>() else {
                        return;
                    };
                    let Some(toast) = custom_event
                        .detail()
                        .as_string()
                        .and_then(|raw| serde_json::from_str::<Toast>(&raw).ok())
                    else {
                        return;
                    };

                    let id = toast.id;
                    latest.borrow_mut().push(toast);
                    toasts.set(latest.borrow().clone());

                    let toasts = toasts.clone();
                    let latest = latest.clone();
                    Timeout::new(TOAST_MS, move || {
                        latest.borrow_mut().retain(|t| t.id != id);
                        toasts.set(latest.borrow().clone());
                    })
                    .forget();
                })
            });

            move || drop(listener)
        });
    }

    toasts
}
