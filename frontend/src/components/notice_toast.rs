use shared::NoticeLevel;
use yew::prelude::*;

use crate::hooks::use_notice_feed;
use crate::styles;

fn toast_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => styles::CARD_SUCCESS,
        NoticeLevel::Info => styles::CARD_INFO,
        NoticeLevel::Warning => styles::CARD_WARNING,
        NoticeLevel::Error => styles::CARD_ERROR,
    }
}

#[function_component(NoticeToast)]
pub fn notice_toast() -> Html {
    let toasts = use_notice_feed();

    html! {
        <div class={styles::TOAST_STACK}>
            { for toasts.iter().map(|toast| html! {
                <div key={toast.id} class={classes!(toast_class(toast.level), "shadow-lg")}>
                    { toast.message.clone() }
                </div>
            }) }
        </div>
    }
}
