pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::components::NoticeToast;
use crate::pages::roulette::RoulettePage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <NoticeToast />
            <RoulettePage />
        </div>
    }
}
