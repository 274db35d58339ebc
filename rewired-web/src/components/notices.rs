//! Toast overlay for the global notice queue.
//!
//! Rendered once at the application root, outside the router, so a notice
//! pushed right before a redirect survives the navigation.

use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::notify::{self, NoticeLevel, NoticeStore};

fn alert_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "alert-success",
        NoticeLevel::Error => "alert-error",
        NoticeLevel::Info => "alert-info",
    }
}

#[function_component(Notices)]
pub fn notices() -> Html {
    let (store, _) = use_store::<NoticeStore>();

    if store.notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast toast-top toast-end z-50">
            { for store.notices.iter().map(|notice| {
                let id = notice.id;
                let onclick = Callback::from(move |_| notify::dismiss(id));
                html! {
                    <div key={id.to_string()} class={classes!("alert", alert_class(notice.level))}>
                        <span>{ notice.message.clone() }</span>
                        <button class="btn btn-ghost btn-xs" {onclick} aria-label="Dismiss">
                            {"✕"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
