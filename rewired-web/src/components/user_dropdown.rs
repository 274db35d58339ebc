use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

use crate::auth::session::use_session;
use crate::routes::{AdminRoute, MainRoute};

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let session = use_session();
    let Some(user) = session.user().cloned() else {
        return html! {};
    };

    let account_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigator.push(&MainRoute::Account);
        });
        html! {
            <li><a {onclick}>{"Account"}</a></li>
        }
    };

    let admin_button = if session.is_admin() {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigator.push(&AdminRoute::Reviews);
        });
        html! {
            <li><a {onclick}>{"Back office"}</a></li>
        }
    } else {
        html! {}
    };

    let logout_button = {
        let navigator = navigator;
        let session = session.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            session.sign_out();
            navigator.push(&MainRoute::Home);
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} width="22" height="22" />
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name().to_string() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {account_button}
                {admin_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
