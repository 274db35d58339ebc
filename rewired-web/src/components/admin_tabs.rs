use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::AdminRoute;

#[derive(Properties, PartialEq)]
pub struct AdminTabsProps {
    pub current: AdminRoute,
}

/// Tab strip across the top of every back-office page.
#[function_component(AdminTabs)]
pub fn admin_tabs(props: &AdminTabsProps) -> Html {
    html! {
        <div role="tablist" class="tabs tabs-bordered mb-4">
            { for AdminRoute::iter()
                .filter(|route| route != &AdminRoute::NotFound)
                .map(|route| {
                    let active = route == props.current;
                    html! {
                        <Link<AdminRoute>
                            to={route.clone()}
                            classes={classes!("tab", active.then_some("tab-active"))}
                        >
                            <Icon icon_id={route.icon_id()} width="16" height="16" />
                            <span class="ml-1">{ route.label() }</span>
                        </Link<AdminRoute>>
                    }
                }) }
        </div>
    }
}
