use shared::models::{Review, ReviewStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::review_table::ReviewTable;

const FILTERS: [ReviewStatus; 3] = [
    ReviewStatus::Pending,
    ReviewStatus::Approved,
    ReviewStatus::Rejected,
];

fn filter_label(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "Pending",
        ReviewStatus::Approved => "Approved",
        ReviewStatus::Rejected => "Rejected",
    }
}

fn empty_message(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "The moderation queue is clear.",
        ReviewStatus::Approved => "No approved reviews yet.",
        ReviewStatus::Rejected => "No rejected reviews.",
    }
}

/// Back-office moderation queue, filtered by status. Verdicts land in place;
/// a row keeps its seat until the next fetch even once it stops matching the
/// filter.
#[function_component(AdminReviewsPage)]
pub fn admin_reviews_page() -> Html {
    let filter = use_state(|| ReviewStatus::Pending);
    let queue = use_state(|| None::<Vec<Review>>);
    let error_message = use_state(|| None::<String>);

    {
        let queue_handle = queue.clone();
        let error_handle = error_message.clone();
        use_effect_with(*filter, move |filter| {
            queue_handle.set(None);
            error_handle.set(None);

            let status = *filter;
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.list_reviews(status).await {
                    Ok(reviews) => {
                        queue_handle.set(Some(reviews));
                    }
                    Err(err) => {
                        error_handle.set(Some(format!("Failed to load the queue: {err}")));
                    }
                }
            });
            || ()
        });
    }

    let on_moderated = {
        let queue = queue.clone();
        Callback::from(move |moderated: Review| {
            if let Some(current) = (*queue).clone() {
                queue.set(Some(
                    current
                        .into_iter()
                        .map(|review| {
                            if review.id == moderated.id {
                                moderated.clone()
                            } else {
                                review
                            }
                        })
                        .collect(),
                ));
            }
        })
    };

    let tabs = html! {
        <div role="tablist" class="tabs tabs-boxed w-fit">
            { for FILTERS.iter().map(|status| {
                let active = *status == *filter;
                let onclick = {
                    let filter = filter.clone();
                    let status = *status;
                    Callback::from(move |_: MouseEvent| filter.set(status))
                };
                html! {
                    <button
                        type="button"
                        role="tab"
                        class={classes!("tab", active.then_some("tab-active"))}
                        {onclick}
                    >
                        { filter_label(*status) }
                    </button>
                }
            }) }
        </div>
    };

    let body = if let Some(error) = (*error_message).clone() {
        html! { <div class="alert alert-error">{ error }</div> }
    } else if let Some(reviews) = (*queue).clone() {
        if reviews.is_empty() {
            html! { <p class="text-base-content/60">{ empty_message(*filter) }</p> }
        } else {
            html! { <ReviewTable {reviews} {on_moderated} /> }
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Review moderation" }</h1>
            { tabs }
            { body }
        </div>
    }
}
