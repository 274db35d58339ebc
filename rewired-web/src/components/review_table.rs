use shared::models::{ModerateReviewRequest, Review, ReviewStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::components::rating_stars::RatingStars;
use crate::notify;

#[derive(Properties, PartialEq)]
pub struct ReviewTableProps {
    pub reviews: Vec<Review>,
    /// Fired with the review as the API returned it after moderation.
    #[prop_or_default]
    pub on_moderated: Callback<Review>,
}

fn status_badge_class(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "badge-warning",
        ReviewStatus::Approved => "badge-success",
        ReviewStatus::Rejected => "badge-ghost",
    }
}

/// Moderation queue table. One decision runs at a time; the buttons of all
/// rows disable while a verdict is in flight.
#[function_component(ReviewTable)]
pub fn review_table(props: &ReviewTableProps) -> Html {
    let busy_review = use_state(|| None::<String>);

    let moderate = {
        let busy_review = busy_review.clone();
        let on_moderated = props.on_moderated.clone();
        Callback::from(move |(review_id, status): (String, ReviewStatus)| {
            if busy_review.is_some() {
                return;
            }
            busy_review.set(Some(review_id.clone()));
            let busy_review = busy_review.clone();
            let on_moderated = on_moderated.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client
                    .moderate_review(&review_id, &ModerateReviewRequest { status })
                    .await
                {
                    Ok(review) => {
                        match status {
                            ReviewStatus::Approved => notify::success("Review approved"),
                            ReviewStatus::Rejected => notify::info("Review rejected"),
                            ReviewStatus::Pending => notify::info("Review returned to the queue"),
                        }
                        on_moderated.emit(review);
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("moderation failed: {err}").into());
                        notify::error("Could not update that review");
                    }
                }
                busy_review.set(None);
            });
        })
    };

    let any_busy = busy_review.is_some();

    html! {
        <div class="overflow-x-auto">
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Product"}</th>
                        <th>{"Author"}</th>
                        <th>{"Rating"}</th>
                        <th>{"Review"}</th>
                        <th>{"Submitted"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for props.reviews.iter().map(|review| {
                        let approve = {
                            let moderate = moderate.clone();
                            let id = review.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                moderate.emit((id.clone(), ReviewStatus::Approved));
                            })
                        };
                        let reject = {
                            let moderate = moderate.clone();
                            let id = review.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                moderate.emit((id.clone(), ReviewStatus::Rejected));
                            })
                        };
                        html! {
                            <tr key={review.id.clone()}>
                                <td>{ &review.product_title }</td>
                                <td>{ &review.author_name }</td>
                                <td><RatingStars value={f64::from(review.rating)} /></td>
                                <td class="max-w-md whitespace-normal">{ &review.body }</td>
                                <td>{ review.created_at.clone() }</td>
                                <td>
                                    <span class={classes!("badge", status_badge_class(review.status))}>
                                        { review.status.as_str() }
                                    </span>
                                </td>
                                <td>
                                    <div class="flex gap-1">
                                        <button
                                            class="btn btn-success btn-xs"
                                            onclick={approve}
                                            disabled={any_busy || review.status == ReviewStatus::Approved}
                                        >
                                            {"Approve"}
                                        </button>
                                        <button
                                            class="btn btn-error btn-xs"
                                            onclick={reject}
                                            disabled={any_busy || review.status == ReviewStatus::Rejected}
                                        >
                                            {"Reject"}
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
