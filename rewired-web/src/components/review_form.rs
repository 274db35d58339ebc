use shared::models::{Review, SubmitReviewRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::StorefrontClient;
use crate::auth::session::use_session;
use crate::inflight::use_in_flight;
use crate::notify;
use crate::routes::{LoginQuery, MainRoute};
use crate::validation::{ValidationError, validate_rating, validate_review_body};

#[derive(Properties, PartialEq)]
pub struct ReviewFormProps {
    pub product_id: String,
    /// Fired with the created review once the API accepts it.
    #[prop_or_default]
    pub on_submitted: Callback<Review>,
}

#[function_component(ReviewForm)]
pub fn review_form(props: &ReviewFormProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();
    let location = use_location();
    let rating = use_state(|| 0u8);
    let body = use_state(String::new);
    let rating_error = use_state(|| None::<ValidationError>);
    let body_error = use_state(|| None::<ValidationError>);
    let flight = use_in_flight();

    if session.is_bootstrapping() {
        return html! {};
    }
    if !session.is_authenticated() {
        let onclick = Callback::from(move |_: MouseEvent| {
            let redirect = location
                .as_ref()
                .map(|location| location.path().to_string());
            let _ = navigator.push_with_query(&MainRoute::Login, &LoginQuery { redirect });
        });
        return html! {
            <div class="bg-base-200 rounded-lg p-4 flex items-center justify-between">
                <span class="text-sm">{"Sign in to review this product."}</span>
                <button class="btn btn-sm btn-primary" {onclick}>{"Sign in"}</button>
            </div>
        };
    }

    let stars = {
        let rating = rating.clone();
        (1..=5u8)
            .map(|star| {
                let onclick = {
                    let rating = rating.clone();
                    Callback::from(move |_: MouseEvent| rating.set(star))
                };
                let icon_id = if star <= *rating {
                    IconId::HeroiconsSolidStar
                } else {
                    IconId::HeroiconsOutlineStar
                };
                html! {
                    <button
                        type="button"
                        class="btn btn-ghost btn-xs px-1"
                        {onclick}
                        aria-label={format!("{star} stars")}
                    >
                        <Icon {icon_id} width="20" height="20" />
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let oninput = {
        let body = body.clone();
        Callback::from(move |event: InputEvent| {
            let textarea: HtmlTextAreaElement = event.target_unchecked_into();
            body.set(textarea.value());
        })
    };

    let onsubmit = {
        let product_id = props.product_id.clone();
        let on_submitted = props.on_submitted.clone();
        let rating = rating.clone();
        let body = body.clone();
        let rating_error = rating_error.clone();
        let body_error = body_error.clone();
        let flight = flight.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let rating_check = validate_rating(*rating);
            let body_check = validate_review_body(&body);
            rating_error.set(rating_check.clone().err());
            body_error.set(body_check.clone().err());
            if rating_check.is_err() || body_check.is_err() {
                return;
            }

            let Some(guard) = flight.try_begin() else {
                return;
            };
            let product_id = product_id.clone();
            let on_submitted = on_submitted.clone();
            let payload = SubmitReviewRequest {
                rating: *rating,
                body: body.trim().to_string(),
            };
            let rating = rating.clone();
            let body = body.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.submit_review(&product_id, &payload).await {
                    Ok(review) => {
                        rating.set(0);
                        body.set(String::new());
                        notify::success("Thanks! Your review is awaiting moderation.");
                        on_submitted.emit(review);
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("review submission failed: {err}").into(),
                        );
                        notify::error("Could not submit your review");
                    }
                }
                drop(guard);
            });
        })
    };

    let field_error = |error: &Option<ValidationError>| {
        error.as_ref().map_or_else(
            || html! {},
            |error| html! { <span class="text-error text-sm">{ error.message() }</span> },
        )
    };

    html! {
        <form class="flex flex-col gap-2" {onsubmit}>
            <h3 class="font-semibold">{"Write a review"}</h3>
            <div class="flex items-center">
                { for stars.into_iter() }
            </div>
            { field_error(&rating_error) }
            <textarea
                class="textarea textarea-bordered"
                rows="3"
                placeholder="How is it holding up?"
                value={(*body).clone()}
                {oninput}
            />
            { field_error(&body_error) }
            <button class="btn btn-primary self-start" type="submit" disabled={flight.is_busy()}>
                { if flight.is_busy() { "Submitting…" } else { "Submit review" } }
            </button>
        </form>
    }
}
