use reqwest::StatusCode;
use shared::models::{Product, Review};
use wasm_bindgen_futures::spawn_local;
use yew::{Html, Properties, function_component, html, use_effect_with, use_state};
use yew_router::prelude::Link;

use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::product_actions::ProductActions;
use crate::components::rating_stars::RatingStars;
use crate::components::review_form::ReviewForm;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct ProductDetailPageProps {
    pub handle: String,
}

fn review_item(review: &Review) -> Html {
    html! {
        <div class="border-b border-base-300 py-3 space-y-1" key={review.id.clone()}>
            <div class="flex items-center gap-2">
                <RatingStars value={f64::from(review.rating)} />
                <span class="font-medium">{ review.author_name.clone() }</span>
                <span class="text-xs text-base-content/50">{ review.created_at.clone() }</span>
            </div>
            <p class="text-sm">{ review.body.clone() }</p>
        </div>
    }
}

/// Product detail page: gallery, buy box and the approved review stream.
#[function_component(ProductDetailPage)]
pub fn product_detail_page(props: &ProductDetailPageProps) -> Html {
    let product = use_state(|| None::<Product>);
    let reviews = use_state(Vec::<Review>::new);
    let not_found = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    {
        let product_handle = product.clone();
        let reviews_handle = reviews.clone();
        let not_found_handle = not_found.clone();
        let error_handle = error_message.clone();
        use_effect_with(props.handle.clone(), move |handle| {
            product_handle.set(None);
            reviews_handle.set(Vec::new());
            not_found_handle.set(false);
            error_handle.set(None);

            let handle = handle.clone();
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.get_product(&handle).await {
                    Ok(loaded) => {
                        let product_id = loaded.id.clone();
                        product_handle.set(Some(loaded));
                        match client.list_product_reviews(&product_id).await {
                            Ok(list) => {
                                reviews_handle.set(list);
                            }
                            Err(err) => {
                                error_handle
                                    .set(Some(format!("Failed to load reviews: {err}")));
                            }
                        }
                    }
                    Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => {
                        not_found_handle.set(true);
                    }
                    Err(err) => {
                        error_handle.set(Some(format!("Failed to load the product: {err}")));
                    }
                }
            });

            || ()
        });
    }

    if *not_found {
        return html! {
            <div class="p-4 space-y-6">
                <h1 class="text-2xl font-bold">{ "Product not found" }</h1>
                <p>{ "This listing may have sold out for good." }</p>
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                    { "Back to the shop" }
                </Link<MainRoute>>
            </div>
        };
    }

    let Some(product) = (*product).clone() else {
        return (*error_message).clone().map_or_else(
            || html! { <Loading /> },
            |error| html! { <div class="p-4"><div class="alert alert-error">{ error }</div></div> },
        );
    };

    let gallery = if product.images.is_empty() {
        html! { <div class="w-full aspect-square bg-base-200 rounded-box"></div> }
    } else {
        html! {
            <div class="space-y-2">
                { for product.images.iter().enumerate().map(|(index, image)| html! {
                    <img
                        key={image.url.clone()}
                        class={if index == 0 { "w-full rounded-box" } else { "w-24 rounded-box inline-block mr-2" }}
                        src={image.url.clone()}
                        alt={image.alt_text.clone().unwrap_or_else(|| product.title.clone())}
                    />
                }) }
            </div>
        }
    };

    let review_list = if reviews.is_empty() {
        html! { <p class="text-base-content/60">{ "No reviews yet. Be the first." }</p> }
    } else {
        html! { <div>{ for reviews.iter().map(review_item) }</div> }
    };

    html! {
        <div class="p-4 space-y-8">
            {
                (*error_message).clone().map_or_else(
                    || html! {},
                    |error| html! { <div class="alert alert-error">{ error }</div> },
                )
            }
            <div class="grid md:grid-cols-2 gap-8">
                { gallery }
                <div class="space-y-4">
                    <div class="space-y-1">
                        <p class="text-sm uppercase tracking-wide text-base-content/60">
                            { product.brand.clone() }
                        </p>
                        <h1 class="text-3xl font-bold">{ product.title.clone() }</h1>
                        {
                            product.rating.clone().map_or_else(
                                || html! {},
                                |rating| html! {
                                    <div class="flex items-center gap-2">
                                        <RatingStars value={rating.value} />
                                        <span class="text-sm text-base-content/60">
                                            { format!("{:.1} · {} reviews", rating.value, rating.count) }
                                        </span>
                                    </div>
                                },
                            )
                        }
                    </div>
                    <ProductActions key={product.id.clone()} product={product.clone()} />
                </div>
            </div>
            <div class="space-y-2">
                <h2 class="text-xl font-semibold">{ "About this device" }</h2>
                <p class="whitespace-pre-line">{ product.description.clone() }</p>
            </div>
            <div class="space-y-4">
                <h2 class="text-xl font-semibold">{ "Reviews" }</h2>
                { review_list }
                <ReviewForm product_id={product.id.clone()} />
            </div>
        </div>
    }
}
