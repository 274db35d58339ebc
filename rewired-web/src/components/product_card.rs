use shared::models::Product;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::{grade_badge::GradeBadge, rating_stars::RatingStars};
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

/// Catalog grid cell: image, brand, title, rating and the price of the
/// preselected variant.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let route = MainRoute::Product {
        handle: product.handle.clone(),
    };

    let figure = product.featured_image().map_or_else(
        || html! { <div class="w-full aspect-square bg-base-200"></div> },
        |image| {
            html! {
                <img
                    class="w-full aspect-square object-cover"
                    src={image.url.clone()}
                    alt={image.alt_text.clone().unwrap_or_else(|| product.title.clone())}
                    loading="lazy"
                />
            }
        },
    );

    let rating = props.product.rating.as_ref().map_or_else(
        || html! {},
        |rating| html! { <RatingStars value={rating.value} count={rating.count} /> },
    );

    let price_row = product.default_variant().map_or_else(
        || html! { <span class="text-sm text-base-content/60">{"Currently unavailable"}</span> },
        |variant| {
            let compare_at = variant.compare_at_price.as_ref().map_or_else(
                || html! {},
                |original| html! {
                    <span class="text-xs line-through text-base-content/50">
                        { original.to_string() }
                    </span>
                },
            );
            html! {
                <div class="flex items-center justify-between w-full">
                    <div class="flex items-baseline gap-2">
                        <span class="font-semibold">{ variant.price.to_string() }</span>
                        { compare_at }
                    </div>
                    <GradeBadge grade={variant.grade} />
                </div>
            }
        },
    );

    html! {
        <div class="card bg-base-100 shadow-md">
            <Link<MainRoute> to={route.clone()}>
                <figure>{ figure }</figure>
            </Link<MainRoute>>
            <div class="card-body p-4 gap-1">
                <span class="text-xs uppercase tracking-wide text-base-content/60">
                    { &product.brand }
                </span>
                <h2 class="card-title text-base">
                    <Link<MainRoute> to={route}>
                        { &product.title }
                    </Link<MainRoute>>
                </h2>
                { rating }
                <div class="card-actions mt-2">
                    { price_row }
                </div>
            </div>
        </div>
    }
}
