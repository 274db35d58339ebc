use shared::models::ProductPage;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::product_card::ProductCard;

/// Storefront landing page: catalog search over the refurbished inventory.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let page = use_state(|| 1u32);
    let attempt = use_state(|| 0u32);
    // The committed search terms. The input is free to drift until submit.
    let query = use_state(String::new);
    let draft = use_state(String::new);
    let catalog = use_state(|| None::<ProductPage>);
    let error_message = use_state(|| None::<String>);

    {
        let catalog_handle = catalog.clone();
        let error_handle = error_message.clone();
        use_effect_with(
            (*page, (*query).clone(), *attempt),
            move |(page, query, _)| {
                catalog_handle.set(None);
                error_handle.set(None);

                let requested = *page;
                let terms = query.clone();
                spawn_local(async move {
                    let client = StorefrontClient::shared();
                    let terms = terms.trim().to_string();
                    let filter = (!terms.is_empty()).then_some(terms.as_str());
                    match client.search_products(filter, requested).await {
                        Ok(response) => {
                            catalog_handle.set(Some(response));
                        }
                        Err(err) => {
                            error_handle.set(Some(format!("Failed to load the catalog: {err}")));
                        }
                    }
                });

                || ()
            },
        );
    }

    let on_search_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.set(input.value());
        })
    };

    // Submitting commits the draft and starts over from the first page.
    let on_search = {
        let page = page.clone();
        let query = query.clone();
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            page.set(1);
            query.set((*draft).clone());
        })
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };

    let on_next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(*page + 1);
        })
    };

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| {
            attempt.set(*attempt + 1);
        })
    };

    let body = if let Some(error) = (*error_message).clone() {
        html! {
            <div class="alert alert-error">
                <span>{ error }</span>
                <button class="btn btn-sm" type="button" onclick={on_retry}>
                    { "Retry" }
                </button>
            </div>
        }
    } else if let Some(results) = (*catalog).clone() {
        let grid = if results.items.is_empty() {
            let message = if query.trim().is_empty() {
                "Nothing on the shelves right now. Check back soon."
            } else {
                "No matches for that search. Try a different term."
            };
            html! { <p class="text-base-content/60">{ message }</p> }
        } else {
            html! {
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                    { for results.items.iter().map(|product| html! {
                        <ProductCard key={product.id.clone()} product={product.clone()} />
                    }) }
                </div>
            }
        };

        let pager = if results.total_pages() > 1 {
            html! {
                <div class="flex items-center justify-center gap-4 pt-4">
                    <button
                        class="btn btn-sm"
                        type="button"
                        disabled={results.page <= 1}
                        onclick={on_prev}
                    >
                        { "Previous" }
                    </button>
                    <span class="text-sm">
                        { format!("Page {} of {}", results.page, results.total_pages()) }
                    </span>
                    <button
                        class="btn btn-sm"
                        type="button"
                        disabled={!results.has_more()}
                        onclick={on_next}
                    >
                        { "Next" }
                    </button>
                </div>
            }
        } else {
            html! {}
        };

        html! {
            <>
                { grid }
                { pager }
            </>
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-bold">{ "Certified refurbished electronics" }</h1>
                <p class="text-base-content/70">
                    { "Graded, tested and guaranteed. Every unit ships with a warranty." }
                </p>
            </div>
            <form class="join w-full max-w-md" onsubmit={on_search}>
                <input
                    class="input input-bordered join-item w-full"
                    type="search"
                    placeholder="Search phones, laptops, consoles…"
                    value={(*draft).clone()}
                    oninput={on_search_input}
                />
                <button class="btn btn-primary join-item" type="submit">
                    { "Search" }
                </button>
            </form>
            { body }
        </div>
    }
}
