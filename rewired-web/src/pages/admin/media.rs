use shared::models::MediaAsset;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};

use crate::api::StorefrontClient;
use crate::components::loading::Loading;
use crate::components::media_uploader::MediaUploader;

/// Human-readable size for the asset table.
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        #[allow(clippy::cast_precision_loss)]
        let value = bytes as f64 / MB as f64;
        format!("{value:.1} MB")
    } else if bytes >= KB {
        #[allow(clippy::cast_precision_loss)]
        let value = bytes as f64 / KB as f64;
        format!("{value:.1} KB")
    } else {
        format!("{bytes} B")
    }
}

fn asset_row(asset: &MediaAsset) -> Html {
    let preview = if asset.resource_type == "image" {
        html! {
            <img
                class="w-12 h-12 object-cover rounded-box"
                src={asset.url.clone()}
                alt={asset.public_id.clone()}
                loading="lazy"
            />
        }
    } else {
        html! { <div class="w-12 h-12 bg-base-200 rounded-box"></div> }
    };

    html! {
        <tr key={asset.id.clone()}>
            <td>{ preview }</td>
            <td>
                <a class="link link-hover font-mono text-sm" href={asset.url.clone()} target="_blank" rel="noopener">
                    { asset.public_id.clone() }
                </a>
            </td>
            <td>{ asset.resource_type.clone() }</td>
            <td>{ format_bytes(asset.bytes) }</td>
            <td>{ asset.created_at.clone() }</td>
        </tr>
    }
}

/// Back-office media library: direct-to-host uploads plus the asset index.
#[function_component(AdminMediaPage)]
pub fn admin_media_page() -> Html {
    let assets = use_state(|| None::<Vec<MediaAsset>>);
    let error_message = use_state(|| None::<String>);

    {
        let assets_handle = assets.clone();
        let error_handle = error_message.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = StorefrontClient::shared();
                match client.list_media().await {
                    Ok(list) => {
                        assets_handle.set(Some(list));
                    }
                    Err(err) => {
                        error_handle.set(Some(format!("Failed to load the media library: {err}")));
                    }
                }
            });
            || ()
        });
    }

    let on_uploaded = {
        let assets = assets.clone();
        Callback::from(move |asset: MediaAsset| {
            let mut next = (*assets).clone().unwrap_or_default();
            next.insert(0, asset);
            assets.set(Some(next));
        })
    };

    let body = if let Some(error) = (*error_message).clone() {
        html! { <div class="alert alert-error">{ error }</div> }
    } else if let Some(list) = (*assets).clone() {
        if list.is_empty() {
            html! { <p class="text-base-content/60">{ "No assets yet. Upload the first one above." }</p> }
        } else {
            html! {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>{ "Asset" }</th>
                                <th>{ "Type" }</th>
                                <th>{ "Size" }</th>
                                <th>{ "Uploaded" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for list.iter().map(asset_row) }
                        </tbody>
                    </table>
                </div>
            }
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Media library" }</h1>
            <MediaUploader {on_uploaded} />
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_picks_the_right_unit() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(48_211), "47.1 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
