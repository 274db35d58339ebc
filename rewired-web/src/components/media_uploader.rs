//! Direct-to-host media upload.
//!
//! Three-step handshake: ask our API for a short-lived signature, push the
//! file bytes straight to the media host with that signature, then record
//! the host's answer back with our API. The file never passes through our
//! backend.

use js_sys::Uint8Array;
use shared::models::{MediaAsset, PersistMediaRequest};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::api::StorefrontClient;
use crate::inflight::use_in_flight;
use crate::notify;

/// Which step of the handshake gave up. The display text doubles as the
/// toast message, so each step reads as its own sentence.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Could not start the upload")]
    Signature(#[source] reqwest::Error),
    #[error("Could not read the selected file")]
    Read,
    #[error("The media host refused the upload")]
    Host(#[source] reqwest::Error),
    #[error("Uploaded, but the asset could not be recorded")]
    Record(#[source] reqwest::Error),
}

#[derive(Properties, PartialEq)]
pub struct MediaUploaderProps {
    /// Fired with the stored asset once the full handshake completes.
    #[prop_or_default]
    pub on_uploaded: Callback<MediaAsset>,
}

async fn read_file_bytes(file: &File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

async fn run_handshake(file: File) -> Result<MediaAsset, UploadError> {
    let client = StorefrontClient::shared();

    let signature = client
        .create_upload_signature()
        .await
        .map_err(UploadError::Signature)?;

    let bytes = read_file_bytes(&file)
        .await
        .map_err(|_| UploadError::Read)?;
    let mime_type = if file.type_().is_empty() {
        "application/octet-stream".to_string()
    } else {
        file.type_()
    };
    let uploaded = client
        .upload_media_file(&signature, &file.name(), &mime_type, bytes)
        .await
        .map_err(UploadError::Host)?;

    let record = PersistMediaRequest {
        public_id: uploaded.public_id,
        url: uploaded.secure_url,
        resource_type: uploaded.resource_type,
        bytes: uploaded.bytes,
    };
    client
        .record_media_upload(&record)
        .await
        .map_err(UploadError::Record)
}

#[function_component(MediaUploader)]
pub fn media_uploader(props: &MediaUploaderProps) -> Html {
    let flight = use_in_flight();

    let onchange = {
        let flight = flight.clone();
        let on_uploaded = props.on_uploaded.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            // Reset so picking the same file again still fires a change.
            input.set_value("");

            let Some(guard) = flight.try_begin() else {
                return;
            };
            let on_uploaded = on_uploaded.clone();
            spawn_local(async move {
                match run_handshake(file).await {
                    Ok(asset) => {
                        notify::success("Upload complete");
                        on_uploaded.emit(asset);
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("media upload failed: {err:?}").into());
                        notify::error(err.to_string());
                    }
                }
                drop(guard);
            });
        })
    };

    html! {
        <div class="flex items-center gap-3">
            <input
                type="file"
                class="file-input file-input-bordered"
                accept="image/*"
                {onchange}
                disabled={flight.is_busy()}
            />
            {
                if flight.is_busy() {
                    html! { <span class="loading loading-spinner loading-sm"></span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
