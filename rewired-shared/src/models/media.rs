use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Short-lived signature authorizing one direct-to-host upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSignature {
    /// Media host endpoint to POST the file to.
    pub upload_url: String,
    /// Public API key of the media account.
    pub api_key: String,
    /// Unix timestamp the signature was minted at.
    pub timestamp: i64,
    /// The signature itself.
    pub signature: String,
    /// Target folder on the media host, when one is enforced.
    #[serde(default)]
    pub folder: Option<String>,
}

/// Receipt returned by the media host after a direct upload.
///
/// The host speaks snake_case, so this struct keeps serde's default casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaHostUpload {
    /// Host-assigned asset identifier.
    pub public_id: String,
    /// Canonical HTTPS URL of the stored asset.
    pub secure_url: String,
    /// Asset kind reported by the host (e.g., "image").
    pub resource_type: String,
    /// Stored size in bytes.
    pub bytes: u64,
    /// Pixel width, for images.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height, for images.
    #[serde(default)]
    pub height: Option<u32>,
}

/// Input for recording a completed upload with our own API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistMediaRequest {
    /// Host-assigned asset identifier.
    pub public_id: String,
    /// Canonical HTTPS URL of the stored asset.
    pub url: String,
    /// Asset kind reported by the host.
    pub resource_type: String,
    /// Stored size in bytes.
    pub bytes: u64,
}

/// A media asset known to our API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    /// Asset ID in our catalog.
    pub id: String,
    /// Host-assigned asset identifier.
    pub public_id: String,
    /// Canonical HTTPS URL of the stored asset.
    pub url: String,
    /// Asset kind.
    pub resource_type: String,
    /// Stored size in bytes.
    pub bytes: u64,
    /// When the asset was recorded.
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn signature_decodes_camel_case_payload() {
        let json = r#"{
            "uploadUrl": "https://media.example.com/v1/rewired/image/upload",
            "apiKey": "874211",
            "timestamp": 1736067600,
            "signature": "ab12cd34",
            "folder": "products"
        }"#;

        let signature: UploadSignature = serde_json::from_str(json).unwrap();
        assert_eq!(signature.timestamp, 1_736_067_600);
        assert_eq!(signature.folder.as_deref(), Some("products"));
    }

    #[test]
    fn host_receipt_keeps_snake_case() {
        let json = r#"{
            "public_id": "products/x1-front",
            "secure_url": "https://media.example.com/rewired/products/x1-front.jpg",
            "resource_type": "image",
            "bytes": 48211,
            "width": 1200,
            "height": 900
        }"#;

        let receipt: MediaHostUpload = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.public_id, "products/x1-front");
        assert_eq!(receipt.width, Some(1200));
    }

    #[test]
    fn persist_request_serializes_camel_cased() {
        let request = PersistMediaRequest {
            public_id: "products/x1-front".to_string(),
            url: "https://media.example.com/rewired/products/x1-front.jpg".to_string(),
            resource_type: "image".to_string(),
            bytes: 48_211,
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert!(serialized.contains("\"publicId\""));
        assert!(serialized.contains("\"resourceType\""));
        assert!(!serialized.contains("secure_url"));
    }
}
