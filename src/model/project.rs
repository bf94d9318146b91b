use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::model::Entity;

/// Fallback MIME type when the browser reports none for a picked file
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Image embedded in the project as a base64 data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub file_name: String,
    pub data_url: String,
}

impl Photo {
    /// Encodes raw file bytes as a `data:<mime>;base64,<payload>` URL.
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Self {
        let content_type = content_type
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        Self {
            file_name: file_name.into(),
            data_url: format!("data:{};base64,{}", content_type, STANDARD.encode(bytes)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<u64>,
    pub name: String,
    pub photo: Option<Photo>,
    pub description: String,
    pub price: String,
}

impl Entity for Project {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}
