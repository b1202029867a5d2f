use serde::{Deserialize, Serialize};

use crate::tags::Tags;

/// Metadatos inferidos de una ruta. `album` queda reservado: el extractor nunca lo rellena.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(default, skip_serializing_if = "no_tags")]
    pub tags: Tags,
    /// `"."` significa que el nombre no tenía extensión.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_extension: String,
}

fn no_tags(tags: &Tags) -> bool {
    tags.is_empty()
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
