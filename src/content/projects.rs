//! Projects collection.

use serde::{Deserialize, Serialize};

use super::{deserialize_nullable, deserialize_nullable_strings, RecordId};
use crate::error::GatewayError;
use crate::gateway::GatewayClient;
use crate::hydrate::{decode_json, Extracted};
use crate::traits::Response;

pub const PROJECTS_ENDPOINT: &str = "/projects";

/// Shown when a project has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_strings")]
    pub tech_stack: Vec<String>,
    /// Server-relative image paths
    #[serde(default, deserialize_with = "deserialize_nullable_strings")]
    pub images: Vec<String>,
    #[serde(default)]
    pub repo_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
}

impl Project {
    /// Cover image URL: the first image against the service base address,
    /// or [`PLACEHOLDER_IMAGE`].
    pub fn cover_image(&self, gateway: &GatewayClient) -> String {
        self.images
            .iter()
            .map(|path| path.trim())
            .find(|path| !path.is_empty())
            .map(|path| gateway.resolve_url(path))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProjectsPayload {
    #[serde(default)]
    items: Option<Vec<Project>>,
}

/// Extractor for `GET /projects`.
#[allow(clippy::ptr_arg)]
pub fn extract_projects(
    response: &Response,
    _default: &Vec<Project>,
) -> Result<Extracted<Vec<Project>>, GatewayError> {
    let payload: ProjectsPayload = decode_json(response, PROJECTS_ENDPOINT)?;
    Ok(Extracted::from_option(
        payload.items.filter(|items| !items.is_empty()),
    ))
}
