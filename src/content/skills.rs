//! Skills collection.

use serde::{Deserialize, Serialize};

use super::{deserialize_nullable, RecordId};
use crate::error::GatewayError;
use crate::hydrate::{decode_json, Extracted};
use crate::traits::Response;

pub const SKILLS_ENDPOINT: &str = "/skills?limit=100";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
    /// Category key, e.g. `FRONTEND`
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub category: String,
}

#[derive(Debug, Default, Deserialize)]
struct SkillsPayload {
    #[serde(default)]
    skills: Option<Vec<Skill>>,
}

/// Extractor for `GET /skills`. A missing or empty list keeps the default.
#[allow(clippy::ptr_arg)]
pub fn extract_skills(
    response: &Response,
    _default: &Vec<Skill>,
) -> Result<Extracted<Vec<Skill>>, GatewayError> {
    let payload: SkillsPayload = decode_json(response, SKILLS_ENDPOINT)?;
    Ok(Extracted::from_option(
        payload.skills.filter(|skills| !skills.is_empty()),
    ))
}
