//! Portfolio sections.
//!
//! Fetched sections (home, about, skills, projects) each define a default,
//! a payload shape, and an extractor for [`crate::hydrate::hydrate`]. The
//! journey timeline and profile are compiled in. Contact is the single
//! write path.

pub mod about;
pub mod contact;
pub mod home;
pub mod journey;
pub mod profile;
pub mod projects;
pub mod skills;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub use about::{AboutContent, AboutSection};
pub use contact::{ContactForm, ContactSubmission, SubmissionStatus};
pub use home::HeroContent;
pub use journey::{JourneyEntry, JourneyKind};
pub use profile::SocialLink;
pub use projects::Project;
pub use skills::Skill;

/// Record identifier as the content service sends it: numeric or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Deserialize a field that may be missing or an explicit `null` as its
/// default value.
pub(crate) fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Like [`deserialize_nullable`] for string lists, also dropping `null`
/// entries inside the list.
pub(crate) fn deserialize_nullable_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Option<String>>>::deserialize(deserializer)
        .map(|opt| opt.unwrap_or_default().into_iter().flatten().collect())
}

/// `Some(trimmed)` when the value carries text.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
