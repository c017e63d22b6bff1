//! Hero section: greeting and rotating subtitles.

use serde::Deserialize;

use crate::error::GatewayError;
use crate::hydrate::{decode_json, Extracted};
use crate::traits::Response;

pub const HOME_ENDPOINT: &str = "/home";
pub const HERO_TITLE: &str = "Hello, I'm";
pub const DEFAULT_SUBTITLES: [&str; 2] = ["Full Stack Developer", "MERN Specialist"];

/// Hero content. `subtitles` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub subtitles: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: HERO_TITLE.to_string(),
            subtitles: DEFAULT_SUBTITLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HomePayload {
    #[serde(default)]
    subtitle: Option<String>,
}

/// Split a comma-separated subtitle string, trimming and dropping blanks.
pub fn parse_subtitles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extractor for `GET /home`.
pub fn extract_home(
    response: &Response,
    default: &HeroContent,
) -> Result<Extracted<HeroContent>, GatewayError> {
    let payload: HomePayload = decode_json(response, HOME_ENDPOINT)?;
    let subtitles = payload
        .subtitle
        .map(|raw| parse_subtitles(&raw))
        .unwrap_or_default();

    if subtitles.is_empty() {
        return Ok(Extracted::Empty);
    }

    Ok(Extracted::Success(HeroContent {
        title: default.title.clone(),
        subtitles,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(body: serde_json::Value) -> Extracted<HeroContent> {
        extract_home(&Response::json_body(200, &body), &HeroContent::default()).unwrap()
    }

    #[test]
    fn test_parse_subtitles() {
        assert_eq!(parse_subtitles("A,B"), vec!["A", "B"]);
        assert_eq!(parse_subtitles(" A , ,B ,"), vec!["A", "B"]);
        assert!(parse_subtitles(" , ").is_empty());
    }

    #[test]
    fn test_subtitles_replace_defaults() {
        match extract(json!({"subtitle": "A,B,C"})) {
            Extracted::Success(hero) => {
                assert_eq!(hero.title, HERO_TITLE);
                assert_eq!(hero.subtitles, vec!["A", "B", "C"]);
            }
            Extracted::Empty => panic!("expected subtitles"),
        }
    }

    #[test]
    fn test_missing_or_blank_subtitle_is_empty() {
        assert_eq!(extract(json!({})), Extracted::Empty);
        assert_eq!(extract(json!({"subtitle": ""})), Extracted::Empty);
        assert_eq!(extract(json!({"subtitle": null})), Extracted::Empty);
        assert_eq!(extract(json!({"subtitle": " , "})), Extracted::Empty);
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let result = extract_home(
            &Response::json_body(200, &json!({"subtitle": 3})),
            &HeroContent::default(),
        );
        assert!(matches!(result, Err(GatewayError::MalformedPayload { .. })));
    }
}
