//! Fully-qualified resource names.
//!
//! The service addresses everything by a path-like name composed of a
//! project, a location and a typed resource segment, for example
//! `projects/my-project/locations/us-central1/models/ICN123`.

use crate::{Error, ErrorContext, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Region every sample runs in unless configured otherwise.
pub const DEFAULT_LOCATION: &str = "us-central1";

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

static LOCATION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid regex"));

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^projects/([A-Za-z0-9_-]+)/locations/([a-z0-9-]+)$").expect("valid regex")
});

static CHILD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^projects/([A-Za-z0-9_-]+)/locations/([a-z0-9-]+)/(models|datasets)/([A-Za-z0-9_-]+)$",
    )
    .expect("valid regex")
});

/// Project, model and dataset ids: letters, digits, `-` and `_`.
pub fn is_valid_id(value: &str) -> bool {
    ID_RE.is_match(value)
}

/// Region ids such as `us-central1`.
pub fn is_valid_location(value: &str) -> bool {
    LOCATION_ID_RE.is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationName {
    pub project: String,
    pub location: String,
}

impl LocationName {
    pub fn new(project: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/{}/locations/{}", self.project, self.location)
    }
}

impl FromStr for LocationName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = LOCATION_RE
            .captures(s)
            .ok_or_else(|| malformed(s, "projects/{project}/locations/{location}"))?;
        Ok(Self::new(&caps[1], &caps[2]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelName {
    pub project: String,
    pub location: String,
    pub model: String,
}

impl ModelName {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            model: model.into(),
        }
    }

    pub fn parent(&self) -> LocationName {
        LocationName::new(&self.project, &self.location)
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/models/{}", self.parent(), self.model)
    }
}

impl FromStr for ModelName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (project, location, id) = parse_child(s, "models")?;
        Ok(Self::new(project, location, id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetName {
    pub project: String,
    pub location: String,
    pub dataset: String,
}

impl DatasetName {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        dataset: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            dataset: dataset.into(),
        }
    }

    pub fn parent(&self) -> LocationName {
        LocationName::new(&self.project, &self.location)
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/datasets/{}", self.parent(), self.dataset)
    }
}

impl FromStr for DatasetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (project, location, id) = parse_child(s, "datasets")?;
        Ok(Self::new(project, location, id))
    }
}

fn parse_child<'a>(s: &'a str, collection: &str) -> Result<(&'a str, &'a str, &'a str)> {
    let expected = format!("projects/{{project}}/locations/{{location}}/{collection}/{{id}}");
    let caps = CHILD_RE.captures(s).ok_or_else(|| malformed(s, &expected))?;
    if &caps[3] != collection {
        return Err(malformed(s, &expected));
    }
    let get = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();
    Ok((get(1), get(2), get(4)))
}

fn malformed(input: &str, expected: &str) -> Error {
    Error::validation_with_context(
        format!("malformed resource name '{input}'"),
        ErrorContext::new()
            .with_details(format!("expected {expected}"))
            .with_source("resource_name"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_format() {
        let name = ModelName::new("proj-1", DEFAULT_LOCATION, "model-1");
        assert_eq!(
            name.to_string(),
            "projects/proj-1/locations/us-central1/models/model-1"
        );
        assert_eq!(
            name.parent().to_string(),
            "projects/proj-1/locations/us-central1"
        );
    }

    #[test]
    fn test_parse_round_trips() {
        let model: ModelName = "projects/p/locations/eu/models/ICN42".parse().unwrap();
        assert_eq!(model, ModelName::new("p", "eu", "ICN42"));

        let dataset: DatasetName = "projects/p/locations/eu/datasets/IOD7".parse().unwrap();
        assert_eq!(dataset.dataset, "IOD7");

        let location: LocationName = "projects/p/locations/eu".parse().unwrap();
        assert_eq!(location, LocationName::new("p", "eu"));
    }

    #[test]
    fn test_parse_rejects_wrong_collection() {
        let err = "projects/p/locations/eu/datasets/IOD7"
            .parse::<ModelName>()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_id_alphabet() {
        assert!(is_valid_id("proj-1"));
        assert!(is_valid_id("ICN_42"));
        for bad in ["", "..", ".", "p?x=", "m#f", "a%2Fb", "a b", "a/b"] {
            assert!(!is_valid_id(bad), "{bad}");
        }
        assert!(is_valid_location("us-central1"));
        assert!(!is_valid_location("US-Central1"));
        assert!(!is_valid_location("../eu"));
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!("projects//locations/eu".parse::<LocationName>().is_err());
        assert!("projects/p/locations/eu/models/"
            .parse::<ModelName>()
            .is_err());
        assert!("models/abc".parse::<ModelName>().is_err());
    }
}
