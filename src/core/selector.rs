//! Label and field selectors
//!
//! Translates the `labelSelector` / `fieldSelector` query expressions into a
//! predicate over the [`Metadata`] of any extension.
//!
//! Each selector may be given several times; the requirements of every
//! occurrence are ANDed.
//!
//! Label requirements (comma-separated):
//! - `key=value`, `key!=value`
//! - `key` (label present), `!key` (label absent)
//!
//! Field requirements (comma-separated):
//! - `metadata.name=value`, `metadata.name!=value` (`name` is accepted as
//!   a short form). Requirements on other fields never match.

use crate::core::compare::Predicate;
use crate::core::error::{EquipmentsResult, ValidationError};
use crate::core::extension::{Extension, Metadata};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LabelRequirement {
    Equals(String, String),
    NotEquals(String, String),
    Exists(String),
    NotExists(String),
}

impl LabelRequirement {
    fn parse(raw: &str) -> EquipmentsResult<Self> {
        let requirement = if let Some(key) = raw.strip_prefix('!') {
            if key.contains('=') {
                return Err(invalid(raw, "'!key' takes no value"));
            }
            LabelRequirement::NotExists(key.trim().to_string())
        } else if let Some((key, value)) = raw.split_once("!=") {
            LabelRequirement::NotEquals(key.trim().to_string(), value.trim().to_string())
        } else if let Some((key, value)) = raw.split_once('=') {
            let value = value.strip_prefix('=').unwrap_or(value);
            LabelRequirement::Equals(key.trim().to_string(), value.trim().to_string())
        } else {
            LabelRequirement::Exists(raw.to_string())
        };

        if requirement.key().is_empty() {
            return Err(invalid(raw, "label key must not be empty"));
        }
        Ok(requirement)
    }

    fn key(&self) -> &str {
        match self {
            LabelRequirement::Equals(key, _)
            | LabelRequirement::NotEquals(key, _)
            | LabelRequirement::Exists(key)
            | LabelRequirement::NotExists(key) => key,
        }
    }

    fn matches(&self, metadata: &Metadata) -> bool {
        match self {
            LabelRequirement::Equals(key, value) => metadata.label(key) == Some(value.as_str()),
            LabelRequirement::NotEquals(key, value) => metadata.label(key) != Some(value.as_str()),
            LabelRequirement::Exists(key) => metadata.label(key).is_some(),
            LabelRequirement::NotExists(key) => metadata.label(key).is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldRequirement {
    field: String,
    value: String,
    negated: bool,
}

impl FieldRequirement {
    fn parse(raw: &str) -> EquipmentsResult<Self> {
        let (field, value, negated) = if let Some((field, value)) = raw.split_once("!=") {
            (field, value, true)
        } else if let Some((field, value)) = raw.split_once('=') {
            (field, value.strip_prefix('=').unwrap_or(value), false)
        } else {
            return Err(invalid(raw, "field requirement needs '=' or '!='"));
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(invalid(raw, "field name must not be empty"));
        }
        Ok(Self {
            field: field.to_string(),
            value: value.trim().to_string(),
            negated,
        })
    }

    fn matches(&self, metadata: &Metadata) -> bool {
        let actual = match self.field.as_str() {
            "metadata.name" | "name" => metadata.name.as_str(),
            _ => return false,
        };
        (actual == self.value) != self.negated
    }
}

fn invalid(selector: &str, message: &str) -> crate::core::error::EquipmentsError {
    ValidationError::InvalidSelector {
        selector: selector.to_string(),
        message: message.to_string(),
    }
    .into()
}

fn requirements<S: AsRef<str>>(expressions: &[S]) -> impl Iterator<Item = &str> {
    expressions
        .iter()
        .flat_map(|expression| expression.as_ref().split(','))
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
}

/// Parsed label and field selectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    labels: Vec<LabelRequirement>,
    fields: Vec<FieldRequirement>,
}

impl Selector {
    /// Parse every occurrence of both selectors; no or blank expressions match everything
    pub fn parse<L: AsRef<str>, F: AsRef<str>>(
        label_selectors: &[L],
        field_selectors: &[F],
    ) -> EquipmentsResult<Self> {
        let labels = requirements(label_selectors)
            .map(LabelRequirement::parse)
            .collect::<EquipmentsResult<Vec<_>>>()?;
        let fields = requirements(field_selectors)
            .map(FieldRequirement::parse)
            .collect::<EquipmentsResult<Vec<_>>>()?;
        Ok(Self { labels, fields })
    }

    /// Whether the selector has no requirement at all
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.fields.is_empty()
    }

    /// Check every requirement against a record's metadata
    pub fn matches(&self, metadata: &Metadata) -> bool {
        self.labels.iter().all(|r| r.matches(metadata))
            && self.fields.iter().all(|r| r.matches(metadata))
    }

    /// Turn the selector into a predicate over any extension kind
    pub fn into_predicate<E: Extension>(self) -> Predicate<E> {
        Arc::new(move |extension: &E| self.matches(extension.metadata()))
    }
}
