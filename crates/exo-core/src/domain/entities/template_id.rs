//! Logical template identifiers.
//!
//! Templates are addressed by a forward-slash path such as
//! `templates/k8s/service.yaml.tmpl`. The `templates/` prefix is logical: it
//! is stripped before any tier is consulted, so every source sees the same
//! relative key (`k8s/service.yaml.tmpl`).

use std::fmt;

use crate::domain::DomainError;

/// Prefix carried by logical template identifiers.
pub const LOGICAL_PREFIX: &str = "templates/";

/// Normalized template identifier.
///
/// Invariant: non-empty, forward slashes only, no leading slash, no `..`
/// segment, logical prefix removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    /// Parse and normalize a template identifier.
    ///
    /// Accepts both `templates/docker/go.tmpl` and `docker/go.tmpl`;
    /// backslashes are treated as separators.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let normalized = raw.trim().replace('\\', "/");
        let relative = normalized
            .strip_prefix(LOGICAL_PREFIX)
            .unwrap_or(&normalized)
            .trim_start_matches("./");

        let invalid = |reason: &str| DomainError::InvalidTemplateId {
            id: raw.to_string(),
            reason: reason.to_string(),
        };

        if relative.is_empty() {
            return Err(invalid("identifier is empty"));
        }
        if relative.starts_with('/') {
            return Err(invalid("identifier must be relative"));
        }
        if relative.split('/').any(|seg| seg == ".." || seg.is_empty()) {
            return Err(invalid("identifier contains an empty or '..' segment"));
        }

        Ok(Self(relative.to_string()))
    }

    /// The key every template source is queried with.
    pub fn relative_path(&self) -> &str {
        &self.0
    }

    /// The identifier with its logical prefix, as users write it.
    pub fn logical(&self) -> String {
        format!("{LOGICAL_PREFIX}{}", self.0)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LOGICAL_PREFIX}{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_logical_prefix() {
        let id = TemplateId::new("templates/docker/go.tmpl").unwrap();
        assert_eq!(id.relative_path(), "docker/go.tmpl");
        assert_eq!(id.to_string(), "templates/docker/go.tmpl");
        assert_eq!(id, TemplateId::new("docker/go.tmpl").unwrap());
    }

    #[test]
    fn normalizes_backslashes() {
        let id = TemplateId::new(r"templates\k8s\service.yaml.tmpl").unwrap();
        assert_eq!(id.relative_path(), "k8s/service.yaml.tmpl");
    }

    #[test]
    fn rejects_escaping_identifiers() {
        assert!(TemplateId::new("").is_err());
        assert!(TemplateId::new("templates/").is_err());
        assert!(TemplateId::new("/etc/passwd").is_err());
        assert!(TemplateId::new("templates/../secret").is_err());
        assert!(TemplateId::new("docker//go.tmpl").is_err());
    }
}
