use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across commands.
pub struct DomainValidator;

impl DomainValidator {
    /// Application names end up in chart directories, image tags and
    /// Kubernetes object names.
    pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
        let fail = |reason: &str| {
            Err(DomainError::InvalidAppName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.is_empty() {
            return fail("name cannot be empty");
        }
        if name.len() > 63 {
            return fail("name must be at most 63 characters");
        }
        if name.starts_with(['.', '-', '_']) {
            return fail("name must start with a letter or digit");
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return fail("only letters, digits, '-', '_' and '.' are allowed");
        }
        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<(), DomainError> {
        if port == 0 {
            return Err(DomainError::InvalidValue {
                field: "port",
                value: port.to_string(),
                expected: "1-65535",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for name in ["my-service", "billing_api", "web2", "api.v2"] {
            assert!(DomainValidator::validate_app_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_bad_names() {
        let long = "x".repeat(64);
        for name in ["", ".hidden", "-dash", "with space", "a/b", long.as_str()] {
            assert!(DomainValidator::validate_app_name(name).is_err(), "{name}");
        }
    }

    #[test]
    fn zero_port_is_invalid() {
        assert!(DomainValidator::validate_port(0).is_err());
        assert!(DomainValidator::validate_port(3000).is_ok());
    }
}
