use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use stock_core::enums::{AlertStatus, Role};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let role: Role = parse_enum("manager", "role").expect("role should parse");
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn parses_status_values() {
        let status: AlertStatus = parse_enum("resolved", "status").expect("status should parse");
        assert_eq!(status, AlertStatus::Resolved);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Role>("superuser", "role").expect_err("should fail");
        assert!(err.to_string().contains("invalid role 'superuser'"));
    }
}
