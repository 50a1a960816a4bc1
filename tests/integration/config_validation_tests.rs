//! Configuration validation integration tests
//!
//! Tests for loading and validating configuration files. These verify that
//! configuration validates correctly and fails appropriately for invalid
//! values.

#[cfg(test)]
mod tests {
    use dashboard_access::AccessError;
    use dashboard_access::config::{AccessConfig, Config, ServerConfig, Validate};
    use std::io::Write;

    fn load(yaml: &str) -> Result<Config, AccessError> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        tokio_test::block_on(Config::from_file(file.path()))
    }

    // ==================== File loading ====================

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = load("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.access.landing_path, "/intern/dashboard");
        assert_eq!(config.access.pending_company_path, "/intern/pending-company");
        assert!(config.access.show_toast);
        assert_eq!(config.access.toast_duration_ms, 4000);
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let config = load(
            r#"
access:
  show_toast: false
server:
  port: 9090
session:
  role_header: x-auth-role
"#,
        )
        .unwrap();

        assert!(!config.access.show_toast);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.session.role_header, "x-auth-role");
        assert_eq!(config.session.user_id_header, "x-user-id");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = tokio_test::block_on(Config::from_file("/nonexistent/access.yaml"));
        assert!(matches!(result, Err(AccessError::Config(_))));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        assert!(load("access: [not, a, map").is_err());
    }

    // ==================== Invariants ====================

    #[test]
    fn test_landing_path_hidden_from_some_role_is_rejected() {
        let result = load("access:\n  landing_path: /intern/dashboard/system\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("landing_path"), "{}", err);
    }

    #[test]
    fn test_relative_landing_path_is_rejected() {
        let config = AccessConfig {
            landing_path: "intern/dashboard".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_toast_duration_is_rejected() {
        let config = AccessConfig {
            toast_duration_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_port_zero_fails() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("port"));
    }

    #[test]
    fn test_round_trip_through_yaml_keeps_values() {
        let mut config = Config::default();
        config.access.toast_duration_ms = 2500;
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }
}
