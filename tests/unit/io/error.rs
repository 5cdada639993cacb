//! Tests for error display and path attachment

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;
    use tilerules::RulesError;
    use tilerules::io::error::{WithPath, invalid_grid, invalid_parameter, malformed_key};

    // Tests messages name the offending value
    // Verified by dropping the key from the message
    #[test]
    fn test_display_messages() {
        let key = malformed_key("5:X", "unknown flag");
        assert_eq!(key.to_string(), "Malformed tile key '5:X': unknown flag");

        let grid = invalid_grid(&"row 1 has 2 cells, expected 3");
        assert_eq!(grid.to_string(), "Invalid grid: row 1 has 2 cells, expected 3");

        let parameter = invalid_parameter("target", &"maps", &"not found");
        assert_eq!(parameter.to_string(), "Invalid parameter 'target' = 'maps': not found");
    }

    // Tests I/O failures carry their path, operation and source
    // Verified by discarding the underlying error
    #[test]
    fn test_io_errors_attach_path() {
        let failed: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = failed.with_path("rules.json", "read ruleset").err();

        assert!(err.as_ref().is_some_and(|error| error.source().is_some()));
        assert!(err.as_ref().is_some_and(|error| error.to_string().contains("read ruleset")));
        match err {
            Some(RulesError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, PathBuf::from("rules.json"));
                assert_eq!(operation, "read ruleset");
            }
            other => panic!("expected file system error, got {other:?}"),
        }
    }

    // Tests errors that already carry a path are left alone
    // Verified by overwriting every error variant
    #[test]
    fn test_with_path_keeps_other_errors() {
        let result: tilerules::Result<()> = Err(invalid_grid(&"bad"));
        assert!(matches!(
            result.with_path("map.json", "load"),
            Err(RulesError::InvalidGrid { .. })
        ));
    }

    // Tests JSON errors convert to malformed documents
    // Verified by converting them to file system errors
    #[test]
    fn test_json_error_conversion() {
        let json = serde_json::from_str::<u32>("nope");
        assert!(json.is_err());
        if let Err(err) = json {
            let converted = RulesError::from(err);
            assert!(matches!(converted, RulesError::MalformedDocument { path: None, .. }));
            assert!(converted.source().is_none());
        }
    }
}
