use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::manifest::ManifestFormat;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} syntax in '{file}'")]
#[diagnostic(
    code(depcircle::manifest_parse_error),
    help("Check the manifest syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    pub format: ManifestFormat,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: ManifestSyntaxError,
}

/// Underlying parser error for a manifest
#[derive(Error, Debug)]
pub enum ManifestSyntaxError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum DepCircleError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depcircle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("Unsupported manifest '{path}'")]
    #[diagnostic(
        code(depcircle::unsupported_manifest),
        help("Dependency manifests must have a .toml or .json extension")
    )]
    UnsupportedManifest { path: PathBuf },

    #[error("Invalid include pattern '{pattern}'")]
    #[diagnostic(
        code(depcircle::invalid_pattern),
        help("Include patterns are shell-style globs matched against file names, e.g. '*.deps.toml'")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depcircle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depcircle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(depcircle::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depcircle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_manifest_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ManifestParseError {
            file: "test.toml".to_string(),
            format: ManifestFormat::Toml,
            source_code: NamedSource::new("test.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err.into(),
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Invalid TOML syntax in 'test.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepCircleError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_unsupported_manifest() {
        let error = DepCircleError::UnsupportedManifest {
            path: PathBuf::from("graph.yaml"),
        };

        assert_eq!(error.to_string(), "Unsupported manifest 'graph.yaml'");
    }

    #[test]
    fn test_configuration_error() {
        let error = DepCircleError::ConfigurationError {
            message: "max_depth must be at least 1".to_string(),
        };

        let error_str = error.to_string();
        assert_eq!(
            error_str,
            "Configuration error: max_depth must be at least 1"
        );
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = DepCircleError::FileReadError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_parse_error_diagnostic_is_transparent() {
        let source_code = "[components\n";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();
        let error = DepCircleError::ManifestParseError(Box::new(ManifestParseError {
            file: "bad.toml".to_string(),
            format: ManifestFormat::Toml,
            source_code: NamedSource::new("bad.toml", source_code.to_string()),
            span: Some((0, 1).into()),
            source: toml_err.into(),
        }));

        use miette::Diagnostic;
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("depcircle::manifest_parse_error"));
        assert!(error.labels().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepCircleError = io_err.into();

        match err {
            DepCircleError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_str = "{invalid json}";
        let json_err = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let err: DepCircleError = json_err.into();

        match err {
            DepCircleError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
