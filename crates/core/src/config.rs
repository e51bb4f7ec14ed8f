//! Input format configuration.
//!
//! The format of an issue file is resolved once, before the file is opened, and then passed
//! into the loader. An explicit choice always wins over the file extension.

use crate::{IssueError, IssueResult};
use std::path::Path;
use std::str::FromStr;

/// Structured formats a refined issue can be loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl FromStr for InputFormat {
    type Err = IssueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(IssueError::InvalidInput(format!(
                "unknown input format '{}' (expected yaml or json)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => f.write_str("yaml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Resolve the input format for `path`.
///
/// If `override_format` is provided it is returned unchanged. Otherwise the file extension
/// decides (`.yaml`, `.yml`, `.json`, case-insensitive).
///
/// # Errors
///
/// Returns `IssueError::UnsupportedFormat` if there is no override and the extension is
/// missing or unrecognised.
pub fn resolve_input_format(
    path: &Path,
    override_format: Option<InputFormat>,
) -> IssueResult<InputFormat> {
    if let Some(format) = override_format {
        return Ok(format);
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            IssueError::UnsupportedFormat(format!(
                "{} has no file extension; pass a format explicitly",
                path.display()
            ))
        })?;

    extension
        .parse()
        .map_err(|_| IssueError::UnsupportedFormat(format!(".{} ({})", extension, path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_format_names() {
        assert_eq!("yaml".parse::<InputFormat>().unwrap(), InputFormat::Yaml);
        assert_eq!("YML".parse::<InputFormat>().unwrap(), InputFormat::Yaml);
        assert_eq!(" json ".parse::<InputFormat>().unwrap(), InputFormat::Json);
        let err = "toml".parse::<InputFormat>().unwrap_err();
        assert!(matches!(err, IssueError::InvalidInput(msg) if msg.contains("toml")));
    }

    #[test]
    fn test_resolve_from_extension() {
        assert_eq!(
            resolve_input_format(&PathBuf::from("issue.yaml"), None).unwrap(),
            InputFormat::Yaml
        );
        assert_eq!(
            resolve_input_format(&PathBuf::from("dir/issue.YML"), None).unwrap(),
            InputFormat::Yaml
        );
        assert_eq!(
            resolve_input_format(&PathBuf::from("issue.json"), None).unwrap(),
            InputFormat::Json
        );
    }

    #[test]
    fn test_override_wins_over_extension() {
        assert_eq!(
            resolve_input_format(&PathBuf::from("issue.yaml"), Some(InputFormat::Json)).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            resolve_input_format(&PathBuf::from("issue"), Some(InputFormat::Yaml)).unwrap(),
            InputFormat::Yaml
        );
    }

    #[test]
    fn test_unresolvable_extension() {
        let err = resolve_input_format(&PathBuf::from("issue.md"), None).unwrap_err();
        assert!(matches!(err, IssueError::UnsupportedFormat(msg) if msg.contains(".md")));

        let err = resolve_input_format(&PathBuf::from("issue"), None).unwrap_err();
        assert!(matches!(err, IssueError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in [InputFormat::Yaml, InputFormat::Json] {
            assert_eq!(format.to_string().parse::<InputFormat>().unwrap(), format);
        }
    }
}
