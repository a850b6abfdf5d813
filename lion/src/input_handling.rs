// Shared input handling for the lion binaries
// Resolves where a program comes from: a file, a string argument or stdin.

use clap::ValueEnum;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Input source types supported by the lion binaries
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Evaluate a string given on the command line
    String,
    /// Evaluate a JSON file
    File,
    /// Read the program from stdin
    Pipe,
}

/// Configuration for input handling
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub source: InputSource,
    pub file_path: Option<PathBuf>,
    pub string_content: Option<String>,
}

impl InputConfig {
    pub fn from_file(file_path: PathBuf) -> Self {
        Self {
            source: InputSource::File,
            file_path: Some(file_path),
            string_content: None,
        }
    }

    pub fn from_string(content: String) -> Self {
        Self {
            source: InputSource::String,
            file_path: None,
            string_content: Some(content),
        }
    }

    pub fn from_pipe() -> Self {
        Self {
            source: InputSource::Pipe,
            file_path: None,
            string_content: None,
        }
    }
}

/// Program text plus a name for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct InputContent {
    pub content: String,
    pub source_name: String,
}

/// Read input content based on the configuration
pub fn read_input_content(config: &InputConfig) -> Result<InputContent, InputError> {
    read_input_content_from(config, io::stdin().lock())
}

/// Like [`read_input_content`], with `stdin` standing in for the process's stdin.
pub fn read_input_content_from(
    config: &InputConfig,
    mut stdin: impl Read,
) -> Result<InputContent, InputError> {
    let input = match config.source {
        InputSource::File => {
            let file_path = config
                .file_path
                .as_ref()
                .ok_or(InputError::MissingFileArgument)?;
            let content = fs::read_to_string(file_path).map_err(|e| InputError::FileRead {
                path: file_path.clone(),
                source: e,
            })?;
            InputContent {
                content,
                source_name: file_path.to_string_lossy().to_string(),
            }
        }

        InputSource::String => {
            let content = config
                .string_content
                .clone()
                .ok_or(InputError::MissingStringArgument)?;
            InputContent {
                content,
                source_name: "<string>".to_string(),
            }
        }

        InputSource::Pipe => {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .map_err(InputError::StdinRead)?;
            InputContent {
                content,
                source_name: "<stdin>".to_string(),
            }
        }
    };

    debug!(
        source = %input.source_name,
        bytes = input.content.len(),
        "read program input"
    );
    Ok(input)
}

/// Validate input arguments for a given source type
pub fn validate_input_args(
    source: InputSource,
    file_path: &Option<PathBuf>,
    string_content: &Option<String>,
) -> Result<(), InputError> {
    match source {
        InputSource::File if file_path.is_none() => Err(InputError::MissingFileArgument),
        InputSource::String if string_content.is_none() => Err(InputError::MissingStringArgument),
        _ => Ok(()),
    }
}

/// Picks a source when `--input` was not given.
///
/// An explicit file or string wins; otherwise stdin is used unless it is a terminal.
pub fn detect_input_source(
    file_path: &Option<PathBuf>,
    string_content: &Option<String>,
) -> Result<InputSource, InputError> {
    match (file_path.is_some(), string_content.is_some()) {
        (true, true) => Err(InputError::MultipleInputSources),
        (true, false) => Ok(InputSource::File),
        (false, true) => Ok(InputSource::String),
        (false, false) if io::stdin().is_terminal() => Err(InputError::NoInputSource),
        (false, false) => Ok(InputSource::Pipe),
    }
}

/// Errors that can occur during input handling
#[derive(Debug, Error)]
pub enum InputError {
    #[error("--file argument required when using --input file")]
    MissingFileArgument,

    #[error("--string argument required when using --input string")]
    MissingStringArgument,

    #[error("error reading file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading from stdin: {0}")]
    StdinRead(#[source] io::Error),

    #[error("no input source specified; use --file, --string or pipe a program on stdin")]
    NoInputSource,

    #[error("multiple input sources specified; use only one of --file or --string")]
    MultipleInputSources,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_input_config_from_file() {
        let config = InputConfig::from_file(PathBuf::from("program.json"));
        assert_eq!(config.source, InputSource::File);
        assert_eq!(config.file_path, Some(PathBuf::from("program.json")));
        assert_eq!(config.string_content, None);
    }

    #[test]
    fn test_validate_input_args() {
        assert!(
            validate_input_args(InputSource::File, &Some(PathBuf::from("program.json")), &None)
                .is_ok()
        );
        assert!(validate_input_args(InputSource::File, &None, &None).is_err());
        assert!(
            validate_input_args(InputSource::String, &None, &Some("[1]".to_string())).is_ok()
        );
        assert!(validate_input_args(InputSource::String, &None, &None).is_err());
        assert!(validate_input_args(InputSource::Pipe, &None, &None).is_ok());
    }

    #[test]
    fn test_detect_prefers_explicit_arguments() {
        assert_eq!(
            detect_input_source(&Some(PathBuf::from("a.json")), &None).unwrap(),
            InputSource::File
        );
        assert_eq!(
            detect_input_source(&None, &Some("1".to_string())).unwrap(),
            InputSource::String
        );
        assert!(matches!(
            detect_input_source(&Some(PathBuf::from("a.json")), &Some("1".to_string())),
            Err(InputError::MultipleInputSources)
        ));
    }

    #[test]
    fn test_read_file_and_pipe() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["+", 1, 2]"#).unwrap();

        let config = InputConfig::from_file(file.path().to_path_buf());
        let input = read_input_content_from(&config, io::empty()).unwrap();
        assert_eq!(input.content, r#"["+", 1, 2]"#);

        let input = read_input_content_from(&InputConfig::from_pipe(), "[true]".as_bytes()).unwrap();
        assert_eq!(input.content, "[true]");
        assert_eq!(input.source_name, "<stdin>");
    }

    #[test]
    fn test_read_missing_file() {
        let config = InputConfig::from_file(PathBuf::from("/nonexistent/program.json"));
        assert!(matches!(
            read_input_content_from(&config, io::empty()),
            Err(InputError::FileRead { .. })
        ));
    }
}
