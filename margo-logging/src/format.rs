use core::fmt;
use core::str::FromStr;

/// Layout of each log record written to standard error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogFormat {
    /// Multi-line, human oriented records
    Pretty,
    /// One record per line
    #[default]
    Compact,
    /// Newline-delimited JSON, for journald or other collectors
    Json,
}

/// Error returned when a string does not name a log format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogFormatError {
    /// The rejected input
    pub invalid_format: String,
}

impl fmt::Display for ParseLogFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid log format '{}' (expected pretty, compact or json)",
            self.invalid_format
        )
    }
}

impl std::error::Error for ParseLogFormatError {}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ParseLogFormatError {
                invalid_format: s.to_string(),
            }),
        }
    }
}

impl LogFormat {
    /// Creates a `LogFormat` from a string, defaulting to Compact for
    /// unknown formats
    #[must_use]
    pub fn from_string_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    /// Convert `LogFormat` to its command-line spelling
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);

        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err.invalid_format, "yaml");
    }

    #[test]
    fn test_format_from_string_or_default() {
        assert_eq!(LogFormat::from_string_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_string_or_default("full"), LogFormat::Compact);
        assert_eq!(LogFormat::from_string_or_default(""), LogFormat::Compact);
    }

    #[test]
    fn test_default_is_compact() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
        assert_eq!(LogFormat::default().to_string(), "compact");
    }
}
