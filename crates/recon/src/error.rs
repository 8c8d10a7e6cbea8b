use std::fmt;

#[derive(Debug)]
pub enum CheckError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (zero exponent, empty location, etc.).
    ConfigValidation(String),
    /// A results line does not hold exactly five integers.
    MalformedRecord { line: usize, content: String, reason: String },
    /// The reference enumeration could not be retrieved.
    ReferenceUnavailable(String),
    /// A reference line has a sum field that is not an integer.
    ReferenceParse { line: usize, content: String },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MalformedRecord { line, content, reason } => {
                write!(f, "results line {line}: {reason}: '{content}'")
            }
            Self::ReferenceUnavailable(msg) => write!(f, "reference unavailable: {msg}"),
            Self::ReferenceParse { line, content } => {
                write!(f, "reference line {line}: cannot parse sum in '{content}'")
            }
        }
    }
}

impl std::error::Error for CheckError {}
