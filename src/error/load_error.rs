#[derive(Debug)]
/// Represents all errors that can occur while loading an expression tree.
pub enum LoadError {
    /// The input is not a well-formed serialized tree.
    InvalidTree {
        /// Details reported by the deserializer.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column on that line where the error occurred.
        column:  usize,
    },
    /// The input file could not be read.
    Io {
        /// The path that was requested.
        path:    String,
        /// Details reported by the operating system.
        details: String,
    },
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidTree { details: error.to_string(),
                            line:    error.line(),
                            column:  error.column(), }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTree { details, line, column } => {
                write!(f, "Error on line {line}, column {column}: Invalid expression tree: {details}.")
            },
            Self::Io { path, details } => write!(f,
                                                 "Failed to read the input file '{path}': {details}. Perhaps this file does not exist?"),
        }
    }
}

impl std::error::Error for LoadError {}
