use std::fmt;

/// Failure kinds raised by the Titan numerics routines.
#[derive(Debug, Clone, PartialEq)]
pub enum TitanError {
    /// Wrong dimensionality, e.g. a non-square matrix where one is required.
    Shape(String),
    /// Two operands whose dimensions disagree.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A vector that is not exactly 2D handed to a 2D-only transform.
    Dimension(usize),
    /// Out-of-range or malformed index list.
    Index(String),
    InvalidArgument(String),
    /// FFT input whose length is not a power of two.
    InvalidLength(usize),
    NotImplemented(String),
    DivisionByZero,
    /// Degenerate pivot met while eliminating (checked inverse only).
    Singular { pivot: usize },
}

impl fmt::Display for TitanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitanError::Shape(msg) => write!(f, "Shape Error: {}", msg),
            TitanError::ShapeMismatch { left, right } => write!(
                f,
                "Shape Mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            TitanError::Dimension(len) => {
                write!(f, "Dimension Error: expected a 2D vector, got {} components", len)
            }
            TitanError::Index(msg) => write!(f, "Index Error: {}", msg),
            TitanError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            TitanError::InvalidLength(len) => write!(
                f,
                "Invalid Length: {} is not an integer power of 2",
                len
            ),
            TitanError::NotImplemented(msg) => write!(f, "Not Implemented: {}", msg),
            TitanError::DivisionByZero => write!(f, "Division by zero is not allowed."),
            TitanError::Singular { pivot } => {
                write!(f, "Singular Matrix: degenerate pivot at row {}", pivot)
            }
        }
    }
}

impl std::error::Error for TitanError {}

pub type TitanResult<T> = Result<T, TitanError>;

impl TitanError {
    pub fn shape(message: &str) -> Self { TitanError::Shape(message.to_string()) }
    pub fn index(message: &str) -> Self { TitanError::Index(message.to_string()) }
    pub fn invalid_argument(message: &str) -> Self { TitanError::InvalidArgument(message.to_string()) }
    pub fn not_implemented(message: &str) -> Self { TitanError::NotImplemented(message.to_string()) }
    pub fn mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        TitanError::ShapeMismatch { left, right }
    }
}
