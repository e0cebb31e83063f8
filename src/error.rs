use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArgument = 2,
    InvalidInput = 10,
    IoError = 12,
    UnsupportedCodec = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

/// Coarse classification of a [`BasenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke an API contract: bad range, short buffer, bad alphabet.
    InvalidArgument,
    /// The encoded text itself is malformed.
    InvalidInput,
    Io,
    UnsupportedCodec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    MultipleOf(usize),
    /// Length modulo `modulus` must be one of `allowed`.
    Remainder { modulus: usize, allowed: &'static [usize] },
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::Exact(n) => write!(f, "exactly {}", n),
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
            LengthConstraint::Remainder { modulus, allowed } => {
                let allowed: Vec<String> = allowed.iter().map(|r| r.to_string()).collect();
                write!(f, "length mod {} in {{{}}}", modulus, allowed.join(", "))
            }
        }
    }
}

/// Rejections raised while building an alphabet.
///
/// Kept `Copy` so alphabets can be validated inside `const fn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must contain exactly {expected} characters, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("alphabet character at index {index} is not ASCII")]
    NonAscii { index: usize },

    #[error("alphabet character '{character}' appears at indexes {first} and {second}")]
    Duplicate { character: char, first: usize, second: usize },

    #[error("padding character '{character}' is also an alphabet symbol")]
    PaddingInAlphabet { character: char },

    #[error("padding character '{character}' is not ASCII")]
    NonAsciiPadding { character: char },
}

#[derive(Debug, Error)]
pub enum BasenError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: LengthConstraint, actual: usize },

    #[error("invalid padding: {message}")]
    InvalidPadding { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported codec: {name}")]
    UnsupportedCodec { name: String },
}

impl BasenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BasenError::InvalidArgument { .. } | BasenError::InvalidAlphabet(_) => ErrorKind::InvalidArgument,
            BasenError::InvalidInput { .. }
            | BasenError::InvalidCharacter { .. }
            | BasenError::InvalidLength { .. }
            | BasenError::InvalidPadding { .. } => ErrorKind::InvalidInput,
            BasenError::Io(_) => ErrorKind::Io,
            BasenError::UnsupportedCodec { .. } => ErrorKind::UnsupportedCodec,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::InvalidArgument => ExitCode::InvalidArgument,
            ErrorKind::InvalidInput => ExitCode::InvalidInput,
            ErrorKind::Io => ExitCode::IoError,
            ErrorKind::UnsupportedCodec => ExitCode::UnsupportedCodec,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_char(byte: u8, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: char::from(byte),
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub fn invalid_padding(message: impl Into<String>) -> Self {
        Self::InvalidPadding {
            message: message.into(),
        }
    }

    pub fn unsupported_codec(name: impl Into<String>) -> Self {
        Self::UnsupportedCodec { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, BasenError>;
