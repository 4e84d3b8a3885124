use crate::naming::NamingError;
use crate::types::FieldType;
use crate::wire::TokenKind;
use smol_str::SmolStr;
use std::error::Error as StdError;
use std::fmt;

pub use crate::enumeration::VariantNameError;
pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure to write an enum member to the wire.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The member's own name starts with a digit or `-`, so it would be indistinguishable from an
    /// integer code.
    #[error("member name {0:?} looks like an integer and is not allowed")]
    NumericLikeName(String),
    /// The member's name is the empty string.
    #[error("member of `{type_name}` has an empty name")]
    EmptyName { type_name: &'static str },
    /// The member is not a unit variant, so it has no standalone name.
    #[error("cannot extract the name of a `{type_name}` member")]
    Unnamed {
        type_name: &'static str,
        #[source]
        source: VariantNameError,
    },
    /// The naming strategy failed for the member.
    #[error("naming strategy failed for a `{type_name}` member")]
    Naming {
        type_name: &'static str,
        #[source]
        source: NamingError,
    },
}

/// Failure to read an enum member from the wire.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("cannot convert null value to {0}")]
    NullNotAllowed(FieldType),
    /// Holds the integer as written.
    #[error("integer value {0} is not allowed")]
    IntegerNotAllowed(SmolStr),
    #[error("unexpected token {0} when parsing enum")]
    UnexpectedToken(TokenKind),
    #[error("error converting value {wire_text:?} to type `{target}`")]
    ConversionFailed {
        wire_text: String,
        target: FieldType,
        #[source]
        source: BoxError,
    },
    /// Only produced when the codec is configured with
    /// [`UnknownMembers::Reject`](crate::UnknownMembers::Reject).
    #[error("value {wire_text:?} is not a member of `{target}`")]
    UnknownMember { wire_text: String, target: FieldType },
}

/// Failure to build the name table of an enum type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("`{type_name}` has a member that cannot be written")]
    InvalidMember {
        type_name: &'static str,
        #[source]
        source: EncodeError,
    },
    #[error("`{type_name}` members `{first}` and `{second}` both map to wire name {wire:?}")]
    DuplicateWireName {
        type_name: &'static str,
        wire: String,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("failed to encode enum value")]
    Encode,
    #[error("failed to decode enum value")]
    Decode,
    #[error("invalid enum name table")]
    Table,
    #[error("JSON error")]
    Json,
}

impl From<EncodeError> for Error {
    fn from(error: EncodeError) -> Self {
        Self::new(ErrorKind::Encode).with_source(error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        Self::new(ErrorKind::Decode).with_source(error)
    }
}

impl From<TableError> for Error {
    fn from(error: TableError) -> Self {
        Self::new(ErrorKind::Table).with_source(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorKind::Json).with_source(error)
    }
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Set this error's underlying `source`.
    pub fn with_source<E: Into<BoxError>>(mut self, source: E) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Consumes the error, returning its source.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        self.find_source::<DecodeError>()
    }

    pub fn as_encode_error(&self) -> Option<&EncodeError> {
        self.find_source::<EncodeError>()
    }

    /// Check if any error in this error's `source` chain match the given [`ErrorKind`].
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        if self.kind == kind {
            return true;
        }

        let mut source = self.source();

        while let Some(e) = source {
            match e.downcast_ref::<Self>() {
                Some(found) if found.kind == kind => return true,
                _ => source = e.source(),
            }
        }

        false
    }

    /// Recurse through this error's `source` chain, returning the first matching error type.
    pub fn find_source<E: StdError + 'static>(&self) -> Option<&E> {
        let mut source = self.source();

        while let Some(e) = source {
            match e.downcast_ref::<E>() {
                Some(found) => return Some(found),
                None => source = e.source(),
            }
        }

        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref source) = self.source {
            write!(f, "{}: {}", self.kind, source)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}
