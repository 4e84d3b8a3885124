//! Declared field types, as seen by a dispatcher choosing a converter.

use crate::enumeration::NamedEnum;
use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

/// Identifies a [`NamedEnum`] type at runtime.
#[derive(Debug, Clone, Copy)]
pub struct EnumType {
    name: &'static str,
    id: TypeId,
}

impl EnumType {
    pub fn of<T: NamedEnum>() -> Self {
        Self {
            name: T::TYPE_NAME,
            id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for EnumType {
    fn eq(&self, rhs: &Self) -> bool {
        self.id == rhs.id
    }
}

impl Eq for EnumType {}

impl std::hash::Hash for EnumType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The declared type of a field.
///
/// # Example
///
/// ```
/// use enumname::data::SortBy;
/// use enumname::FieldType;
///
/// let field = FieldType::nullable(FieldType::of_enum::<SortBy>());
///
/// assert!(field.is_nullable());
/// assert_eq!(field.enum_type().map(|t| t.name()), Some("SortBy"));
/// assert_eq!(field.to_string(), "Option<SortBy>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Enum(EnumType),
    Nullable(Box<FieldType>),
    Other(Cow<'static, str>),
}

impl FieldType {
    pub fn of_enum<T: NamedEnum>() -> Self {
        Self::Enum(EnumType::of::<T>())
    }

    pub fn nullable(inner: FieldType) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn other<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Self::Other(name.into())
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Returns the enum type of this field, looking through at most one nullable wrapper.
    pub fn enum_type(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(t) => Some(t),
            Self::Nullable(inner) => match &**inner {
                Self::Enum(t) => Some(t),
                _ => None,
            },
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(t) => f.write_str(t.name()),
            Self::Nullable(inner) => write!(f, "Option<{}>", inner),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Lets a serialization dispatcher decide which converter handles a field.
pub trait Converter {
    fn can_convert(&self, field: &FieldType) -> bool;
}
