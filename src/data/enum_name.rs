use crate::codec::{Decoded, EnumCodec};
use crate::enumeration::NamedEnum;
use crate::error::EncodeError;
use crate::naming::{NamingStrategy, SnakeCase};
use crate::wire::WireValue;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

// Either a known member, or a wire name that matched no member.
#[derive(Debug, Clone, PartialEq)]
enum Enum<T, Repr> {
    Known(T),
    Unknown(Repr),
}

/// Wrapper for an enum field that is written by name.
///
/// A string that matches no member is kept as-is instead of failing, so payloads from newer API
/// versions still deserialize. Integers, and null outside of an `Option`, are rejected.
///
/// # Example
///
/// ```
/// use enumname::data::{EnumName, MessageSubtype};
/// use serde_json::json;
///
/// let subtype: EnumName<MessageSubtype> = serde_json::from_value(json!("reply_broadcast"))?;
/// assert_eq!(subtype, MessageSubtype::ReplyBroadcast);
///
/// // Unknown names are preserved
/// let subtype: EnumName<MessageSubtype> = serde_json::from_value(json!("huddle_thread"))?;
/// assert_eq!(subtype.known(), None);
/// assert_eq!(subtype.wire_name()?, "huddle_thread");
///
/// // Integer codes are not
/// assert!(serde_json::from_value::<EnumName<MessageSubtype>>(json!(5)).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EnumName<T, N = SnakeCase> {
    inner: Enum<T, SmolStr>,
    naming: PhantomData<fn() -> N>,
}

impl<T, N> EnumName<T, N> {
    /// Creates a new value from a known variant.
    pub const fn new(variant: T) -> Self {
        Self {
            inner: Enum::Known(variant),
            naming: PhantomData,
        }
    }

    fn unknown(text: SmolStr) -> Self {
        Self {
            inner: Enum::Unknown(text),
            naming: PhantomData,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self.inner, Enum::Known(_))
    }
}

impl<T, N> EnumName<T, N>
where
    T: NamedEnum,
    N: NamingStrategy + Default + 'static,
{
    fn codec() -> EnumCodec<N> {
        EnumCodec::builder(N::default())
            .register_shared::<T>()
            .build()
    }

    /// Creates a new value from a wire name, resolving it to a member if one matches.
    ///
    /// A name that cannot be resolved, including because the naming strategy failed, is kept as
    /// an unknown value.
    pub fn new_from_str<S>(value: S) -> Self
    where
        S: AsRef<str>,
    {
        let text = value.as_ref();

        match Self::codec().decode::<T>(&WireValue::string(text)) {
            Ok(Decoded::Member(member)) => Self::new(member),
            Ok(Decoded::NoMatch) | Ok(Decoded::Absent) => Self::unknown(SmolStr::new(text)),
            Err(error) => {
                tracing::debug!(
                    enum_type = T::TYPE_NAME,
                    wire = text,
                    %error,
                    "keeping unresolved enum name"
                );
                Self::unknown(SmolStr::new(text))
            }
        }
    }

    /// Returns the member, if the wire name was recognized.
    pub fn known(&self) -> Option<T> {
        match self.inner {
            Enum::Known(member) => Some(member),
            Enum::Unknown(_) => None,
        }
    }

    /// Returns the name this value is written as.
    pub fn wire_name(&self) -> Result<Cow<'_, str>, EncodeError> {
        match &self.inner {
            Enum::Known(member) => Self::codec()
                .wire_name(member)
                .map(Cow::Owned),
            Enum::Unknown(text) => Ok(Cow::Borrowed(text.as_str())),
        }
    }
}

impl<T: fmt::Debug, N> fmt::Debug for EnumName<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumName").field(&self.inner).finish()
    }
}

impl<T: Clone, N> Clone for EnumName<T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            naming: PhantomData,
        }
    }
}

impl<T: Default, N> Default for EnumName<T, N> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, N> From<T> for EnumName<T, N> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: PartialEq, N> PartialEq for EnumName<T, N> {
    fn eq(&self, rhs: &Self) -> bool {
        self.inner == rhs.inner
    }
}

impl<T: PartialEq, N> PartialEq<T> for EnumName<T, N> {
    fn eq(&self, rhs: &T) -> bool {
        match &self.inner {
            Enum::Known(member) => member == rhs,
            Enum::Unknown(_) => false,
        }
    }
}

impl<T, N> Serialize for EnumName<T, N>
where
    T: NamedEnum,
    N: NamingStrategy + Default + 'static,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.inner {
            Enum::Known(member) => Self::codec()
                .encode_member(member)
                .map_err(ser::Error::custom)?
                .serialize(serializer),
            Enum::Unknown(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de, T, N> Deserialize<'de> for EnumName<T, N>
where
    T: NamedEnum,
    N: NamingStrategy + Default + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireValue::deserialize(deserializer)?;
        let decoded = Self::codec()
            .decode::<T>(&wire)
            .map_err(de::Error::custom)?;

        match (decoded, wire) {
            (Decoded::Member(member), _) => Ok(Self::new(member)),
            (_, WireValue::String(text)) => Ok(Self::unknown(SmolStr::new(text))),
            (_, other) => Err(de::Error::custom(format_args!(
                "unexpected {:?} for an enum field",
                other
            ))),
        }
    }
}
