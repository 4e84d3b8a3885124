//! Converts enum members to and from their wire names.

use crate::enumeration::{table, writable_name, EnumTable, NamedEnum};
use crate::error::{DecodeError, EncodeError, Result, TableError};
use crate::naming::NamingStrategy;
use crate::types::{Converter, FieldType};
use crate::wire::WireValue;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

/// Result of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    /// The wire name of this member matched.
    Member(T),
    /// Null was read for a nullable field.
    Absent,
    /// A string was read, but no member has that wire name.
    NoMatch,
}

impl<T> Decoded<T> {
    /// Returns the matched member, if any.
    pub fn member(self) -> Option<T> {
        match self {
            Self::Member(member) => Some(member),
            Self::Absent | Self::NoMatch => None,
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member(_))
    }
}

/// How a string that matches no member is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownMembers {
    /// Succeed with [`Decoded::NoMatch`].
    NoMatch,
    /// Fail with [`DecodeError::UnknownMember`].
    Reject,
}

impl Default for UnknownMembers {
    fn default() -> Self {
        Self::NoMatch
    }
}

type AnyTable = Arc<dyn Any + Send + Sync>;

/// Writes enum members as the names chosen by a [`NamingStrategy`], and reads them back.
///
/// Integers are never written and never accepted, whatever their value.
///
/// # Example
///
/// ```
/// use enumname::data::MessageSubtype;
/// use enumname::naming::SnakeCase;
/// use enumname::{Decoded, DecodeError, EnumCodec, WireValue};
///
/// let codec = EnumCodec::builder(SnakeCase)
///     .register::<MessageSubtype>()?
///     .build();
///
/// let wire = codec.encode(Some(&MessageSubtype::ReplyBroadcast))?;
/// assert_eq!(wire, WireValue::string("reply_broadcast"));
///
/// assert_eq!(
///     codec.decode::<MessageSubtype>(&wire)?,
///     Decoded::Member(MessageSubtype::ReplyBroadcast),
/// );
///
/// assert!(matches!(
///     codec.decode::<MessageSubtype>(&WireValue::integer(0)),
///     Err(DecodeError::IntegerNotAllowed(_)),
/// ));
/// # Ok::<(), enumname::Error>(())
/// ```
#[derive(Clone)]
pub struct EnumCodec<N> {
    naming: N,
    unknown_members: UnknownMembers,
    tables: HashMap<TypeId, AnyTable>,
}

impl<N> EnumCodec<N>
where
    N: NamingStrategy,
{
    /// Creates a codec with no registered types.
    pub fn new(naming: N) -> Self {
        Self::builder(naming).build()
    }

    pub fn builder(naming: N) -> EnumCodecBuilder<N> {
        EnumCodecBuilder::new(naming)
    }

    pub fn naming(&self) -> &N {
        &self.naming
    }

    pub fn unknown_members(&self) -> UnknownMembers {
        self.unknown_members
    }

    pub fn is_registered<T: NamedEnum>(&self) -> bool {
        self.tables.contains_key(&TypeId::of::<T>())
    }

    /// Whether a field of this declared type should be handled by this codec.
    pub fn can_handle(&self, field: &FieldType) -> bool {
        field.enum_type().is_some()
    }

    /// Encodes an optional member. `None` is always written as [`WireValue::Null`].
    pub fn encode<T: NamedEnum>(&self, value: Option<&T>) -> Result<WireValue, EncodeError> {
        match value {
            Some(member) => self.encode_member(member),
            None => Ok(WireValue::Null),
        }
    }

    pub fn encode_member<T: NamedEnum>(&self, member: &T) -> Result<WireValue, EncodeError> {
        self.wire_name(member).map(WireValue::String)
    }

    /// Returns the wire name of `member`.
    pub fn wire_name<T: NamedEnum>(&self, member: &T) -> Result<String, EncodeError> {
        if let Some(wire) = self.table::<T>().and_then(|t| t.wire_name(member)) {
            return Ok(wire.to_owned());
        }

        let canonical = writable_name(member)?;
        self.naming
            .try_wire_name(canonical)
            .map_err(|source| EncodeError::Naming {
                type_name: T::TYPE_NAME,
                source,
            })
    }

    /// Decodes a field declared as `T`. Null is an error.
    pub fn decode<T: NamedEnum>(&self, wire: &WireValue) -> Result<Decoded<T>, DecodeError> {
        self.decode_as(wire, false)
    }

    /// Decodes a field declared as `Option<T>`. Null becomes [`Decoded::Absent`].
    pub fn decode_nullable<T: NamedEnum>(
        &self,
        wire: &WireValue,
    ) -> Result<Decoded<T>, DecodeError> {
        self.decode_as(wire, true)
    }

    /// Encodes an optional member as a JSON value.
    pub fn encode_json<T: NamedEnum>(&self, value: Option<&T>) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.encode(value)?)?)
    }

    pub fn decode_json<T: NamedEnum>(
        &self,
        value: &serde_json::Value,
    ) -> Result<Decoded<T>, DecodeError> {
        self.decode(&WireValue::from(value))
    }

    pub fn decode_json_nullable<T: NamedEnum>(
        &self,
        value: &serde_json::Value,
    ) -> Result<Decoded<T>, DecodeError> {
        self.decode_nullable(&WireValue::from(value))
    }

    /// Parses a single JSON token from text and decodes it as a field declared as `T`.
    pub fn decode_json_str<T: NamedEnum>(&self, text: &str) -> Result<Decoded<T>> {
        let wire: WireValue = serde_json::from_str(text)?;
        Ok(self.decode(&wire)?)
    }

    fn decode_as<T: NamedEnum>(
        &self,
        wire: &WireValue,
        nullable: bool,
    ) -> Result<Decoded<T>, DecodeError> {
        let target = || {
            let field = FieldType::of_enum::<T>();
            if nullable {
                FieldType::nullable(field)
            } else {
                field
            }
        };

        match wire {
            WireValue::Null if nullable => Ok(Decoded::Absent),
            WireValue::Null => Err(DecodeError::NullNotAllowed(target())),
            WireValue::String(text) => match self.find::<T>(text) {
                Ok(Some(member)) => Ok(Decoded::Member(member)),
                Ok(None) => {
                    tracing::debug!(
                        enum_type = T::TYPE_NAME,
                        wire = %text,
                        "no enum member matches wire name"
                    );

                    match self.unknown_members {
                        UnknownMembers::NoMatch => Ok(Decoded::NoMatch),
                        UnknownMembers::Reject => Err(DecodeError::UnknownMember {
                            wire_text: text.clone(),
                            target: target(),
                        }),
                    }
                }
                Err(source) => Err(DecodeError::ConversionFailed {
                    wire_text: text.clone(),
                    target: target(),
                    source: source.into(),
                }),
            },
            WireValue::Integer(n) => {
                tracing::debug!(
                    enum_type = T::TYPE_NAME,
                    value = %n,
                    "rejected integer token for enum field"
                );
                Err(DecodeError::IntegerNotAllowed(n.clone()))
            }
            WireValue::Other(kind) => Err(DecodeError::UnexpectedToken(*kind)),
        }
    }

    fn find<T: NamedEnum>(
        &self,
        wire: &str,
    ) -> std::result::Result<Option<T>, EncodeError> {
        match self.table::<T>() {
            Some(table) => Ok(table.find(wire)),
            None => table::scan::<T, N>(&self.naming, wire),
        }
    }

    fn table<T: NamedEnum>(&self) -> Option<&EnumTable<T>> {
        self.tables
            .get(&TypeId::of::<T>())
            .and_then(|table| table.downcast_ref::<EnumTable<T>>())
    }
}

impl<N> Converter for EnumCodec<N>
where
    N: NamingStrategy,
{
    fn can_convert(&self, field: &FieldType) -> bool {
        self.can_handle(field)
    }
}

impl<N: fmt::Debug> fmt::Debug for EnumCodec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumCodec")
            .field("naming", &self.naming)
            .field("unknown_members", &self.unknown_members)
            .field("registered", &self.tables.len())
            .finish()
    }
}

/// Configures an [`EnumCodec`].
pub struct EnumCodecBuilder<N> {
    naming: N,
    unknown_members: UnknownMembers,
    tables: HashMap<TypeId, AnyTable>,
}

impl<N> EnumCodecBuilder<N>
where
    N: NamingStrategy,
{
    pub fn new(naming: N) -> Self {
        Self {
            naming,
            unknown_members: UnknownMembers::default(),
            tables: HashMap::new(),
        }
    }

    /// Builds and caches the name table of `T`.
    ///
    /// Fails if a member of `T` cannot be written, or if the naming strategy maps two members of
    /// `T` to the same wire name.
    pub fn register<T: NamedEnum>(mut self) -> Result<Self, TableError> {
        let table = EnumTable::<T>::build(&self.naming)?;

        tracing::trace!(
            enum_type = T::TYPE_NAME,
            members = table.len(),
            "registered enum name table"
        );

        self.tables.insert(TypeId::of::<T>(), Arc::new(table));
        Ok(self)
    }

    /// Registers `T` with a name table shared by every codec that uses the strategy type `N`.
    ///
    /// The table is built once per process, with `N::default()`. If it cannot be built, `T` stays
    /// unregistered and is looked up member by member, as with a codec that never registered it.
    pub fn register_shared<T: NamedEnum>(mut self) -> Self
    where
        N: Default + 'static,
    {
        if let Some(table) = shared_table::<T, N>() {
            self.tables.insert(TypeId::of::<T>(), table);
        }
        self
    }

    pub fn unknown_members(mut self, policy: UnknownMembers) -> Self {
        self.unknown_members = policy;
        self
    }

    pub fn build(self) -> EnumCodec<N> {
        EnumCodec {
            naming: self.naming,
            unknown_members: self.unknown_members,
            tables: self.tables,
        }
    }
}

type SharedTables = RwLock<HashMap<(TypeId, TypeId), Option<AnyTable>>>;

fn shared_table<T, N>() -> Option<AnyTable>
where
    T: NamedEnum,
    N: NamingStrategy + Default + 'static,
{
    static TABLES: OnceLock<SharedTables> = OnceLock::new();

    let key = (TypeId::of::<T>(), TypeId::of::<N>());
    let tables = TABLES.get_or_init(Default::default);

    if let Some(cached) = tables.read().ok()?.get(&key) {
        return cached.clone();
    }

    let table = match EnumTable::<T>::build(&N::default()) {
        Ok(table) => Some(Arc::new(table) as AnyTable),
        Err(error) => {
            tracing::debug!(
                enum_type = T::TYPE_NAME,
                %error,
                "enum name table unavailable, matching member by member"
            );
            None
        }
    };

    tables.write().ok()?.entry(key).or_insert(table).clone()
}
