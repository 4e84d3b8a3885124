//! Name-based serialization for enum fields of a JSON REST API.
//!
//! Enum members are written as the name chosen by a [`NamingStrategy`](naming::NamingStrategy)
//! (e.g. `ReplyBroadcast` becomes `"reply_broadcast"`), and read back by exact, case-sensitive
//! comparison against those names. Integer codes are never written and never accepted: an enum
//! field holding a JSON number is a protocol error, even if the number is a valid discriminant.
//!
//! # Example
//!
//! ```
//! use enumname::data::MessageSubtype;
//! use enumname::naming::SnakeCase;
//! use enumname::{Decoded, EnumCodec};
//! use serde_json::json;
//!
//! let codec = EnumCodec::builder(SnakeCase)
//!     .register::<MessageSubtype>()?
//!     .build();
//!
//! assert_eq!(
//!     codec.encode_json(Some(&MessageSubtype::GroupJoin))?,
//!     json!("group_join"),
//! );
//! assert_eq!(
//!     codec.decode_json::<MessageSubtype>(&json!("group_join"))?,
//!     Decoded::Member(MessageSubtype::GroupJoin),
//! );
//! assert!(codec.decode_json::<MessageSubtype>(&json!(14)).is_err());
//! # Ok::<(), enumname::Error>(())
//! ```
//!
//! For struct fields, see [`EnumName`](data::EnumName) and the [`with`] modules.

pub mod codec;
pub mod data;
pub mod enumeration;
pub mod error;
pub mod naming;
pub mod types;
pub mod wire;
pub mod with;

pub use crate::codec::{Decoded, EnumCodec, EnumCodecBuilder, UnknownMembers};
pub use crate::enumeration::{EnumTable, NamedEnum, VariantNameError};
pub use crate::error::{DecodeError, EncodeError, Error, Result, TableError};
pub use crate::naming::NamingError;
pub use crate::types::{Converter, EnumType, FieldType};
pub use crate::wire::{TokenKind, WireValue};
