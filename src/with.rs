//! Modules for `#[serde(with = "...")]` on bare enum fields.
//!
//! A bare field has nowhere to keep an unrecognized name, so unlike
//! [`EnumName`](crate::data::EnumName), these fail on a string that matches no member.
//!
//! # Example
//!
//! ```
//! use enumname::data::{SortBy, SortDirection};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Serialize, Deserialize)]
//! struct SearchArgs {
//!     #[serde(with = "enumname::with::snake_case")]
//!     sort: SortBy,
//!     #[serde(with = "enumname::with::snake_case::option", default)]
//!     sort_dir: Option<SortDirection>,
//! }
//!
//! let args = SearchArgs { sort: SortBy::Timestamp, sort_dir: None };
//! assert_eq!(
//!     serde_json::to_value(&args)?,
//!     json!({ "sort": "timestamp", "sort_dir": null }),
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::codec::{Decoded, EnumCodec, UnknownMembers};
use crate::enumeration::NamedEnum;
use crate::naming::NamingStrategy;
use crate::wire::WireValue;

use paste::paste;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

fn codec<N, T>() -> EnumCodec<N>
where
    N: NamingStrategy + Default + 'static,
    T: NamedEnum,
{
    EnumCodec::builder(N::default())
        .register_shared::<T>()
        .unknown_members(UnknownMembers::Reject)
        .build()
}

fn serialize<N, T, S>(value: Option<&T>, serializer: S) -> Result<S::Ok, S::Error>
where
    N: NamingStrategy + Default + 'static,
    T: NamedEnum,
    S: Serializer,
{
    codec::<N, T>()
        .encode(value)
        .map_err(ser::Error::custom)?
        .serialize(serializer)
}

fn deserialize<'de, N, T, D>(deserializer: D) -> Result<T, D::Error>
where
    N: NamingStrategy + Default + 'static,
    T: NamedEnum,
    D: Deserializer<'de>,
{
    let wire = WireValue::deserialize(deserializer)?;

    match codec::<N, T>().decode::<T>(&wire).map_err(de::Error::custom)? {
        Decoded::Member(member) => Ok(member),
        Decoded::Absent | Decoded::NoMatch => Err(de::Error::custom(format_args!(
            "no `{}` member matches {:?}",
            T::TYPE_NAME,
            wire
        ))),
    }
}

fn deserialize_option<'de, N, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    N: NamingStrategy + Default + 'static,
    T: NamedEnum,
    D: Deserializer<'de>,
{
    let wire = WireValue::deserialize(deserializer)?;

    match codec::<N, T>()
        .decode_nullable::<T>(&wire)
        .map_err(de::Error::custom)?
    {
        Decoded::Member(member) => Ok(Some(member)),
        Decoded::Absent => Ok(None),
        Decoded::NoMatch => Err(de::Error::custom(format_args!(
            "no `{}` member matches {:?}",
            T::TYPE_NAME,
            wire
        ))),
    }
}

macro_rules! define_with_modules {
    ($($strategy:ident),+ $(,)?) => {
        paste! {
            $(
                #[doc = concat!(
                    "Writes enum fields with [`", stringify!($strategy),
                    "`](crate::naming::", stringify!($strategy), ")."
                )]
                pub mod [<$strategy:snake>] {
                    use crate::enumeration::NamedEnum;
                    use crate::naming::$strategy;
                    use serde::{Deserializer, Serializer};

                    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
                    where
                        T: NamedEnum,
                        S: Serializer,
                    {
                        super::serialize::<$strategy, T, S>(Some(value), serializer)
                    }

                    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
                    where
                        T: NamedEnum,
                        D: Deserializer<'de>,
                    {
                        super::deserialize::<$strategy, T, D>(deserializer)
                    }

                    /// The same, for `Option` fields. `None` is written as null.
                    pub mod option {
                        use crate::enumeration::NamedEnum;
                        use crate::naming::$strategy;
                        use serde::{Deserializer, Serializer};

                        pub fn serialize<T, S>(
                            value: &Option<T>,
                            serializer: S,
                        ) -> Result<S::Ok, S::Error>
                        where
                            T: NamedEnum,
                            S: Serializer,
                        {
                            super::super::serialize::<$strategy, T, S>(value.as_ref(), serializer)
                        }

                        pub fn deserialize<'de, T, D>(
                            deserializer: D,
                        ) -> Result<Option<T>, D::Error>
                        where
                            T: NamedEnum,
                            D: Deserializer<'de>,
                        {
                            super::super::deserialize_option::<$strategy, T, D>(deserializer)
                        }
                    }
                }
            )+
        }
    };
}

define_with_modules!(DefaultNaming, SnakeCase, CamelCase, KebabCase);
