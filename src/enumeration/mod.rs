pub(crate) mod table;
mod variant;

pub use self::table::EnumTable;
pub use self::variant::VariantNameError;
pub(crate) use self::variant::VariantName;

use crate::error::EncodeError;
use serde::Serialize;

/// An enum whose members travel on the wire by name.
///
/// The canonical name of a member is the name its `Serialize` implementation uses for the unit
/// variant, which is the declared identifier unless overridden with `#[serde(rename = "...")]`.
/// Only unit variants can be named.
///
/// Implementations are usually generated with [`named_enum!`](crate::named_enum), which keeps
/// [`MEMBERS`](NamedEnum::MEMBERS) in sync with the declaration.
///
/// # Example
///
/// ```
/// use enumname::NamedEnum;
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// enum Presence {
///     Active,
///     Away,
/// }
///
/// impl NamedEnum for Presence {
///     const TYPE_NAME: &'static str = "Presence";
///     const MEMBERS: &'static [Self] = &[Presence::Active, Presence::Away];
/// }
///
/// assert_eq!(Presence::Away.canonical_name(), Ok("Away"));
/// ```
pub trait NamedEnum: Serialize + Copy + PartialEq + Send + Sync + 'static {
    /// Name of the enum type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order. When two members share a wire name, the first one
    /// listed here wins on decode.
    const MEMBERS: &'static [Self];

    /// Returns the canonical name of this member.
    fn canonical_name(&self) -> Result<&'static str, VariantNameError> {
        VariantName::extract(self)
    }
}

/// Returns the canonical name of `member`, refusing names that cannot be written to the wire.
pub(crate) fn writable_name<T: NamedEnum>(member: &T) -> Result<&'static str, EncodeError> {
    let name = member
        .canonical_name()
        .map_err(|source| EncodeError::Unnamed {
            type_name: T::TYPE_NAME,
            source,
        })?;

    match name.chars().next() {
        None => Err(EncodeError::EmptyName {
            type_name: T::TYPE_NAME,
        }),
        Some(c) if c.is_numeric() || c == '-' => {
            Err(EncodeError::NumericLikeName(name.to_owned()))
        }
        Some(_) => Ok(name),
    }
}

/// Declares an enum and implements [`NamedEnum`](crate::NamedEnum) for it.
///
/// The enum must also derive (or implement) `Serialize`, `Clone`, `Copy` and `PartialEq`.
///
/// # Example
///
/// ```
/// use enumname::{named_enum, NamedEnum};
/// use serde::Serialize;
///
/// named_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
///     pub enum Presence {
///         Active,
///         #[serde(rename = "Idle")]
///         Away,
///     }
/// }
///
/// assert_eq!(Presence::TYPE_NAME, "Presence");
/// assert_eq!(Presence::MEMBERS, &[Presence::Active, Presence::Away]);
/// assert_eq!(Presence::Away.canonical_name(), Ok("Idle"));
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::NamedEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$($name::$variant),*];
        }
    };
}
