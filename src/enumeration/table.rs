use crate::enumeration::{writable_name, NamedEnum};
use crate::error::{EncodeError, TableError};
use crate::naming::NamingStrategy;
use smol_str::SmolStr;

/// Ordered `(member, canonical name, wire name)` entries for one enum type and naming strategy.
///
/// Building a table checks every member once: each must have a writable name, and no two members
/// may share a wire name.
///
/// # Example
///
/// ```
/// use enumname::data::SortDirection;
/// use enumname::naming::SnakeCase;
/// use enumname::EnumTable;
///
/// let table = EnumTable::<SortDirection>::build(&SnakeCase)?;
///
/// assert_eq!(table.find("descending"), Some(SortDirection::Descending));
/// assert_eq!(table.wire_name(&SortDirection::Ascending), Some("ascending"));
/// assert_eq!(table.find("Descending"), None);
/// # Ok::<(), enumname::error::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnumTable<T> {
    entries: Vec<Entry<T>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    member: T,
    canonical: &'static str,
    wire: SmolStr,
}

impl<T: NamedEnum> EnumTable<T> {
    pub fn build<N>(naming: &N) -> Result<Self, TableError>
    where
        N: NamingStrategy + ?Sized,
    {
        let mut entries: Vec<Entry<T>> = Vec::with_capacity(T::MEMBERS.len());

        for member in T::MEMBERS {
            let invalid = |source: EncodeError| TableError::InvalidMember {
                type_name: T::TYPE_NAME,
                source,
            };
            let canonical = writable_name(member).map_err(invalid)?;
            let wire = naming
                .try_wire_name(canonical)
                .map(SmolStr::new)
                .map_err(|source| {
                    invalid(EncodeError::Naming {
                        type_name: T::TYPE_NAME,
                        source,
                    })
                })?;

            if let Some(existing) = entries.iter().find(|entry| entry.wire == wire) {
                return Err(TableError::DuplicateWireName {
                    type_name: T::TYPE_NAME,
                    wire: wire.to_string(),
                    first: existing.canonical,
                    second: canonical,
                });
            }

            entries.push(Entry {
                member: *member,
                canonical,
                wire,
            });
        }

        Ok(Self { entries })
    }

    /// Finds the member with exactly this wire name.
    pub fn find(&self, wire: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|entry| entry.wire.as_str() == wire)
            .map(|entry| entry.member)
    }

    /// Returns the wire name of `member`.
    pub fn wire_name(&self, member: &T) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.member == *member)
            .map(|entry| entry.wire.as_str())
    }

    /// Returns the canonical name of `member`.
    pub fn canonical_name(&self, member: &T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.member == *member)
            .map(|entry| entry.canonical)
    }

    /// Iterates over `(member, wire name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.member, entry.wire.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Matches `wire` against every member without a prebuilt table.
///
/// Unlike [`EnumTable::build`], this accepts any nameable member and lets the first declared
/// member win if the strategy maps two members to the same name. Fails on the first member that
/// cannot be named.
pub(crate) fn scan<T, N>(naming: &N, wire: &str) -> Result<Option<T>, EncodeError>
where
    T: NamedEnum,
    N: NamingStrategy + ?Sized,
{
    for member in T::MEMBERS {
        let canonical = member
            .canonical_name()
            .map_err(|source| EncodeError::Unnamed {
                type_name: T::TYPE_NAME,
                source,
            })?;
        let name = naming
            .try_wire_name(canonical)
            .map_err(|source| EncodeError::Naming {
                type_name: T::TYPE_NAME,
                source,
            })?;

        if name == wire {
            return Ok(Some(*member));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::VariantNameError;
    use crate::naming::{DefaultNaming, FnNaming, NamingError, SnakeCase};
    use serde::Serialize;

    crate::named_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
        enum Subtype {
            ReplyBroadcast,
            GroupJoin,
            #[serde(rename = "group_join")]
            LegacyGroupJoin,
        }
    }

    crate::named_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
        enum Status {
            Active,
            #[serde(rename = "404")]
            Missing,
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    enum Composite {
        Plain,
        Flags(u8),
    }

    impl NamedEnum for Composite {
        const TYPE_NAME: &'static str = "Composite";
        const MEMBERS: &'static [Self] = &[Composite::Plain, Composite::Flags(3)];
    }

    #[test]
    fn build() -> Result<(), TableError> {
        let table = EnumTable::<Subtype>::build(&DefaultNaming)?;

        assert_eq!(table.len(), 3);
        assert_eq!(table.find("ReplyBroadcast"), Some(Subtype::ReplyBroadcast));
        assert_eq!(table.find("group_join"), Some(Subtype::LegacyGroupJoin));
        assert_eq!(table.find("replybroadcast"), None);
        assert_eq!(table.find(" ReplyBroadcast"), None);
        assert_eq!(table.wire_name(&Subtype::GroupJoin), Some("GroupJoin"));
        assert_eq!(
            table.canonical_name(&Subtype::LegacyGroupJoin),
            Some("group_join")
        );
        assert_eq!(
            table.iter().map(|(_, wire)| wire).collect::<Vec<_>>(),
            vec!["ReplyBroadcast", "GroupJoin", "group_join"]
        );

        Ok(())
    }

    #[test]
    fn duplicate_wire_names() {
        assert_eq!(
            EnumTable::<Subtype>::build(&SnakeCase).unwrap_err(),
            TableError::DuplicateWireName {
                type_name: "Subtype",
                wire: "group_join".into(),
                first: "GroupJoin",
                second: "group_join",
            }
        );

        let collapsing = FnNaming(|_: &str| "same".to_owned());
        assert_eq!(
            EnumTable::<Subtype>::build(&collapsing).unwrap_err(),
            TableError::DuplicateWireName {
                type_name: "Subtype",
                wire: "same".into(),
                first: "ReplyBroadcast",
                second: "GroupJoin",
            }
        );
    }

    #[test]
    fn invalid_members() {
        assert_eq!(
            EnumTable::<Status>::build(&SnakeCase).unwrap_err(),
            TableError::InvalidMember {
                type_name: "Status",
                source: EncodeError::NumericLikeName("404".into()),
            }
        );

        assert_eq!(
            EnumTable::<Composite>::build(&SnakeCase).unwrap_err(),
            TableError::InvalidMember {
                type_name: "Composite",
                source: EncodeError::Unnamed {
                    type_name: "Composite",
                    source: VariantNameError::NotUnitVariant("Flags"),
                },
            }
        );
    }

    // Refuses to name `GroupJoin`
    struct NoGroupJoin;

    impl NamingStrategy for NoGroupJoin {
        fn wire_name(&self, canonical: &str) -> String {
            canonical.to_owned()
        }

        fn try_wire_name(&self, canonical: &str) -> Result<String, NamingError> {
            match canonical {
                "GroupJoin" => Err(NamingError::new(canonical, "unsupported")),
                _ => Ok(canonical.to_owned()),
            }
        }
    }

    #[test]
    fn naming_failures() {
        let naming_error = EncodeError::Naming {
            type_name: "Subtype",
            source: NamingError::new("GroupJoin", "unsupported"),
        };

        assert_eq!(
            EnumTable::<Subtype>::build(&NoGroupJoin).unwrap_err(),
            TableError::InvalidMember {
                type_name: "Subtype",
                source: naming_error.clone(),
            }
        );

        // Members before the failing one still match
        assert_eq!(
            scan::<Subtype, _>(&NoGroupJoin, "ReplyBroadcast"),
            Ok(Some(Subtype::ReplyBroadcast))
        );
        assert_eq!(
            scan::<Subtype, _>(&NoGroupJoin, "group_join"),
            Err(naming_error)
        );
    }

    #[test]
    fn scan_first_declared_wins() -> Result<(), EncodeError> {
        assert_eq!(
            scan::<Subtype, _>(&SnakeCase, "group_join")?,
            Some(Subtype::GroupJoin)
        );
        assert_eq!(
            scan::<Subtype, _>(&SnakeCase, "reply_broadcast")?,
            Some(Subtype::ReplyBroadcast)
        );
        assert_eq!(scan::<Subtype, _>(&SnakeCase, "REPLY_BROADCAST")?, None);
        assert_eq!(scan::<Status, _>(&DefaultNaming, "404")?, Some(Status::Missing));

        Ok(())
    }

    #[test]
    fn scan_resolution_failure() {
        assert_eq!(
            scan::<Composite, _>(&SnakeCase, "flags"),
            Err(EncodeError::Unnamed {
                type_name: "Composite",
                source: VariantNameError::NotUnitVariant("Flags"),
            })
        );
        assert_eq!(scan::<Composite, _>(&SnakeCase, "plain"), Ok(Some(Composite::Plain)));
    }
}
