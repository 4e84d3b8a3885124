//! Naming strategies that turn a canonical enum member name into its wire name.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};
use std::fmt;
use std::sync::Arc;

/// A pure mapping from a canonical member name to the name used on the wire.
///
/// Implementations must be deterministic, and must not map two members of the same enum to the
/// same wire name. The second requirement can be checked ahead of time by registering the enum
/// with [`EnumCodecBuilder::register`](crate::EnumCodecBuilder::register).
///
/// # Example
///
/// ```
/// use enumname::naming::{FnNaming, NamingStrategy, SnakeCase};
///
/// assert_eq!(SnakeCase.wire_name("ReplyBroadcast"), "reply_broadcast");
///
/// // Closures work too, through `FnNaming`
/// let shouty = FnNaming(|name: &str| name.to_uppercase());
/// assert_eq!(shouty.wire_name("Score"), "SCORE");
/// ```
pub trait NamingStrategy {
    /// Returns the wire name for the given canonical name.
    fn wire_name(&self, canonical: &str) -> String;

    /// Fallible form of [`wire_name`](NamingStrategy::wire_name), and the one the codec calls.
    ///
    /// Strategies that can fail for some names override this. A failure while decoding becomes
    /// [`DecodeError::ConversionFailed`](crate::DecodeError::ConversionFailed).
    fn try_wire_name(&self, canonical: &str) -> Result<String, NamingError> {
        Ok(self.wire_name(canonical))
    }
}

/// A naming strategy could not name a member.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot derive a wire name for `{canonical}`: {reason}")]
pub struct NamingError {
    canonical: String,
    reason: String,
}

impl NamingError {
    pub fn new<C, R>(canonical: C, reason: R) -> Self
    where
        C: Into<String>,
        R: fmt::Display,
    {
        Self {
            canonical: canonical.into(),
            reason: reason.to_string(),
        }
    }

    /// The canonical name that could not be mapped.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// Leaves canonical names untouched.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultNaming;

impl NamingStrategy for DefaultNaming {
    fn wire_name(&self, canonical: &str) -> String {
        canonical.to_owned()
    }
}

/// `ReplyBroadcast` becomes `reply_broadcast`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeCase;

impl NamingStrategy for SnakeCase {
    fn wire_name(&self, canonical: &str) -> String {
        canonical.to_snake_case()
    }
}

/// `ReplyBroadcast` becomes `replyBroadcast`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CamelCase;

impl NamingStrategy for CamelCase {
    fn wire_name(&self, canonical: &str) -> String {
        canonical.to_lower_camel_case()
    }
}

/// `ReplyBroadcast` becomes `reply-broadcast`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KebabCase;

impl NamingStrategy for KebabCase {
    fn wire_name(&self, canonical: &str) -> String {
        canonical.to_kebab_case()
    }
}

/// Adapts a closure into a [`NamingStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct FnNaming<F>(pub F);

impl<F> NamingStrategy for FnNaming<F>
where
    F: Fn(&str) -> String,
{
    fn wire_name(&self, canonical: &str) -> String {
        (self.0)(canonical)
    }
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for &N {
    fn wire_name(&self, canonical: &str) -> String {
        (**self).wire_name(canonical)
    }
    fn try_wire_name(&self, canonical: &str) -> Result<String, NamingError> {
        (**self).try_wire_name(canonical)
    }
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for Box<N> {
    fn wire_name(&self, canonical: &str) -> String {
        (**self).wire_name(canonical)
    }
    fn try_wire_name(&self, canonical: &str) -> Result<String, NamingError> {
        (**self).try_wire_name(canonical)
    }
}

impl<N: NamingStrategy + ?Sized> NamingStrategy for Arc<N> {
    fn wire_name(&self, canonical: &str) -> String {
        (**self).wire_name(canonical)
    }
    fn try_wire_name(&self, canonical: &str) -> Result<String, NamingError> {
        (**self).try_wire_name(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_strategies() {
        assert_eq!(DefaultNaming.wire_name("ReplyBroadcast"), "ReplyBroadcast");
        assert_eq!(SnakeCase.wire_name("ReplyBroadcast"), "reply_broadcast");
        assert_eq!(CamelCase.wire_name("ReplyBroadcast"), "replyBroadcast");
        assert_eq!(KebabCase.wire_name("ReplyBroadcast"), "reply-broadcast");

        assert_eq!(SnakeCase.wire_name("Score"), "score");
        assert_eq!(CamelCase.wire_name("Score"), "score");
    }

    #[test]
    fn forwarding_impls() {
        let boxed: Box<dyn NamingStrategy> = Box::new(SnakeCase);
        assert_eq!(boxed.wire_name("GroupJoin"), "group_join");

        let shared: Arc<dyn NamingStrategy + Send + Sync> = Arc::new(KebabCase);
        assert_eq!(shared.wire_name("GroupJoin"), "group-join");

        let by_ref: &dyn NamingStrategy = &CamelCase;
        assert_eq!(by_ref.wire_name("GroupJoin"), "groupJoin");

        let custom = FnNaming(|name: &str| format!("x-{}", name.to_lowercase()));
        assert_eq!(custom.wire_name("GroupJoin"), "x-groupjoin");
        assert_eq!(custom.try_wire_name("GroupJoin"), Ok("x-groupjoin".to_owned()));
    }

    struct NoGroups;

    impl NamingStrategy for NoGroups {
        fn wire_name(&self, canonical: &str) -> String {
            canonical.to_snake_case()
        }

        fn try_wire_name(&self, canonical: &str) -> Result<String, NamingError> {
            if canonical.starts_with("Group") {
                Err(NamingError::new(canonical, "groups are not named"))
            } else {
                Ok(self.wire_name(canonical))
            }
        }
    }

    #[test]
    fn fallible_strategies() {
        let error = NamingError::new("GroupJoin", "groups are not named");
        assert_eq!(NoGroups.try_wire_name("GroupJoin"), Err(error.clone()));
        assert_eq!(error.canonical(), "GroupJoin");
        assert_eq!(
            error.to_string(),
            "cannot derive a wire name for `GroupJoin`: groups are not named"
        );

        // Forwarding impls keep the override
        let boxed: Box<dyn NamingStrategy> = Box::new(NoGroups);
        assert!(boxed.try_wire_name("GroupLeave").is_err());
        assert_eq!(boxed.try_wire_name("BotMessage"), Ok("bot_message".to_owned()));
        assert!((&NoGroups).try_wire_name("GroupName").is_err());
    }
}
