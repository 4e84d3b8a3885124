//! Enum types used by the Slack Web API, and a serde wrapper for enum fields.
//!
//! All enums here are written with [`SnakeCase`](crate::naming::SnakeCase) on the wire.

mod enum_name;

pub use crate::data::enum_name::EnumName;

use serde::Serialize;

crate::named_enum! {
    /// Sort order for `search.*` methods (`sort` argument).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum SortBy {
        /// Most relevant first.
        Score,
        /// Most recent first.
        Timestamp,
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::Score
    }
}

crate::named_enum! {
    /// Sort direction for `search.*` methods (`sort_dir` argument).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum SortDirection {
        Ascending,
        Descending,
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Descending
    }
}

crate::named_enum! {
    /// A user's presence, as reported by `users.getPresence`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum Presence {
        Active,
        Away,
    }
}

// https://api.slack.com/events/message#subtypes
crate::named_enum! {
    /// Known `subtype` values of message events.
    #[non_exhaustive]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum MessageSubtype {
        /// A message was posted by an integration.
        BotMessage,
        /// A `/me` message was sent.
        MeMessage,
        /// A message was changed.
        MessageChanged,
        /// A message was deleted.
        MessageDeleted,
        /// A message thread received a reply.
        MessageReplied,
        /// A user or bot user has indicated their reply should be broadcast to the whole channel.
        ReplyBroadcast,
        /// A thread reply was broadcast to the channel.
        ThreadBroadcast,
        /// A member joined a channel.
        ChannelJoin,
        /// A member left a channel.
        ChannelLeave,
        /// A channel topic was updated.
        ChannelTopic,
        /// A channel purpose was updated.
        ChannelPurpose,
        /// A channel was renamed.
        ChannelName,
        /// A channel was archived.
        ChannelArchive,
        /// A channel was unarchived.
        ChannelUnarchive,
        /// A team member joined a private group.
        GroupJoin,
        /// A member left a private group.
        GroupLeave,
        /// A group topic was updated.
        GroupTopic,
        /// A group purpose was updated.
        GroupPurpose,
        /// A group was renamed.
        GroupName,
        /// A group was archived.
        GroupArchive,
        /// A group was unarchived.
        GroupUnarchive,
        /// A file was shared into a channel.
        FileShare,
        /// A comment was added to a file.
        FileComment,
        /// A file was mentioned in a channel.
        FileMention,
        /// An item was pinned in a channel.
        PinnedItem,
        /// An item was unpinned from a channel.
        UnpinnedItem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::SnakeCase;
    use crate::{EnumCodec, EnumTable, NamedEnum, WireValue};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn snake_case_tables() -> Result {
        // Registration fails if any two members collide
        let codec = EnumCodec::builder(SnakeCase)
            .register::<SortBy>()?
            .register::<SortDirection>()?
            .register::<Presence>()?
            .register::<MessageSubtype>()?
            .build();

        let subtypes = EnumTable::<MessageSubtype>::build(&SnakeCase)?;
        assert_eq!(subtypes.len(), MessageSubtype::MEMBERS.len());
        assert_eq!(
            subtypes.find("unpinned_item"),
            Some(MessageSubtype::UnpinnedItem)
        );

        assert_eq!(
            codec.encode_member(&MessageSubtype::MeMessage)?,
            WireValue::string("me_message")
        );
        assert_eq!(
            codec.encode_member(&SortDirection::default())?,
            WireValue::string("descending")
        );

        Ok(())
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SearchArgs {
        query: String,
        #[serde(with = "crate::with::snake_case")]
        sort: SortBy,
        #[serde(with = "crate::with::snake_case::option", default)]
        sort_dir: Option<SortDirection>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct MessageEvent {
        text: String,
        #[serde(default)]
        subtype: Option<EnumName<MessageSubtype>>,
    }

    #[test]
    fn search_args_payload() -> Result {
        let args = SearchArgs {
            query: "in:#general deploy".to_owned(),
            sort: SortBy::Timestamp,
            sort_dir: Some(SortDirection::Ascending),
        };

        assert_eq!(
            serde_json::to_value(&args)?,
            json!({
                "query": "in:#general deploy",
                "sort": "timestamp",
                "sort_dir": "ascending",
            })
        );

        assert_eq!(
            serde_json::from_value::<SearchArgs>(json!({
                "query": "in:#general deploy",
                "sort": "timestamp",
                "sort_dir": "ascending",
            }))?,
            args
        );

        assert_eq!(
            serde_json::from_value::<SearchArgs>(json!({ "query": "x", "sort": "score" }))?
                .sort_dir,
            None
        );

        for sort in vec![json!(0), json!(null), json!("relevance"), json!("Score")] {
            let payload = json!({ "query": "x", "sort": sort });
            assert!(serde_json::from_value::<SearchArgs>(payload).is_err());
        }

        Ok(())
    }

    #[test]
    fn message_event_payload() -> Result {
        let event: MessageEvent = serde_json::from_value(json!({
            "text": "hello",
            "subtype": "reply_broadcast",
        }))?;
        assert_eq!(
            event.subtype,
            Some(EnumName::new(MessageSubtype::ReplyBroadcast))
        );

        let event: MessageEvent = serde_json::from_value(json!({
            "text": "hello",
            "subtype": "huddle_thread",
        }))?;
        assert_eq!(
            event.subtype.as_ref().and_then(|s| s.known()),
            None
        );
        assert_eq!(
            serde_json::to_value(&event)?,
            json!({ "text": "hello", "subtype": "huddle_thread" })
        );

        let event: MessageEvent = serde_json::from_value(json!({ "text": "hello" }))?;
        assert_eq!(event.subtype, None);

        assert!(serde_json::from_value::<MessageEvent>(json!({
            "text": "hello",
            "subtype": 5,
        }))
        .is_err());

        Ok(())
    }
}
