use std::hash::{Hash, Hasher};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelType {
    GuildText,
    Dm,
    GuildVoice,
    GroupDm,
    GuildCategory,
    Unknown(u8),
}

impl From<u8> for ChannelType {
    fn from(value: u8) -> Self {
        match value {
            0 => ChannelType::GuildText,
            1 => ChannelType::Dm,
            2 => ChannelType::GuildVoice,
            3 => ChannelType::GroupDm,
            4 => ChannelType::GuildCategory,
            _ => ChannelType::Unknown(value),
        }
    }
}

impl From<ChannelType> for u8 {
    fn from(value: ChannelType) -> Self {
        match value {
            ChannelType::GuildText => 0,
            ChannelType::Dm => 1,
            ChannelType::GuildVoice => 2,
            ChannelType::GroupDm => 3,
            ChannelType::GuildCategory => 4,
            ChannelType::Unknown(value) => value,
        }
    }
}

/// Returned by [`DirectMessages::users_me_dms_create`]
///
/// Equality and hashing only consider `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,

    #[serde(rename = "type")]
    pub kind: ChannelType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,

    /// Direct/Group Message Users
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<User>,
}

impl PartialEq for Channel {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl Channel {
    #[inline]
    pub fn is_direct(&self) -> bool {
        matches!(self.kind, ChannelType::Dm | ChannelType::GroupDm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dm_channel() {
        let payload = r#"{
            "id": "319674150115610528",
            "type": 1,
            "last_message_id": "3343820033257021450",
            "recipients": [{"id": "82198898841029460", "username": "test", "discriminator": "9999", "avatar": "33ecab261d4681afa4d85a04691c4a01"}]
        }"#;

        let channel: Channel = serde_json::from_str(payload).unwrap();
        assert_eq!(channel.kind, ChannelType::Dm);
        assert!(channel.is_direct());
        assert_eq!(channel.recipients.len(), 1);
        assert_eq!(channel.recipients[0].display_name(), "test#9999");
    }

    #[test]
    fn test_unknown_channel_type() {
        let channel: Channel = serde_json::from_str(r#"{"id": "1", "type": 15}"#).unwrap();
        assert_eq!(channel.kind, ChannelType::Unknown(15));
        assert!(!channel.is_direct());
        assert_eq!(serde_json::to_value(&channel).unwrap()["type"], 15);
    }
}
