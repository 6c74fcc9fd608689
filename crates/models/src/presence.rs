use std::sync::Arc;

use super::*;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde_repr::Serialize_repr,
    serde_repr::Deserialize_repr,
)]
#[repr(u8)]
pub enum GameType {
    /// "Playing {name}"
    #[default]
    Default = 0,
    /// "Streaming {name}"
    Streaming = 1,
}

/// The activity of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "type", default)]
    pub kind: GameType,

    pub name: String,

    /// Stream URL, only meaningful when streaming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Game {
    #[inline]
    pub fn is_streaming(&self) -> bool {
        self.kind == GameType::Streaming
    }

    pub fn stream_url(&self) -> Option<&str> {
        match self.kind {
            GameType::Streaming => self.url.as_deref(),
            GameType::Default => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Idle,
    #[serde(rename = "dnd")]
    DoNotDisturb,
    Invisible,
    Offline,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presence {
    pub user: User,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,

    pub status: Status,
}

impl Presence {
    /// Returns the user with this presence attached
    pub fn attach(self) -> User {
        let mut user = self.user.clone();
        user.presence = Some(Arc::new(self));
        user
    }
}
