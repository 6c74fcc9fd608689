use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::Arc,
};

use super::*;

/// Base URL of Discord's media CDN
pub const CDN_URL: &str = "https://cdn.discordapp.com";

pub const DEFAULT_AVATAR_SIZE: u16 = 1024;

/// Avatars assigned to users without a custom one, selected by discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DefaultAvatar {
    Blurple = 0,
    Grey = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
}

impl DefaultAvatar {
    pub const ALL: [DefaultAvatar; 5] = [
        DefaultAvatar::Blurple,
        DefaultAvatar::Grey,
        DefaultAvatar::Green,
        DefaultAvatar::Orange,
        DefaultAvatar::Red,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Format and size are not applicable to default avatars, they are always PNG
    pub fn url(self) -> String {
        format!("{CDN_URL}/embed/avatars/{}.png", self.index())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ImageFormat {
    #[default]
    Webp,
    Png,
    Jpg,
    Jpeg,
    Gif,
}

impl ImageFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "webp" => ImageFormat::Webp,
            "png" => ImageFormat::Png,
            "jpg" => ImageFormat::Jpg,
            "jpeg" => ImageFormat::Jpeg,
            "gif" => ImageFormat::Gif,
            _ => return Err(ModelError::InvalidImageFormat(s.to_owned())),
        })
    }
}

impl TryFrom<String> for ImageFormat {
    type Error = ModelError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Formats as `<@id>`, which pings the user when sent in a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mention {
    pub id: Snowflake,
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<@{}>", self.id)
    }
}

/// https://discord.com/developers/docs/resources/user#user-object
///
/// Equality and hashing only consider `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,

    #[serde(default)]
    pub username: String,

    /// Avatar hash, `None` when the user has not uploaded one
    #[serde(default)]
    pub avatar: Option<String>,

    /// 4-digit Discord-tag, kept as sent by the server. Empty when absent.
    #[serde(default)]
    pub discriminator: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub bot: bool,

    /// Only present for the current user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    /// Only present for the current user with the `email` scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip)]
    pub presence: Option<Arc<Presence>>,
}

impl PartialEq for User {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl User {
    pub fn new(id: Snowflake, username: impl Into<String>, discriminator: impl Into<String>) -> User {
        User {
            id,
            username: username.into(),
            avatar: None,
            discriminator: discriminator.into(),
            bot: false,
            verified: None,
            email: None,
            presence: None,
        }
    }

    /// Custom avatar hash, treating an empty hash as absent
    #[inline]
    pub fn avatar_hash(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|hash| !hash.is_empty())
    }

    /// Selects the default avatar by `discriminator mod 5`, for a discriminator of any length
    pub fn default_avatar(&self) -> Result<DefaultAvatar, ModelError> {
        let invalid = || ModelError::InvalidDiscriminator(self.discriminator.clone());

        let (negative, digits) = split_sign(self.discriminator.trim());

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let n = DefaultAvatar::ALL.len() as u32;
        let mut idx = digits.bytes().fold(0, |acc, b| (acc * 10 + (b - b'0') as u32) % n);

        // floored modulo, so negative values still land in 0..n
        if negative && idx != 0 {
            idx = n - idx;
        }

        Ok(DefaultAvatar::ALL[idx as usize])
    }

    #[inline]
    pub fn default_avatar_index(&self) -> Result<u8, ModelError> {
        self.default_avatar().map(DefaultAvatar::index)
    }

    /// Avatar URL with the default format and size
    #[inline]
    pub fn avatar_url(&self) -> String {
        self.avatar_url_with(ImageFormat::default(), DEFAULT_AVATAR_SIZE)
    }

    /// Builds the CDN URL for this user's avatar.
    ///
    /// Users without a custom avatar get their default avatar, which ignores `format` and `size`.
    /// An unparseable discriminator selects [`DefaultAvatar::Blurple`].
    pub fn avatar_url_with(&self, format: ImageFormat, size: u16) -> String {
        let Some(hash) = self.avatar_hash() else {
            let avatar = self.default_avatar().unwrap_or_else(|err| {
                tracing::debug!(user = %self.id, "{err}, using default avatar 0");
                DefaultAvatar::Blurple
            });

            return avatar.url();
        };

        format!("{CDN_URL}/avatars/{}/{hash}.{format}?size={size}", self.id)
    }

    /// `username#0000`
    #[inline]
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    #[inline]
    pub fn mention(&self) -> Mention {
        Mention { id: self.id }
    }

    /// `<User id (username#0000)>`
    pub fn repr(&self) -> String {
        format!("<User {} ({})>", self.id, self)
    }

    /// Opens (or fetches the existing) DM channel with this user
    pub async fn open_dm<C>(&self, client: &C) -> Result<Channel, C::Error>
    where
        C: DirectMessages + ?Sized,
    {
        client.users_me_dms_create(self.id).await
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

impl fmt::Display for User {
    /// Zero-padding goes after any sign, `-7` becomes `-007`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.discriminator.as_str();

        let (sign, digits) = match d.as_bytes().first() {
            Some(b'-' | b'+') => d.split_at(1),
            _ => ("", d),
        };

        let width = 4usize.saturating_sub(sign.len());

        write!(f, "{}#{sign}{digits:0>width$}", self.username)
    }
}
