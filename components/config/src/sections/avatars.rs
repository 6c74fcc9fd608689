use models::{ImageFormat, DEFAULT_AVATAR_SIZE};

use crate::util;

crate::section! {
    #[serde(default)]
    pub struct Avatars {
        /// Image format requested for custom avatars
        pub format: ImageFormat = ImageFormat::Webp => "DISCO_AVATAR_FORMAT" | util::parse[ImageFormat::Webp],

        /// Requested size in pixels, Discord only accepts powers of two between 16 and 4096
        pub size: u16 = DEFAULT_AVATAR_SIZE => "DISCO_AVATAR_SIZE" | util::parse[DEFAULT_AVATAR_SIZE],
    }
}
