use std::fmt::Write;

use models::{ImageFormat, User};

/// Renders the presentation values of a user, one `key: value` per line
pub fn render(user: &User, format: ImageFormat, size: u16) -> String {
    let mut out = String::new();

    macro_rules! field {
        ($key:literal, $fmt:literal $(, $arg:expr)*) => {
            let _ = writeln!(out, concat!("{:<10}", $fmt), concat!($key, ":") $(, $arg)*);
        };
    }

    field!("user", "{}", user);
    field!("id", "{}", user.id);
    field!("created", "{}", user.id.timestamp());
    field!("mention", "{}", user.mention());

    match user.default_avatar() {
        Ok(avatar) => {
            field!("default", "{:?} ({})", avatar, avatar.index());
        }
        Err(err) => {
            field!("default", "{}", err);
        }
    }

    field!("avatar", "{}", user.avatar_url_with(format, size));

    if user.bot {
        field!("bot", "yes");
    }

    if let Some(verified) = user.verified {
        field!("verified", "{}", if verified { "yes" } else { "no" });
    }

    if let Some(ref email) = user.email {
        field!("email", "{}", email);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use models::Snowflake;

    #[test]
    fn test_render() {
        let mut user = User::new(Snowflake::new(42).unwrap(), "Ada", "1234");
        user.bot = true;

        let report = render(&user, ImageFormat::Png, 256);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "user:     Ada#1234");
        assert_eq!(lines[1], "id:       42");
        assert_eq!(lines[3], "mention:  <@42>");
        assert_eq!(lines[4], "default:  Red (4)");
        assert_eq!(lines[5], "avatar:   https://cdn.discordapp.com/embed/avatars/4.png");
        assert_eq!(lines[6], "bot:      yes");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_invalid_discriminator() {
        let mut user = User::new(Snowflake::new(42).unwrap(), "Ada", "");
        user.avatar = Some("abcd1234".to_owned());

        let report = render(&user, ImageFormat::Gif, 64);

        assert!(report.contains("default:  Invalid Discriminator: \"\"\n"));
        assert!(report.contains("avatar:   https://cdn.discordapp.com/avatars/42/abcd1234.gif?size=64\n"));
    }
}
