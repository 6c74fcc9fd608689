use serde::de::{self, Deserializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub fn parse<T: FromStr>(s: &str, default: T) -> T {
    s.parse().unwrap_or(default)
}

/// Parses whole seconds, or a human-readable duration such as `1m 30s`
pub fn parse_secs(s: &str, default: Duration) -> Duration {
    match s.parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(_) => humantime::parse_duration(s).unwrap_or(default),
    }
}

pub mod duration {
    use serde::de::SeqAccess;
    use serde::ser::{Serialize, SerializeSeq, Serializer};

    use super::*;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = value.as_secs();
        let ns = value.subsec_nanos();

        if ns == 0 {
            return s.serialize(serializer);
        }

        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&s)?;
        seq.serialize_element(&ns)?;
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Duration;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("positive integer for whole seconds or two-element array for [seconds, nanoseconds]")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
                Ok(Duration::from_secs(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
                if value < 0 {
                    Err(E::custom("Negative integer"))
                } else {
                    self.visit_u64(value as u64)
                }
            }

            fn visit_seq<S: SeqAccess<'de>>(self, mut value: S) -> Result<Duration, S::Error> {
                let seconds = match value.next_element::<u64>()? {
                    Some(s) => s,
                    None => return Err(de::Error::custom("Missing seconds value")),
                };

                Ok(Duration::new(seconds, value.next_element::<u32>()?.unwrap_or(0)))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                humantime::parse_duration(v).map_err(|e| E::custom(e))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secs() {
        let default = Duration::from_secs(10);

        assert_eq!(parse_secs("3", default), Duration::from_secs(3));
        assert_eq!(parse_secs("1m 30s", default), Duration::from_secs(90));
        assert_eq!(parse_secs("soon", default), default);
    }

    #[test]
    fn test_parse_fallback() {
        assert_eq!(parse::<u16>("256", 1024), 256);
        assert_eq!(parse::<u16>("huge", 1024), 1024);
    }
}
