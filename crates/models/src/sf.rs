use std::{
    fmt,
    str::FromStr,
    time::{Duration, SystemTime},
};

use std::num::NonZeroU64;

use time::OffsetDateTime;

/**
    Snowflakes are Discord's 64-bit identifiers, with the creation timestamp stored in the upper 42 bits.

    This implementation provides the Discord EPOCH for recovering the timestamp, and implementations for JSON interop.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Snowflake(pub NonZeroU64);

/// First second of 2015, in milliseconds since the unix epoch
pub const DISCORD_EPOCH: u64 = 1420070400000;

pub const DISCORD_EPOCH_ODT: OffsetDateTime = time::macros::datetime!(2015 - 01 - 01 00:00 +0);

impl Snowflake {
    /// Returns `None` for zero, which is never a valid id
    #[inline]
    pub const fn new(id: u64) -> Option<Snowflake> {
        match NonZeroU64::new(id) {
            Some(id) => Some(Snowflake(id)),
            None => None,
        }
    }

    /// Gets the number of milliseconds since the unix epoch
    #[inline]
    pub fn epoch_ms(&self) -> u64 {
        self.raw_timestamp() + DISCORD_EPOCH
    }

    #[inline]
    pub fn system_timestamp(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(self.epoch_ms())
    }

    #[inline]
    pub fn timestamp(&self) -> OffsetDateTime {
        DISCORD_EPOCH_ODT + Duration::from_millis(self.raw_timestamp())
    }

    #[inline]
    pub fn raw_timestamp(&self) -> u64 {
        self.0.get() >> 22
    }

    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for Snowflake {
    type Err = <NonZeroU64 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NonZeroU64::from_str(s).map(Snowflake)
    }
}

impl fmt::Display for Snowflake {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.0.get()))
    }
}

mod serde_impl {
    use super::*;

    use std::str::FromStr;

    use serde::de::{Deserialize, Deserializer, Error, Visitor};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Snowflake {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if serializer.is_human_readable() {
                serializer.collect_str(self)
            } else {
                self.0.serialize(serializer)
            }
        }
    }

    impl<'de> Deserialize<'de> for Snowflake {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct SnowflakeVisitor;

            impl<'de> Visitor<'de> for SnowflakeVisitor {
                type Value = Snowflake;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a 64-bit integer or numeric string")
                }

                fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
                    match Snowflake::new(v) {
                        Some(x) => Ok(x),
                        None => Err(E::custom("expected a non-zero value")),
                    }
                }

                fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
                    match u64::try_from(v) {
                        Ok(v) => self.visit_u64(v),
                        Err(_) => Err(E::custom("expected a positive value")),
                    }
                }

                fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                    Snowflake::from_str(v).map_err(|e| E::custom(format!("Invalid Snowflake: {}", e)))
                }
            }

            deserializer.deserialize_any(SnowflakeVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sf_size() {
        use std::mem::size_of;
        assert_eq!(size_of::<u64>(), size_of::<Option<Snowflake>>());
    }

    #[test]
    fn test_serde() {
        #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
        struct Nested {
            x: Snowflake,
        }

        let _: Snowflake = serde_json::from_str(r#""12234""#).unwrap();
        let _: Snowflake = serde_json::from_str(r#"12234"#).unwrap();
        let _: Nested = serde_json::from_str(r#"{"x": 12234}"#).unwrap();
        let _: Nested = serde_json::from_str(r#"{"x": "12234"}"#).unwrap();

        assert!(serde_json::from_str::<Snowflake>("0").is_err());
        assert!(serde_json::from_str::<Snowflake>(r#""abc""#).is_err());

        let sf: Snowflake = serde_json::from_str(r#"12234"#).unwrap();
        assert_eq!(serde_json::to_string(&sf).unwrap(), r#""12234""#);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(DISCORD_EPOCH, DISCORD_EPOCH_ODT.unix_timestamp() as u64 * 1000);
    }

    #[test]
    fn test_timestamp() {
        // example id from the Discord API reference
        let sf: Snowflake = "175928847299117063".parse().unwrap();

        assert_eq!(sf.epoch_ms(), 1462015105796);
        assert_eq!(sf.timestamp().unix_timestamp(), 1462015105);
    }
}
