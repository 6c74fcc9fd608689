use super::*;

/// Remote operations an entity can forward to, implemented by the HTTP client
#[async_trait::async_trait]
pub trait DirectMessages: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// `POST /users/@me/channels`
    async fn users_me_dms_create(&self, recipient_id: Snowflake) -> Result<Channel, Self::Error>;
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("Blocked")]
    struct Blocked;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Snowflake>>,
        blocked: bool,
    }

    #[async_trait::async_trait]
    impl DirectMessages for Recorder {
        type Error = Blocked;

        async fn users_me_dms_create(&self, recipient_id: Snowflake) -> Result<Channel, Blocked> {
            self.calls.lock().unwrap().push(recipient_id);

            if self.blocked {
                return Err(Blocked);
            }

            Ok(Channel {
                id: Snowflake::new(99).unwrap(),
                kind: ChannelType::Dm,
                name: None,
                last_message_id: None,
                recipients: Vec::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_open_dm_forwards_id() {
        let client = Recorder::default();
        let user = User::new(Snowflake::new(42).unwrap(), "Ada", "7");

        let channel = user.open_dm(&client).await.unwrap();

        assert_eq!(channel.id.to_u64(), 99);
        assert_eq!(*client.calls.lock().unwrap(), [user.id]);
    }

    #[tokio::test]
    async fn test_open_dm_propagates_error() {
        let client = Recorder {
            blocked: true,
            ..Default::default()
        };
        let user = User::new(Snowflake::new(42).unwrap(), "Ada", "7");

        assert!(matches!(user.open_dm(&client).await, Err(Blocked)));
        assert_eq!(client.calls.lock().unwrap().len(), 1);
    }
}
