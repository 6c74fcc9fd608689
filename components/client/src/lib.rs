#[macro_use]
extern crate serde;

use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use models::{Channel, DirectMessages, Snowflake, User};

pub mod error;

pub use error::ClientError;

pub fn create_service_client(config: &config::Api) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .deflate(true)
        .redirect(reqwest::redirect::Policy::limited(1))
        .connect_timeout(config.timeout)
        .build()
}

#[derive(Debug, Clone, Copy, Serialize)]
struct CreateDmBody {
    recipient_id: Snowflake,
}

/// Discord REST API client, cheap to clone
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    auth: String,
}

impl Client {
    pub fn new(config: &config::Api) -> Result<Client, ClientError> {
        if config.token.is_empty() {
            return Err(ClientError::MissingToken);
        }

        Ok(Client {
            http: create_service_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            auth: format!("Bot {}", config.token),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        tracing::debug!("{method} {url}");

        let mut req = self.http.request(method, &url).header(header::AUTHORIZATION, &self.auth);

        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?;
        let status = res.status();
        let full = res.bytes().await?;

        if cfg!(debug_assertions) {
            match std::str::from_utf8(&full) {
                Ok(full) => tracing::trace!("API response {status}: {full}"),
                Err(_) => tracing::warn!("Invalid UTF8 in API response"),
            }
        }

        decode(status, &full)
    }

    /// `GET /users/@me`
    pub async fn users_me_get(&self) -> Result<User, ClientError> {
        self.request::<(), _>(Method::GET, "users/@me", None).await
    }

    /// `GET /users/{user.id}`
    pub async fn users_get(&self, id: Snowflake) -> Result<User, ClientError> {
        self.request::<(), _>(Method::GET, &format!("users/{id}"), None).await
    }

    /// `POST /users/@me/channels`
    pub async fn users_me_dms_create(&self, recipient_id: Snowflake) -> Result<Channel, ClientError> {
        let body = CreateDmBody { recipient_id };

        self.request(Method::POST, "users/@me/channels", Some(&body)).await
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ClientError> {
    if !status.is_success() {
        return Err(ClientError::from_response(status.as_u16(), body));
    }

    Ok(serde_json::from_slice(body)?)
}

#[async_trait::async_trait]
impl DirectMessages for Client {
    type Error = ClientError;

    async fn users_me_dms_create(&self, recipient_id: Snowflake) -> Result<Channel, ClientError> {
        Client::users_me_dms_create(self, recipient_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(token: &str) -> config::Api {
        config::Api {
            base_url: "http://localhost:1234/api/".to_owned(),
            token: token.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_token() {
        assert!(matches!(Client::new(&api("")), Err(ClientError::MissingToken)));
    }

    #[test]
    fn test_endpoint() {
        let client = Client::new(&api("secret")).unwrap();

        assert_eq!(client.auth, "Bot secret");
        assert_eq!(client.endpoint("users/@me"), "http://localhost:1234/api/users/@me");
        assert_eq!(client.endpoint("/users/42"), "http://localhost:1234/api/users/42");
    }

    #[test]
    fn test_create_dm_body() {
        let body = CreateDmBody {
            recipient_id: Snowflake::new(42).unwrap(),
        };

        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"recipient_id":"42"}"#);
    }

    #[test]
    fn test_decode() {
        let channel: Channel = decode(StatusCode::OK, br#"{"id": "7", "type": 1}"#).unwrap();
        assert!(channel.is_direct());

        let err = decode::<Channel>(StatusCode::FORBIDDEN, br#"{"code": 50007, "message": "nope"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 403, code: 50007, .. }));

        let err = decode::<Channel>(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = Client::new(&config::Api {
            base_url: "http://127.0.0.1:1".to_owned(),
            token: "secret".to_owned(),
            ..Default::default()
        })
        .unwrap();

        let user = User::new(Snowflake::new(42).unwrap(), "Ada", "7");

        assert!(matches!(user.open_dm(&client).await, Err(ClientError::Request(_))));
    }
}
