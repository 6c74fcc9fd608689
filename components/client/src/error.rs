#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Missing API Token")]
    MissingToken,

    #[error("Request Error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API Error {status} ({code}): {message}")]
    Api { status: u16, code: u64, message: String },
}

/// https://discord.com/developers/docs/reference#error-messages
#[derive(Debug, Deserialize)]
struct RawApiError {
    #[serde(default)]
    code: u64,
    message: String,
}

impl ClientError {
    /// Builds an [`ClientError::Api`] from an unsuccessful response body
    pub fn from_response(status: u16, body: &[u8]) -> ClientError {
        match serde_json::from_slice::<RawApiError>(body) {
            Ok(raw) => ClientError::Api {
                status,
                code: raw.code,
                message: raw.message,
            },
            Err(_) => ClientError::Api {
                status,
                code: 0,
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_body() {
        let err = ClientError::from_response(403, br#"{"message": "Cannot send messages to this user", "code": 50007}"#);

        match err {
            ClientError::Api { status, code, ref message } => {
                assert_eq!(status, 403);
                assert_eq!(code, 50007);
                assert_eq!(message, "Cannot send messages to this user");
            }
            _ => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn test_raw_error_body() {
        let err = ClientError::from_response(404, b"404: Not Found");

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API Error 404 (0): 404: Not Found");
    }
}
