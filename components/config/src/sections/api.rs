use std::time::Duration;

use crate::util;

pub const DEFAULT_USER_AGENT: &str = concat!("DiscordBot (disco, ", env!("CARGO_PKG_VERSION"), ")");

crate::section! {
    #[serde(default)]
    pub struct Api {
        /// Base URL of the REST API, without a trailing slash
        pub base_url: String = "https://discord.com/api/v10".to_owned() => "DISCO_API_URL",

        /// Bot token, sent as `Authorization: Bot <token>`
        pub token: String = String::new() => "DISCO_TOKEN",

        pub user_agent: String = DEFAULT_USER_AGENT.to_owned() => "DISCO_USER_AGENT",

        /// Connect timeout for API requests
        #[serde(with = "util::duration")]
        pub timeout: Duration = Duration::from_secs(10) => "DISCO_API_TIMEOUT" | util::parse_secs[Duration::from_secs(10)],
    }

    impl Extra {
        fn configure(&mut self) {
            while self.base_url.ends_with('/') {
                self.base_url.pop();
            }

            if self.token.is_empty() {
                tracing::debug!("No API token configured");
            }
        }
    }
}
