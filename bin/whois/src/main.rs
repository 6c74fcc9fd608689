extern crate tracing as log;

use std::io::ErrorKind;

use anyhow::Context;
use tokio::io::AsyncReadExt;

use cli::{CliOptions, Source};
use client::Client;
use config::{Config, ConfigError, Configuration};
use models::User;

pub mod cli;
pub mod logging;
pub mod report;

async fn load_config(args: &CliOptions) -> anyhow::Result<Config> {
    log::debug!("Loading config from: {}", args.config_path.display());

    let mut config = match Config::load(&args.config_path).await {
        Ok(config) => config,
        Err(ConfigError::IOError(e)) if e.kind() == ErrorKind::NotFound => {
            log::info!("{} not found, assuming defaults", args.config_path.display());

            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    log::debug!("Applying environment overrides to configuration");
    config.configure();

    Ok(config)
}

async fn load_user(source: &Source, client: impl FnOnce() -> anyhow::Result<Client>) -> anyhow::Result<User> {
    let payload = match source {
        Source::Fetch(id) => return Ok(client()?.users_get(*id).await?),
        Source::Me => return Ok(client()?.users_me_get().await?),
        Source::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Unable to read {}", path.display()))?,
        Source::Stdin => {
            let mut payload = String::new();
            tokio::io::stdin().read_to_string(&mut payload).await?;
            payload
        }
    };

    serde_json::from_str(&payload).context("Invalid user payload")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = CliOptions::parse()?;

    log::dispatcher::set_global_default(logging::generate(args.verbose)?)
        .context("setting default subscriber failed")?;

    log::debug!("Arguments: {:?}", args);

    let config = load_config(&args).await?;

    let mut api: Option<Client> = None;
    let mut client = || -> anyhow::Result<Client> {
        if let Some(existing) = &api {
            return Ok(existing.clone());
        }

        let created = Client::new(&config.api)?;
        api = Some(created.clone());
        Ok(created)
    };

    let user = load_user(&args.source, &mut client).await?;

    let format = args.format.unwrap_or(config.avatars.format);
    let size = args.size.unwrap_or(config.avatars.size);

    print!("{}", report::render(&user, format, size));

    if args.open_dm {
        log::info!("Opening DM channel with {}", user.repr());

        let channel = user.open_dm(&client()?).await?;

        println!("{:<10}{}", "dm:", channel.id);
    }

    Ok(())
}
