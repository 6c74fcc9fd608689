use tracing::Dispatch;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::Subscriber,
};

fn create_filter(verbose: Option<u8>) -> anyhow::Result<EnvFilter> {
    let mut extreme_trace = false;

    #[allow(clippy::wildcard_in_or_patterns)]
    let level_filter = match verbose {
        None | Some(0) => LevelFilter::WARN,
        Some(1) => LevelFilter::INFO,
        Some(2) => LevelFilter::DEBUG,
        Some(3) | _ => {
            extreme_trace = true;
            LevelFilter::TRACE
        }
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level_filter.into());

    if !extreme_trace {
        filter = filter
            .add_directive("hyper=info".parse()?)
            .add_directive("reqwest=info".parse()?)
            .add_directive("h2::proto=info".parse()?);
    }

    Ok(filter)
}

/// Logs go to stderr, leaving stdout for the report
pub fn generate(verbose: Option<u8>) -> anyhow::Result<Dispatch> {
    let filter = create_filter(verbose)?;

    Ok(Dispatch::new(
        Subscriber::builder().with_env_filter(filter).with_writer(std::io::stderr).finish(),
    ))
}
