use std::path::PathBuf;

use models::{ImageFormat, Snowflake};

/// Where to load the user from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Fetch(Snowflake),
    Me,
}

#[derive(Debug)]
pub struct CliOptions {
    pub verbose: Option<u8>,
    pub config_path: PathBuf,
    pub source: Source,
    pub format: Option<ImageFormat>,
    pub size: Option<u16>,
    pub open_dm: bool,
}

impl CliOptions {
    pub fn parse() -> Result<Self, anyhow::Error> {
        let mut pargs = pico_args::Arguments::from_env();

        if pargs.contains(["-h", "--help"]) {
            print!("{}", HELP);
            std::process::exit(0);
        }

        if pargs.contains(["-V", "--version"]) {
            println!("whois {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }

        Self::from_args(pargs)
    }

    pub fn from_args(mut pargs: pico_args::Arguments) -> Result<Self, anyhow::Error> {
        // parse verbose parameter or fallback to environment variable
        let verbose: Option<u8> = match pargs.opt_value_from_str(["-v", "--verbose"])? {
            Some(v) => Some(v),
            None => std::env::var("DISCO_VERBOSE").ok().and_then(|s| s.parse().ok()),
        };

        let config_path: PathBuf = match pargs.opt_value_from_str("--config")? {
            Some(path) => path,
            None => std::env::var_os("DISCO_CONFIG").map(PathBuf::from).unwrap_or_else(|| "disco.toml".into()),
        };

        let format = pargs.opt_value_from_fn("--format", str::parse::<ImageFormat>)?;
        let size = pargs.opt_value_from_str("--size")?;
        let open_dm = pargs.contains("--open-dm");
        let me = pargs.contains("--me");
        let fetch: Option<Snowflake> = pargs.opt_value_from_str("--fetch")?;

        let payload: Option<PathBuf> = pargs.opt_free_from_str()?;

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            anyhow::bail!("Unexpected arguments: {:?}", remaining);
        }

        let source = match (fetch, me, payload) {
            (Some(_), true, _) => anyhow::bail!("`--fetch` and `--me` are mutually exclusive"),
            (Some(_), _, Some(_)) | (_, true, Some(_)) => {
                anyhow::bail!("A payload file cannot be combined with `--fetch` or `--me`")
            }
            (Some(id), false, None) => Source::Fetch(id),
            (None, true, None) => Source::Me,
            (None, false, Some(path)) if path.as_os_str() != "-" => Source::File(path),
            (None, false, _) => Source::Stdin,
        };

        Ok(CliOptions {
            verbose,
            config_path,
            source,
            format,
            size,
            open_dm,
        })
    }
}

static HELP: &str = "\
whois

USAGE:
    whois [OPTIONS] [PAYLOAD]

ARGS:
    <PAYLOAD>    User JSON payload file, reads stdin if omitted or `-`

FLAGS:
    -h, --help      Prints help information
    -V, --version   Prints version information
        --me        Fetch the current user from the API
        --open-dm   Open a DM channel with the user

OPTIONS:
        --config <path>     Config file path [env DISCO_CONFIG] [default: disco.toml]
        --fetch <id>        Fetch the user with this id from the API
        --format <format>   Avatar image format (webp, png, jpg, jpeg, gif)
        --size <pixels>     Avatar image size
    -v, --verbose <level>   Logging level (0 = Warn, 1 = Info, 2 = Debug, 3 = Trace) [env DISCO_VERBOSE]
";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliOptions> {
        CliOptions::from_args(pico_args::Arguments::from_vec(args.iter().map(Into::into).collect()))
    }

    #[test]
    fn test_payload_file() {
        let opts = parse(&["--format", "png", "--size", "256", "user.json"]).unwrap();

        assert_eq!(opts.source, Source::File("user.json".into()));
        assert_eq!(opts.format, Some(ImageFormat::Png));
        assert_eq!(opts.size, Some(256));
        assert!(!opts.open_dm);
    }

    #[test]
    fn test_sources() {
        assert_eq!(parse(&[]).unwrap().source, Source::Stdin);
        assert_eq!(parse(&["-"]).unwrap().source, Source::Stdin);
        assert_eq!(parse(&["--me"]).unwrap().source, Source::Me);
        assert_eq!(
            parse(&["--fetch", "42", "--open-dm"]).unwrap().source,
            Source::Fetch(Snowflake::new(42).unwrap())
        );
    }

    #[test]
    fn test_conflicts() {
        assert!(parse(&["--me", "--fetch", "42"]).is_err());
        assert!(parse(&["--me", "user.json"]).is_err());
        assert!(parse(&["--fetch", "0"]).is_err());
        assert!(parse(&["--format", "bmp"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
