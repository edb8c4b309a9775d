use clap::Parser;

/// Command-line and environment configuration
#[derive(Parser, Debug)]
#[command(
    name = "postview",
    about = "Serve a rendered listing of posts and their comments from a JSON API"
)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "POSTVIEW_LISTEN", default_value = "0.0.0.0:8010")]
    pub listen: String,

    /// Base URL of the upstream posts/comments API
    #[arg(long, env = "POSTVIEW_API_BASE", default_value = crate::blog::DEFAULT_API_BASE)]
    pub api_base: reqwest::Url,

    /// Per-request upstream timeout in seconds (none if omitted)
    #[arg(long, env = "POSTVIEW_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, env = "POSTVIEW_LOG", default_value = "info")]
    pub log: String,
}

impl Args {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["postview"]).expect("defaults should parse");

        assert_eq!(args.listen, "0.0.0.0:8010");
        assert_eq!(args.api_base.as_str(), "https://jsonplaceholder.typicode.com/");
        assert_eq!(args.timeout(), None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "postview",
            "--listen",
            "127.0.0.1:3000",
            "--api-base",
            "http://localhost:9000/api",
            "--timeout-secs",
            "5",
        ])
        .expect("flags should parse");

        assert_eq!(args.listen, "127.0.0.1:3000");
        assert_eq!(args.api_base.path(), "/api");
        assert_eq!(args.timeout(), Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn rejects_invalid_base() {
        assert!(Args::try_parse_from(["postview", "--api-base", "not a url"]).is_err());
    }
}
