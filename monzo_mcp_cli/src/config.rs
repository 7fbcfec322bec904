use std::time::Duration;

use clap::Parser;
use monzo_mcp_lib::monzo_api::{AccessToken, MONZO_API_URL};

pub const ACCESS_TOKEN_VAR: &str = "MONZO_ACCESS_TOKEN";

#[derive(Parser, Debug)]
#[command(name = "monzo-mcp", version)]
#[command(about = "Serve the Monzo API as MCP tools over stdio")]
pub struct Cli {
    /// Monzo API access token
    #[arg(long, env = ACCESS_TOKEN_VAR, hide_env_values = true)]
    access_token: Option<String>,

    /// Base URL of the Monzo API
    #[arg(long, env = "MONZO_API_URL", default_value = MONZO_API_URL)]
    pub base_url: String,

    /// Give up on a tool's API call after this many seconds
    #[arg(long, env = "MONZO_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,
}

impl Cli {
    /// The configured token, or `None` when it is unset or blank.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(AccessToken::new)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

pub fn missing_token_message() -> String {
    format!("Missing required environment variable: {}", ACCESS_TOKEN_VAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("monzo-mcp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "--access-token",
            "tok",
            "--base-url",
            "http://localhost:9000",
            "--request-timeout-secs",
            "15",
        ]);
        assert!(cli.access_token().is_some());
        assert_eq!(cli.base_url, "http://localhost:9000");
        assert_eq!(cli.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let cli = parse(&["--access-token", "   "]);
        assert!(cli.access_token().is_none());
    }

    #[test]
    fn token_is_passed_through_untrimmed() {
        let cli = parse(&["--access-token", " tok_123 "]);
        assert_eq!(cli.access_token(), Some(AccessToken::new(" tok_123 ")));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let cli = parse(&["--access-token", "tok", "--request-timeout-secs", "0"]);
        assert_eq!(cli.request_timeout(), None);
    }

    #[test]
    fn missing_token_message_names_the_variable() {
        assert_eq!(
            missing_token_message(),
            "Missing required environment variable: MONZO_ACCESS_TOKEN"
        );
    }
}
