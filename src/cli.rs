use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.adsabs.harvard.edu/v1";

#[derive(Parser, Debug)]
#[command(author, version, about = "Download a library from NASA ADS.", long_about = None)]
pub struct Cli {
    /// NASA ADS library ID.
    pub library: String,

    /// File for BibTeX output.
    #[arg(long, value_name = "FILE")]
    pub bibtex: Option<PathBuf>,

    /// File for HTML output.
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// ADS API token. Takes precedence over the dev key file.
    #[arg(long, env = "ADS_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// File holding the ADS dev key (defaults to ~/.ads/dev_key).
    #[arg(long, value_name = "FILE")]
    pub token_file: Option<PathBuf>,

    /// Number of bibcodes requested per library page.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Maximum number of library pages to request.
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: u32,

    /// Base URL of the ADS API.
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_library_only() {
        let cli = Cli::parse_from(["ads-library", "abcDEF123"]);
        assert_eq!(cli.library, "abcDEF123");
        assert!(cli.bibtex.is_none());
        assert!(cli.html.is_none());
        assert_eq!(cli.rows, 100);
        assert_eq!(cli.max_pages, 32);
        assert_eq!(cli.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_cli_outputs() {
        let cli = Cli::parse_from([
            "ads-library",
            "lib",
            "--bibtex",
            "refs.bib",
            "--html",
            "refs.html",
        ]);
        assert_eq!(cli.bibtex, Some(PathBuf::from("refs.bib")));
        assert_eq!(cli.html, Some(PathBuf::from("refs.html")));
    }

    #[test]
    fn test_cli_token_options() {
        let cli = Cli::parse_from([
            "ads-library",
            "lib",
            "--token",
            "secret",
            "--token-file",
            "/tmp/key",
        ]);
        assert_eq!(cli.token.as_deref(), Some("secret"));
        assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/key")));
    }

    #[test]
    fn test_cli_paging() {
        let cli = Cli::parse_from(["ads-library", "lib", "--rows", "25", "--max-pages", "4"]);
        assert_eq!(cli.rows, 25);
        assert_eq!(cli.max_pages, 4);
    }

    #[test]
    fn test_cli_zero_rows_rejected() {
        let result = Cli::try_parse_from(["ads-library", "lib", "--rows", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_library() {
        assert!(Cli::try_parse_from(["ads-library"]).is_err());
    }
}
