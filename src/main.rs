//! payview - Entry Point

use clap::Parser;
use payview::config::CliOverrides;
use payview::view::RunOptions;
use payview::view_state::highlighter::VALID_THEMES;
use std::path::PathBuf;
use tracing::info;

/// payview - TUI for inspecting HTTP payloads
#[derive(Parser, Debug)]
#[command(name = "payview")]
#[command(version)]
#[command(about = "TUI viewer for HTTP payloads: JSON trees, text and images with search")]
pub struct Args {
    /// Path to payload body file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to a file with HTTP headers, shown above the body
    #[arg(long)]
    pub headers: Option<PathBuf>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show JSON bodies as pretty-printed, highlighted source
    #[arg(long)]
    pub raw: bool,

    /// Match search queries case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Color theme for syntax highlighting
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(VALID_THEMES))]
    pub theme: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for flags that were given. Unset flags leave config alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            theme: self.theme.clone(),
            case_sensitive: self.case_sensitive.then_some(true),
            raw: self.raw.then_some(true),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Keeps color handling consistent for everything that checks NO_COLOR
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = payview::config::load_config_with_precedence(args.config.clone())?;
        let merged = payview::config::merge_config(config_file)?;
        let with_env = payview::config::apply_env_overrides(merged);
        payview::config::apply_cli_overrides(with_env, args.overrides())
    };

    // Flushes buffered log lines when dropped at the end of main
    let _log_guard = payview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let payload = payview::source::load(args.file.as_deref(), args.headers.as_deref())?;

    payview::view::run(
        payload,
        &config,
        RunOptions {
            search: args.search,
            no_color: args.no_color,
        },
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["payview", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["payview", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["payview"]);
        assert_eq!(args.file, None);
        assert_eq!(args.headers, None);
        assert_eq!(args.search, None);
        assert!(!args.raw);
        assert!(!args.case_sensitive);
        assert!(!args.no_color);
        assert_eq!(args.theme, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["payview", "body.json"]);
        assert_eq!(args.file, Some(PathBuf::from("body.json")));
    }

    #[test]
    fn test_headers_path() {
        let args = Args::parse_from(["payview", "--headers", "resp.headers"]);
        assert_eq!(args.headers, Some(PathBuf::from("resp.headers")));
    }

    #[test]
    fn test_search_short_flag() {
        let args = Args::parse_from(["payview", "-s", "error"]);
        assert_eq!(args.search, Some("error".to_string()));
    }

    #[test]
    fn test_search_long_flag() {
        let args = Args::parse_from(["payview", "--search", "warning"]);
        assert_eq!(args.search, Some("warning".to_string()));
    }

    #[test]
    fn test_theme_accepts_known_theme() {
        let args = Args::parse_from(["payview", "--theme", "monokai"]);
        assert_eq!(args.theme.as_deref(), Some("monokai"));
    }

    #[test]
    fn test_theme_invalid_rejects() {
        let result = Args::try_parse_from(["payview", "--theme", "invalid-theme"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["payview", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_unset_flags_do_not_override() {
        let args = Args::parse_from(["payview"]);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "payview",
            "body.json",
            "--headers",
            "h.txt",
            "-s",
            "id",
            "--raw",
            "--case-sensitive",
            "--theme",
            "nord",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("body.json")));
        assert_eq!(
            args.overrides(),
            CliOverrides {
                theme: Some("nord".to_string()),
                case_sensitive: Some(true),
                raw: Some(true),
            }
        );
    }

    #[test]
    fn test_theme_flows_through_config_precedence_chain() {
        use payview::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            theme: Some("solarized-dark".to_string()),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file)).unwrap();
        assert_eq!(merged.theme, "solarized-dark");

        let args = Args::parse_from(["payview", "--theme", "monokai"]);
        let with_cli = apply_cli_overrides(merged, args.overrides());
        assert_eq!(with_cli.theme, "monokai", "CLI theme should override config file");
    }
}
