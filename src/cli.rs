//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site SEO metadata CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// TOML file overriding built-in values (omitted keys keep their value)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the whole metadata record
    Show {
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },

    /// Print one field, e.g. `title` or `opengraph.type`
    Get {
        /// field name, nested fields are dotted
        field: String,
    },

    /// Print the `<head>` meta tags
    Head,

    /// List readable field names
    Fields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from(["seometa", "get", "opengraph.type"]).unwrap();
        assert!(matches!(cli.command, Commands::Get { field } if field == "opengraph.type"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_show_default_format() {
        let cli = Cli::try_parse_from(["seometa", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { format: Format::Toml }));
    }

    #[test]
    fn test_parse_show_json_with_config() {
        let cli =
            Cli::try_parse_from(["seometa", "-C", "seo.toml", "show", "--format", "json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("seo.toml")));
        assert!(matches!(cli.command, Commands::Show { format: Format::Json }));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["seometa"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
