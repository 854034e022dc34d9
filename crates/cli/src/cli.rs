use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Operator tooling for the site content pipeline.
#[derive(Parser, Debug)]
#[command(name = "site-content", version, long_about = None)]
pub struct Cli {
    /// CMS origin, overriding CMS_BASE_URL.
    #[arg(long, global = true)]
    pub cms_url: Option<String>,

    /// Log every request's headers (same as CMS_DEBUG=true).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a page for several host names and report what the CMS returns.
    Check {
        /// Host names to test. Defaults to the production and local hosts.
        hosts: Vec<String>,

        /// Page slug to fetch.
        #[arg(long, default_value = "home")]
        slug: String,
    },

    /// Print the merged, render-ready page data as JSON.
    Page {
        /// Host name the request would arrive on.
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Page slug to fetch.
        #[arg(long, default_value = "home")]
        slug: String,

        /// Slug of a page holding a shared header and footer.
        #[arg(long)]
        shared: Option<String>,
    },

    /// Look up the tenant record for a host name.
    Tenant {
        /// Host name to scope the lookup to.
        #[arg(default_value = "ftiaxesite.gr")]
        host: String,
    },

    /// Show which tenant each host name resolves to, without contacting the CMS.
    ResolveHost {
        #[arg(required = true)]
        hosts: Vec<String>,
    },

    /// Convert a rich-text JSON file to plain text or HTML.
    RichText {
        /// File holding a rich-text document or a JSON string.
        file: PathBuf,

        /// Render HTML instead of plain text.
        #[arg(long)]
        html: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_defaults() {
        let cli = Cli::try_parse_from(["site-content", "check"]).unwrap();
        match cli.command {
            Command::Check { hosts, slug } => {
                assert!(hosts.is_empty());
                assert_eq!(slug, "home");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "site-content",
            "page",
            "--host",
            "www.ftiaxesite.gr",
            "--cms-url",
            "https://cms.example.com",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.cms_url.as_deref(), Some("https://cms.example.com"));
        match cli.command {
            Command::Page { host, slug, shared } => {
                assert_eq!(host, "www.ftiaxesite.gr");
                assert_eq!(slug, "home");
                assert_eq!(shared, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn resolve_host_needs_a_host() {
        assert!(Cli::try_parse_from(["site-content", "resolve-host"]).is_err());
    }
}
