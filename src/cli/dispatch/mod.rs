//! Map parsed command-line arguments to the action to run.

use crate::cli::actions::{Action, server::Args};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>("dsn")
        .map(|dsn| dsn.trim().to_string())
        .filter(|dsn| !dsn.is_empty());

    Ok(Action::Server(Args { port, dsn }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_args(matches: &clap::ArgMatches) -> Result<Args> {
        match handler(matches)? {
            Action::Server(args) => Ok(args),
        }
    }

    #[test]
    fn defaults_to_memory_store() -> Result<()> {
        temp_env::with_vars(
            [
                ("REGISTRAR_PORT", None::<&str>),
                ("REGISTRAR_DSN", None::<&str>),
            ],
            || {
                let matches = crate::cli::commands::new().try_get_matches_from(["registrar"])?;
                assert_eq!(
                    server_args(&matches)?,
                    Args {
                        port: 8080,
                        dsn: None
                    }
                );
                Ok(())
            },
        )
    }

    #[test]
    fn passes_dsn_through() -> Result<()> {
        temp_env::with_vars([("REGISTRAR_DSN", None::<&str>)], || {
            let matches = crate::cli::commands::new().try_get_matches_from([
                "registrar",
                "--port",
                "9090",
                "--dsn",
                "sqlite://accounts.db?mode=rwc",
            ])?;
            assert_eq!(
                server_args(&matches)?,
                Args {
                    port: 9090,
                    dsn: Some("sqlite://accounts.db?mode=rwc".to_string())
                }
            );
            Ok(())
        })
    }

    #[test]
    fn blank_dsn_means_memory_store() -> Result<()> {
        temp_env::with_vars([("REGISTRAR_DSN", Some("  "))], || {
            let matches = crate::cli::commands::new().try_get_matches_from(["registrar"])?;
            assert_eq!(server_args(&matches)?.dsn, None);
            Ok(())
        })
    }
}
