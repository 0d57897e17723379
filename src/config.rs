use clap::{ArgAction, Parser};
use tracing::Level;

pub const DEFAULT_BANK_NAME: &str = "Rural Bank of Nepal";

#[derive(Parser, Debug)]
#[command(name = "bank-console")]
#[command(about = "Interactive console for a customer's savings and current accounts.")]
pub struct Args {
    /// Customer name; skips the name prompt
    #[arg(short = 'c', long = "customer")]
    pub customer: Option<String>,

    /// Bank name shown in the welcome banner
    #[arg(long = "bank-name", default_value = DEFAULT_BANK_NAME)]
    pub bank_name: String,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Log errors only
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Settings the session needs, detached from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub bank_name: String,
    /// When `None`, the session asks for the name.
    pub customer_name: Option<String>,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        SessionConfig {
            bank_name: args.bank_name,
            customer_name: args.customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bank-console"]).unwrap();

        assert_eq!(args.log_level(), Level::WARN);
        assert_eq!(
            SessionConfig::from(args),
            SessionConfig {
                bank_name: DEFAULT_BANK_NAME.to_string(),
                customer_name: None,
            }
        );
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from(["bank-console", "-vv", "-c", "Sita", "--bank-name", "Hill Bank"]).unwrap();

        assert_eq!(args.log_level(), Level::DEBUG);
        let config = SessionConfig::from(args);
        assert_eq!(config.customer_name.as_deref(), Some("Sita"));
        assert_eq!(config.bank_name, "Hill Bank");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["bank-console", "-q", "-v"]).is_err());
        assert_eq!(Args::try_parse_from(["bank-console", "-q"]).unwrap().log_level(), Level::ERROR);
    }
}
