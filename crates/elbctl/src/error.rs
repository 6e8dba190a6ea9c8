//! Error types for elbctl
//!
//! Fatal conditions only. Per-instance attach/detach outcomes are not
//! errors; commands print them as regular output and keep going.

use colored::Colorize;
use thiserror::Error;

use elbctl_core::{ApiError, ConfigError};

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: Profile 'staging' not found
///
///   tip: check which profiles your config file defines
/// ```
pub struct CliDiagnostic {
    message: String,
    tips: Vec<String>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tips: Vec::new(),
        }
    }

    /// Add a tip line below the error message.
    pub fn tip(mut self, description: &str) -> Self {
        self.tips.push(description.to_string());
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        for description in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
        }
    }
}

/// Main error type for the elbctl application
#[derive(Error, Debug)]
pub enum ElbCtlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid selection '{input}': not a number in the list")]
    InvalidSelection { input: String },

    #[error("Selection {index} is out of range, the list has {count} entries")]
    SelectionOutOfRange { index: usize, count: usize },

    #[error("Provider reported an ambiguous target even though '{target}' was given")]
    TargetStillAmbiguous { target: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for elbctl operations
pub type Result<T> = std::result::Result<T, ElbCtlError>;

impl ElbCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ElbCtlError::Config(ConfigError::ProfileNotFound { .. }) => vec![
                "check which profiles your config file defines".to_string(),
                "drop --profile (or unset ELBCTL_PROFILE) to use the default credential chain"
                    .to_string(),
            ],
            ElbCtlError::Api(_) => vec![
                "verify the credentials and region for this profile".to_string(),
                "re-run with -vv to see the underlying API calls".to_string(),
            ],
            ElbCtlError::InvalidSelection { .. } | ElbCtlError::SelectionOutOfRange { .. } => {
                vec!["answer with one of the numbers printed next to the names".to_string()]
            }
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&format!("{}", self));

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion);
        }

        diag.print();
    }
}
