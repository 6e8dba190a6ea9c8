//! CLI structure and command definitions
//!
//! Defines the command-line interface using clap. Instance arguments
//! keep their command-line order all the way through: output lines come
//! back in the order the ids were given.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Operator CLI for classic load balancers
#[derive(Parser, Debug)]
#[command(name = "elbctl")]
#[command(
    version,
    about = "Attach and detach instances on classic load balancers"
)]
#[command(long_about = "
Attach and detach instances on classic load balancers.

When several load balancers exist and no --to is given, attach lists
them and asks which one to use.

EXAMPLES:
    # Show every load balancer and its instances
    elbctl list -i

    # Attach two instances, picking the load balancer interactively
    elbctl attach i-0a1b2c3d i-4e5f6a7b

    # Attach straight to a named load balancer
    elbctl attach i-0a1b2c3d --to web-prod

    # Detach an instance from whichever load balancer holds it
    elbctl detach i-0a1b2c3d

For more help on a specific command, run:
    elbctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "ELBCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "ELBCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known load balancers
    #[command(after_help = "EXAMPLES:
    # Names only
    elbctl list

    # Names plus the instances attached to each
    elbctl list -i
")]
    List {
        /// Also list the instances attached to each load balancer
        #[arg(long, short)]
        instances: bool,
    },

    /// Attach instances to a load balancer
    #[command(after_help = "EXAMPLES:
    # Sole load balancer, no questions asked
    elbctl attach i-0a1b2c3d

    # Several instances onto a named load balancer
    elbctl attach i-0a1b2c3d i-4e5f6a7b --to web-prod
")]
    Attach {
        /// Instance ids to attach, processed in order
        #[arg(value_name = "INSTANCE_ID", required = true, value_parser = NonEmptyStringValueParser::new())]
        instances: Vec<String>,

        /// Load balancer to attach to, skipping the interactive pick
        #[arg(long, value_name = "NAME")]
        to: Option<String>,
    },

    /// Detach instances from their load balancer
    #[command(after_help = "EXAMPLES:
    elbctl detach i-0a1b2c3d i-4e5f6a7b
")]
    Detach {
        /// Instance ids to detach, processed in order
        #[arg(value_name = "INSTANCE_ID", required = true, value_parser = NonEmptyStringValueParser::new())]
        instances: Vec<String>,
    },
}
