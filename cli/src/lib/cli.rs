use clap::Parser;
use clap::Subcommand;
use nexevent_auth::Role;

/// Hash passwords and issue or inspect session tokens using the service
/// configuration (config/*.toml and NEXEVENT__* variables).
#[derive(Debug, Parser)]
#[command(name = "nexevent-auth", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Hash a password read from stdin
    Hash,

    /// Check a password read from stdin against a stored hash
    VerifyPassword {
        /// Stored hash in PHC string format
        hash: String,
    },

    /// Issue a session token
    Issue {
        /// Subject (account identifier)
        #[arg(long)]
        sub: String,

        #[arg(long)]
        email: String,

        /// USER, ORGANIZER or ADMIN
        #[arg(long, default_value = "USER")]
        role: Role,
    },

    /// Verify a session token and print its claims
    Verify {
        token: String,
    },
}
