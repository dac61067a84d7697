//! Session CLI commands
//!
//! Tokens come from the API's login endpoint; this only records and clears
//! them.

use clap::Subcommand;

use crate::config::{AppContext, SessionTokens, User};
use crate::error::FintrackResult;

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Store the signed-in user and API tokens
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// User ID (defaults to the email)
        #[arg(long)]
        user_id: Option<String>,

        /// Access token issued at login
        #[arg(long, env = "FINTRACK_ACCESS_TOKEN", hide_env_values = true)]
        access_token: String,

        /// Refresh token issued at login
        #[arg(long, env = "FINTRACK_REFRESH_TOKEN", hide_env_values = true)]
        refresh_token: String,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Status,
}

/// Handle a session command
pub fn handle_session_command(ctx: &mut AppContext, cmd: SessionCommands) -> FintrackResult<()> {
    match cmd {
        SessionCommands::Login {
            email,
            name,
            user_id,
            access_token,
            refresh_token,
        } => {
            let user = User {
                id: user_id.unwrap_or_else(|| email.clone()),
                email,
                full_name: name,
            };
            ctx.login(user, SessionTokens::new(access_token, refresh_token))?;
            println!("{}", ctx.session);
        }
        SessionCommands::Logout => {
            let was_authenticated = ctx.session.is_authenticated();
            ctx.logout()?;
            if was_authenticated {
                println!("Logged out.");
            } else {
                println!("Not logged in.");
            }
        }
        SessionCommands::Status => {
            println!("{}", ctx.session);
        }
    }

    Ok(())
}
