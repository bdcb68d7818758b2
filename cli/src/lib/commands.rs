use std::io::BufRead;
use std::io::Write;

use anyhow::Context;
use nexevent_auth::Authenticator;
use nexevent_auth::SessionClaims;
use serde_json::json;

use crate::cli::Command;

/// Whether the command's check passed. Maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Rejected,
}

/// Execute one command, reading passwords from `input` and writing results
/// to `output`.
pub async fn run<R: BufRead, W: Write>(
    command: Command,
    authenticator: &Authenticator,
    input: R,
    output: &mut W,
) -> anyhow::Result<Outcome> {
    match command {
        Command::Hash => {
            let password = read_password(input)?;
            let hash = authenticator
                .hash_password(&password)
                .await
                .context("Failed to hash password")?;

            writeln!(output, "{}", hash)?;
            Ok(Outcome::Success)
        }
        Command::VerifyPassword { hash } => {
            let password = read_password(input)?;
            let is_valid = authenticator.verify_password(&password, &hash).await;

            writeln!(output, "{}", if is_valid { "valid" } else { "invalid" })?;
            Ok(outcome(is_valid))
        }
        Command::Issue { sub, email, role } => {
            let claims = SessionClaims::new(sub, email, role);
            let token = authenticator
                .issue_token(&claims)
                .context("Failed to issue token")?;

            let body = json!({
                "token": token.as_str(),
                "expires_at": token.expires_at().to_rfc3339(),
            });
            writeln!(output, "{}", body)?;
            Ok(Outcome::Success)
        }
        Command::Verify { token } => match authenticator.validate_token(&token) {
            Some(claims) => {
                writeln!(output, "{}", serde_json::to_string(&claims)?)?;
                Ok(Outcome::Success)
            }
            None => {
                writeln!(output, "invalid")?;
                Ok(Outcome::Rejected)
            }
        },
    }
}

fn outcome(passed: bool) -> Outcome {
    if passed {
        Outcome::Success
    } else {
        Outcome::Rejected
    }
}

/// Read a single line, dropping the line terminator only.
fn read_password<R: BufRead>(mut input: R) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    let password = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line.as_str());

    Ok(password.to_string())
}
