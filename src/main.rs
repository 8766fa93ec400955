use anyhow::Result;
use clap::Parser;
mod auth;
use pgcred::{Algorithm, encrypt};
use zeroize::Zeroizing;

#[derive(Debug, Parser)]
#[command(name = "pgcred")]
#[command(
    version,
    about = "Generates PostgreSQL password verifiers (SCRAM-SHA-256)."
)]
struct Cli {
    /// Role name the verifier is generated for
    #[arg(short, long)]
    username: String,

    /// Cleartext password; read from stdin or a prompt when omitted
    #[arg(short, long, env = "PGCRED_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let password = match args.password {
        Some(p) => Zeroizing::new(p),
        None => auth::read_password()?,
    };

    let verifier = encrypt(&args.username, &password, Algorithm::ScramSha256)?;
    println!("{verifier}");

    Ok(())
}
