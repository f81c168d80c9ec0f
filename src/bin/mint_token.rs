// src/bin/mint_token.rs
//! Issues a bearer token for local testing:
//! `cargo run --bin mint_token -- <user_id> <username>`.
use anyhow::{Context, Result, bail};
use article_desk::application::{dto::TokenSubject, ports::security::TokenManager};
use article_desk::config::AppConfig;
use article_desk::domain::user::UserId;
use article_desk::infrastructure::security::token::BiscuitTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let mut args = std::env::args().skip(1);
    let (Some(raw_id), Some(username)) = (args.next(), args.next()) else {
        bail!("usage: mint_token <user_id> <username>");
    };
    let user_id: i64 = raw_id.parse().context("user_id must be an integer")?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let issued = manager
        .issue(TokenSubject {
            user_id: UserId::new(user_id)?,
            username,
        })
        .await?;

    println!("{}", issued.token);
    eprintln!("expires at {}", issued.expires_at.to_rfc3339());
    Ok(())
}
