//! Session commands: login, logout, whoami.

use tracing::info;

use anvaya_client::{ApiClient, AuthSession, ClientConfig};

/// Log in and persist the token in the configured slot.
pub async fn login(
    client: &ApiClient,
    config: &ClientConfig,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = client.login(email, password).await?;

    let mut session = AuthSession::anonymous(config);
    session.store_token(&token)?;

    let name = session
        .claims()
        .map_or_else(|| email.to_string(), |claims| claims.display_name().to_string());
    info!(user = %name, "Logged in");
    println!("Logged in as {name}");
    Ok(())
}

/// Clear the persisted token.
pub fn logout(mut session: AuthSession) -> Result<(), Box<dyn std::error::Error>> {
    session.teardown()?;
    println!("Logged out");
    Ok(())
}

/// Show the identity claims of the current session.
pub fn whoami(session: &AuthSession) {
    match session.claims() {
        Some(claims) => {
            println!("{}", claims.display_name());
            if let Some(email) = claims.email.as_deref() {
                println!("email: {email}");
            }
            if claims.is_expired(chrono::Utc::now()) {
                println!("(token expired - log in again)");
            }
        }
        None => println!("Not logged in"),
    }
}
