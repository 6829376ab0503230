//! Sign a token with an Ed25519 key and verify it again
//!
//! 1. Load the signing key from PKCS#8
//! 2. Build and sign a token carrying registered and application claims
//! 3. Verify it: algorithm, signature, then claims
//! 4. Show how a tampered token and an expired one are rejected
//!
//! Run with
//!
//! ```not_rust
//! RUST_LOG=jwtseal=debug cargo run --example sign_and_verify
//! ```

use chrono::{Duration, Utc};
use jwtseal::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PRIVATE_KEY: &str = include_str!("../tests/fixtures/ed25519_private_pkcs8.b64");

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    registered: RegisteredClaims,
    email: String,
    role: String,
}

impl Claims for SessionClaims {
    fn registered(&self) -> &RegisteredClaims {
        &self.registered
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtseal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== jwtseal - Sign and Verify ===\n");

    let signing_key = SigningKey::ed25519_from_pkcs8_base64(PRIVATE_KEY)?;
    let public_key = signing_key.public_key();

    let now = Utc::now();
    let claims = SessionClaims {
        registered: RegisteredClaims {
            issuer: Some("accounts.example.com".to_string()),
            subject: Some("user-42".to_string()),
            audience: vec!["client-app".to_string()],
            expires_at: Some(NumericDate::new(now + Duration::minutes(15))),
            not_before: Some(NumericDate::new(now)),
            issued_at: Some(NumericDate::new(now)),
            id: None,
        },
        email: "user@example.com".to_string(),
        role: "editor".to_string(),
    };

    let raw = Token::new(claims)
        .key_id("signing-2024")?
        .signed_string(&signing_key)?;
    println!("Token: {raw}\n");

    let registry = AlgorithmRegistry::new();
    let verifier = TokenVerifier::new(&registry, AlgorithmId::EdDSA).expect_claims(
        ExpectedClaims::new()
            .issuer("accounts.example.com")
            .subject("user-42")
            .audience("client-app"),
    );

    let token: Token<SessionClaims> = verifier.verify(&raw, &public_key)?;
    println!("=== Verified Token ===");
    println!("Valid: {}", token.is_valid());
    println!("Key id: {:?}", token.header().key_id());
    println!("Subject: {:?}", token.claims().subject());
    println!("Email: {}", token.claims().email);
    println!("Role: {}", token.claims().role);
    println!("Expires at: {:?}\n", token.claims().expiration_time());

    println!("=== Rejections ===");
    let mut tampered = raw.clone();
    tampered.insert_str(raw.rfind('.').unwrap_or(raw.len()) - 1, "A");
    match verifier.verify::<SessionClaims>(&tampered, &public_key) {
        Ok(_) => println!("Tampered token: unexpectedly accepted"),
        Err(e) => println!("Tampered token: {e}"),
    }

    match verifier
        .clone()
        .at(now + Duration::hours(1))
        .verify::<SessionClaims>(&raw, &public_key)
    {
        Ok(_) => println!("Expired token: unexpectedly accepted"),
        Err(e) => println!("Expired token: {e}"),
    }

    Ok(())
}
