pub mod authenticator;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod store;
pub mod webauthn;

pub use authenticator::MockCredentials;
pub use encoding::base64url;
pub use error::{Error, Result};
pub use webauthn::types::{
    AssertionResponse, PublicKeyCredentialCreationOptions, PublicKeyCredentialRequestOptions,
    RegistrationResponse,
};

/// Run one registration and `cfg.assertions` assertions against a fresh store
/// and print the responses as JSON.
pub async fn run(cfg: config::Config) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    let level = match cfg.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting fidomock");

    let credentials = MockCredentials::new();
    let user_id = match cfg.user_id {
        Some(id) => id,
        None => random_token()?,
    };

    let mut creation = PublicKeyCredentialCreationOptions::new(
        cfg.rp_id.clone(),
        user_id,
        random_token()?,
    );
    creation.timeout = Some(60_000);
    let registration = credentials
        .create_async(cfg.origin.clone(), creation)
        .await
        .map_err(|e| anyhow::anyhow!("registration failed: {e}"))?;

    let mut assertions = Vec::with_capacity(cfg.assertions as usize);
    for _ in 0..cfg.assertions {
        let request =
            PublicKeyCredentialRequestOptions::new(cfg.rp_id.clone(), random_token()?);
        let assertion = credentials
            .get_async(cfg.origin.clone(), request, registration.id.clone())
            .await
            .map_err(|e| anyhow::anyhow!("assertion failed: {e}"))?;
        assertions.push(assertion);
    }

    let output = serde_json::json!({
        "registration": registration,
        "assertions": assertions,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn random_token() -> anyhow::Result<String> {
    use crypto::CryptoProvider;
    let mut bytes = [0u8; 32];
    crypto::SoftwareProvider.fill_random(&mut bytes)?;
    Ok(base64url(&bytes))
}
