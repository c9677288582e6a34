/// This authenticator has no vendor identity, so the AAGUID is all zeros.
pub const AAGUID: [u8; 16] = [0u8; 16];
pub const CREDENTIAL_ID_LEN: usize = 32;
/// The only attestation conveyance format this authenticator produces.
pub const ATTESTATION_NONE: &str = "none";
pub const PUBLIC_KEY_TYPE: &str = "public-key";

#[derive(clap::Parser, Debug, Clone)]
pub struct Config {
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Origin reported in clientDataJSON.
    #[arg(long, default_value = "https://localhost:8000")]
    pub origin: String,
    #[arg(long, default_value = "example.com")]
    pub rp_id: String,
    /// User handle bound to the new credential (random if omitted).
    #[arg(long)]
    pub user_id: Option<String>,
    /// Number of assertions to run after registration.
    #[arg(long, default_value_t = 1)]
    pub assertions: u32,
}
