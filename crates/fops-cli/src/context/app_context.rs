use fops_auth::ClerkSession;
use fops_client::ApiClient;
use fops_config::FopsConfig;

/// Shared resources initialized once at startup.
pub struct AppContext {
    pub config: FopsConfig,
    pub client: ApiClient,
    pub session: ClerkSession,
}

impl AppContext {
    pub async fn init(config: FopsConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api)?;
        let session = resolve_session(&config).await;
        tracing::debug!(
            base_url = client.base_url(),
            signed_in = session.claims().is_some(),
            "client context ready"
        );
        Ok(Self {
            config,
            client,
            session,
        })
    }
}

/// A token that fails validation leaves the user signed out rather than
/// failing the command; the gate then explains what to do.
async fn resolve_session(config: &FopsConfig) -> ClerkSession {
    match ClerkSession::load(&config.clerk).await {
        Ok(session) => session,
        Err(error) => {
            tracing::warn!(%error, "stored session could not be validated; continuing signed out");
            ClerkSession::signed_out()
        }
    }
}
