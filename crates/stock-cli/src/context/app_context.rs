use std::time::Duration;

use anyhow::Context as _;
use stock_auth::{AccessPolicy, GuardDecision, Session, guard};
use stock_client::ApiClient;
use stock_config::StockConfig;
use stock_core::page::Pager;

/// What a guarded dispatch should do after the access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Run the requested command.
    Proceed,
    /// Role constraint unmet: show the default page (items) instead of an
    /// error — the authorization failure is a redirect, not a banner.
    ShowDefault,
}

/// Everything a command handler needs, built once per invocation and passed
/// explicitly — session state has an owner, not a global.
pub struct AppContext {
    pub config: StockConfig,
    pub client: ApiClient,
    pub session: Session,
}

impl AppContext {
    /// Validate config, build the HTTP client, and restore any persisted
    /// session.
    ///
    /// # Errors
    ///
    /// Config validation or HTTP client construction failures.
    pub fn init(config: StockConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let client = ApiClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
        .context("failed to construct HTTP client")?;
        let session = Session::restore();
        tracing::debug!(state = %session.state(), "session restored");

        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// Apply the route guard for `policy`, resolving the identity first if a
    /// token is present but `/users/me` has not answered yet.
    ///
    /// # Errors
    ///
    /// `AuthError::NotAuthenticated` without a token; identity-resolution
    /// failures (which also log the session out).
    pub async fn require(&mut self, policy: AccessPolicy) -> anyhow::Result<Gate> {
        if guard(policy, &self.session) == GuardDecision::RedirectLogin {
            return Err(stock_auth::AuthError::NotAuthenticated.into());
        }

        self.session
            .resolve_identity(&mut self.client)
            .await
            .context("could not resolve identity")?;

        match guard(policy, &self.session) {
            GuardDecision::Allow => Ok(Gate::Proceed),
            GuardDecision::RedirectDefault => Ok(Gate::ShowDefault),
            GuardDecision::RedirectLogin => {
                Err(stock_auth::AuthError::NotAuthenticated.into())
            }
            GuardDecision::Loading => unreachable!("identity resolved above"),
        }
    }

    /// Action-level gate for controls the UI only offers to admins.
    ///
    /// # Errors
    ///
    /// A role error naming the action.
    pub fn ensure_admin(&self, action: &str) -> anyhow::Result<()> {
        if self.session.is_admin() {
            Ok(())
        } else {
            anyhow::bail!("admin role required to {action}")
        }
    }

    /// Action-level gate for manager-or-admin controls.
    ///
    /// # Errors
    ///
    /// A role error naming the action.
    pub fn ensure_manager(&self, action: &str) -> anyhow::Result<()> {
        if self.session.is_manager() {
            Ok(())
        } else {
            anyhow::bail!("manager or admin role required to {action}")
        }
    }

    /// A pager for one list view, honoring an explicit `--page`.
    #[must_use]
    pub fn pager(&self, page: Option<u32>) -> Pager {
        Pager::starting_at(self.config.ui.page_size, page.unwrap_or(1))
    }

    /// End the session and clear stored credentials.
    pub fn logout(&mut self) {
        self.session.logout(&mut self.client);
    }
}
