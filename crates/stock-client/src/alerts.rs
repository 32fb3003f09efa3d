//! Alert endpoints, plus the cheap active-count probe used by watch mode.

use reqwest::Method;
use stock_core::entities::{Alert, NewAlert};
use stock_core::enums::AlertStatus;
use stock_core::page::{Page, PageQuery};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /alerts/?page&size&status`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn list_alerts(
        &self,
        query: PageQuery,
        status: Option<AlertStatus>,
    ) -> Result<Page<Alert>, ApiError> {
        let mut builder = self.request(Method::GET, "/alerts/").query(&[
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
        ]);
        if let Some(status) = status {
            builder = builder.query(&[("status", status.as_str())]);
        }
        self.execute(builder).await
    }

    /// `POST /alerts/` — manual alert (manager or admin).
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below manager.
    pub async fn create_alert(&self, alert: &NewAlert) -> Result<Alert, ApiError> {
        self.execute(self.request(Method::POST, "/alerts/").json(alert))
            .await
    }

    /// `PATCH /alerts/{id}/resolve` (manager or admin).
    ///
    /// # Errors
    ///
    /// `ApiError::NotFound` for an unknown id; `ApiError::Forbidden` below
    /// manager.
    pub async fn resolve_alert(&self, id: i64) -> Result<Alert, ApiError> {
        self.execute(self.request(Method::PATCH, &format!("/alerts/{id}/resolve")))
            .await
    }

    /// `DELETE /alerts/{id}` (admin).
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin.
    pub async fn delete_alert(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("/alerts/{id}")))
            .await
    }

    /// Number of currently active alerts.
    ///
    /// A minimal page-1 fetch filtered to `active`; the server-computed
    /// `total` is the count, so the poll stays cheap regardless of volume.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn active_alert_count(&self) -> Result<u64, ApiError> {
        let page = self
            .list_alerts(PageQuery { page: 1, size: 1 }, Some(AlertStatus::Active))
            .await?;
        Ok(page.total)
    }
}
