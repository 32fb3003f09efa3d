//! Audit-log, dashboard, and report read endpoints.

use reqwest::Method;
use stock_core::entities::{AuditLogEntry, DashboardStats, MonthlyReport};
use stock_core::page::{Page, PageQuery};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /audit-logs/?page&size&user_id` (admin).
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin.
    pub async fn list_audit_logs(
        &self,
        query: PageQuery,
        user_id: Option<i64>,
    ) -> Result<Page<AuditLogEntry>, ApiError> {
        let mut builder = self.request(Method::GET, "/audit-logs/").query(&[
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
        ]);
        if let Some(user_id) = user_id {
            builder = builder.query(&[("user_id", user_id.to_string())]);
        }
        self.execute(builder).await
    }

    /// `GET /dashboard/stats`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.execute(self.request(Method::GET, "/dashboard/stats"))
            .await
    }

    /// `GET /reports/monthly?month&year` (admin). Omitted parameters default
    /// to the current month/year server-side.
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin.
    pub async fn monthly_report(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<MonthlyReport, ApiError> {
        let mut builder = self.request(Method::GET, "/reports/monthly");
        if let Some(month) = month {
            builder = builder.query(&[("month", month.to_string())]);
        }
        if let Some(year) = year {
            builder = builder.query(&[("year", year.to_string())]);
        }
        self.execute(builder).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use reqwest::Method;

    use crate::client::ApiClient;

    #[test]
    fn report_query_omits_unset_parameters() {
        let client = ApiClient::new("http://api.test", Duration::from_secs(5)).expect("client");

        let bare = client
            .request(Method::GET, "/reports/monthly")
            .build()
            .expect("request");
        assert_eq!(bare.url().as_str(), "http://api.test/reports/monthly");

        let picked = client
            .request(Method::GET, "/reports/monthly")
            .query(&[("month", "2"), ("year", "2026")])
            .build()
            .expect("request");
        assert_eq!(
            picked.url().as_str(),
            "http://api.test/reports/monthly?month=2&year=2026"
        );
    }
}
