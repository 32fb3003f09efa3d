//! User administration endpoints (admin-gated server-side).

use reqwest::Method;
use stock_core::entities::{NewUser, RoleUpdate, User};
use stock_core::enums::Role;
use stock_core::page::{Page, PageQuery};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /users/?page&size`.
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin.
    pub async fn list_users(&self, query: PageQuery) -> Result<Page<User>, ApiError> {
        let builder = self.request(Method::GET, "/users/").query(&[
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
        ]);
        self.execute(builder).await
    }

    /// `POST /users/` — registration.
    ///
    /// # Errors
    ///
    /// `ApiError::Api` with HTTP 400 when the email is already registered.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.execute(self.request(Method::POST, "/users/").json(user))
            .await
    }

    /// `PATCH /users/{id}/role`.
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin, `ApiError::NotFound` for an
    /// unknown id.
    pub async fn set_user_role(&self, id: i64, role: Role) -> Result<User, ApiError> {
        let body = RoleUpdate { role };
        self.execute(
            self.request(Method::PATCH, &format!("/users/{id}/role"))
                .json(&body),
        )
        .await
    }

    /// `DELETE /users/{id}` — responds 204, no body.
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin, `ApiError::NotFound` for an
    /// unknown id.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("/users/{id}")))
            .await
    }
}
