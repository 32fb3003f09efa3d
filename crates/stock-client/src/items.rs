//! Item CRUD, the narrow quantity path, and bulk import submission.

use reqwest::Method;
use stock_core::entities::{Item, NewItem, QuantityUpdate, UpdateItem};
use stock_core::page::{Page, PageQuery};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /items/?page&size&search`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; never retried.
    pub async fn list_items(
        &self,
        query: PageQuery,
        search: Option<&str>,
    ) -> Result<Page<Item>, ApiError> {
        let mut builder = self.request(Method::GET, "/items/").query(&[
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
        ]);
        if let Some(search) = search {
            builder = builder.query(&[("search", search)]);
        }
        self.execute(builder).await
    }

    /// `GET /items/{id}`.
    ///
    /// # Errors
    ///
    /// `ApiError::NotFound` for an unknown id.
    pub async fn get_item(&self, id: i64) -> Result<Item, ApiError> {
        self.execute(self.request(Method::GET, &format!("/items/{id}")))
            .await
    }

    /// `POST /items/` (admin).
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin.
    pub async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError> {
        self.execute(self.request(Method::POST, "/items/").json(item))
            .await
    }

    /// `PUT /items/{id}` — full edit, quantity excluded by construction
    /// (see [`UpdateItem`]).
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin, `ApiError::NotFound` for an
    /// unknown id.
    pub async fn update_item(&self, id: i64, update: &UpdateItem) -> Result<Item, ApiError> {
        self.execute(self.request(Method::PUT, &format!("/items/{id}")).json(update))
            .await
    }

    /// `PATCH /items/{id}/quantity` — the manager-accessible adjustment path.
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below manager.
    pub async fn update_quantity(&self, id: i64, quantity: i64) -> Result<Item, ApiError> {
        let body = QuantityUpdate { quantity };
        self.execute(
            self.request(Method::PATCH, &format!("/items/{id}/quantity"))
                .json(&body),
        )
        .await
    }

    /// `DELETE /items/{id}` (admin).
    ///
    /// # Errors
    ///
    /// `ApiError::Forbidden` below admin, `ApiError::NotFound` for an
    /// unknown id.
    pub async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, &format!("/items/{id}")))
            .await
    }

    /// `POST /items/bulk` — the whole batch in one call; partial-failure
    /// semantics belong to the backend.
    ///
    /// Returns the created items; their count is the import count.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; the batch is never split or retried client-side.
    pub async fn bulk_create_items(&self, rows: &[NewItem]) -> Result<Vec<Item>, ApiError> {
        self.execute(self.request(Method::POST, "/items/bulk").json(rows))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use stock_core::page::PageQuery;

    use crate::client::ApiClient;

    fn client() -> ApiClient {
        ApiClient::new("http://api.test", Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn list_query_carries_page_size_and_search() {
        let query = PageQuery { page: 2, size: 20 };
        let request = client()
            .request(Method::GET, "/items/")
            .query(&[
                ("page", query.page.to_string()),
                ("size", query.size.to_string()),
            ])
            .query(&[("search", "m6 bolt")])
            .build()
            .expect("request");

        assert_eq!(
            request.url().as_str(),
            "http://api.test/items/?page=2&size=20&search=m6+bolt"
        );
    }

    #[test]
    fn quantity_path_targets_the_narrow_endpoint() {
        let request = client()
            .request(Method::PATCH, "/items/7/quantity")
            .json(&stock_core::entities::QuantityUpdate { quantity: 3 })
            .build()
            .expect("request");

        assert_eq!(request.url().path(), "/items/7/quantity");
        let body = request.body().and_then(|b| b.as_bytes()).expect("body");
        assert_eq!(body, br#"{"quantity":3}"#);
    }
}
