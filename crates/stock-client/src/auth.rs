//! Login and identity endpoints.

use reqwest::Method;
use serde::Deserialize;
use stock_core::entities::User;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ApiClient {
    /// `POST /login` — OAuth2-style form-encoded credentials.
    ///
    /// Returns the opaque bearer token. The caller decides where it lives;
    /// this client does not store it implicitly.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` for bad credentials, `ApiError::Network` for
    /// transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let builder = self
            .request_anonymous(Method::POST, "/login")
            .form(&[("username", email), ("password", password)]);
        let token: TokenResponse = self.execute(builder).await?;
        Ok(token.access_token)
    }

    /// `GET /users/me` — the identity behind the current token.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` when the token is missing, invalid or expired.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.execute(self.request(Method::GET, "/users/me")).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::Method;

    use crate::client::ApiClient;

    #[test]
    fn login_is_form_encoded_without_bearer() {
        let mut client = ApiClient::new("http://api.test", Duration::from_secs(5)).expect("client");
        client.set_token(Some("stale".into()));

        let request = client
            .request_anonymous(Method::POST, "/login")
            .form(&[("username", "a@b.c"), ("password", "secret")])
            .build()
            .expect("request");

        assert!(request.headers().get("authorization").is_none());
        let content_type = request
            .headers()
            .get("content-type")
            .expect("content type")
            .to_str()
            .expect("ascii");
        assert_eq!(content_type, "application/x-www-form-urlencoded");
        let body = request.body().and_then(|b| b.as_bytes()).expect("body");
        assert_eq!(body, b"username=a%40b.c&password=secret");
    }
}
