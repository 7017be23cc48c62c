//! REST calls against the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin `/api`
//! paths forwarded by the host. Server-side (SSR): every call returns
//! [`ConsoleError::Unavailable`] since these endpoints are only meaningful
//! in the browser.
//!
//! DESIGN
//! ======
//! Views depend on the [`CatalogApi`] trait rather than on `gloo-net`
//! directly, so page flows can be exercised natively against a recording
//! fake. Every call except the token request carries the bearer token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(test)]
#[path = "api_fake.rs"]
pub(crate) mod fake;

use super::error::ConsoleError;
use super::types::{AccountProfile, Credentials, LoginResponse, NewAccount, NewProduct, Product, ResearchReport};

pub const TOKEN_ENDPOINT: &str = "/api/token/";
pub const PRODUCTS_ENDPOINT: &str = "/api/products/";
pub const USERS_ENDPOINT: &str = "/api/users/";
pub const ME_ENDPOINT: &str = "/api/users/me/";
pub const ADD_PRODUCT_ENDPOINT: &str = "/api/users/add_product/";
pub const REMOVE_PRODUCT_ENDPOINT: &str = "/api/users/remove_product/";

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: i64) -> String {
    format!("{PRODUCTS_ENDPOINT}{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn research_endpoint(id: i64) -> String {
    format!("{PRODUCTS_ENDPOINT}{id}/research/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Catalog backend operations used by the views.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// Exchange credentials for a bearer token and role flag.
    async fn obtain_token(&self, credentials: &Credentials) -> Result<LoginResponse, ConsoleError>;

    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ConsoleError>;

    async fn create_product(&self, token: &str, product: &NewProduct) -> Result<Product, ConsoleError>;

    async fn rename_product(&self, token: &str, id: i64, name: &str) -> Result<Product, ConsoleError>;

    async fn research_product(&self, token: &str, id: i64) -> Result<ResearchReport, ConsoleError>;

    async fn list_accounts(&self, token: &str) -> Result<Vec<AccountProfile>, ConsoleError>;

    async fn create_account(&self, token: &str, account: &NewAccount) -> Result<AccountProfile, ConsoleError>;

    /// Profile of the logged-in user, including their curated products.
    async fn fetch_me(&self, token: &str) -> Result<AccountProfile, ConsoleError>;

    async fn add_product(&self, token: &str, id: i64) -> Result<(), ConsoleError>;

    async fn remove_product(&self, token: &str, id: i64) -> Result<(), ConsoleError>;
}

/// Browser implementation of [`CatalogApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCatalogApi;

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder};
    use serde::de::DeserializeOwned;

    use super::bearer_header;
    use crate::net::error::{ConsoleError, status_failure};
    use crate::net::types::StatusReply;

    pub(super) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &bearer_header(token))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, ConsoleError> {
        let request = request.map_err(|e| ConsoleError::Network(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ConsoleError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_failure(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ConsoleError::Network(e.to_string()))
    }

    pub(super) async fn read_status(request: Result<Request, gloo_net::Error>) -> Result<(), ConsoleError> {
        let reply: StatusReply = read_json(request).await?;
        match reply.error {
            Some(error) => Err(ConsoleError::Network(error)),
            None => Ok(()),
        }
    }

    pub(super) fn js_failure(err: &wasm_bindgen::JsValue) -> ConsoleError {
        ConsoleError::Network(format!("{err:?}"))
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn obtain_token(&self, credentials: &Credentials) -> Result<LoginResponse, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
                .json(credentials)
                .map_err(|e| ConsoleError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ConsoleError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ConsoleError::Auth { status: resp.status() });
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ConsoleError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ConsoleError::Unavailable)
        }
    }

    async fn list_products(&self, token: &str) -> Result<Vec<Product>, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let request = http::authorized(gloo_net::http::Request::get(PRODUCTS_ENDPOINT), token).build();
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ConsoleError::Unavailable)
        }
    }

    async fn create_product(&self, token: &str, product: &NewProduct) -> Result<Product, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let request = http::authorized(gloo_net::http::Request::post(PRODUCTS_ENDPOINT), token).json(product);
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, product);
            Err(ConsoleError::Unavailable)
        }
    }

    async fn rename_product(&self, token: &str, id: i64, name: &str) -> Result<Product, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let url = product_endpoint(id);
            let body = super::types::ProductRename { name };
            let request = http::authorized(gloo_net::http::Request::put(&url), token).json(&body);
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, name);
            Err(ConsoleError::Unavailable)
        }
    }

    async fn research_product(&self, token: &str, id: i64) -> Result<ResearchReport, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let url = research_endpoint(id);
            let request =
                http::authorized(gloo_net::http::Request::post(&url), token).json(&serde_json::json!({}));
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(ConsoleError::Unavailable)
        }
    }

    async fn list_accounts(&self, token: &str) -> Result<Vec<AccountProfile>, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let request = http::authorized(gloo_net::http::Request::get(USERS_ENDPOINT), token).build();
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ConsoleError::Unavailable)
        }
    }

    async fn create_account(&self, token: &str, account: &NewAccount) -> Result<AccountProfile, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let request = http::authorized(gloo_net::http::Request::post(USERS_ENDPOINT), token).json(account);
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, account);
            Err(ConsoleError::Unavailable)
        }
    }

    async fn fetch_me(&self, token: &str) -> Result<AccountProfile, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let request = http::authorized(gloo_net::http::Request::get(ME_ENDPOINT), token).build();
            http::read_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ConsoleError::Unavailable)
        }
    }

    async fn add_product(&self, token: &str, id: i64) -> Result<(), ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::ProductRef { product_id: id };
            let request = http::authorized(gloo_net::http::Request::post(ADD_PRODUCT_ENDPOINT), token).json(&body);
            http::read_status(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(ConsoleError::Unavailable)
        }
    }

    async fn remove_product(&self, token: &str, id: i64) -> Result<(), ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::ProductRef { product_id: id };
            let request =
                http::authorized(gloo_net::http::Request::post(REMOVE_PRODUCT_ENDPOINT), token).json(&body);
            http::read_status(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(ConsoleError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
impl HttpCatalogApi {
    /// Create a product with an uploaded review image as `multipart/form-data`.
    ///
    /// The browser fills in the multipart boundary, so no `Content-Type`
    /// header is set here.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Network`] if the form cannot be built, the
    /// request fails, or the backend answers with a non-OK status.
    pub async fn create_product_with_image(
        &self,
        token: &str,
        product: &NewProduct,
        image: &web_sys::File,
    ) -> Result<Product, ConsoleError> {
        let form = web_sys::FormData::new().map_err(|e| http::js_failure(&e))?;
        form.append_with_str("name", &product.name)
            .map_err(|e| http::js_failure(&e))?;
        form.append_with_str("description", &product.description)
            .map_err(|e| http::js_failure(&e))?;
        form.append_with_blob_and_filename("review_image", image, &image.name())
            .map_err(|e| http::js_failure(&e))?;
        let request = http::authorized(gloo_net::http::Request::post(PRODUCTS_ENDPOINT), token).body(form);
        http::read_json(request).await
    }
}
