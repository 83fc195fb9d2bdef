use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{BusinessForm, BusinessId, FormField},
    protocol::{
        business_route, businesses_route, ApiErrorBody, BusinessPage, CreateBusinessResponse,
        ListQuery,
    },
};
use thiserror::Error;
use tracing::{debug, warn};

pub use reqwest::StatusCode;

#[derive(Debug, Error)]
pub enum ApiFailure {
    /// Non-2xx response that carried an error message.
    #[error("server rejected request ({status}): {message}")]
    ServerValidation {
        status: StatusCode,
        message: String,
        field: Option<FormField>,
    },
    /// Non-2xx response without a usable error message.
    #[error("server rejected request ({status})")]
    Rejected { status: StatusCode },
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),
}

impl From<reqwest::Error> for ApiFailure {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.into())
    }
}

impl ApiFailure {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiFailure::Transport(_))
    }
}

/// REST contract of the business directory backend.
#[async_trait]
pub trait BusinessApi: Send + Sync {
    async fn create_business(&self, form: &BusinessForm) -> Result<BusinessId, ApiFailure>;
    async fn update_business(&self, id: BusinessId, form: &BusinessForm)
        -> Result<(), ApiFailure>;
    async fn delete_business(&self, id: BusinessId) -> Result<(), ApiFailure>;
    async fn list_businesses(&self, query: ListQuery) -> Result<BusinessPage, ApiFailure>;
}

pub struct HttpBusinessApi {
    http: Client,
    server_url: String,
}

impl HttpBusinessApi {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            http,
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.server_url)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await?;
    let body = serde_json::from_str::<ApiErrorBody>(&raw)
        .with_context(|| format!("unreadable error body ({status})"))
        .map_err(ApiFailure::Transport)?;
    let field = body.field();
    match body.error.filter(|message| !message.is_empty()) {
        Some(message) => {
            warn!(%status, %message, "backend rejected request");
            Err(ApiFailure::ServerValidation {
                status,
                message,
                field,
            })
        }
        None => {
            warn!(%status, "backend rejected request without an error message");
            Err(ApiFailure::Rejected { status })
        }
    }
}

#[async_trait]
impl BusinessApi for HttpBusinessApi {
    async fn create_business(&self, form: &BusinessForm) -> Result<BusinessId, ApiFailure> {
        debug!(name = %form.name, "creating business");
        let res = self
            .http
            .post(self.url(businesses_route()))
            .json(form)
            .send()
            .await?;
        let body: CreateBusinessResponse = ensure_success(res).await?.json().await?;
        Ok(body.id)
    }

    async fn update_business(
        &self,
        id: BusinessId,
        form: &BusinessForm,
    ) -> Result<(), ApiFailure> {
        debug!(business_id = id.0, "updating business");
        let res = self
            .http
            .put(self.url(&business_route(id)))
            .json(form)
            .send()
            .await?;
        ensure_success(res).await?;
        Ok(())
    }

    async fn delete_business(&self, id: BusinessId) -> Result<(), ApiFailure> {
        debug!(business_id = id.0, "deleting business");
        let res = self.http.delete(self.url(&business_route(id))).send().await?;
        let status = res.status();
        if !status.is_success() {
            warn!(%status, business_id = id.0, "backend refused delete");
            return Err(ApiFailure::Rejected { status });
        }
        Ok(())
    }

    async fn list_businesses(&self, query: ListQuery) -> Result<BusinessPage, ApiFailure> {
        debug!(page = query.page, per_page = query.per_page, "listing businesses");
        let res = self
            .http
            .get(self.url(businesses_route()))
            .query(&[("page", query.page), ("per_page", query.per_page)])
            .send()
            .await?;
        Ok(ensure_success(res).await?.json().await?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
