use serde::{Deserialize, Serialize};

use crate::domain::{BusinessId, BusinessRecord, FormField};

pub const DEFAULT_PER_PAGE: u32 = 10;

pub fn businesses_route() -> &'static str {
    "/api/businesses"
}

pub fn business_route(id: BusinessId) -> String {
    format!("/api/businesses/{id}")
}

/// Error body returned with non-2xx responses. `field` is optional; older
/// backends send only the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            field: None,
        }
    }

    pub fn with_field(message: impl Into<String>, field: FormField) -> Self {
        Self {
            error: Some(message.into()),
            field: Some(field.tag().to_string()),
        }
    }

    /// Structured field tag, if present and recognised.
    pub fn field(&self) -> Option<FormField> {
        self.field.as_deref().and_then(FormField::from_tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBusinessResponse {
    pub id: BusinessId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
}

impl ListQuery {
    pub fn new(page: u32, per_page: Option<u32>) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.filter(|n| *n > 0).unwrap_or(DEFAULT_PER_PAGE),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPage {
    pub businesses: Vec<BusinessRecord>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_clamps_page_and_defaults_per_page() {
        assert_eq!(ListQuery::new(0, None), ListQuery { page: 1, per_page: 10 });
        assert_eq!(ListQuery::new(3, Some(0)), ListQuery { page: 3, per_page: 10 });
        assert_eq!(ListQuery::new(2, Some(25)), ListQuery { page: 2, per_page: 25 });
    }

    #[test]
    fn error_body_without_field_tag_parses() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Email já cadastrado"}"#).expect("body");
        assert_eq!(body.error.as_deref(), Some("Email já cadastrado"));
        assert_eq!(body.field(), None);
    }

    #[test]
    fn error_body_with_unknown_tag_has_no_field() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"x","field":"observations"}"#).expect("body");
        assert_eq!(body.field(), None);
    }

    #[test]
    fn business_route_embeds_id() {
        assert_eq!(business_route(BusinessId(42)), "/api/businesses/42");
    }
}
