use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use client_core::{ApiFailure, BusinessApi, StatusCode};
use shared::{
    domain::{BusinessForm, BusinessId, FormField},
    protocol::{BusinessPage, ListQuery},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Create(BusinessForm),
    Update(BusinessId, BusinessForm),
    Delete(BusinessId),
    List(ListQuery),
}

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Ok,
    Created(i64),
    Server {
        message: &'static str,
        field: Option<FormField>,
    },
    Rejected(StatusCode),
    Transport,
}

/// Backend stand-in that records every call and answers with a fixed reply.
pub(crate) struct FakeApi {
    calls: Mutex<Vec<Call>>,
    reply: Reply,
}

impl FakeApi {
    pub(crate) fn replying(reply: Reply) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiFailure> {
        self.calls.lock().expect("calls lock").push(call);
        match &self.reply {
            Reply::Ok | Reply::Created(_) => Ok(()),
            Reply::Server { message, field } => Err(ApiFailure::ServerValidation {
                status: StatusCode::BAD_REQUEST,
                message: message.to_string(),
                field: *field,
            }),
            Reply::Rejected(status) => Err(ApiFailure::Rejected { status: *status }),
            Reply::Transport => Err(ApiFailure::Transport(anyhow!("connection refused"))),
        }
    }
}

#[async_trait]
impl BusinessApi for FakeApi {
    async fn create_business(&self, form: &BusinessForm) -> Result<BusinessId, ApiFailure> {
        self.record(Call::Create(form.clone()))?;
        match self.reply {
            Reply::Created(id) => Ok(BusinessId(id)),
            _ => Ok(BusinessId(1)),
        }
    }

    async fn update_business(
        &self,
        id: BusinessId,
        form: &BusinessForm,
    ) -> Result<(), ApiFailure> {
        self.record(Call::Update(id, form.clone()))
    }

    async fn delete_business(&self, id: BusinessId) -> Result<(), ApiFailure> {
        self.record(Call::Delete(id))
    }

    async fn list_businesses(&self, query: ListQuery) -> Result<BusinessPage, ApiFailure> {
        self.record(Call::List(query))?;
        Ok(BusinessPage {
            businesses: Vec::new(),
            total: 0,
            pages: 0,
            current_page: query.page,
            has_next: false,
            has_prev: false,
        })
    }
}
