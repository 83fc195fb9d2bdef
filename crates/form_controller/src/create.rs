use client_core::BusinessApi;
use tracing::info;

use crate::{
    layout::{FormLayout, CREATE_FORM},
    outcome::{Flow, FlowOutcome},
    page_mode::detail_page_path,
    slots::clear_errors,
    submit::{check_form, read_form, report_failure},
    surface::PageSurface,
};

/// Handlers bound on the creation page.
#[derive(Debug, Default)]
pub struct CreatePage;

impl CreatePage {
    pub fn layout(&self) -> &'static FormLayout {
        &CREATE_FORM
    }

    /// Submit of the create form. On success the browser moves to the new
    /// record's detail page.
    pub async fn submit<S, A>(&self, surface: &mut S, api: &A) -> FlowOutcome
    where
        S: PageSurface + ?Sized,
        A: BusinessApi + ?Sized,
    {
        clear_errors(surface);
        let form = read_form(surface, &CREATE_FORM);
        if let Err(err) = check_form(surface, &CREATE_FORM, &form) {
            return FlowOutcome::Blocked(err);
        }

        match api.create_business(&form).await {
            Ok(id) => {
                info!(business_id = id.0, "business created");
                let path = detail_page_path(id);
                surface.navigate(&path);
                FlowOutcome::Navigated(path)
            }
            Err(failure) => report_failure(surface, Flow::Create, Some(&CREATE_FORM), failure),
        }
    }
}

#[cfg(test)]
#[path = "tests/create_tests.rs"]
mod tests;
