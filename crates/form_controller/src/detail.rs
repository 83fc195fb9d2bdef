use client_core::BusinessApi;
use shared::domain::BusinessId;
use tracing::{debug, info};

use crate::{
    layout::{
        DELETE_BUSINESS_NAME_LABEL, DELETE_MODAL_ID, EDIT_BUSINESS_ID_FIELD,
        EDIT_FORM, EDIT_MODAL_ID,
    },
    outcome::{Flow, FlowOutcome},
    page_mode::LIST_PAGE_PATH,
    slots::clear_errors,
    submit::{check_form, read_form, report_failure},
    surface::{
        PageSurface, CARD_EMAIL_ATTR, CARD_ID_ATTR, CARD_NAME_ATTR, CARD_OBSERVATIONS_ATTR,
        CARD_PHONE_ATTR,
    },
};

pub const CARD_LOAD_ERROR: &str = "Erro ao carregar dados da empresa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Edit,
    Delete,
}

impl ModalKind {
    pub fn element_id(self) -> &'static str {
        match self {
            ModalKind::Edit => EDIT_MODAL_ID,
            ModalKind::Delete => DELETE_MODAL_ID,
        }
    }
}

/// Visibility plus the record the modal is acting on. The target is set only
/// while the modal is open.
#[derive(Debug)]
pub struct Modal {
    kind: ModalKind,
    target: Option<BusinessId>,
}

impl Modal {
    fn new(kind: ModalKind) -> Self {
        Self { kind, target: None }
    }

    pub fn target(&self) -> Option<BusinessId> {
        self.target
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    fn open<S: PageSurface + ?Sized>(&mut self, surface: &mut S, id: BusinessId) {
        self.target = Some(id);
        surface.set_modal_visible(self.kind.element_id(), true);
        debug!(modal = ?self.kind, business_id = id.0, "modal opened");
    }

    fn close<S: PageSurface + ?Sized>(&mut self, surface: &mut S) -> Option<BusinessId> {
        surface.set_modal_visible(self.kind.element_id(), false);
        self.target.take()
    }
}

/// Handlers bound on a record's detail page: the edit form and both modals.
#[derive(Debug)]
pub struct DetailPage {
    edit: Modal,
    delete: Modal,
}

impl Default for DetailPage {
    fn default() -> Self {
        Self {
            edit: Modal::new(ModalKind::Edit),
            delete: Modal::new(ModalKind::Delete),
        }
    }
}

impl DetailPage {
    pub fn edit_modal(&self) -> &Modal {
        &self.edit
    }

    pub fn delete_modal(&self) -> &Modal {
        &self.delete
    }

    /// Seeds the edit form from the detail card and shows the modal.
    pub fn open_edit_modal<S: PageSurface + ?Sized>(&mut self, surface: &mut S) -> FlowOutcome {
        let Some(card) = surface.detail_card() else {
            return FlowOutcome::Skipped;
        };

        let required = (
            card.attr(CARD_ID_ATTR),
            card.attr(CARD_NAME_ATTR),
            card.attr(CARD_EMAIL_ATTR),
            card.attr(CARD_PHONE_ATTR),
        );
        let (Some(raw_id), Some(name), Some(email), Some(phone)) = required else {
            surface.alert(CARD_LOAD_ERROR);
            return FlowOutcome::Failed;
        };
        let Ok(id) = raw_id.parse::<BusinessId>() else {
            surface.alert(CARD_LOAD_ERROR);
            return FlowOutcome::Failed;
        };
        let observations = card.attr(CARD_OBSERVATIONS_ATTR).unwrap_or_default();

        surface.set_field_value(EDIT_BUSINESS_ID_FIELD, &id.to_string());
        surface.set_field_value(EDIT_FORM.name, name);
        surface.set_field_value(EDIT_FORM.email, email);
        surface.set_field_value(EDIT_FORM.phone, phone);
        surface.set_field_value(EDIT_FORM.observations, observations);
        self.edit.open(surface, id);
        FlowOutcome::Opened
    }

    pub fn close_edit_modal<S: PageSurface + ?Sized>(&mut self, surface: &mut S) -> FlowOutcome {
        self.edit.close(surface);
        clear_errors(surface);
        FlowOutcome::Closed
    }

    /// Submit of the edit form, addressed by the hidden id field. Reloads the
    /// page on success.
    pub async fn submit_edit<S, A>(&mut self, surface: &mut S, api: &A) -> FlowOutcome
    where
        S: PageSurface + ?Sized,
        A: BusinessApi + ?Sized,
    {
        clear_errors(surface);
        let Some(id) = surface
            .field_value(EDIT_BUSINESS_ID_FIELD)
            .and_then(|raw| raw.parse::<BusinessId>().ok())
        else {
            return FlowOutcome::Skipped;
        };

        let form = read_form(surface, &EDIT_FORM);
        if let Err(err) = check_form(surface, &EDIT_FORM, &form) {
            return FlowOutcome::Blocked(err);
        }

        match api.update_business(id, &form).await {
            Ok(()) => {
                info!(business_id = id.0, "business updated");
                self.edit.target = None;
                surface.reload();
                FlowOutcome::Reloaded
            }
            Err(failure) => report_failure(surface, Flow::Update, Some(&EDIT_FORM), failure),
        }
    }

    pub fn open_delete_modal<S: PageSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        id: BusinessId,
        name: &str,
    ) -> FlowOutcome {
        surface.set_text(DELETE_BUSINESS_NAME_LABEL, name);
        self.delete.open(surface, id);
        FlowOutcome::Opened
    }

    pub fn close_delete_modal<S: PageSurface + ?Sized>(&mut self, surface: &mut S) -> FlowOutcome {
        self.delete.close(surface);
        FlowOutcome::Closed
    }

    /// Deletes the selected record and moves to the list page. Without a
    /// selection nothing is sent.
    pub async fn confirm_delete<S, A>(&mut self, surface: &mut S, api: &A) -> FlowOutcome
    where
        S: PageSurface + ?Sized,
        A: BusinessApi + ?Sized,
    {
        let Some(id) = self.delete.target() else {
            return FlowOutcome::Skipped;
        };

        match api.delete_business(id).await {
            Ok(()) => {
                info!(business_id = id.0, "business deleted");
                surface.navigate(LIST_PAGE_PATH);
                FlowOutcome::Navigated(LIST_PAGE_PATH.to_string())
            }
            Err(failure) => report_failure(surface, Flow::Delete, None, failure),
        }
    }

    /// Click anywhere on the page. A click on a modal's backdrop closes that
    /// modal; clicks inside its content never reach the backdrop element.
    pub fn handle_backdrop_click<S: PageSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        target_id: &str,
    ) -> FlowOutcome {
        if target_id == ModalKind::Edit.element_id() {
            self.close_edit_modal(surface)
        } else if target_id == ModalKind::Delete.element_id() {
            self.close_delete_modal(surface)
        } else {
            FlowOutcome::Skipped
        }
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
