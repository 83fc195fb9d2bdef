use std::collections::{BTreeMap, BTreeSet};

use shared::domain::BusinessId;

use crate::{
    layout::{FormLayout, CREATE_FORM, EDIT_BUSINESS_ID_FIELD, EDIT_FORM},
    page_mode::{detail_page_path, CREATE_PAGE_PATH},
    surface::{DetailCard, PageSurface},
};

/// In-memory page: inputs, element text, modal visibility, and a log of the
/// alerts, navigations and reloads the controller asked for.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    path: String,
    fields: BTreeMap<String, String>,
    texts: BTreeMap<String, String>,
    error_slots: BTreeSet<String>,
    visible_modals: BTreeSet<String>,
    detail_card: Option<DetailCard>,
    alerts: Vec<String>,
    navigations: Vec<String>,
    reloads: usize,
}

impl MemoryPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// The creation page with an empty create form.
    pub fn create_page() -> Self {
        let mut page = Self::new(CREATE_PAGE_PATH);
        page.add_form(&CREATE_FORM);
        page
    }

    /// A record's detail page with the (empty) edit form and, when given, the
    /// detail card.
    pub fn detail_page(id: BusinessId, card: Option<DetailCard>) -> Self {
        let mut page = Self::new(detail_page_path(id));
        page.add_form(&EDIT_FORM);
        page.fields.insert(EDIT_BUSINESS_ID_FIELD.to_string(), String::new());
        page.detail_card = card;
        page
    }

    fn add_form(&mut self, layout: &FormLayout) {
        for input in [layout.name, layout.email, layout.phone, layout.observations] {
            self.fields.insert(input.to_string(), String::new());
        }
        for slot in layout.error_slots() {
            self.error_slots.insert(slot.to_string());
            self.texts.insert(slot.to_string(), String::new());
        }
    }

    pub fn fill_form(
        &mut self,
        layout: &FormLayout,
        name: &str,
        email: &str,
        phone: &str,
        observations: &str,
    ) {
        self.set_field_value(layout.name, name);
        self.set_field_value(layout.email, email);
        self.set_field_value(layout.phone, phone);
        self.set_field_value(layout.observations, observations);
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Text of an element; empty when never set.
    pub fn text(&self, element_id: &str) -> &str {
        self.texts
            .get(element_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_modal_visible(&self, modal_id: &str) -> bool {
        self.visible_modals.contains(modal_id)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn reloads(&self) -> usize {
        self.reloads
    }
}

impl PageSurface for MemoryPage {
    fn field_value(&self, element_id: &str) -> Option<String> {
        self.fields.get(element_id).cloned()
    }

    fn set_field_value(&mut self, element_id: &str, value: &str) {
        self.fields.insert(element_id.to_string(), value.to_string());
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        self.texts.insert(element_id.to_string(), text.to_string());
    }

    fn clear_error_slots(&mut self) {
        for slot in &self.error_slots {
            self.texts.insert(slot.clone(), String::new());
        }
    }

    fn set_modal_visible(&mut self, modal_id: &str, visible: bool) {
        if visible {
            self.visible_modals.insert(modal_id.to_string());
        } else {
            self.visible_modals.remove(modal_id);
        }
    }

    fn detail_card(&self) -> Option<DetailCard> {
        self.detail_card.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
        self.path = path.to_string();
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_errors_blanks_only_error_slots() {
        let mut page = MemoryPage::create_page();
        page.set_text("name-error", "Nome é obrigatório");
        page.set_text("email-error", "Email inválido");
        page.set_text("delete-business-name", "Acme");

        page.clear_error_slots();

        assert_eq!(page.text("name-error"), "");
        assert_eq!(page.text("email-error"), "");
        assert_eq!(page.text("delete-business-name"), "Acme");
    }

    #[test]
    fn navigation_updates_path() {
        let mut page = MemoryPage::create_page();
        page.navigate("/empresa/9");
        assert_eq!(page.path(), "/empresa/9");
        assert_eq!(page.navigations(), ["/empresa/9".to_string()]);
    }
}
