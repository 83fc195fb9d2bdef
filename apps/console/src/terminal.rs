use form_controller::{DetailCard, MemoryPage, PageSurface};

/// Page surface for the console: keeps page state in a [`MemoryPage`] and
/// echoes what a browser user would see.
pub struct TerminalPage {
    inner: MemoryPage,
}

impl TerminalPage {
    pub fn new(inner: MemoryPage) -> Self {
        Self { inner }
    }

    pub fn path(&self) -> &str {
        self.inner.path()
    }
}

impl PageSurface for TerminalPage {
    fn field_value(&self, element_id: &str) -> Option<String> {
        self.inner.field_value(element_id)
    }

    fn set_field_value(&mut self, element_id: &str, value: &str) {
        self.inner.set_field_value(element_id, value);
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        if element_id.ends_with("-error") && !text.is_empty() {
            eprintln!("{element_id}: {text}");
        }
        self.inner.set_text(element_id, text);
    }

    fn clear_error_slots(&mut self) {
        self.inner.clear_error_slots();
    }

    fn set_modal_visible(&mut self, modal_id: &str, visible: bool) {
        tracing::debug!(modal_id, visible, "modal visibility changed");
        self.inner.set_modal_visible(modal_id, visible);
    }

    fn detail_card(&self) -> Option<DetailCard> {
        self.inner.detail_card()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("alert: {message}");
        self.inner.alert(message);
    }

    fn navigate(&mut self, path: &str) {
        println!("navigate: {path}");
        self.inner.navigate(path);
    }

    fn reload(&mut self) {
        println!("reload: {}", self.inner.path());
        self.inner.reload();
    }
}
