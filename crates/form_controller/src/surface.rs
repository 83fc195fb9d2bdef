use std::collections::BTreeMap;

pub const CARD_ID_ATTR: &str = "data-business-id";
pub const CARD_NAME_ATTR: &str = "data-business-name";
pub const CARD_EMAIL_ATTR: &str = "data-business-email";
pub const CARD_PHONE_ATTR: &str = "data-business-phone";
pub const CARD_OBSERVATIONS_ATTR: &str = "data-business-observations";

/// Attributes of the server-rendered detail card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailCard {
    attributes: BTreeMap<String, String>,
}

impl DetailCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Card for a full record, as the detail template renders it.
    pub fn for_record(
        id: impl ToString,
        name: &str,
        email: &str,
        phone: &str,
        observations: &str,
    ) -> Self {
        Self::new()
            .with_attr(CARD_ID_ATTR, id.to_string())
            .with_attr(CARD_NAME_ATTR, name)
            .with_attr(CARD_EMAIL_ATTR, email)
            .with_attr(CARD_PHONE_ATTR, phone)
            .with_attr(CARD_OBSERVATIONS_ATTR, observations)
    }

    /// Attribute value; empty attributes count as missing.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// The page the controller drives. Element lookups that miss are no-ops, the
/// same way a handler does nothing when an element is absent from the markup.
pub trait PageSurface {
    /// Current value of an input, `None` when the element does not exist.
    fn field_value(&self, element_id: &str) -> Option<String>;
    fn set_field_value(&mut self, element_id: &str, value: &str);
    /// Replaces the text content of an element (error slots, labels).
    fn set_text(&mut self, element_id: &str, text: &str);
    /// Blanks every error slot on the page.
    fn clear_error_slots(&mut self);
    fn set_modal_visible(&mut self, modal_id: &str, visible: bool);
    fn detail_card(&self) -> Option<DetailCard>;
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, path: &str);
    fn reload(&mut self);
}
