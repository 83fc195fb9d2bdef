//! Field error slots and routing of server messages onto them.

use shared::domain::FormField;
use tracing::debug;

use crate::{layout::FormLayout, outcome::ErrorRoute, surface::PageSurface};

/// Keyword order for messages without a field tag. The first match wins, so a
/// message naming both email and name lands on the email slot.
const LEGACY_KEYWORD_ORDER: [FormField; 3] =
    [FormField::Email, FormField::Name, FormField::Phone];

pub fn show_error<S: PageSurface + ?Sized>(surface: &mut S, slot: &str, message: &str) {
    surface.set_text(slot, message);
}

pub fn clear_errors<S: PageSurface + ?Sized>(surface: &mut S) {
    surface.clear_error_slots();
}

/// Field a server message belongs to: the structured tag when present,
/// otherwise the first field whose label appears in the message.
pub fn target_field(message: &str, tagged: Option<FormField>) -> Option<FormField> {
    tagged.or_else(|| {
        LEGACY_KEYWORD_ORDER
            .into_iter()
            .find(|field| message.contains(field.label()))
    })
}

pub fn route_server_error<S: PageSurface + ?Sized>(
    surface: &mut S,
    layout: &FormLayout,
    message: &str,
    tagged: Option<FormField>,
) -> ErrorRoute {
    match target_field(message, tagged) {
        Some(field) => {
            debug!(?field, tagged = tagged.is_some(), "routing server error to slot");
            show_error(surface, layout.error_slot(field), message);
            ErrorRoute::Slot(field)
        }
        None => {
            let alert = format!("Erro: {message}");
            surface.alert(&alert);
            ErrorRoute::Alert(alert)
        }
    }
}
