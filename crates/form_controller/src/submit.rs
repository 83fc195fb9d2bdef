use client_core::ApiFailure;
use shared::{
    domain::{BusinessForm, FormField},
    error::FieldError,
};
use tracing::{error, warn};

use crate::{
    layout::FormLayout,
    outcome::{ErrorRoute, Flow, FlowOutcome},
    slots::{route_server_error, show_error},
    surface::PageSurface,
    validation::validate,
};

pub(crate) fn read_form<S: PageSurface + ?Sized>(
    surface: &S,
    layout: &FormLayout,
) -> BusinessForm {
    let value = |element_id: &str| surface.field_value(element_id).unwrap_or_default();
    BusinessForm::new(
        value(layout.input(FormField::Name)),
        value(layout.input(FormField::Email)),
        value(layout.input(FormField::Phone)),
        value(layout.observations),
    )
}

/// Validates and, on failure, writes the message into the field's slot.
pub(crate) fn check_form<S: PageSurface + ?Sized>(
    surface: &mut S,
    layout: &FormLayout,
    form: &BusinessForm,
) -> Result<(), FieldError> {
    validate(form).inspect_err(|err| {
        show_error(surface, layout.error_slot(err.field()), &err.to_string());
    })
}

/// Surfaces a failed request. Form flows route server messages to their
/// slots; flows without a form alert instead.
pub(crate) fn report_failure<S: PageSurface + ?Sized>(
    surface: &mut S,
    flow: Flow,
    layout: Option<&FormLayout>,
    failure: ApiFailure,
) -> FlowOutcome {
    match failure {
        ApiFailure::ServerValidation {
            status,
            message,
            field,
        } => {
            warn!(flow = flow.name(), %status, %message, "request rejected");
            match layout {
                Some(layout) => {
                    FlowOutcome::Rejected(route_server_error(surface, layout, &message, field))
                }
                None => alert_rejection(surface, flow),
            }
        }
        ApiFailure::Rejected { status } => {
            warn!(flow = flow.name(), %status, "request rejected");
            alert_rejection(surface, flow)
        }
        ApiFailure::Transport(err) => {
            error!(flow = flow.name(), error = %err, "request failed");
            surface.alert(&flow.transport_message());
            FlowOutcome::Failed
        }
    }
}

fn alert_rejection<S: PageSurface + ?Sized>(surface: &mut S, flow: Flow) -> FlowOutcome {
    let message = flow.rejected_message();
    surface.alert(message);
    FlowOutcome::Rejected(ErrorRoute::Alert(message.to_string()))
}
