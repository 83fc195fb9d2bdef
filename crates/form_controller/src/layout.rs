//! Element ids of the two forms and the detail page modals.

use shared::domain::FormField;

pub const EDIT_MODAL_ID: &str = "edit-modal";
pub const DELETE_MODAL_ID: &str = "delete-modal";
pub const EDIT_BUSINESS_ID_FIELD: &str = "edit-business-id";
pub const DELETE_BUSINESS_NAME_LABEL: &str = "delete-business-name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub observations: &'static str,
    pub name_error: &'static str,
    pub email_error: &'static str,
    pub phone_error: &'static str,
}

impl FormLayout {
    pub fn input(&self, field: FormField) -> &'static str {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Phone => self.phone,
        }
    }

    pub fn error_slot(&self, field: FormField) -> &'static str {
        match field {
            FormField::Name => self.name_error,
            FormField::Email => self.email_error,
            FormField::Phone => self.phone_error,
        }
    }

    pub fn error_slots(&self) -> [&'static str; 3] {
        [self.name_error, self.email_error, self.phone_error]
    }
}

pub const CREATE_FORM: FormLayout = FormLayout {
    name: "name",
    email: "email",
    phone: "phone",
    observations: "observations",
    name_error: "name-error",
    email_error: "email-error",
    phone_error: "phone-error",
};

pub const EDIT_FORM: FormLayout = FormLayout {
    name: "edit-name",
    email: "edit-email",
    phone: "edit-phone",
    observations: "edit-observations",
    name_error: "edit-name-error",
    email_error: "edit-email-error",
    phone_error: "edit-phone-error",
};
