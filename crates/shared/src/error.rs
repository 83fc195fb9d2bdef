use thiserror::Error;

use crate::domain::FormField;

/// Client-side validation failure for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} é obrigatório", .0.label())]
    RequiredField(FormField),
    #[error("{} inválido", .0.label())]
    InvalidFormat(FormField),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::RequiredField(field) | FieldError::InvalidFormat(field) => *field,
        }
    }
}
