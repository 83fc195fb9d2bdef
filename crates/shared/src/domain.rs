use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.trim().parse::<i64>().map(Self)
            }
        }
    };
}

id_newtype!(BusinessId);

/// Form fields that carry validation and a dedicated error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
}

impl FormField {
    /// Validation order; the first failing field wins.
    pub const VALIDATION_ORDER: [FormField; 3] =
        [FormField::Name, FormField::Email, FormField::Phone];

    /// Label used in user-facing messages and in legacy server error wording.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nome",
            FormField::Email => "Email",
            FormField::Phone => "Telefone",
        }
    }

    /// Wire tag carried in structured server errors.
    pub fn tag(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: BusinessId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl BusinessRecord {
    pub fn observations(&self) -> &str {
        self.observations.as_deref().unwrap_or_default()
    }
}

/// Trimmed field values read from a create or edit form. Serializes as the
/// request body of both the create and the update call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub observations: String,
}

impl BusinessForm {
    pub fn new(
        name: impl AsRef<str>,
        email: impl AsRef<str>,
        phone: impl AsRef<str>,
        observations: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            email: email.as_ref().trim().to_string(),
            phone: phone.as_ref().trim().to_string(),
            observations: observations.as_ref().trim().to_string(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }
}
