//! Contact form fields and the payload handed to the email relay.

use serde::Serialize;

/// Named inputs of the contact form. `name()` is the `name` attribute the
/// markup uses and the template parameter the relay receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    ProjectType,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::ProjectType,
        FormField::Message,
    ];

    /// Fields that must be non-blank before the form may be sent.
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::ProjectType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::ProjectType => "projectType",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| f.name() == name)
    }

    #[inline]
    pub fn is_required(self) -> bool {
        FormField::REQUIRED.contains(&self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
}

impl ContactPayload {
    /// Build a payload from `(name, value)` pairs as read off the form.
    /// Unknown names are ignored; a repeated name keeps the last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = ContactPayload::default();
        for (key, value) in pairs {
            match FormField::from_name(key.as_ref()) {
                Some(field) => payload.set(field, value),
                None => log::debug!("[form] ignoring unknown field {:?}", key.as_ref()),
            }
        }
        payload
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::ProjectType => &self.project_type,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::ProjectType => &mut self.project_type,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}
