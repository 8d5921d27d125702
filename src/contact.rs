use serde::{Deserialize, Serialize};

use crate::validation::{is_valid_email, FieldErrors};

pub const MSG_NAME: &str = "Il nome è obbligatorio";
pub const MSG_EMAIL_MISSING: &str = "L'email è obbligatoria";
pub const MSG_EMAIL_INVALID: &str = "Inserisci un'email valida";
pub const MSG_SUBJECT: &str = "L'oggetto è obbligatorio";
pub const MSG_MESSAGE: &str = "Il messaggio è obbligatorio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

pub type ContactErrors = FieldErrors<ContactField>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> ContactErrors {
        let mut errors = ContactErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, MSG_NAME);
        }
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, MSG_EMAIL_MISSING);
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, MSG_EMAIL_INVALID);
        }
        if self.subject.trim().is_empty() {
            errors.insert(ContactField::Subject, MSG_SUBJECT);
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, MSG_MESSAGE);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Anna Bianchi".to_string(),
            email: "anna@example.com".to_string(),
            phone: String::new(),
            subject: "Informazioni".to_string(),
            message: "Fate anche extension?".to_string(),
        }
    }

    #[test]
    fn phone_is_optional() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn reports_exactly_the_failing_fields() {
        let form = ContactForm {
            subject: "  ".to_string(),
            email: "anna@example".to_string(),
            ..filled()
        };
        let errors = form.validate();

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ContactField::Email, ContactField::Subject]
        );
        assert_eq!(errors.get(ContactField::Email), Some(MSG_EMAIL_INVALID));
    }

    #[test]
    fn empty_form_reports_all_required_fields() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(ContactField::Email), Some(MSG_EMAIL_MISSING));
    }
}
