use std::fmt;

use thiserror::Error;

pub const SUBMIT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 4] {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    Missing(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::all() {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "Hello");
        form.set(ContactField::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::Missing(ContactField::Name))
        );
        let mut form = filled();
        form.set(ContactField::Subject, "   ");
        assert_eq!(
            form.validate(),
            Err(ContactError::Missing(ContactField::Subject))
        );
        assert_eq!(
            ContactError::Missing(ContactField::Subject).to_string(),
            "Please fill in your subject"
        );
    }

    #[test]
    fn test_email_validation() {
        for bad in ["ada", "@example.com", "ada@", "ada@example", "ada@.com", "a b@x.io", "a@b@c.io", "ada@x."] {
            let mut form = filled();
            form.set(ContactField::Email, bad);
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        for good in ["a@b.io", "first.last@sub.example.org", " ada@example.com "] {
            let mut form = filled();
            form.set(ContactField::Email, good);
            assert_eq!(form.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
