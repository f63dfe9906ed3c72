use crate::domain::required;
use crate::error::{Field, ValidationError};

/// Contents of the contact form. Submitting it opens the visitor's mail
/// client; nothing is sent over the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn body(&self) -> String {
        format!(
            "Hello,\n\nFrom: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
        .trim()
        .to_string()
    }

    /// Builds the `mailto:` link for `recipient`. Every field is required.
    pub fn mailto(&self, recipient: &str) -> Result<String, ValidationError> {
        required(&self.name, Field::Name)?;
        required(&self.email, Field::Email)?;
        required(&self.subject, Field::Subject)?;
        required(&self.message, Field::Message)?;

        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Jun".into(),
            email: "jun@example.com".into(),
            subject: "Hi & welcome".into(),
            message: "Nice site!\nBye".into(),
        }
    }

    #[test]
    fn builds_encoded_mailto_link() {
        let link = filled().mailto("owner@example.com").unwrap();
        assert!(link.starts_with("mailto:owner@example.com?subject=Hi%20%26%20welcome&body="));
        assert!(link.contains("From%3A%20Jun"));
        assert!(link.contains("Nice%20site%21%0ABye"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn subject_is_sent_as_typed() {
        let msg = ContactMessage {
            subject: "  Hi  ".into(),
            ..filled()
        };
        let link = msg.mailto("owner@example.com").unwrap();
        assert!(link.contains("?subject=%20%20Hi%20%20&body="));
    }

    #[test]
    fn body_lists_sender_then_message() {
        let body = filled().body();
        assert!(body.starts_with("Hello,"));
        assert!(body.contains("Email: jun@example.com"));
        assert!(body.ends_with("Nice site!\nBye"));
    }

    #[test]
    fn missing_field_is_reported() {
        let msg = ContactMessage {
            email: " ".into(),
            ..filled()
        };
        assert_eq!(
            msg.mailto("owner@example.com"),
            Err(ValidationError::EmptyField(Field::Email))
        );
    }
}
