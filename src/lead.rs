use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact details captured by the hero form (or by the wizard's own contact
/// step) and handed off to the assessment through session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Validity window for a handed-off record. At exactly one hour the record
/// counts as stale.
pub const FRESHNESS_WINDOW_MS: i64 = 60 * 60 * 1000;

impl LeadRecord {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp).num_milliseconds() < FRESHNESS_WINDOW_MS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

/// In-progress contact form state, before it becomes a [`LeadRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactDraft {
    /// Pure field update; the caller is expected to clear any error shown
    /// for the field at the same time (see [`ContactErrors::clear`]).
    pub fn update_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn into_record(self, now: DateTime<Utc>) -> LeadRecord {
        LeadRecord {
            name: self.name,
            email: self.email,
            company: self.company,
            message: self.message,
            timestamp: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

/// Per-field validation results for the contact form. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub company: Option<FieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.company.is_none()
    }

    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Company => self.company = None,
            ContactField::Message => {}
        }
    }

    /// User-facing message for a field's current error, if any.
    pub fn message_for(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name.map(|_| "Name is required"),
            ContactField::Email => self.email.map(|e| match e {
                FieldError::Required => "Email is required",
                FieldError::InvalidFormat => "Please enter a valid email address",
            }),
            ContactField::Company => self.company.map(|_| "Company name is required"),
            ContactField::Message => None,
        }
    }
}

/// Validate a contact draft. Name and company must be non-empty; the email
/// must be non-empty and shaped like `local@domain.tld`. The required check
/// runs before the format check, so the two error kinds never overlap.
pub fn validate(draft: &ContactDraft) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some(FieldError::Required);
    }

    if draft.email.trim().is_empty() {
        errors.email = Some(FieldError::Required);
    } else if !is_valid_email(draft.email.trim()) {
        errors.email = Some(FieldError::InvalidFormat);
    }

    if draft.company.trim().is_empty() {
        errors.company = Some(FieldError::Required);
    }

    errors
}

/// Shape check only: one `@`, a non-empty local part, and a dot somewhere
/// inside the domain with characters on both sides. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record_aged(now: DateTime<Utc>, age_ms: i64) -> LeadRecord {
        LeadRecord {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: "Doe Plumbing".into(),
            message: String::new(),
            timestamp: now - Duration::milliseconds(age_ms),
        }
    }

    #[test]
    fn record_is_fresh_inside_the_window() {
        let now = Utc::now();
        assert!(record_aged(now, 0).is_fresh(now));
        assert!(record_aged(now, FRESHNESS_WINDOW_MS - 1).is_fresh(now));
    }

    #[test]
    fn record_is_stale_at_exactly_one_hour() {
        let now = Utc::now();
        assert!(!record_aged(now, FRESHNESS_WINDOW_MS).is_fresh(now));
        assert!(!record_aged(now, FRESHNESS_WINDOW_MS + 1).is_fresh(now));
    }

    #[test]
    fn email_shape_accepts_minimal_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("john.smith@company.com.au"));
        assert!(is_valid_email("x+tag@sub.domain.io"));
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@nolocal.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("two@@ats.com"));
        assert!(!is_valid_email("has space@b.co"));
    }

    #[test]
    fn blank_required_fields_error_as_required() {
        let errors = validate(&ContactDraft::default());
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.company, Some(FieldError::Required));
        assert!(!errors.is_empty());
    }

    #[test]
    fn required_takes_precedence_over_format_for_email() {
        let mut draft = ContactDraft::default();
        draft.email = "   ".into();
        assert_eq!(validate(&draft).email, Some(FieldError::Required));

        draft.email = "not-an-email".into();
        assert_eq!(validate(&draft).email, Some(FieldError::InvalidFormat));
    }

    #[test]
    fn complete_draft_validates_clean() {
        let draft = ContactDraft {
            name: "Jane Doe".into(),
            email: "a@b.co".into(),
            company: "Doe Plumbing".into(),
            message: String::new(),
        };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn clearing_a_field_error_leaves_the_rest() {
        let mut errors = validate(&ContactDraft::default());
        errors.clear(ContactField::Email);
        assert!(errors.email.is_none());
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.company, Some(FieldError::Required));
    }
}
