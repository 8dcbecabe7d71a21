//! Quote-request form handling.
//!
//! The site has no server; a submitted form opens the visitor's mail
//! client through a `mailto:` URL carrying the request as a formatted
//! subject and body. Validation happens before the URL is built: name,
//! email, and phone are required, and the email must pass the same
//! shape check the page applies.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use stonefront_core::analytics::{Analytics, AnalyticsEvent};
use stonefront_core::{Error, Result};

/// Confirmation shown next to the submit control once the mail client
/// has been handed the request.
pub const CONFIRMATION_MESSAGE: &str = "Your email app will open to send your request.";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// The mailto component charset: everything but unreserved marks is
// percent-encoded, matching the page's component encoding.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One submitted quote request. Empty strings mean the visitor left the
/// field blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Visitor name (required).
    pub name: String,
    /// Callback phone number (required).
    pub phone: String,
    /// Reply address (required, shape-checked).
    pub email: String,
    /// Project address (optional).
    pub address: String,
    /// Kind of work requested (optional).
    pub project_type: String,
    /// Budget range (optional).
    pub budget: String,
    /// Free-form message.
    pub message: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// The `mailto:` URL to hand to the mail client.
    pub mailto_url: String,
    /// Confirmation text for the page.
    pub confirmation: &'static str,
}

impl QuoteRequest {
    /// Check the required fields and the email shape.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() || self.phone.is_empty() {
            return Err(Error::validation(
                "name, email, and phone are required fields",
            ));
        }
        if !EMAIL_SHAPE.is_match(&self.email) {
            return Err(Error::validation_field(
                "email",
                "not a valid email address",
            ));
        }
        Ok(())
    }

    /// The mail subject line.
    pub fn subject(&self) -> String {
        format!("Quote Request - {}", self.name)
    }

    /// The formatted mail body. Blank optional fields render as
    /// explicit "Not provided"/"Not specified" lines.
    pub fn body(&self) -> String {
        let or_default = |value: &str, fallback: &str| -> String {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        format!(
            "Quote Request Form Submission\n\n\
             Name: {}\n\
             Phone: {}\n\
             Email: {}\n\
             Project Address: {}\n\
             Project Type: {}\n\
             Budget Range: {}\n\n\
             Message:\n{}",
            self.name,
            self.phone,
            self.email,
            or_default(&self.address, "Not provided"),
            or_default(&self.project_type, "Not specified"),
            or_default(&self.budget, "Not specified"),
            self.message,
        )
    }

    /// Build the `mailto:` URL for a recipient. Validates first.
    pub fn mailto_url(&self, recipient: &str) -> Result<String> {
        self.validate()?;
        let subject_raw = self.subject();
        let subject = utf8_percent_encode(&subject_raw, COMPONENT);
        let body_raw = self.body();
        let body = utf8_percent_encode(&body_raw, COMPONENT);
        Ok(format!("mailto:{recipient}?subject={subject}&body={body}"))
    }

    /// Full submit path: validate, build the URL, report the submission,
    /// and return the confirmation text. Reporting is a no-op without a
    /// sink and never fails the submission.
    pub fn submit(&self, recipient: &str, analytics: &Analytics) -> Result<FormSubmission> {
        let mailto_url = self.mailto_url(recipient)?;
        analytics.track(AnalyticsEvent::form_submission());
        Ok(FormSubmission {
            mailto_url,
            confirmation: CONFIRMATION_MESSAGE,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
