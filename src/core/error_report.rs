//! Status-code based error display, plus the issue-report text used by the
//! "copy error details" action and the support mailto link.

pub const SUPPORT_EMAIL: &str = "support@phasedeck.io";
pub const REPORT_SUBJECT: &str = "Phasedeck Issue Report";

/// An HTTP-like status code with optional heading/message overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub code: u16,
    pub heading: Option<String>,
    pub message: Option<String>,
}

impl ErrorReport {
    pub fn from_code(code: u16) -> Self {
        Self {
            code,
            heading: None,
            message: None,
        }
    }

    pub fn with_message(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            heading: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 200
    }

    pub fn heading(&self) -> String {
        match &self.heading {
            Some(heading) => heading.clone(),
            None => default_heading(self.code).to_owned(),
        }
    }

    pub fn message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match self.code {
            200 => "Operation performed successfully!!".to_owned(),
            _ => format!(
                "Sorry about that, mate! Please try reloading the page again. \
                 If things don't work or you're sure it is on our end, send us a note at \
                 {} and we'll fix it for you.",
                self.mailto_link()
            ),
        }
    }

    /// Issue-report body: the heading, with the explicit message appended
    /// after a `<br>` when one was supplied.
    fn report_body(&self) -> String {
        let mut body = self.heading();
        if let Some(message) = &self.message {
            body = format!("{body} <br> {message}");
        }
        body
    }

    /// `mailto:` link with the pre-filled issue report.
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{SUPPORT_EMAIL}?subject={REPORT_SUBJECT}&body={}",
            self.report_body()
        )
    }

    /// Plain-text issue report placed on the clipboard.
    pub fn clipboard_text(&self) -> String {
        format!("{REPORT_SUBJECT} {}", self.report_body())
    }
}

fn default_heading(code: u16) -> &'static str {
    match code {
        404 => "D'oh! We couldn't find the page you were looking for.",
        200 => "Success!!",
        _ => "D'oh! Something went wrong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_bucket() {
        let report = ErrorReport::from_code(200);
        assert_eq!(report.heading(), "Success!!");
        assert_eq!(report.message(), "Operation performed successfully!!");
        assert!(report.is_success());
    }

    #[test]
    fn not_found_bucket() {
        let report = ErrorReport::from_code(404);
        assert!(report.heading().contains("couldn't find the page"));
        assert!(!report.is_success());
    }

    #[test]
    fn everything_else_falls_back_to_the_generic_message() {
        for code in [500u16, 503, 400, 0] {
            let report = ErrorReport::from_code(code);
            assert_eq!(report.heading(), "D'oh! Something went wrong");
            assert!(report.message().contains("mailto:support@phasedeck.io"));
        }
    }

    #[test]
    fn explicit_heading_and_message_override_the_defaults() {
        let report = ErrorReport {
            code: 500,
            heading: Some("Update failed".into()),
            message: Some("phase 42 rejected".into()),
        };
        assert_eq!(report.heading(), "Update failed");
        assert_eq!(report.message(), "phase 42 rejected");
        assert_eq!(
            report.clipboard_text(),
            "Phasedeck Issue Report Update failed <br> phase 42 rejected"
        );
    }

    #[test]
    fn mailto_body_omits_the_message_when_absent() {
        let report = ErrorReport::from_code(404);
        assert_eq!(
            report.mailto_link(),
            format!(
                "mailto:support@phasedeck.io?subject=Phasedeck Issue Report&body={}",
                report.heading()
            )
        );
    }
}
