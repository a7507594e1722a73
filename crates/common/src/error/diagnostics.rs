use std::{borrow::Cow, fmt, panic::Location};

/// Error context that remembers where it was constructed.
///
/// Every error variant in this workspace carries one of these instead of a
/// bare `String`, so a failure deep in a provisioning run still points at
/// the line that produced it. Use [`DiagnosticMessage::new`] directly or the
/// [`diag!`] macro when the message needs `format!` interpolation.
#[derive(Clone, Debug)]
pub struct DiagnosticMessage {
    message: Cow<'static, str>,
    location: &'static Location<'static>,
}

impl DiagnosticMessage {
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (at {}:{})",
            self.message,
            self.location.file(),
            self.location.line()
        )
    }
}

/// `format!`-style constructor for [`DiagnosticMessage`] that still captures
/// the caller's file/line.
#[macro_export]
macro_rules! diag {
    ($msg:literal $(,)?) => {
        $crate::error::diagnostics::DiagnosticMessage::new($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::diagnostics::DiagnosticMessage::new(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_call_site() {
        let msg = DiagnosticMessage::new("bucket vanished");
        let rendered = msg.to_string();
        assert!(rendered.starts_with("bucket vanished (at "));
        assert!(rendered.contains("diagnostics.rs"));
    }

    #[test]
    fn diag_macro_formats() {
        let msg = diag!("attribute `{}` rejected", "title");
        assert_eq!(msg.message(), "attribute `title` rejected");
    }
}
