use derive_new::new;

use crate::view::VElement;


pub const LOG_MESSAGE_CLASS: &str = "log-message";
pub const SERVER_ERROR_PREFIX: &str = "ERROR: ";

const VICTORY_MARKERS: &[&str] = &["VICTORY", "wins"];
const ELIMINATION_MARKERS: &[&str] = &["ELIMINATED"];
const ERROR_MARKERS: &[&str] = &["error", "ERROR"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogCategory {
    Plain,
    Victory,
    Elimination,
    Error,
}

impl LogCategory {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            LogCategory::Plain => None,
            LogCategory::Victory => Some("victory"),
            LogCategory::Elimination => Some("elimination"),
            LogCategory::Error => Some("error"),
        }
    }
}

// Plain case-sensitive substring search, first matching tier wins. Note that markers also match
// inside longer words: "terrorized" is an error message as far as this function is concerned.
pub fn classify(message: &str) -> LogCategory {
    let contains_any = |markers: &[&str]| markers.iter().any(|m| message.contains(m));
    if contains_any(VICTORY_MARKERS) {
        LogCategory::Victory
    } else if contains_any(ELIMINATION_MARKERS) {
        LogCategory::Elimination
    } else if contains_any(ERROR_MARKERS) {
        LogCategory::Error
    } else {
        LogCategory::Plain
    }
}

#[derive(Clone, PartialEq, Eq, Debug, new)]
pub struct LogEntry {
    pub text: String,
    pub category: LogCategory,
}

impl LogEntry {
    pub fn classified(text: impl Into<String>) -> Self {
        let text = text.into();
        let category = classify(&text);
        LogEntry { text, category }
    }

    // Errors reported by the server through the error channel rather than through the game log.
    // These are always errors, whatever the message says.
    pub fn server_error(message: &str) -> Self {
        LogEntry::new(format!("{SERVER_ERROR_PREFIX}{message}"), LogCategory::Error)
    }

    pub fn to_element(&self) -> VElement {
        VElement::html("p")
            .with_classes([LOG_MESSAGE_CLASS])
            .with_classes(self.category.css_class())
            .with_text_content(self.text.clone())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers() {
        assert_eq!(classify("Turn 3 started."), LogCategory::Plain);
        assert_eq!(classify("Alice wins the duel"), LogCategory::Victory);
        assert_eq!(classify("VICTORY for Bob"), LogCategory::Victory);
        assert_eq!(classify("Bob was ELIMINATED"), LogCategory::Elimination);
        assert_eq!(classify("ERROR: bad card"), LogCategory::Error);
        assert_eq!(classify("an error occurred"), LogCategory::Error);
    }

    #[test]
    fn priority() {
        assert_eq!(classify("ERROR after Bob was ELIMINATED, Alice wins"), LogCategory::Victory);
        assert_eq!(classify("error: Bob ELIMINATED"), LogCategory::Elimination);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(classify("victory is near"), LogCategory::Plain);
        assert_eq!(classify("Eliminated"), LogCategory::Plain);
        assert_eq!(classify("Error"), LogCategory::Plain);
    }

    #[test]
    fn substring_matches_are_kept() {
        assert_eq!(classify("The terrorized village"), LogCategory::Error);
        assert_eq!(classify("Twins arrive"), LogCategory::Victory);
    }

    #[test]
    fn server_error_entry() {
        let entry = LogEntry::server_error("no game");
        assert_eq!(entry.text, "ERROR: no game");
        assert_eq!(entry.category, LogCategory::Error);
        assert_eq!(entry.to_element().class_attribute(), "log-message error");
        let plain = LogEntry::classified("hello").to_element();
        assert_eq!(plain.class_attribute(), "log-message");
    }
}
