use serde::{Deserialize, Serialize};

/// One line of a text screen.
///
/// A line shows text (`prefix`, the event value or `arg`, then `suffix`), a
/// progress bar, or both. Unset options are left out of the JSON so the
/// service applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScreenLine {
    pub has_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_progress_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Frame key whose value replaces the event value on this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_frame_key: Option<String>,
}

impl ScreenLine {
    /// A text line.
    pub fn text() -> Self {
        Self { has_text: true, ..Self::default() }
    }

    /// A progress bar line without text.
    pub fn progress_bar() -> Self {
        Self { has_text: false, has_progress_bar: Some(true), ..Self::default() }
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn context_frame_key<S: Into<String>>(mut self, key: S) -> Self {
        self.context_frame_key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_line_omits_unset_fields() {
        let line = ScreenLine::text().prefix("Test 1: ");
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({ "has-text": true, "prefix": "Test 1: " })
        );
    }

    #[test]
    fn progress_bar_line() {
        assert_eq!(
            serde_json::to_value(ScreenLine::progress_bar()).unwrap(),
            json!({ "has-text": false, "has-progress-bar": true })
        );
    }

    #[test]
    fn all_fields_use_kebab_case() {
        let line = ScreenLine::text()
            .suffix("%")
            .bold(true)
            .wrap(false)
            .arg("(custom)")
            .context_frame_key("ammo");
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({
                "has-text": true,
                "suffix": "%",
                "bold": true,
                "wrap": false,
                "arg": "(custom)",
                "context-frame-key": "ammo"
            })
        );
    }
}
