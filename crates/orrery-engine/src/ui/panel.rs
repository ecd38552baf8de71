//! Text panel model for the host page.
//!
//! The panel holds simulation-written `content` plus fixed `chrome` (for
//! example a dismiss button) that is re-emitted after the content on every
//! render, so replacing the content never drops the panel's own controls.
//! The host mirrors `html()` and `is_visible()` whenever `revision()` changes.

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    content: String,
    chrome: String,
    visible: bool,
    revision: u32,
}

impl Panel {
    /// A hidden, empty panel with the given chrome markup.
    pub fn new(chrome: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            chrome: chrome.into(),
            visible: false,
            revision: 0,
        }
    }

    /// Replace the content and reveal the panel.
    /// Showing identical content on a visible panel changes nothing.
    pub fn show(&mut self, content: impl Into<String>) {
        let content = content.into();
        if self.visible && self.content == content {
            return;
        }
        self.content = content;
        self.visible = true;
        self.bump();
    }

    /// Hide the panel. The content is kept for the next reveal.
    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.bump();
        }
    }

    /// Replace the chrome, e.g. with the control markup the host page already has.
    pub fn set_chrome(&mut self, chrome: impl Into<String>) {
        let chrome = chrome.into();
        if chrome != self.chrome {
            self.chrome = chrome;
            self.bump();
        }
    }

    /// Full markup: content followed by chrome.
    pub fn html(&self) -> String {
        format!("{}{}", self.content, self.chrome)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn chrome(&self) -> &str {
        &self.chrome
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Counter bumped on every visible change.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSE: &str = "<button>Close</button>";

    #[test]
    fn starts_hidden_with_chrome_only() {
        let panel = Panel::new(CLOSE);
        assert!(!panel.is_visible());
        assert_eq!(panel.html(), CLOSE);
        assert_eq!(panel.revision(), 0);
    }

    #[test]
    fn show_keeps_chrome_after_content() {
        let mut panel = Panel::new(CLOSE);
        panel.show("<h2>A</h2>");
        panel.show("<h2>B</h2>");
        assert_eq!(panel.html(), format!("<h2>B</h2>{CLOSE}"));
        assert!(panel.is_visible());
    }

    #[test]
    fn repeated_show_is_idempotent() {
        let mut panel = Panel::new(CLOSE);
        panel.show("<h2>A</h2>");
        let snapshot = panel.clone();
        panel.show("<h2>A</h2>");
        assert_eq!(panel, snapshot);
    }

    #[test]
    fn hide_then_show_same_content_reveals_again() {
        let mut panel = Panel::new(CLOSE);
        panel.show("x");
        panel.hide();
        assert!(!panel.is_visible());
        assert_eq!(panel.content(), "x");
        let before = panel.revision();
        panel.show("x");
        assert!(panel.is_visible());
        assert!(panel.revision() > before);
    }
}
