use orrery_engine::Panel;
use web_sys::Element;

const HIDDEN_CLASS: &str = "hidden";

/// Inline handlers stripped from adopted chrome. Clicks on the chrome reach
/// the simulation as custom events forwarded by the host instead.
const INLINE_HANDLERS: [&str; 2] = ["onclick", "onpointerup"];

/// A DOM element mirroring the engine's text panel.
pub struct DomPanel {
    element: Element,
    synced_revision: Option<u32>,
}

impl DomPanel {
    /// Look up the element by id in the current document.
    pub fn mount(element_id: &str) -> Option<Self> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?;
        Some(Self {
            element,
            synced_revision: None,
        })
    }

    /// Markup of a button already placed in the element by the page, if any,
    /// with its inline handlers removed.
    pub fn existing_chrome(&self) -> Option<String> {
        let button = match self.element.query_selector("button") {
            Ok(found) => found?,
            Err(err) => {
                log::warn!("panel chrome lookup failed: {:?}", err);
                return None;
            }
        };
        for handler in INLINE_HANDLERS {
            if let Err(err) = button.remove_attribute(handler) {
                log::warn!("could not strip {} from panel chrome: {:?}", handler, err);
            }
        }
        Some(button.outer_html())
    }

    /// Write the panel into the DOM when its revision changed, or when the
    /// page hid the element while the panel is meant to be visible.
    pub fn sync(&mut self, panel: &Panel) {
        let dom_hidden = self.element.class_list().contains(HIDDEN_CLASS);
        if !needs_sync(self.synced_revision, panel, dom_hidden) {
            return;
        }
        self.synced_revision = Some(panel.revision());

        self.element.set_inner_html(&panel.html());
        let classes = self.element.class_list();
        let result = if panel.is_visible() {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
        if let Err(err) = result {
            log::warn!("panel visibility toggle failed: {:?}", err);
        }
    }
}

fn needs_sync(synced_revision: Option<u32>, panel: &Panel, dom_hidden: bool) -> bool {
    synced_revision != Some(panel.revision()) || (panel.is_visible() && dom_hidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syncs_on_first_sight_and_on_revision_change() {
        let mut panel = Panel::new("");
        assert!(needs_sync(None, &panel, true));
        assert!(!needs_sync(Some(panel.revision()), &panel, true));

        panel.show("<h2>A</h2>");
        assert!(needs_sync(Some(0), &panel, true));
    }

    #[test]
    fn visible_panel_hidden_by_page_is_shown_again() {
        let mut panel = Panel::new("<button>Close</button>");
        panel.show("<h2>A</h2>");
        let synced = Some(panel.revision());
        assert!(!needs_sync(synced, &panel, false));

        // Same content shown again: no new revision, but the page hid the element.
        panel.show("<h2>A</h2>");
        assert_eq!(Some(panel.revision()), synced);
        assert!(needs_sync(synced, &panel, true));
    }
}
