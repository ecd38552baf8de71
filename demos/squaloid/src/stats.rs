//! Stats panel formatting for a selected planet.

use orrery_engine::Panel;

use crate::bodies::Planet;

/// Dismiss button kept at the end of the panel. The host forwards its click
/// as custom event [`crate::game::events::DISMISS`].
pub const DISMISS_CONTROL: &str = r#"<button id="close-stats" type="button">Close</button>"#;

/// Scale applied to `distanceFromStar` for display.
const DISPLAY_KM_PER_UNIT: f64 = 1000.0;

/// Render a planet's stats as HTML. Pure: same planet, same output.
pub fn format_stats(planet: &Planet) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(&format!("<h2>{} Stats 🚀</h2>\n", escape_html(&planet.name)));
    html.push_str("<ul>\n");
    item(&mut html, "Type", &escape_html(&planet.kind));
    item(&mut html, "Mass", &escape_html(&planet.mass));
    item(&mut html, "Composition", &escape_html(&planet.composition));
    item(&mut html, "Rotation Rate", &escape_html(&planet.rotation));
    item(
        &mut html,
        "Orbital Period (Revolution)",
        &format!("{} days/years", planet.revolution),
    );
    item(
        &mut html,
        "Distance from Star",
        &format!("{} km (Scaled)", planet.distance_from_star * DISPLAY_KM_PER_UNIT),
    );
    item(
        &mut html,
        "Distance from Previous Planet",
        &escape_html(&planet.distance_from_previous),
    );
    html.push_str("</ul>\n");
    html
}

fn item(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("  <li><strong>{label}:</strong> {value}</li>\n"));
}

/// Write the planet's stats into the panel and reveal it.
/// The panel's chrome (the dismiss control) is re-rendered after the content.
pub fn show_stats(planet: &Planet, panel: &mut Panel) {
    panel.show(format_stats(planet));
    log::info!("showing stats for {}", planet.name);
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
