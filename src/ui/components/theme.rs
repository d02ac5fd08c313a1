// SPDX-License-Identifier: MIT

//! Floating light/dark toggle button drawn as a circle with a sun/moon icon.

use eframe::egui;

/// Draw the round theme toggle. Returns the response; a click means the
/// caller should flip the dark-mode flag.
pub fn theme_toggle_button(ui: &mut egui::Ui, dark_mode: bool) -> egui::Response {
    let icon = if dark_mode {
        egui_phosphor::regular::SUN
    } else {
        egui_phosphor::regular::MOON
    };

    let desired_size = egui::Vec2::splat(36.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        ui.painter().circle(
            rect.center(),
            rect.width() * 0.5,
            visuals.bg_fill,
            visuals.bg_stroke,
        );
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(18.0),
            visuals.text_color(),
        );
    }

    response.on_hover_text(if dark_mode {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    })
}
