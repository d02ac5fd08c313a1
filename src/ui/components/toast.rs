// SPDX-License-Identifier: MIT

//! Overlay rendering for transient error notices.

use eframe::egui;

use crate::models::toast::ToastsModel;

/// Render pending toasts as a non-blocking stack in the top-right corner.
///
/// Expiry is handled by the kernel's housekeeping tick; this view only
/// draws whatever is currently pending.
pub fn view(ctx: &egui::Context, model: &ToastsModel) {
    if model.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toast_stack"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in model.toasts() {
                let visuals = ui.visuals().clone();
                egui::Frame::new()
                    .fill(visuals.extreme_bg_color)
                    .stroke(egui::Stroke::new(1.0, visuals.error_fg_color))
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(egui_phosphor::regular::WARNING)
                                    .color(visuals.error_fg_color),
                            );
                            ui.label(
                                egui::RichText::new(&toast.message)
                                    .color(visuals.error_fg_color),
                            );
                        });
                    });
                ui.add_space(6.0);
            }
        });
}
