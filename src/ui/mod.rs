// SPDX-License-Identifier: MIT

//! Top-level egui application shell for the words-to-options converter.
//! Handles layout, paste interception, and wiring view events into the
//! MVU kernel.

pub mod components;

use std::time::Instant;

use eframe::egui;

use crate::logic::options;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{theme_toggle_button, toast};

/// Stateful egui application converting word lists into option records.
#[derive(Default)]
pub struct OptionizeApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for OptionizeApp {
    /// Drive a single UI frame: intercept pastes, apply queued messages and
    /// their side effects, then render the panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);
        let now = Instant::now();

        self.intercept_paste(ctx, now);

        // Expire the copied flash and stale toasts against this frame's clock.
        if self.model.next_deadline().is_some() {
            self.inbox.push(Msg::Tick(now));
        }

        // Process pending messages until exhausted. Commands run inline, so
        // every operation completes within this frame.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                msgs.push(mvu::run_command(cmd));
            }
        }
        self.inbox = msgs;

        ctx.set_theme(if self.model.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading("Words to Option Converter");
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.columns(2, |columns| {
                self.render_input_pane(&mut columns[0]);
                self.render_output_pane(&mut columns[1], now);
            });
        });

        self.render_theme_toggle(ctx);
        toast::view(ctx, &self.model.toasts);

        // Wake up again when the next deadline passes instead of polling.
        if let Some(deadline) = self.model.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl OptionizeApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Drop paste events carrying disallowed characters before the text edit
    /// sees them, and queue the user-visible rejection notice.
    ///
    /// Typed input is intentionally not filtered; only pastes are gated.
    fn intercept_paste(&mut self, ctx: &egui::Context, now: Instant) {
        let mut rejected = false;
        ctx.input_mut(|input| {
            input.events.retain(|event| match event {
                egui::Event::Paste(text) if !options::paste_allowed(text) => {
                    rejected = true;
                    false
                }
                _ => true,
            });
        });

        if rejected {
            self.inbox.push(Msg::PasteRejected { at: now });
        }
    }

    /// Render the word input filling the left pane.
    fn render_input_pane(&mut self, ui: &mut egui::Ui) {
        let mut words = self.model.words.clone();
        let response = ui.add_sized(
            ui.available_size(),
            egui::TextEdit::multiline(&mut words)
                .hint_text("Enter words separated by commas or new lines"),
        );
        if response.changed() {
            self.inbox.push(Msg::WordsChanged(words));
        }
    }

    /// Render the JSON preview and the Convert/Clear/Copy actions.
    fn render_output_pane(&mut self, ui: &mut egui::Ui, now: Instant) {
        let preview_height = (ui.available_height() - 48.0).max(120.0);
        let visuals = ui.visuals().clone();

        egui::Frame::new()
            .fill(visuals.extreme_bg_color)
            .stroke(visuals.window_stroke())
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::ScrollArea::vertical()
                    .max_height(preview_height)
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&self.model.options_json).monospace(),
                            )
                            .wrap(),
                        );
                    });
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Convert").clicked() {
                self.inbox.push(Msg::ConvertRequested);
            }

            if !self.model.words.is_empty() || !self.model.options.is_empty() {
                let clear = format!("{} Clear", egui_phosphor::regular::TRASH_SIMPLE);
                if ui.button(clear).clicked() {
                    self.inbox.push(Msg::ClearRequested);
                }
            }

            if !self.model.options.is_empty() {
                let label = if self.model.copied_active(now) {
                    format!("{} Copied!", egui_phosphor::regular::CHECK)
                } else {
                    format!("{} Copy to Clipboard", egui_phosphor::regular::CLIPBOARD)
                };
                if ui.button(label).clicked() {
                    self.inbox.push(Msg::CopyRequested);
                }
            }
        });
    }

    /// Floating light/dark toggle pinned to the bottom-right corner.
    fn render_theme_toggle(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("theme_toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                if theme_toggle_button(ui, self.model.dark_mode).clicked() {
                    self.inbox.push(Msg::ThemeToggled);
                }
            });
    }
}
