// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring application state, messages, and
//! commands.

use std::time::{Duration, Instant};

use crate::logic::options;
use crate::models::option_record::OptionRecord;
use crate::models::toast::ToastsModel;
use crate::utils;

/// How long the Copy button shows its confirmation after a successful copy.
const COPIED_FLASH: Duration = Duration::from_millis(1500);

/// Toast text shown when a paste is rejected.
pub const PASTE_REJECTED_NOTICE: &str = "Special symbols are not allowed";

/// Top-level application state.
pub struct AppModel {
    /// Verbatim contents of the input control.
    pub words: String,
    /// Derived option list, recomputed wholesale on each conversion request.
    pub options: Vec<OptionRecord>,
    /// Pretty-printed JSON of `options`; preview text and clipboard payload.
    pub options_json: String,
    /// Deadline until which the Copy button shows "Copied!".
    pub copied_until: Option<Instant>,
    /// Presentation flag for the dark color scheme.
    pub dark_mode: bool,
    /// Pending transient notifications.
    pub toasts: ToastsModel,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            words: String::new(),
            options: Vec::new(),
            options_json: options::to_pretty_json(&[]),
            copied_until: None,
            dark_mode: false,
            toasts: ToastsModel::default(),
        }
    }
}

impl AppModel {
    /// True while the copied confirmation should be displayed.
    pub fn copied_active(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|deadline| now < deadline)
    }

    /// Earliest pending deadline (copied flash or toast expiry), used by the
    /// view to schedule the next repaint instead of busy-polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.copied_until, self.toasts.next_deadline()) {
            (Some(flash), Some(toast)) => Some(flash.min(toast)),
            (flash, toast) => flash.or(toast),
        }
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// The input text changed; the option list is NOT recomputed here.
    WordsChanged(String),
    /// Recompute the option list and its JSON rendering from the input.
    ConvertRequested,
    /// Reset input and options regardless of prior state.
    ClearRequested,
    /// Copy the rendered JSON to the system clipboard.
    CopyRequested,
    /// Clipboard copy finished; `at` is when the result was observed.
    CopyCompleted {
        result: Result<(), String>,
        at: Instant,
    },
    /// A paste was suppressed because it contained disallowed characters.
    PasteRejected { at: Instant },
    /// Flip the light/dark display flag.
    ThemeToggled,
    /// Frame housekeeping: expire the copied flash and stale toasts.
    Tick(Instant),
}

/// Commands represent side effects executed between model updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    CopyToClipboard(String),
}

/// Apply a message to the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::WordsChanged(text) => model.words = text,
        Msg::ConvertRequested => {
            model.options = options::convert(&model.words);
            model.options_json = options::to_pretty_json(&model.options);
            tracing::debug!(records = model.options.len(), "converted input to options");
        }
        Msg::ClearRequested => {
            model.words.clear();
            model.options.clear();
            model.options_json = options::to_pretty_json(&model.options);
        }
        Msg::CopyRequested => {
            // The Copy button is hidden while the list is empty; stay a no-op
            // if the message arrives anyway.
            if !model.options.is_empty() {
                cmds.push(Command::CopyToClipboard(model.options_json.clone()));
            }
        }
        Msg::CopyCompleted { result, at } => match result {
            // Replaces any pending deadline, so overlapping copies resolve to
            // the latest schedule instead of racing timers.
            Ok(()) => model.copied_until = Some(at + COPIED_FLASH),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                model
                    .toasts
                    .error(format!("Copy to clipboard failed: {err}"), at);
            }
        },
        Msg::PasteRejected { at } => {
            tracing::warn!("rejected paste containing special symbols");
            model.toasts.error(PASTE_REJECTED_NOTICE, at);
        }
        Msg::ThemeToggled => model.dark_mode = !model.dark_mode,
        Msg::Tick(now) => {
            if model.copied_until.is_some_and(|deadline| now >= deadline) {
                model.copied_until = None;
            }
            model.toasts.prune_expired(now);
        }
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::CopyToClipboard(payload) => {
            let result = utils::copy_to_clipboard(&payload).map_err(|err| err.to_string());
            Msg::CopyCompleted {
                result,
                at: Instant::now(),
            }
        }
    }
}
