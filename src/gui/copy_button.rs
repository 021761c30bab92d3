// Copy-to-clipboard button with transient confirmation

use crate::clipboard::ClipboardWriter;
use eframe::egui;
use std::time::{Duration, Instant};

/// What the button currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyStatus {
    /// Plain `COPY`
    Idle,
    /// Confirmation after a successful write
    Copied,
    /// Inline notice after the clipboard refused the write
    Failed,
}

/// Feedback state of one copy button.
/// Holds the outcome of the last copy and the instant it stops being shown.
#[derive(Clone, Debug, Default)]
pub struct CopyFeedback {
    shown: Option<(CopyStatus, Instant)>,
}

impl CopyFeedback {
    /// Writes `text` to the clipboard and starts a fresh feedback window.
    /// Any window still running is replaced, so the latest copy decides when
    /// the button returns to idle.
    pub fn copy(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        text: &str,
        now: Instant,
        hold: Duration,
    ) -> CopyStatus {
        let status = match clipboard.write_text(text) {
            Ok(()) => {
                tracing::debug!(bytes = text.len(), "command copied to clipboard");
                CopyStatus::Copied
            }
            Err(err) => {
                tracing::warn!(error = %err, "copy to clipboard failed");
                CopyStatus::Failed
            }
        };
        self.shown = Some((status, now + hold));
        status
    }

    pub fn status(&self, now: Instant) -> CopyStatus {
        match self.shown {
            Some((status, until)) if now < until => status,
            _ => CopyStatus::Idle,
        }
    }

    /// The copied flag: true only inside the window after a successful copy.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.status(now) == CopyStatus::Copied
    }

    /// Time left before the button reverts to idle, if feedback is showing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.shown {
            Some((_, until)) if now < until => Some(until - now),
            _ => None,
        }
    }
}

/// Draws a copy button bound to `text`.
/// Feedback lives in egui's temporary memory under `id`, so every button
/// keeps its own state.
pub fn copy_button(
    ui: &mut egui::Ui,
    id: egui::Id,
    text: &str,
    clipboard: &mut dyn ClipboardWriter,
    hold: Duration,
) -> egui::Response {
    let now = Instant::now();
    let mut feedback = ui
        .data(|d| d.get_temp::<CopyFeedback>(id))
        .unwrap_or_default();

    let green = egui::Color32::from_rgb(0x00, 0xff, 0x88);
    let red = egui::Color32::from_rgb(0xff, 0x00, 0x33);
    let (caption, color, fill, stroke) = match feedback.status(now) {
        CopyStatus::Idle => (
            "COPY",
            egui::Color32::from_gray(0xaa),
            egui::Color32::from_white_alpha(0x0a),
            egui::Color32::from_white_alpha(0x22),
        ),
        CopyStatus::Copied => ("✓ COPIED", green, green.gamma_multiply(0.2), green),
        CopyStatus::Failed => ("✗ COPY FAILED", red, red.gamma_multiply(0.2), red),
    };

    let response = ui.add(
        egui::Button::new(egui::RichText::new(caption).monospace().size(11.0).color(color))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .rounding(3.0),
    );

    if response.clicked() {
        feedback.copy(clipboard, text, now, hold);
    }

    // Repaint once the window closes so the caption reverts without input
    if let Some(left) = feedback.remaining(now) {
        ui.ctx().request_repaint_after(left);
    }

    ui.data_mut(|d| d.insert_temp(id, feedback));
    response
}
