// Small presentational pieces shared by the dashboard panels

use crate::models::DangerClassification;
use eframe::egui;

/// Highlighted box with a caption and a large value, used for the typical size.
pub fn size_badge(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.4)))
        .rounding(6.0)
        .inner_margin(egui::vec2(20.0, 12.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(label)
                        .size(11.0)
                        .extra_letter_spacing(2.0)
                        .color(color),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(value).size(28.0).color(color).strong());
            });
        });
}

/// Compact outlined tag showing a danger classification.
pub fn danger_badge(ui: &mut egui::Ui, class: &DangerClassification) {
    egui::Frame::none()
        .fill(class.background)
        .stroke(egui::Stroke::new(1.0, class.border))
        .rounding(3.0)
        .inner_margin(egui::vec2(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(class.label)
                    .size(10.0)
                    .strong()
                    .extra_letter_spacing(2.0)
                    .color(class.text),
            );
        });
}

/// Warning strip; always drawn, whatever the folder.
pub fn risk_banner(ui: &mut egui::Ui, text: &str) {
    let accent = egui::Color32::from_rgb(0xff, 0x44, 0x00);
    egui::Frame::none()
        .fill(accent.gamma_multiply(0.07))
        .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.2)))
        .rounding(4.0)
        .inner_margin(egui::vec2(16.0, 10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                let color = egui::Color32::from_rgb(0xff, 0x88, 0x66);
                ui.label(egui::RichText::new("⚠").size(12.0).color(color));
                ui.label(egui::RichText::new(text).size(12.0).color(color));
            });
        });
}

/// Uppercase section caption.
pub fn section_label(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .extra_letter_spacing(3.0)
            .color(color),
    );
}
