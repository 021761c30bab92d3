// Main application state and UI rendering logic for the BLOATKILL dashboard

// Reusable panels and the copy button
use crate::gui::{copy_button, danger_badge, risk_banner, section_label, size_badge};
// View state driving what is shown
use crate::gui::state::DashboardState;
// Host clipboard
use crate::clipboard::SystemClipboard;
// Folder data for rendering
use crate::models::FolderEntry;
// Import egui for UI rendering
use eframe::egui;
use std::time::Duration;

/// Page background
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x08, 0x0a, 0x0f);
/// Card and inactive tab background
const CARD: egui::Color32 = egui::Color32::from_rgb(0x0d, 0x11, 0x17);
/// Background of an expanded method
const CARD_OPEN: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x16, 0x20);
/// Neutral outline
const EDGE: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x2a, 0x38);
/// Muted caption text
const MUTED: egui::Color32 = egui::Color32::from_rgb(0x4a, 0x6a, 0x7a);
/// Brand accent
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xff, 0x44, 0x00);
/// Command text
const COMMAND: egui::Color32 = egui::Color32::from_rgb(0x88, 0xdd, 0xbb);

/// Widest the content column grows
const MAX_WIDTH: f32 = 860.0;
/// Footer cursor blink period in seconds
const BLINK_PERIOD: f64 = 1.2;

/// Main application state for the eframe app.
/// Owns the view state, the clipboard handle and the copy feedback duration.
pub struct AppState {
    /// Active folder and expanded method
    state: DashboardState<'static>,

    /// Clipboard used by every copy button
    clipboard: SystemClipboard,

    /// How long a copy button confirms a copy
    copy_feedback: Duration,
}

impl AppState {
    /// Creates the application state and applies the dark monospace theme.
    ///
    /// # Arguments
    /// * `cc` - eframe creation context containing egui context
    /// * `state` - initial selection
    /// * `copy_feedback` - confirmation duration for copy buttons
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: DashboardState<'static>,
        copy_feedback: Duration,
    ) -> Self {
        apply_theme(&cc.egui_ctx);
        Self {
            state,
            clipboard: SystemClipboard::new(),
            copy_feedback,
        }
    }

    /// Title block above the tabs.
    fn header(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("◉ WINDOWS STORAGE REMEDIATION — SYSADMIN REFERENCE v2.6")
                .size(11.0)
                .extra_letter_spacing(4.0)
                .color(ACCENT.gamma_multiply(0.8)),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            let title = |text: &str, color: egui::Color32| {
                egui::RichText::new(text).size(42.0).strong().color(color)
            };
            ui.label(title("BLOAT", egui::Color32::from_rgb(0xe8, 0xf0, 0xfa)));
            ui.label(title("KILL", ACCENT));
        });
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("WINDOWS FOLDER CLEANUP INTELLIGENCE SYSTEM")
                .size(12.0)
                .extra_letter_spacing(2.0)
                .color(egui::Color32::from_rgb(0x5a, 0x7a, 0x9a)),
        );
    }

    /// One tab per folder; clicking switches folders and collapses methods.
    fn tabs(&mut self, ui: &mut egui::Ui) {
        let catalog = self.state.catalog();
        let gap = 12.0;
        let count = catalog.len().max(1) as f32;
        let tab_width = (ui.available_width() - gap * (count - 1.0)) / count;
        let mut clicked = None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            for folder in catalog.folders() {
                let active = folder.key == self.state.active_key();
                let (fill, border, text) = if active {
                    (folder.color.gamma_multiply(0.1), folder.color, folder.color)
                } else {
                    (CARD, EDGE, MUTED)
                };

                let mut frame = egui::Frame::none()
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, border))
                    .rounding(6.0)
                    .inner_margin(egui::vec2(20.0, 14.0));
                if active {
                    frame = frame.shadow(egui::epaint::Shadow {
                        offset: egui::Vec2::ZERO,
                        blur: 20.0,
                        spread: 0.0,
                        color: folder.glow,
                    });
                }

                let response = frame.show(ui, |ui| {
                    ui.set_width(tab_width - 40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{}  {}", folder.icon, folder.key))
                                .size(13.0)
                                .strong()
                                .extra_letter_spacing(2.0)
                                .color(text),
                        );
                    });
                });

                if response
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked()
                {
                    clicked = Some(folder.key);
                }
            }
        });

        if let Some(key) = clicked {
            if let Err(err) = self.state.select_folder(key) {
                debug_assert!(false, "tab offered a key outside the catalog: {err}");
                tracing::error!(error = %err, "folder selection rejected");
            }
        }
    }

    /// Location, description, typical size and the risk warning.
    fn info_card(&self, ui: &mut egui::Ui, folder: &FolderEntry) {
        egui::Frame::none()
            .fill(CARD)
            .stroke(egui::Stroke::new(1.0, folder.color.gamma_multiply(0.27)))
            .rounding(8.0)
            .inner_margin(egui::vec2(28.0, 24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    let text_width = (ui.available_width() - 200.0).max(240.0);
                    ui.vertical(|ui| {
                        ui.set_width(text_width);
                        section_label(ui, "FOLDER INTEL", folder.color);
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(folder.location)
                                .size(13.0)
                                .color(egui::Color32::from_rgb(0x5a, 0x8a, 0xaa)),
                        );
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(folder.description)
                                .size(14.0)
                                .color(egui::Color32::from_rgb(0x9a, 0xb0, 0xc8)),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        size_badge(ui, "TYPICAL SIZE", folder.size, folder.color);
                    });
                });
                ui.add_space(18.0);
                risk_banner(ui, folder.risks);
            });
    }

    /// Collapsible method list for the active folder.
    fn methods(&mut self, ui: &mut egui::Ui, folder: &'static FolderEntry) {
        section_label(
            ui,
            &format!("CLEANUP METHODS — {} AVAILABLE", folder.methods.len()),
            MUTED,
        );
        ui.add_space(14.0);

        let catalog = self.state.catalog();
        let mut toggled = None;

        for (i, method) in folder.methods.iter().enumerate() {
            let open = self.state.is_expanded(i);
            let class = catalog.classify(method.danger);

            egui::Frame::none()
                .fill(if open { CARD_OPEN } else { CARD })
                .stroke(egui::Stroke::new(
                    1.0,
                    if open { folder.color.gamma_multiply(0.4) } else { EDGE },
                ))
                .rounding(6.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    // Header row: badge, label and disclosure arrow
                    let header = egui::Frame::none()
                        .inner_margin(egui::vec2(20.0, 14.0))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                danger_badge(ui, class);
                                ui.add_space(4.0);
                                ui.label(
                                    egui::RichText::new(method.label)
                                        .size(13.0)
                                        .strong()
                                        .color(egui::Color32::from_rgb(0xc8, 0xd8, 0xe8)),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        let arrow = if open { "▼" } else { "▶" };
                                        ui.label(
                                            egui::RichText::new(arrow)
                                                .size(14.0)
                                                .color(folder.color),
                                        );
                                    },
                                );
                            });
                        });

                    if header
                        .response
                        .interact(egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        toggled = Some(i);
                    }

                    if open {
                        egui::Frame::none()
                            .inner_margin(egui::Margin {
                                left: 20.0,
                                right: 20.0,
                                top: 0.0,
                                bottom: 20.0,
                            })
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(method.note)
                                        .size(13.0)
                                        .color(egui::Color32::from_rgb(0x7a, 0x9a, 0xb0)),
                                );
                                ui.add_space(14.0);
                                self.command_block(ui, folder, i);
                            });
                    }
                });
            ui.add_space(10.0);
        }

        if let Some(i) = toggled {
            if let Err(err) = self.state.toggle_method(i) {
                debug_assert!(false, "method row outside the active folder: {err}");
                tracing::error!(error = %err, "method toggle rejected");
            }
        }
    }

    /// Raw command text with its copy button.
    fn command_block(&mut self, ui: &mut egui::Ui, folder: &FolderEntry, index: usize) {
        let Some(method) = folder.method(index) else {
            return;
        };

        egui::Frame::none()
            .fill(egui::Color32::from_rgb(0x06, 0x0a, 0x0f))
            .stroke(egui::Stroke::new(1.0, EDGE))
            .rounding(5.0)
            .inner_margin(egui::vec2(16.0, 14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    let text_width = (ui.available_width() - 120.0).max(120.0);
                    ui.vertical(|ui| {
                        ui.set_width(text_width);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(method.cmd).size(12.0).color(COMMAND),
                            )
                            .wrap(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        copy_button(
                            ui,
                            egui::Id::new(("copy", folder.key, index)),
                            method.cmd,
                            &mut self.clipboard,
                            self.copy_feedback,
                        );
                    });
                });
            });
    }

    /// Sign-off line with the blinking cursor.
    fn footer(&self, ui: &mut egui::Ui) {
        let time = ui.input(|i| i.time);
        let phase = time % BLINK_PERIOD;
        let half = BLINK_PERIOD / 2.0;
        let cursor_on = phase < half;
        let until_flip = if cursor_on { half - phase } else { BLINK_PERIOD - phase };
        ui.ctx().request_repaint_after(Duration::from_secs_f64(until_flip));

        let color = egui::Color32::from_rgb(0x2a, 0x4a, 0x5a);
        ui.separator();
        ui.add_space(12.0);
        ui.columns(3, |cols| {
            cols[0].label(
                egui::RichText::new("ry-ops.dev // BLOATKILL")
                    .size(11.0)
                    .extra_letter_spacing(2.0)
                    .color(color),
            );
            cols[1].vertical_centered(|ui| {
                let cursor = if cursor_on { color } else { egui::Color32::TRANSPARENT };
                ui.label(egui::RichText::new("█").size(11.0).color(cursor));
            });
            cols[2].with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(
                    egui::RichText::new("ALWAYS TEST IN NON-PROD")
                        .size(11.0)
                        .extra_letter_spacing(2.0)
                        .color(color),
                );
            });
        });
    }
}

impl eframe::App for AppState {
    /// Main UI update function called every frame.
    /// Renders header, folder tabs, the info card, methods and footer in one column.
    ///
    /// # Arguments
    /// * `ctx` - egui context for rendering
    /// * `_frame` - eframe frame (unused)
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(egui::vec2(24.0, 32.0)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(MAX_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            self.header(ui);
                            ui.add_space(36.0);

                            self.tabs(ui);
                            ui.add_space(28.0);

                            // Read after the tabs so a click this frame is reflected
                            let folder = self.state.active_folder();
                            self.info_card(ui, folder);
                            ui.add_space(24.0);

                            self.methods(ui, folder);
                            ui.add_space(48.0);

                            self.footer(ui);
                        });
                    });
                });
            });
    }
}

/// Dark background, monospace everywhere.
fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.override_text_style = Some(egui::TextStyle::Monospace);
    ctx.set_style(style);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.override_text_color = Some(egui::Color32::from_rgb(0xc8, 0xd4, 0xe0));
    ctx.set_visuals(visuals);
}
