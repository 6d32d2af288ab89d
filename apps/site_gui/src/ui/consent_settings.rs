//! Modal settings dialog with per-category detail. Draft-then-commit: the
//! toggle only mutates the dialog-local draft; nothing is persisted until
//! one of the three footer actions commits, and the X control discards the
//! draft entirely.

use chrono::{DateTime, Local, Utc};
use shared::domain::Route;

use consent::ConsentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    SaveSelection(bool),
    AcceptAll,
    DeclineAll,
    Dismiss,
    /// Legal links close the dialog without committing, then navigate.
    GoTo(Route),
}

#[derive(Debug)]
pub struct ConsentSettingsDialog {
    draft_external_media: bool,
    last_decision: Option<DateTime<Utc>>,
}

impl ConsentSettingsDialog {
    /// Copies the committed state into the draft on open.
    pub fn new(current: ConsentRecord) -> Self {
        Self {
            draft_external_media: current.external_media,
            last_decision: current.timestamp,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        let mut action = None;
        let mut open = true;

        let frame = egui::Frame::NONE
            .fill(ctx.style().visuals.window_fill)
            .stroke(egui::Stroke::new(1.0, ctx.style().visuals.window_stroke().color))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(18, 14));

        egui::Window::new("Datenschutzeinstellungen")
            .open(&mut open)
            .frame(frame)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .fixed_size([460.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    "Hier können Sie detailliert festlegen, welche Dienste wir verwenden \
                     dürfen. Ihre Einstellungen werden gespeichert und können jederzeit \
                     geändert werden.",
                );
                ui.add_space(8.0);

                self.show_essential_category(ui);
                ui.add_space(8.0);
                self.show_external_media_category(ui);

                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    ui.small("Weitere Informationen:");
                    if ui.small_button("Datenschutzerklärung").clicked() {
                        action = Some(DialogAction::GoTo(Route::Datenschutz));
                    }
                    if ui.small_button("Impressum").clicked() {
                        action = Some(DialogAction::GoTo(Route::Impressum));
                    }
                });

                if let Some(timestamp) = self.last_decision {
                    ui.add_space(4.0);
                    ui.small(format!(
                        "Letzte Einwilligung: {} Uhr",
                        format_decision_timestamp(timestamp)
                    ));
                }

                ui.add_space(8.0);
                ui.separator();
                ui.horizontal(|ui| {
                    let width =
                        (ui.available_width() - 2.0 * ui.spacing().item_spacing.x) / 3.0;
                    if footer_button(ui, width, "Alle ablehnen") {
                        action = Some(DialogAction::DeclineAll);
                    }
                    if footer_button(ui, width, "Auswahl speichern") {
                        action = Some(DialogAction::SaveSelection(self.draft_external_media));
                    }
                    if footer_button(ui, width, "Alle akzeptieren") {
                        action = Some(DialogAction::AcceptAll);
                    }
                });
            });

        if !open && action.is_none() {
            action = Some(DialogAction::Dismiss);
        }
        action
    }

    fn show_essential_category(&self, ui: &mut egui::Ui) {
        category_frame(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Essenzielle Cookies").strong());
                ui.small(egui::RichText::new("Immer aktiv").weak());
            });
            ui.small(
                "Erforderlich für die Grundfunktionen der Website (z.B. Speicherung \
                 Ihrer Datenschutzeinstellungen). Kann nicht deaktiviert werden.",
            );
        });
    }

    fn show_external_media_category(&mut self, ui: &mut egui::Ui) {
        category_frame(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Google Maps").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.checkbox(&mut self.draft_external_media, "");
                });
            });
            ui.small(
                "Ermöglicht die Anzeige interaktiver Karten zur Darstellung unserer \
                 Standorte. Bei Aktivierung werden Daten an Google LLC (USA) übertragen.",
            );
            ui.small("Übertragene Daten: IP-Adresse, Standortdaten (falls freigegeben), \
                      Geräteinformationen.");
        });
    }
}

fn footer_button(ui: &mut egui::Ui, width: f32, label: &str) -> bool {
    ui.add_sized([width, 30.0], egui::Button::new(label)).clicked()
}

fn category_frame(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// dd.mm.yyyy hh:mm in local time.
fn format_decision_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d.%m.%Y %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_copies_committed_flag_into_draft() {
        let dialog = ConsentSettingsDialog::new(ConsentRecord {
            external_media: true,
            timestamp: None,
        });
        assert!(dialog.draft_external_media);

        let dialog = ConsentSettingsDialog::new(ConsentRecord::undecided());
        assert!(!dialog.draft_external_media);
    }

    #[test]
    fn decision_timestamp_formats_as_german_date() {
        let timestamp: DateTime<Utc> = "2025-10-01T12:34:00Z".parse().expect("timestamp");
        let formatted = format_decision_timestamp(timestamp);
        // Local offset varies; the date layout does not.
        assert_eq!(formatted.len(), "01.10.2025 12:34".len());
        assert_eq!(&formatted[2..3], ".");
        assert_eq!(&formatted[5..6], ".");
        assert!(formatted.contains("2025"));
    }
}
