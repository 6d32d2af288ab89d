//! The one third-party embed of the site. It only ever receives the
//! effective decision as `allowed`; without consent it renders a neutral
//! placeholder with a way into the settings dialog, never the embed and
//! never an error.

use shared::domain::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapAction {
    OpenSettings,
}

pub fn show_map_embed(
    ui: &mut egui::Ui,
    allowed: bool,
    locations: &[Location],
) -> Option<MapAction> {
    let mut action = None;

    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if allowed {
                ui.label(egui::RichText::new("Karte").strong());
                for location in locations {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(format!("📍 {} — {}", location.name, location.address));
                        ui.hyperlink_to(
                            "In Google Maps öffnen",
                            maps_query_url(&location.address),
                        );
                    });
                }
            } else {
                ui.label(egui::RichText::new("Karte deaktiviert").strong());
                ui.small(
                    "Die interaktive Karte wird erst nach Ihrer Einwilligung geladen. \
                     Ohne Einwilligung werden keine Daten an Google übertragen.",
                );
                ui.add_space(4.0);
                if ui.button("Datenschutzeinstellungen öffnen").clicked() {
                    action = Some(MapAction::OpenSettings);
                }
            }
        });

    action
}

fn maps_query_url(address: &str) -> String {
    // Minimal query escaping; addresses only contain spaces and commas.
    let query = address.replace(' ', "+").replace(',', "%2C");
    format!("https://maps.google.com/?q={query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_escapes_spaces_and_commas() {
        assert_eq!(
            maps_query_url("Hauptstraße 123, 10115 Berlin"),
            "https://maps.google.com/?q=Hauptstraße+123%2C+10115+Berlin"
        );
    }
}
