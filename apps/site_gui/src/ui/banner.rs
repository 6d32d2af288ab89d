//! The two-mode consent prompt. The banner itself never decides anything:
//! it renders the flow's state and reports the user's intent back to the
//! shell.

use shared::domain::Route;

use crate::controller::consent_flow::BannerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    Expand,
    Collapse,
    Accept,
    Decline,
    OpenSettings,
    GoTo(Route),
}

/// Renders the banner for the given state and returns at most one intent.
/// `Hidden` renders nothing.
pub fn show_consent_banner(ctx: &egui::Context, state: BannerState) -> Option<BannerAction> {
    match state {
        BannerState::Hidden => None,
        BannerState::Compact => show_compact(ctx),
        BannerState::Expanded => show_expanded(ctx),
    }
}

// All three decision buttons share one widget shape. Equal visual weight
// for accept/decline/settings is part of the contract, not styling taste.
fn decision_button(ui: &mut egui::Ui, width: f32, label: &str) -> bool {
    ui.add_sized([width, 30.0], egui::Button::new(label)).clicked()
}

fn show_compact(ctx: &egui::Context) -> Option<BannerAction> {
    let mut action = None;

    let frame = egui::Frame::NONE
        .fill(ctx.style().visuals.window_fill)
        .stroke(egui::Stroke::new(1.0, ctx.style().visuals.window_stroke().color))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(14, 12));

    egui::Window::new("consent_banner_compact")
        .title_bar(false)
        .resizable(false)
        .frame(frame)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("🍪  Wir nutzen Cookies").strong());
            ui.horizontal_wrapped(|ui| {
                ui.small("Für Google Maps & bessere Nutzererfahrung.");
                if ui.small_button("Mehr erfahren").clicked() {
                    action = Some(BannerAction::Expand);
                }
            });

            ui.add_space(6.0);
            let button_width = (ui.available_width() - 2.0 * ui.spacing().item_spacing.x) / 3.0;
            ui.horizontal(|ui| {
                if decision_button(ui, button_width, "Ablehnen") {
                    action = Some(BannerAction::Decline);
                }
                if decision_button(ui, button_width, "Anpassen") {
                    action = Some(BannerAction::OpenSettings);
                }
                if decision_button(ui, button_width, "Akzeptieren") {
                    action = Some(BannerAction::Accept);
                }
            });
        });

    action
}

fn show_expanded(ctx: &egui::Context) -> Option<BannerAction> {
    let mut action = None;

    let frame = egui::Frame::NONE
        .fill(ctx.style().visuals.window_fill)
        .stroke(egui::Stroke::new(1.0, ctx.style().visuals.window_stroke().color))
        .inner_margin(egui::Margin::symmetric(18, 14));

    egui::TopBottomPanel::bottom("consent_banner_expanded")
        .frame(frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🍪  Datenschutzeinstellungen").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Minimieren ⌄").clicked() {
                        action = Some(BannerAction::Collapse);
                    }
                });
            });

            ui.add_space(4.0);
            ui.label(
                "Wir nutzen Cookies und ähnliche Technologien. Bei „Alle akzeptieren“ \
                 werden Daten (z.B. IP-Adresse) an Google LLC (USA) übertragen.",
            );
            ui.horizontal(|ui| {
                if ui.link("Datenschutzerklärung").clicked() {
                    action = Some(BannerAction::GoTo(Route::Datenschutz));
                }
                ui.label("·");
                if ui.link("Impressum").clicked() {
                    action = Some(BannerAction::GoTo(Route::Impressum));
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if decision_button(ui, 150.0, "Nur Essenzielle") {
                    action = Some(BannerAction::Decline);
                }
                if decision_button(ui, 150.0, "Einstellungen") {
                    action = Some(BannerAction::OpenSettings);
                }
                if decision_button(ui, 150.0, "Alle akzeptieren") {
                    action = Some(BannerAction::Accept);
                }
            });

            ui.add_space(2.0);
            ui.small("Einwilligung jederzeit widerrufbar über „Privatsphäre“ im Footer.");
        });

    action
}
