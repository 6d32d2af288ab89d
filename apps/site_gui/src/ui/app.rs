//! The site shell: header navigation, footer, the active page, and the
//! consent banner/dialog wiring. The shell is the only place that reads the
//! effective consent decision and forwards it to gated embeds.

use shared::{config::SiteConfig, domain::Route};

use crate::controller::consent_flow::ConsentFlow;

use super::{
    banner::{show_consent_banner, BannerAction},
    consent_settings::{ConsentSettingsDialog, DialogAction},
    pages,
    pages::PageAction,
};

pub struct SiteApp {
    config: SiteConfig,
    flow: ConsentFlow,
    route: Route,
    selected_location: usize,
    settings_dialog: Option<ConsentSettingsDialog>,
}

impl SiteApp {
    pub fn new(config: SiteConfig, flow: ConsentFlow) -> Self {
        Self {
            config,
            flow,
            route: Route::Home,
            selected_location: 0,
            settings_dialog: None,
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("site_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.config.school.name).strong().size(18.0));
                ui.separator();
                for route in Route::nav() {
                    if ui
                        .selectable_label(self.route == *route, route.label())
                        .clicked()
                    {
                        self.route = *route;
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("site_footer").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.small(format!(
                    "© 2025 {} · {} · {}",
                    self.config.school.name, self.config.school.street, self.config.school.city
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Re-opening the dialog after a decision is always
                    // possible from here (revocation path).
                    if ui.small_button("Privatsphäre").clicked() {
                        self.flow.open_settings();
                    }
                    if ui.small_button(Route::Datenschutz.label()).clicked() {
                        self.route = Route::Datenschutz;
                    }
                    if ui.small_button(Route::Impressum.label()).clicked() {
                        self.route = Route::Impressum;
                    }
                });
            });
            ui.small(format!(
                "Geschäftsführer: {} | Fahrlehrererlaubnis: {}",
                self.config.school.managing_director, self.config.school.instructor_licence
            ));
            ui.add_space(4.0);
        });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let map_allowed = self.flow.external_media_allowed();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let action = match self.route {
                        Route::Home => pages::show_home(ui, &self.config),
                        Route::Fuehrerscheine => {
                            pages::show_fuehrerscheine(ui, &self.config);
                            None
                        }
                        Route::Kontakt => pages::show_kontakt(
                            ui,
                            &self.config,
                            map_allowed,
                            &mut self.selected_location,
                        ),
                        Route::Impressum => {
                            pages::show_impressum(ui, &self.config);
                            None
                        }
                        Route::Datenschutz => pages::show_datenschutz(ui, &self.config),
                    };

                    match action {
                        Some(PageAction::GoTo(route)) => self.route = route,
                        Some(PageAction::OpenConsentSettings) => self.flow.open_settings(),
                        None => {}
                    }
                });
        });
    }

    fn show_consent_ui(&mut self, ctx: &egui::Context) {
        match show_consent_banner(ctx, self.flow.banner()) {
            Some(BannerAction::Expand) => self.flow.expand_banner(),
            Some(BannerAction::Collapse) => self.flow.collapse_banner(),
            Some(BannerAction::Accept) => self.flow.accept_all(),
            Some(BannerAction::Decline) => self.flow.decline_all(),
            Some(BannerAction::OpenSettings) => self.flow.open_settings(),
            Some(BannerAction::GoTo(route)) => self.route = route,
            None => {}
        }

        // The dialog's draft lives exactly as long as the dialog is open.
        if self.flow.dialog_open() {
            let dialog = self
                .settings_dialog
                .get_or_insert_with(|| ConsentSettingsDialog::new(self.flow.current()));

            match dialog.show(ctx) {
                Some(DialogAction::SaveSelection(draft)) => self.flow.save_selection(draft),
                Some(DialogAction::AcceptAll) => self.flow.dialog_accept_all(),
                Some(DialogAction::DeclineAll) => self.flow.dialog_decline_all(),
                Some(DialogAction::Dismiss) => self.flow.dismiss_dialog(),
                Some(DialogAction::GoTo(route)) => {
                    self.route = route;
                    self.flow.dismiss_dialog();
                }
                None => {}
            }
        }
        if !self.flow.dialog_open() {
            self.settings_dialog = None;
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_header(ctx);
        self.show_footer(ctx);
        self.show_consent_ui(ctx);
        self.show_page(ctx);
    }
}
