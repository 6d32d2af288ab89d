//! Page rendering. Pure presentation over `SiteConfig`; the only stateful
//! element is the contact page's location tab, which the shell owns.

use shared::{config::SiteConfig, domain::Route};

use super::map::{show_map_embed, MapAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    GoTo(Route),
    OpenConsentSettings,
}

fn page_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(text).strong().size(26.0));
    ui.add_space(8.0);
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(18.0));
    ui.add_space(4.0);
}

pub fn show_home(ui: &mut egui::Ui, config: &SiteConfig) -> Option<PageAction> {
    let mut action = None;

    page_heading(ui, &format!("Willkommen bei {}", config.school.name));
    ui.label(
        "Professionelle Ausbildung, flexible Termine und erfahrene Fahrlehrer. \
         Starte jetzt deine Fahrschulausbildung bei uns.",
    );

    section_heading(ui, "Bereit für deinen Führerschein?");
    ui.horizontal(|ui| {
        if ui.button("Unsere Führerscheinklassen").clicked() {
            action = Some(PageAction::GoTo(Route::Fuehrerscheine));
        }
        if ui.button("Kontakt aufnehmen").clicked() {
            action = Some(PageAction::GoTo(Route::Kontakt));
        }
    });

    section_heading(ui, "Unsere Standorte");
    for location in &config.locations {
        ui.label(format!("• {} — {}", location.name, location.address));
    }

    action
}

pub fn show_fuehrerscheine(ui: &mut egui::Ui, config: &SiteConfig) {
    page_heading(ui, "Führerscheinklassen");

    let classes = config.active_classes();
    if classes.is_empty() {
        ui.label("Keine Führerscheinklassen verfügbar.");
        ui.small("Bitte kontaktieren Sie uns für weitere Informationen.");
        return;
    }

    for class in classes {
        section_heading(ui, &class.title);
        ui.label(&class.description);
        ui.add_space(4.0);
        for subclass in &class.subclasses {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&subclass.title).strong());
                ui.label(&subclass.description);
            });
        }
    }
}

pub fn show_kontakt(
    ui: &mut egui::Ui,
    config: &SiteConfig,
    map_allowed: bool,
    selected_location: &mut usize,
) -> Option<PageAction> {
    let mut action = None;

    page_heading(ui, "Kontaktiere uns");
    ui.label(
        "Wir sind für dich da! Egal ob du Fragen zur Anmeldung hast oder einen \
         Termin vereinbaren möchtest — melde dich gerne bei uns.",
    );

    if config.locations.is_empty() {
        return None;
    }
    if *selected_location >= config.locations.len() {
        *selected_location = 0;
    }

    if config.locations.len() > 1 {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for (index, location) in config.locations.iter().enumerate() {
                ui.selectable_value(selected_location, index, &location.name);
            }
        });
    }

    let location = &config.locations[*selected_location];
    ui.add_space(6.0);
    ui.label(format!("Telefon: {}", location.phone));
    ui.label(format!("Adresse: {}", location.address));
    ui.label(format!("Öffnungszeiten: {}", location.hours.replace('\n', ", ")));
    ui.label(format!("E-Mail: {}", config.school.email));

    section_heading(ui, "So findest du uns");
    if show_map_embed(ui, map_allowed, &config.locations) == Some(MapAction::OpenSettings) {
        action = Some(PageAction::OpenConsentSettings);
    }

    action
}

pub fn show_impressum(ui: &mut egui::Ui, config: &SiteConfig) {
    page_heading(ui, "Impressum");

    section_heading(ui, "Angaben gemäß § 5 TMG");
    ui.label(&config.school.name);
    ui.label(&config.school.street);
    ui.label(&config.school.city);

    section_heading(ui, "Vertreten durch");
    ui.label(format!("Geschäftsführer: {}", config.school.managing_director));

    section_heading(ui, "Kontakt");
    ui.label(format!("Telefon: {}", config.school.phone));
    ui.label(format!("E-Mail: {}", config.school.email));
    ui.label(format!("Website: {}", config.school.website));

    section_heading(ui, "Registereintrag");
    ui.label(format!("Registergericht: {}", config.legal.register_court));
    ui.label(format!("Registernummer: {}", config.legal.register_number));

    section_heading(ui, "Umsatzsteuer-ID");
    ui.label(format!(
        "Umsatzsteuer-Identifikationsnummer gemäß § 27 a Umsatzsteuergesetz: {}",
        config.legal.vat_id
    ));

    section_heading(ui, "Aufsichtsbehörde");
    ui.label(&config.legal.supervisory_authority);
    ui.label(&config.legal.supervisory_address);

    section_heading(ui, "Fahrlehrererlaubnis");
    ui.label(format!("Erteilt durch: {}", config.legal.licence_authority));
    ui.label(format!("Erlaubnisnummer: {}", config.school.instructor_licence));

    section_heading(ui, "Haftungsausschluss");
    ui.label(
        "Als Diensteanbieter sind wir gemäß § 7 Abs. 1 TMG für eigene Inhalte auf \
         diesen Seiten nach den allgemeinen Gesetzen verantwortlich. Unser Angebot \
         enthält Links zu externen Websites Dritter, auf deren Inhalte wir keinen \
         Einfluss haben; für diese Inhalte ist stets der jeweilige Anbieter \
         verantwortlich.",
    );
}

pub fn show_datenschutz(ui: &mut egui::Ui, config: &SiteConfig) -> Option<PageAction> {
    let mut action = None;

    page_heading(ui, "Datenschutz");
    ui.label(format!(
        "Datenschutzhinweise der {}. Verantwortlich für die Datenverarbeitung ist \
         der im Impressum genannte Betreiber.",
        config.school.name
    ));

    section_heading(ui, "Externe Medien");
    ui.label(
        "Karteninhalte von Google Maps werden nur nach Ihrer ausdrücklichen \
         Einwilligung geladen. Dabei werden Daten (z.B. IP-Adresse) an Google LLC \
         (USA) übertragen. Ihre Einwilligung können Sie jederzeit widerrufen.",
    );
    ui.add_space(4.0);
    if ui.button("Datenschutzeinstellungen öffnen").clicked() {
        action = Some(PageAction::OpenConsentSettings);
    }

    action
}
