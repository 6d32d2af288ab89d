//! Banner/dialog orchestration around the consent controller. Pure state,
//! no egui types, so the whole lifecycle is unit-testable.

use consent::{ConsentController, ConsentRecord, ConsentUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Compact,
    Expanded,
}

/// Orchestrates the prompt lifecycle: banner visibility, the settings
/// dialog's open flag, and the commits each user intent maps to. The shell
/// owns one of these and forwards the effective decision to gated embeds.
pub struct ConsentFlow {
    controller: ConsentController,
    banner: BannerState,
    dialog_open: bool,
}

impl ConsentFlow {
    pub fn new(controller: ConsentController) -> Self {
        let banner = if controller.current().is_decided() {
            BannerState::Hidden
        } else {
            BannerState::Compact
        };
        Self {
            controller,
            banner,
            dialog_open: false,
        }
    }

    pub fn banner(&self) -> BannerState {
        self.banner
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn current(&self) -> ConsentRecord {
        self.controller.current()
    }

    /// The gating flag forwarded to third-party embeds.
    pub fn external_media_allowed(&self) -> bool {
        self.controller.current().external_media
    }

    /// "Mehr erfahren" — more detail, no consent change.
    pub fn expand_banner(&mut self) {
        if self.banner == BannerState::Compact {
            self.banner = BannerState::Expanded;
        }
    }

    /// Explicit collapse, no consent change.
    pub fn collapse_banner(&mut self) {
        if self.banner == BannerState::Expanded {
            self.banner = BannerState::Compact;
        }
    }

    pub fn accept_all(&mut self) {
        self.controller.update(ConsentUpdate::external_media(true));
        self.banner = BannerState::Hidden;
    }

    /// Decline means "minimum necessary only". It is a real decision: it
    /// stamps a timestamp and the banner stays gone on the next load.
    pub fn decline_all(&mut self) {
        self.controller.update(ConsentUpdate::external_media(false));
        self.banner = BannerState::Hidden;
    }

    /// Defers the decision to the settings dialog; the banner closes while
    /// the dialog owns the outcome.
    pub fn open_settings(&mut self) {
        self.banner = BannerState::Hidden;
        self.dialog_open = true;
    }

    /// "Auswahl speichern" — commits the dialog draft.
    pub fn save_selection(&mut self, draft_external_media: bool) {
        self.controller
            .update(ConsentUpdate::external_media(draft_external_media));
        self.close_dialog();
    }

    pub fn dialog_accept_all(&mut self) {
        self.controller.update(ConsentUpdate::external_media(true));
        self.close_dialog();
    }

    pub fn dialog_decline_all(&mut self) {
        self.controller.update(ConsentUpdate::external_media(false));
        self.close_dialog();
    }

    /// The X control: the draft is discarded by the caller and nothing is
    /// persisted here.
    pub fn dismiss_dialog(&mut self) {
        self.close_dialog();
    }

    // Every close path re-evaluates the prompt condition, so a user who
    // opened settings and backed out is not left with neither a decision
    // nor a visible prompt.
    fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.banner = if self.controller.current().is_decided() {
            BannerState::Hidden
        } else {
            BannerState::Compact
        };
    }
}

impl std::fmt::Debug for ConsentFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsentFlow")
            .field("banner", &self.banner)
            .field("dialog_open", &self.dialog_open)
            .field("current", &self.controller.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use consent::{ConsentRecord, MemoryConsentStore};

    use super::*;

    fn fresh_flow() -> ConsentFlow {
        ConsentFlow::new(ConsentController::new(Box::new(MemoryConsentStore::new())))
    }

    #[test]
    fn fresh_session_shows_compact_banner() {
        let flow = fresh_flow();
        assert_eq!(flow.banner(), BannerState::Compact);
        assert!(!flow.external_media_allowed());
    }

    #[test]
    fn expand_and_collapse_do_not_touch_consent() {
        let mut flow = fresh_flow();
        flow.expand_banner();
        assert_eq!(flow.banner(), BannerState::Expanded);
        flow.collapse_banner();
        assert_eq!(flow.banner(), BannerState::Compact);
        assert!(!flow.current().is_decided());
    }

    #[test]
    fn decline_hides_banner_and_counts_as_decision() {
        let mut flow = fresh_flow();
        flow.decline_all();

        assert_eq!(flow.banner(), BannerState::Hidden);
        assert!(!flow.external_media_allowed());
        assert!(flow.current().is_decided());
    }

    #[test]
    fn decline_keeps_banner_hidden_on_next_load() {
        let mut flow = fresh_flow();
        flow.decline_all();
        let persisted = flow.current();

        // A new flow over the persisted record models the next page load.
        let reload = ConsentFlow::new(ConsentController::new(Box::new(
            MemoryConsentStore::with_record(persisted),
        )));
        assert_eq!(reload.banner(), BannerState::Hidden);
        assert!(!reload.external_media_allowed());
    }

    #[test]
    fn accept_from_expanded_banner_allows_external_media() {
        let mut flow = fresh_flow();
        flow.expand_banner();
        flow.accept_all();

        assert_eq!(flow.banner(), BannerState::Hidden);
        assert!(flow.external_media_allowed());
    }

    #[test]
    fn open_settings_defers_decision_and_hides_banner() {
        let mut flow = fresh_flow();
        flow.open_settings();

        assert_eq!(flow.banner(), BannerState::Hidden);
        assert!(flow.dialog_open());
        assert!(!flow.current().is_decided());
    }

    #[test]
    fn save_selection_commits_draft_and_keeps_banner_hidden() {
        let mut flow = fresh_flow();
        flow.open_settings();
        flow.save_selection(true);

        assert!(!flow.dialog_open());
        assert!(flow.external_media_allowed());
        assert_eq!(flow.banner(), BannerState::Hidden);
    }

    #[test]
    fn dialog_accept_and_decline_override_any_draft() {
        let mut flow = fresh_flow();
        flow.open_settings();
        flow.dialog_accept_all();
        assert!(flow.external_media_allowed());

        flow.open_settings();
        flow.dialog_decline_all();
        assert!(!flow.external_media_allowed());
        assert_eq!(flow.banner(), BannerState::Hidden);
    }

    #[test]
    fn dismiss_without_decision_reshows_compact_banner() {
        let mut flow = fresh_flow();
        let before = flow.current();

        flow.open_settings();
        flow.dismiss_dialog();

        assert!(!flow.dialog_open());
        assert_eq!(flow.current(), before);
        assert_eq!(flow.banner(), BannerState::Compact);
    }

    #[test]
    fn dismiss_after_earlier_decision_keeps_banner_hidden() {
        let mut flow = fresh_flow();
        flow.decline_all();

        flow.open_settings();
        flow.dismiss_dialog();

        assert_eq!(flow.banner(), BannerState::Hidden);
    }

    #[test]
    fn stored_flag_without_timestamp_still_prompts() {
        let store = MemoryConsentStore::with_record(ConsentRecord {
            external_media: true,
            timestamp: None,
        });
        let flow = ConsentFlow::new(ConsentController::new(Box::new(store)));

        assert_eq!(flow.banner(), BannerState::Compact);
    }
}
