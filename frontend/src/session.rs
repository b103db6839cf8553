use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserTier {
    #[default]
    Free,
    Pro,
}

impl UserTier {
    pub fn can_scan(self) -> bool {
        self == UserTier::Pro
    }

    pub fn badge_label(self) -> &'static str {
        match self {
            UserTier::Free => "FREE TIER",
            UserTier::Pro => "PRO ACTIVE",
        }
    }
}

/// Per-page-load user context. Starts on the free tier; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    tier: UserTier,
}

impl SessionContext {
    pub fn tier(&self) -> UserTier {
        self.tier
    }

    /// Simulated checkout. No payment leaves the browser.
    pub fn upgrade(&mut self) {
        self.tier = UserTier::Pro;
    }
}

/// Which overlays are showing, plus the session they act on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: SessionContext,
    pub hud_open: bool,
    pub deck_open: bool,
    pub pricing_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppAction {
    ToggleHud,
    CloseHud,
    /// Scan attempted without a plan: swap the HUD for the pricing modal.
    RequestUpgrade,
    OpenPricing,
    CancelPricing,
    ConfirmUpgrade,
    OpenDeck,
    CloseDeck,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::ToggleHud => next.hud_open = !next.hud_open,
            AppAction::CloseHud => next.hud_open = false,
            AppAction::RequestUpgrade => {
                next.hud_open = false;
                next.pricing_open = true;
            }
            AppAction::OpenPricing => next.pricing_open = true,
            AppAction::CancelPricing => next.pricing_open = false,
            AppAction::ConfirmUpgrade => {
                log::info!("Simulated checkout confirmed, upgrading session to Pro");
                next.session.upgrade();
                next.pricing_open = false;
            }
            AppAction::OpenDeck => next.deck_open = true,
            AppAction::CloseDeck => next.deck_open = false,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: AppState, actions: &[AppAction]) -> AppState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(*action);
        }
        (*state).clone()
    }

    #[test]
    fn starts_free_with_everything_closed() {
        let state = AppState::default();
        assert_eq!(state.session.tier(), UserTier::Free);
        assert!(!state.hud_open && !state.deck_open && !state.pricing_open);
        assert!(!state.session.tier().can_scan());
    }

    #[test]
    fn free_scan_routes_to_pricing_and_keeps_tier() {
        let state = apply(
            AppState::default(),
            &[AppAction::ToggleHud, AppAction::RequestUpgrade],
        );
        assert!(!state.hud_open);
        assert!(state.pricing_open);
        assert_eq!(state.session.tier(), UserTier::Free);
    }

    #[test]
    fn confirming_upgrades_and_closes_pricing() {
        let state = apply(
            AppState::default(),
            &[AppAction::RequestUpgrade, AppAction::ConfirmUpgrade],
        );
        assert!(!state.pricing_open);
        assert_eq!(state.session.tier(), UserTier::Pro);
        assert!(state.session.tier().can_scan());
        assert_eq!(state.session.tier().badge_label(), "PRO ACTIVE");
    }

    #[test]
    fn cancelling_leaves_tier_alone() {
        let state = apply(
            AppState::default(),
            &[AppAction::OpenPricing, AppAction::CancelPricing],
        );
        assert!(!state.pricing_open);
        assert_eq!(state.session.tier(), UserTier::Free);
    }

    #[test]
    fn launch_button_toggles_hud() {
        let state = apply(AppState::default(), &[AppAction::ToggleHud]);
        assert!(state.hud_open);
        let state = apply(state, &[AppAction::ToggleHud]);
        assert!(!state.hud_open);
    }

    #[test]
    fn deck_opens_and_closes() {
        let state = apply(AppState::default(), &[AppAction::OpenDeck]);
        assert!(state.deck_open);
        assert!(!apply(state, &[AppAction::CloseDeck]).deck_open);
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let state = Rc::new(AppState::default());
        let next = state.clone().reduce(AppAction::CloseHud);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
