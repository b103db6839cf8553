use yew::prelude::*;

mod analysis;
mod camera;
mod config;
mod hud;
mod pages;
mod session;
mod utils;

use hud::Hud;
use pages::landing::Landing;
use pages::pitch_deck::PitchDeck;
use pages::pricing::PricingModal;
use session::{AppAction, AppState};

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(AppState::default);

    let dispatch = |action: AppAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action))
    };

    html! {
        <div class="app">
            <Landing
                tier={state.session.tier()}
                on_launch={dispatch(AppAction::ToggleHud)}
                on_upgrade={dispatch(AppAction::OpenPricing)}
                on_investors={dispatch(AppAction::OpenDeck)}
            />

            <Hud
                is_open={state.hud_open}
                tier={state.session.tier()}
                on_close={dispatch(AppAction::CloseHud)}
                on_upgrade={dispatch(AppAction::RequestUpgrade)}
            />

            if state.deck_open {
                <PitchDeck on_close={dispatch(AppAction::CloseDeck)} />
            }

            if state.pricing_open {
                <PricingModal
                    on_confirm={dispatch(AppAction::ConfirmUpgrade)}
                    on_cancel={dispatch(AppAction::CancelPricing)}
                />
            }
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting XR Button");
    yew::Renderer::<App>::new().render();
}
