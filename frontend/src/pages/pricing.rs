use yew::prelude::*;

pub const PRO_PRICE_USD: u32 = 5;

const PRO_FEATURES: [&str; 3] = ["Unlimited AI Scans", "Deepfake Detection", "Priority Support"];

#[derive(Properties, PartialEq)]
pub struct PricingModalProps {
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Simulated Stripe checkout. Confirming only flips the local tier.
#[function_component]
pub fn PricingModal(props: &PricingModalProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="pricing-card">
                <div class="pricing-accent"></div>
                <h2>{"Upgrade to Pro"}</h2>
                <p class="pricing-pitch">{"Unlock real-time AI detection and advanced biometrics."}</p>

                <div class="pricing-amount">
                    <span class="price">{format!("${}", PRO_PRICE_USD)}</span>
                    <span class="period">{"/ month"}</span>
                </div>

                <ul class="pricing-features">
                    { for PRO_FEATURES.iter().map(|feature| html! {
                        <li><span class="check">{"✓"}</span>{*feature}</li>
                    }) }
                </ul>

                <button class="pricing-confirm" onclick={on_confirm}>
                    {"Pay with Card (Stripe Demo)"}
                </button>
                <button class="pricing-cancel" onclick={on_cancel}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
