use yew::prelude::*;

use crate::session::UserTier;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub tier: UserTier,
    pub on_launch: Callback<()>,
    pub on_upgrade: Callback<()>,
    pub on_investors: Callback<()>,
}

struct Feature {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "◉",
        accent: "cyan",
        title: "Visual Analysis",
        text: "Advanced computer vision detects synthetic media artifacts in real-time video feeds.",
    },
    Feature {
        icon: "⛨",
        accent: "pink",
        title: "Secure HUD",
        text: "Encrypted, local-first processing layer that overlays seamlessly on your desktop environment.",
    },
    Feature {
        icon: "⚡",
        accent: "purple",
        title: "Gemini Powered",
        text: "Leveraging Google's Gemini 2.5 Flash for millisecond-latency multimodal reasoning.",
    },
];

fn emit(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_: MouseEvent| callback.emit(()))
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let pro = props.tier == UserTier::Pro;

    html! {
        <div class="landing-page">
            <div class="ambience ambience-cyan"></div>
            <div class="ambience ambience-pink"></div>

            <nav class="top-nav">
                <div class="top-nav-inner">
                    <div class="brand">
                        <div class="brand-mark">{"XR"}</div>
                        <span class="brand-name">{"BUTTON"}</span>
                    </div>
                    <div class="top-nav-actions">
                        <button class="nav-link" onclick={emit(&props.on_investors)}>
                            {"Investors"}
                        </button>
                        <div class="tier-badge">
                            <div class={classes!("tier-dot", pro.then_some("active"))}></div>
                            {props.tier.badge_label()}
                        </div>
                    </div>
                </div>
            </nav>

            <main class="hero">
                <div class="hero-alert">{"⚠️ DETECT DEEPFAKES INSTANTLY"}</div>
                <h1 class="hero-title">
                    {"TRUST YOUR"}<br/>
                    <span class="hero-gradient">{"DIGITAL REALITY"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"The ultimate social HUD for the Metaverse. Verify digital likenesses and detect AI-generated anomalies in real-time with enterprise-grade precision."}
                </p>

                <div class="hero-cta-group">
                    <button class="hero-cta primary" onclick={emit(&props.on_launch)}>
                        <span>{"LAUNCH HUD"}</span>
                        <span class="hero-cta-arrow">{"→"}</span>
                    </button>
                    <button class="hero-cta secondary" onclick={emit(&props.on_upgrade)}>
                        {"UPGRADE TO PRO"}
                    </button>
                </div>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class={classes!("feature-card", feature.accent)}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.text}</p>
                        </div>
                    }) }
                </div>
            </main>
        </div>
    }
}
