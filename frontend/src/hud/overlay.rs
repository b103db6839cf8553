use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::analysis::{AnalysisReport, GeminiClient, Verdict};
use crate::camera::{CameraFeed, CameraHandle};
use crate::hud::controller::{drive_scan, HudController, ScanDisposition, SCAN_PACING_MS};
use crate::session::UserTier;

#[derive(Properties, PartialEq)]
pub struct HudProps {
    pub is_open: bool,
    pub tier: UserTier,
    pub on_close: Callback<()>,
    pub on_upgrade: Callback<()>,
}

fn render_report(report: &AnalysisReport) -> Html {
    let verdict = report.verdict();
    let badge_class = match verdict {
        Verdict::AiGenerated => "verdict-badge danger",
        Verdict::Authentic => "verdict-badge safe",
        Verdict::Unverified => "verdict-badge muted",
    };
    html! {
        <div class="hud-result">
            <div class={badge_class}>
                {verdict.badge()}{" ("}{report.result.confidence_label()}{")"}
            </div>
            <p class="hud-result-description">{report.result.description.clone()}</p>
            <div class="hud-result-details">
                { for report.result.details.iter().map(|detail| html! {
                    <span class="detail-chip">{detail.clone()}</span>
                }) }
            </div>
        </div>
    }
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let hud = use_mut_ref(HudController::default);
    let refresh = use_force_update();
    let camera = use_state(CameraHandle::new);
    let analyzer = use_state(GeminiClient::from_build_env);

    {
        let hud = hud.clone();
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                if *is_open {
                    log::info!("HUD opened");
                    hud.borrow_mut().open();
                } else {
                    hud.borrow_mut().close();
                }
                refresh.force_update();
                || ()
            },
            props.is_open,
        );
    }

    let on_camera_error = {
        let hud = hud.clone();
        let refresh = refresh.clone();
        Callback::from(move |message: String| {
            hud.borrow_mut().camera_failed(message);
            refresh.force_update();
        })
    };

    let on_scan = {
        let hud = hud.clone();
        let refresh = refresh.clone();
        let camera = (*camera).clone();
        let analyzer = (*analyzer).clone();
        let tier = props.tier;
        let on_upgrade = props.on_upgrade.clone();
        Callback::from(move |_: MouseEvent| {
            let hud = hud.clone();
            let refresh = refresh.clone();
            let camera = camera.clone();
            let analyzer = analyzer.clone();
            let on_upgrade = on_upgrade.clone();
            spawn_local(async move {
                let disposition = drive_scan(
                    hud,
                    tier,
                    camera,
                    analyzer,
                    || TimeoutFuture::new(SCAN_PACING_MS),
                    move || refresh.force_update(),
                )
                .await;
                if disposition == ScanDisposition::UpgradeRequired {
                    on_upgrade.emit(());
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let (scanning, report, error) = {
        let state = hud.borrow();
        (state.is_scanning(), state.report().cloned(), state.error())
    };
    let result_view = match (&report, scanning) {
        (Some(report), false) => render_report(report),
        _ => html! {},
    };
    let locked = !props.tier.can_scan();
    let scan_label = if locked {
        "UNLOCK AI SCAN"
    } else if scanning {
        "SCANNING..."
    } else {
        "SCAN TARGET"
    };

    html! {
        <div class="hud-backdrop">
            <div class="hud-frame">
                <div class="hud-ring hud-ring-outer"></div>
                <div class="hud-ring hud-ring-dashed"></div>

                <div class="hud-circle">
                    <CameraFeed
                        active={props.is_open}
                        handle={(*camera).clone()}
                        on_error={on_camera_error}
                    />

                    if scanning {
                        <div class="hud-scanner">
                            <div class="hud-scan-line"></div>
                            <p>{"ANALYZING..."}</p>
                        </div>
                    }

                    { result_view }

                    if locked {
                        <div class="hud-locked">
                            <div class="hud-locked-card">
                                <p class="hud-locked-title">{"PRO FEATURE LOCKED"}</p>
                                <p class="hud-locked-hint">{"Upgrade to unlock AI Detection"}</p>
                            </div>
                        </div>
                    }

                    if let Some(error) = error {
                        <div class="hud-error">
                            <span>{error}</span>
                        </div>
                    }
                </div>

                <div class="hud-controls">
                    <button
                        class={classes!("hud-scan-button", if locked { "locked" } else { "ready" })}
                        onclick={on_scan}
                        disabled={scanning}
                    >
                        {scan_label}
                    </button>
                    <button class="hud-close-button" onclick={on_close} aria-label="Close HUD">
                        {"✕"}
                    </button>
                </div>
            </div>
        </div>
    }
}
