use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use thiserror::Error;

use crate::analysis::{AnalysisReport, Analyzer};
use crate::camera::FrameSource;
use crate::session::UserTier;

/// How long the "ANALYZING..." overlay shows before the frame is taken.
pub const SCAN_PACING_MS: u32 = 1_500;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScanError {
    #[error("Could not capture video frame.")]
    NoFrame,
}

/// Proof that a scan was admitted, tied to the HUD session it started in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTicket {
    session: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDecision {
    UpgradeRequired,
    /// HUD closed or a scan already running.
    Ignored,
    Start(ScanTicket),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Settled(Result<AnalysisReport, ScanError>),
}

/// Scan state for the HUD overlay.
///
/// Every open and close starts a new session; results that come back for an
/// older session are dropped.
#[derive(Debug)]
pub struct HudController {
    session: u64,
    open: bool,
    phase: ScanPhase,
    camera_error: Option<String>,
}

impl Default for HudController {
    fn default() -> Self {
        Self {
            session: 0,
            open: false,
            phase: ScanPhase::Idle,
            camera_error: None,
        }
    }
}

impl HudController {
    pub fn open(&mut self) {
        self.reset(true);
    }

    pub fn close(&mut self) {
        self.reset(false);
    }

    fn reset(&mut self, open: bool) {
        self.session += 1;
        self.open = open;
        self.phase = ScanPhase::Idle;
        self.camera_error = None;
    }

    pub fn request_scan(&mut self, tier: UserTier) -> ScanDecision {
        if !tier.can_scan() {
            return ScanDecision::UpgradeRequired;
        }
        if !self.open || self.is_scanning() {
            return ScanDecision::Ignored;
        }
        self.phase = ScanPhase::Scanning;
        self.camera_error = None;
        ScanDecision::Start(ScanTicket {
            session: self.session,
        })
    }

    /// Record the outcome of an admitted scan. Returns `false` when the
    /// ticket belongs to a session that has since ended.
    pub fn settle(&mut self, ticket: ScanTicket, outcome: Result<AnalysisReport, ScanError>) -> bool {
        if ticket.session != self.session || !self.is_scanning() {
            log::debug!("Discarding scan result from HUD session {}", ticket.session);
            return false;
        }
        self.phase = ScanPhase::Settled(outcome);
        true
    }

    pub fn camera_failed(&mut self, message: String) {
        if self.open {
            self.camera_error = Some(message);
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    #[cfg(test)]
    pub fn phase(&self) -> &ScanPhase {
        &self.phase
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            ScanPhase::Settled(Ok(report)) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        match &self.phase {
            ScanPhase::Settled(Err(err)) => Some(err.to_string()),
            _ => self.camera_error.clone(),
        }
    }
}

/// Pace, capture one frame, analyze it.
pub async fn run_scan<C, A, P>(pacing: P, camera: &C, analyzer: &A) -> Result<AnalysisReport, ScanError>
where
    C: FrameSource + ?Sized,
    A: Analyzer + ?Sized,
    P: Future<Output = ()>,
{
    pacing.await;
    let frame = camera.capture_frame().ok_or(ScanError::NoFrame)?;
    Ok(analyzer.analyze(frame).await)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDisposition {
    UpgradeRequired,
    Ignored,
    Settled,
    Discarded,
}

/// Full scan cycle against a shared controller: gate, run, settle.
///
/// `notify` is called whenever the controller changed and the view should
/// re-render.
pub async fn drive_scan<C, A, P, F>(
    hud: Rc<RefCell<HudController>>,
    tier: UserTier,
    camera: C,
    analyzer: A,
    pacing: impl FnOnce() -> P,
    notify: F,
) -> ScanDisposition
where
    C: FrameSource,
    A: Analyzer,
    P: Future<Output = ()>,
    F: Fn(),
{
    let decision = hud.borrow_mut().request_scan(tier);
    let ticket = match decision {
        ScanDecision::UpgradeRequired => return ScanDisposition::UpgradeRequired,
        ScanDecision::Ignored => return ScanDisposition::Ignored,
        ScanDecision::Start(ticket) => ticket,
    };
    notify();

    let outcome = run_scan(pacing(), &camera, &analyzer).await;
    if let Err(err) = &outcome {
        log::warn!("Scan failed: {}", err);
    }

    let settled = hud.borrow_mut().settle(ticket, outcome);
    if settled {
        notify();
        ScanDisposition::Settled
    } else {
        ScanDisposition::Discarded
    }
}
