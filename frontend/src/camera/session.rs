use js_sys::{Object, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};
use yew::Callback;

/// The one message users see for any camera problem.
pub const CAMERA_DENIED_MESSAGE: &str = "Camera access denied. Please enable permissions.";

const IDEAL_WIDTH: u32 = 1280;
const IDEAL_HEIGHT: u32 = 720;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("no usable camera found")]
    Unavailable,
    #[error("media devices are not available in this context")]
    Unsupported,
    #[error("camera disconnected")]
    Disconnected,
    #[error("camera error: {0}")]
    Device(String),
}

impl CameraError {
    pub fn user_message(&self) -> &'static str {
        CAMERA_DENIED_MESSAGE
    }

    /// Map a `DOMException` name from `getUserMedia` onto our variants.
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => Self::PermissionDenied,
            "NotFoundError" | "OverconstrainedError" | "NotReadableError" | "AbortError" => {
                Self::Unavailable
            }
            "TypeError" => Self::Unsupported,
            other => Self::Device(other.to_string()),
        }
    }

    fn from_js(err: JsValue) -> Self {
        let name = Reflect::get(&err, &JsValue::from_str("name"))
            .ok()
            .and_then(|n| n.as_string())
            .unwrap_or_else(|| format!("{:?}", err));
        Self::from_dom_name(&name)
    }
}

/// Owns a live camera stream. Dropping the session stops every track.
pub struct CameraSession {
    stream: MediaStream,
    on_ended: Option<Closure<dyn FnMut()>>,
}

impl CameraSession {
    /// Ask the browser for a user-facing, video-only stream.
    pub async fn acquire() -> Result<Self, CameraError> {
        let window = web_sys::window().ok_or(CameraError::Unsupported)?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| CameraError::Unsupported)?;
        let constraints = video_constraints().map_err(CameraError::from_js)?;
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(CameraError::from_js)?;
        let stream = JsFuture::from(promise).await.map_err(CameraError::from_js)?;

        let session = Self {
            stream: stream.unchecked_into(),
            on_ended: None,
        };
        log::info!("Camera stream acquired ({} track(s))", session.tracks().len());
        Ok(session)
    }

    /// Play the stream in `video`.
    pub fn bind(&self, video: &HtmlVideoElement) {
        video.set_muted(true);
        video.set_src_object(Some(&self.stream));
        // Autoplay is best effort; the element also carries the attribute.
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("Video autoplay rejected: {:?}", err);
                }
            }),
            Err(err) => log::debug!("Video play() failed: {:?}", err),
        }
    }

    /// Report a track ending underneath us, e.g. the device being unplugged.
    pub fn on_disconnect(&mut self, callback: Callback<CameraError>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            callback.emit(CameraError::Disconnected);
        });
        for track in self.tracks() {
            track.set_onended(Some(closure.as_ref().unchecked_ref()));
        }
        self.on_ended = Some(closure);
    }

    fn tracks(&self) -> Vec<MediaStreamTrack> {
        self.stream
            .get_tracks()
            .iter()
            .map(|track| track.unchecked_into::<MediaStreamTrack>())
            .collect()
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        for track in self.tracks() {
            // stop() does not fire `ended`, but detach first anyway so the
            // closure can be freed with us.
            track.set_onended(None);
            track.stop();
        }
        log::info!("Camera stream released");
    }
}

fn video_constraints() -> Result<MediaStreamConstraints, JsValue> {
    let ideal = |value: u32| -> Result<JsValue, JsValue> {
        let hint = Object::new();
        Reflect::set(&hint, &JsValue::from_str("ideal"), &JsValue::from(value))?;
        Ok(hint.into())
    };

    let video = Object::new();
    Reflect::set(&video, &JsValue::from_str("facingMode"), &JsValue::from_str("user"))?;
    Reflect::set(&video, &JsValue::from_str("width"), &ideal(IDEAL_WIDTH)?)?;
    Reflect::set(&video, &JsValue::from_str("height"), &ideal(IDEAL_HEIGHT)?)?;

    let constraints = Object::new();
    Reflect::set(&constraints, &JsValue::from_str("video"), &video)?;
    Reflect::set(&constraints, &JsValue::from_str("audio"), &JsValue::FALSE)?;
    Ok(constraints.unchecked_into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_errors_are_classified() {
        assert_eq!(
            CameraError::from_dom_name("NotAllowedError"),
            CameraError::PermissionDenied
        );
        assert_eq!(
            CameraError::from_dom_name("SecurityError"),
            CameraError::PermissionDenied
        );
    }

    #[test]
    fn missing_or_busy_devices_are_unavailable() {
        for name in ["NotFoundError", "OverconstrainedError", "NotReadableError"] {
            assert_eq!(CameraError::from_dom_name(name), CameraError::Unavailable);
        }
    }

    #[test]
    fn unknown_names_are_kept() {
        assert_eq!(
            CameraError::from_dom_name("WeirdError"),
            CameraError::Device("WeirdError".to_string())
        );
    }

    #[test]
    fn every_error_shows_the_same_message() {
        let errors = [
            CameraError::PermissionDenied,
            CameraError::Unavailable,
            CameraError::Unsupported,
            CameraError::Disconnected,
            CameraError::Device("x".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), CAMERA_DENIED_MESSAGE);
        }
    }
}
