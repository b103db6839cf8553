use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};
use yew::prelude::*;

use crate::camera::frame::{CapturedFrame, FrameSource, CAPTURE_MIME, JPEG_QUALITY};
use crate::camera::session::{CameraError, CameraSession};

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

/// Capture capability for one camera feed.
///
/// The owner creates the handle and passes it to [`CameraFeed`], which binds
/// its video element to it. Clones share the same element.
#[derive(Clone, Default, PartialEq)]
pub struct CameraHandle {
    video: NodeRef,
}

impl CameraHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn node_ref(&self) -> NodeRef {
        self.video.clone()
    }
}

impl FrameSource for CameraHandle {
    fn capture_frame(&self) -> Option<CapturedFrame> {
        let video = self.video.cast::<HtmlVideoElement>()?;
        match capture_from(&video) {
            Ok(frame) => frame,
            Err(err) => {
                log::error!("Frame capture failed: {:?}", err);
                None
            }
        }
    }
}

fn capture_from(video: &HtmlVideoElement) -> Result<Option<CapturedFrame>, JsValue> {
    let (width, height) = (video.video_width(), video.video_height());
    if video.ready_state() < HAVE_CURRENT_DATA || width == 0 || height == 0 {
        log::debug!("No video frame available yet");
        return Ok(None);
    }

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return Ok(None),
    };
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = match canvas.get_context("2d")? {
        Some(context) => context.dyn_into()?,
        None => return Ok(None),
    };
    context.draw_image_with_html_video_element(video, 0.0, 0.0)?;

    let encoded =
        canvas.to_data_url_with_type_and_encoder_options(CAPTURE_MIME, &JsValue::from_f64(JPEG_QUALITY))?;
    Ok(Some(CapturedFrame::new(encoded, width, height)))
}

#[derive(Properties, PartialEq)]
pub struct CameraFeedProps {
    pub active: bool,
    pub handle: CameraHandle,
    pub on_error: Callback<String>,
}

#[function_component]
pub fn CameraFeed(props: &CameraFeedProps) -> Html {
    let live = use_state(|| false);

    {
        let video_ref = props.handle.node_ref();
        let on_error = props.on_error.clone();
        let live = live.clone();
        use_effect_with_deps(
            move |active: &bool| {
                let session: Rc<RefCell<Option<CameraSession>>> = Rc::default();
                let released = Rc::new(Cell::new(false));

                if *active {
                    let session = session.clone();
                    let released = released.clone();
                    let video_ref = video_ref.clone();
                    spawn_local(async move {
                        match CameraSession::acquire().await {
                            Ok(mut acquired) => {
                                if released.get() {
                                    log::debug!("Camera stream arrived after deactivation, dropping it");
                                    return;
                                }
                                let video = match video_ref.cast::<HtmlVideoElement>() {
                                    Some(video) => video,
                                    None => return,
                                };
                                acquired.bind(&video);
                                acquired.on_disconnect({
                                    let live = live.clone();
                                    let on_error = on_error.clone();
                                    Callback::from(move |err: CameraError| {
                                        log::warn!("{}", err);
                                        live.set(false);
                                        on_error.emit(err.user_message().to_string());
                                    })
                                });
                                *session.borrow_mut() = Some(acquired);
                                live.set(true);
                            }
                            Err(err) => {
                                log::error!("Camera access denied: {}", err);
                                live.set(false);
                                on_error.emit(err.user_message().to_string());
                            }
                        }
                    });
                } else {
                    live.set(false);
                }

                move || {
                    released.set(true);
                    if session.borrow_mut().take().is_some() {
                        if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                            video.set_src_object(None);
                        }
                    }
                }
            },
            props.active,
        );
    }

    html! {
        <div class="camera-feed">
            if !*live {
                <div class="camera-standby">
                    <p>{"SYSTEM STANDBY"}</p>
                </div>
            }
            <video
                ref={props.handle.node_ref()}
                class={classes!("camera-video", (*live).then_some("live"))}
                autoplay=true
                muted=true
                playsinline=true
            />
            <div class="camera-vignette"></div>
            <div class="camera-ring"></div>
        </div>
    }
}
