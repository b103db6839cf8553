/// Encoding used for every captured still.
pub const CAPTURE_MIME: &str = "image/jpeg";
pub const JPEG_QUALITY: f64 = 0.8;

const DATA_URL_PREFIXES: [(&str, &str); 3] = [
    ("data:image/jpeg;base64,", "image/jpeg"),
    ("data:image/jpg;base64,", "image/jpeg"),
    ("data:image/png;base64,", "image/png"),
];

/// A single encoded still sampled from the live feed.
///
/// `encoded` is either a `data:` URL as produced by `canvas.toDataURL` or a
/// bare base64 payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedFrame {
    encoded: String,
    width: u32,
    height: u32,
}

impl CapturedFrame {
    pub fn new(encoded: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            encoded: encoded.into(),
            width,
            height,
        }
    }

    /// Base64 payload with any data-URL prefix removed.
    pub fn payload(&self) -> &str {
        split_data_url(&self.encoded).1
    }

    pub fn mime_type(&self) -> &'static str {
        split_data_url(&self.encoded).0
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn split_data_url(encoded: &str) -> (&'static str, &str) {
    DATA_URL_PREFIXES
        .iter()
        .find_map(|(prefix, mime)| encoded.strip_prefix(prefix).map(|rest| (*mime, rest)))
        .unwrap_or((CAPTURE_MIME, encoded))
}

/// Pull-based access to the current camera frame.
#[cfg_attr(test, mockall::automock)]
pub trait FrameSource {
    /// Sample the frame on screen right now, or `None` when nothing is playing.
    fn capture_frame(&self) -> Option<CapturedFrame>;
}
