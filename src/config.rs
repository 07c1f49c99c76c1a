use crate::constants::{DEFAULT_AUDIO_FILE, DEFAULT_BASE_PATH};
use crate::core::CONFETTI_PIECES;
use web_sys as web;

/// Page-level settings read from `data-*` attributes on the mount element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub base_path: String,
    pub audio_file: String,
    pub confetti_pieces: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            audio_file: DEFAULT_AUDIO_FILE.to_string(),
            confetti_pieces: CONFETTI_PIECES,
        }
    }
}

impl PageConfig {
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(base) = attr("data-base-path") {
            cfg.base_path = base.trim().to_string();
        }
        if let Some(file) = attr("data-audio-src").filter(|s| !s.trim().is_empty()) {
            cfg.audio_file = file.trim().to_string();
        }
        match attr("data-confetti-pieces").map(|s| s.trim().parse::<usize>()) {
            Some(Ok(n)) => cfg.confetti_pieces = n,
            Some(Err(e)) => log::warn!("[config] ignoring data-confetti-pieces: {}", e),
            None => {}
        }
        cfg
    }

    pub fn from_element(el: &web::Element) -> Self {
        Self::from_attrs(|name| el.get_attribute(name))
    }

    pub fn audio_url(&self) -> String {
        asset_url(&self.base_path, &self.audio_file)
    }
}

/// Join a static-export base path and an asset file name with exactly one `/`.
///
/// Absolute URLs are returned untouched.
pub fn asset_url(base_path: &str, file: &str) -> String {
    if file.contains("://") {
        return file.to_string();
    }
    let base = base_path.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    format!("{}/{}", base, file)
}
