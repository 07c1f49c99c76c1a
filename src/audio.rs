use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Preloaded reward clip, played once when the proposal is accepted.
pub struct RewardAudio {
    element: web::HtmlAudioElement,
    src: String,
}

impl RewardAudio {
    pub fn load(src: &str) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow!("HtmlAudioElement({}): {:?}", src, e))?;
        element.set_preload("auto");
        Ok(Self {
            element,
            src: src.to_string(),
        })
    }

    // Playback can be rejected by autoplay policy; that must never block the celebration.
    pub fn play(&self) {
        match self.element.play() {
            Ok(promise) => {
                let src = self.src.clone();
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => log::info!("[audio] playing {}", src),
                        Err(e) => log::warn!("[audio] playback of {} rejected: {:?}", src, e),
                    }
                });
            }
            Err(e) => log::error!("[audio] play() failed: {:?}", e),
        }
    }
}
