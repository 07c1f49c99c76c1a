use crate::constants::{SAD_PEAK_OPACITY, SAD_START_TOP_PX, SAD_TRAVEL_EXTRA_PX};
use crate::core::Particle;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    // fallback for pages without the CSS class
    dom::set_style(el, "display", "");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    dom::set_style(el, "display", "none");
}

/// Re-create the falling glyphs so their one-shot animations restart, then show the overlay.
pub fn show_sad_rain(document: &web::Document, overlay: &web::Element, particles: &[Particle]) {
    overlay.set_inner_html("");
    for p in particles {
        let style = format!(
            "position:absolute;left:{left}%;top:{top}px;font-size:1.875rem;opacity:0;\
             --fall-distance:calc(100vh + {travel}px);--fall-peak:{peak};\
             animation:valentine-fall {dur}s ease-in {delay}s 1 both;",
            left = p.left,
            top = SAD_START_TOP_PX,
            travel = SAD_TRAVEL_EXTRA_PX,
            peak = SAD_PEAK_OPACITY,
            dur = p.duration,
            delay = p.delay,
        );
        if let Err(e) = dom::append_text(document, overlay, "div", &style, p.glyph) {
            log::error!("[overlay] sad glyph {}: {:?}", p.id, e);
        }
    }
    show(overlay);
}

pub fn hide_sad_rain(overlay: &web::Element) {
    hide(overlay);
    overlay.set_inner_html("");
}
