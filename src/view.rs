//! DOM construction for the stage, the overlays and the proposal card.

use crate::constants::*;
use crate::core::{
    rising_hearts, stage_keyframes, Particle, Perk, ASK_PERKS, CELEBRATION_PERKS,
    CELEBRATION_SIGNOFF, CELEBRATION_SUBTITLE, CELEBRATION_TITLE, GLOW_BLOBS, SPOTLIGHTS,
};
use crate::dom;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

const PAGE_BACKGROUND: &str =
    "linear-gradient(160deg, #1a0a1e 0%, #2d1040 40%, #1e0a2e 70%, #0f0618 100%)";

// Animations not derived from the scenery tables
const WIDGET_KEYFRAMES: &str = "\
@keyframes valentine-rise { from { transform: translateY(0) rotate(0deg); } to { transform: translateY(var(--rise-distance)) rotate(360deg); } }
@keyframes valentine-fall { 0% { transform: translateY(0); opacity: 0; } 50% { opacity: var(--fall-peak); } 100% { transform: translateY(var(--fall-distance)); opacity: 0; } }
@keyframes valentine-pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.3); } }
@keyframes valentine-breathe { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.035); } }
@keyframes valentine-glow { 0%, 100% { box-shadow: 0 4px 18px rgba(236,64,122,0.4); } 50% { box-shadow: 0 6px 34px rgba(236,64,122,0.72); } }
@keyframes valentine-wiggle { 0%, 100% { transform: rotate(0deg); } 33% { transform: rotate(-10deg); } 66% { transform: rotate(10deg); } }
@keyframes valentine-pop { from { transform: scale(0.6); opacity: 0; } to { transform: scale(1); opacity: 1; } }
@keyframes valentine-enter { from { transform: translateY(30px) scale(0.85); opacity: 0; } to { transform: none; opacity: 1; } }
.hidden { display: none !important; }
#valentine-yes:hover { transform: scale(1.18); }
#valentine-yes:active { transform: scale(0.92); }
";

const LAYER_STYLE: &str = "position:absolute;inset:0;pointer-events:none;";

/// Handles to the elements the widget touches after mounting.
pub struct View {
    pub document: web::Document,
    pub message: web::Element,
    pub ask_panel: web::Element,
    pub celebration_panel: web::Element,
    pub sad_rain: web::Element,
    pub yes_button: web::Element,
    pub no_button: web::Element,
    pub confetti_canvas: web::HtmlCanvasElement,
}

impl View {
    pub fn mount(
        document: &web::Document,
        root: &web::Element,
        heart_count: usize,
    ) -> anyhow::Result<Self> {
        _ = root.set_attribute(
            "style",
            &format!(
                "min-height:100vh;position:relative;display:flex;align-items:center;\
                 justify-content:center;overflow:hidden;background:{};",
                PAGE_BACKGROUND
            ),
        );
        root.set_inner_html("");

        let style = dom::element(document, "style", "")?;
        style.set_text_content(Some(&format!("{}\n{}", stage_keyframes(), WIDGET_KEYFRAMES)));
        dom::append(root, &style)?;

        build_stage(document, root)?;
        let confetti_canvas = build_confetti_canvas(document, root)?;
        build_hearts(document, root, &rising_hearts(heart_count))?;

        let sad_rain = dom::element(
            document,
            "div",
            &format!("{}z-index:{};", LAYER_STYLE, Z_SAD_RAIN),
        )?;
        sad_rain.set_id(SAD_RAIN_ID);
        _ = sad_rain.set_attribute("aria-hidden", "true");
        dom::append(root, &sad_rain)?;
        overlay::hide(&sad_rain);

        let card = dom::element(
            document,
            "div",
            &format!(
                "position:relative;text-align:center;z-index:{};width:92%;max-width:700px;\
                 background:rgba(255,255,255,0.9);backdrop-filter:blur(28px);\
                 -webkit-backdrop-filter:blur(28px);border:1px solid rgba(255,255,255,0.55);\
                 border-radius:40px;padding:60px 56px 64px;\
                 box-shadow:0 30px 80px rgba(236,64,122,0.3), 0 4px 24px rgba(0,0,0,0.14);\
                 animation:valentine-enter 0.7s cubic-bezier(0.34,1.56,0.64,1) both;",
                Z_CARD
            ),
        )?;
        dom::append(root, &card)?;

        let ask = build_ask_panel(document, &card)?;
        let celebration_panel = build_celebration_panel(document, &card)?;
        overlay::hide(&celebration_panel);

        Ok(Self {
            document: document.clone(),
            message: ask.message,
            ask_panel: ask.panel,
            celebration_panel,
            sad_rain,
            yes_button: ask.yes,
            no_button: ask.no,
            confetti_canvas,
        })
    }

    pub fn set_message(&self, text: &str) {
        self.message.set_text_content(Some(text));
    }

    pub fn show_celebration(&self) {
        overlay::hide(&self.ask_panel);
        overlay::show(&self.celebration_panel);
    }

    pub fn set_no_offset(&self, dx: f32, dy: f32) {
        dom::set_style(
            &self.no_button,
            "transform",
            &format!("translate({:.2}px, {:.2}px)", dx, dy),
        );
    }
}

fn build_stage(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    let stage = dom::element(document, "div", &format!("{}z-index:{};", LAYER_STYLE, Z_STAGE))?;
    _ = stage.set_attribute("aria-hidden", "true");
    for s in SPOTLIGHTS.iter() {
        dom::append(&stage, &dom::element(document, "div", &s.style())?)?;
    }
    for b in GLOW_BLOBS.iter() {
        dom::append(&stage, &dom::element(document, "div", &b.style())?)?;
    }
    dom::append(root, &stage)
}

fn build_confetti_canvas(
    document: &web::Document,
    root: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = dom::element(
        document,
        "canvas",
        &format!(
            "position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;z-index:{};",
            Z_CONFETTI
        ),
    )?;
    el.set_id(CONFETTI_CANVAS_ID);
    dom::append(root, &el)?;
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    overlay::hide(&canvas);
    Ok(canvas)
}

fn build_hearts(
    document: &web::Document,
    root: &web::Element,
    hearts: &[Particle],
) -> anyhow::Result<()> {
    let layer = dom::element(document, "div", &format!("{}z-index:{};", LAYER_STYLE, Z_HEARTS))?;
    _ = layer.set_attribute("aria-hidden", "true");
    for h in hearts {
        let style = format!(
            "position:absolute;left:{left}%;bottom:{bottom}px;font-size:{size}px;opacity:{op};\
             --rise-distance:calc(-100vh - {travel}px);\
             animation:valentine-rise {dur}s linear {delay}s infinite;",
            left = h.left,
            bottom = HEART_START_BOTTOM_PX,
            size = h.size.unwrap_or(16.0),
            op = HEART_OPACITY,
            travel = HEART_TRAVEL_EXTRA_PX,
            dur = h.duration,
            delay = h.delay,
        );
        dom::append_text(document, &layer, "div", &style, h.glyph)?;
    }
    dom::append(root, &layer)
}

fn build_perks(
    document: &web::Document,
    parent: &web::Element,
    perks: &[Perk],
) -> anyhow::Result<()> {
    let row = dom::element(document, "div", "display:flex;flex-wrap:wrap;justify-content:center;")?;
    for perk in perks {
        dom::append_text(
            document,
            &row,
            "span",
            "display:inline-flex;align-items:center;gap:6px;font-size:0.875rem;font-weight:600;\
             background:#fdf2f8;border:1px solid #fce7f3;color:#be123c;border-radius:9999px;\
             padding:6px 16px;margin:6px;animation:valentine-pop 0.4s ease-out both;",
            &format!("{} {}", perk.emoji, perk.label),
        )?;
    }
    dom::append(parent, &row)
}

struct AskPanel {
    panel: web::Element,
    message: web::Element,
    yes: web::Element,
    no: web::Element,
}

fn build_ask_panel(document: &web::Document, card: &web::Element) -> anyhow::Result<AskPanel> {
    let panel = dom::element(document, "div", "")?;
    panel.set_id(ASK_PANEL_ID);

    dom::append_text(
        document,
        &panel,
        "div",
        "font-size:3.75rem;margin-bottom:12px;animation:valentine-pulse 1.3s ease-in-out infinite;",
        "💝",
    )?;
    let message = dom::append_text(
        document,
        &panel,
        "h1",
        "font-size:1.875rem;font-weight:700;color:#e11d48;line-height:1.375;margin-bottom:8px;\
         font-family:Georgia, serif;animation:valentine-breathe 2s ease-in-out infinite;",
        crate::core::DEFAULT_PROMPT,
    )?;
    message.set_id(MESSAGE_ID);
    dom::append_text(
        document,
        &panel,
        "p",
        "font-size:1.25rem;opacity:0.35;margin-bottom:20px;user-select:none;",
        "· 💖 · 💖 · 💖 ·",
    )?;
    build_perks(document, &panel, &ASK_PERKS)?;

    let buttons = dom::element(
        document,
        "div",
        "display:flex;justify-content:center;align-items:center;gap:24px;margin-top:40px;flex-wrap:wrap;",
    )?;
    let yes = dom::append_text(
        document,
        &buttons,
        "button",
        "color:#fff;font-weight:700;font-size:1.25rem;padding:16px 56px;border-radius:9999px;\
         cursor:pointer;user-select:none;border:none;\
         background:linear-gradient(135deg, #f06292, #ec407a);transition:transform 0.15s;\
         animation:valentine-glow 1.8s ease-in-out infinite;",
        "YES 💖",
    )?;
    yes.set_id(YES_BUTTON_ID);
    let no = dom::append_text(
        document,
        &buttons,
        "button",
        &format!(
            "color:#6b7280;font-weight:600;font-size:1.25rem;padding:16px 44px;border-radius:9999px;\
             cursor:pointer;user-select:none;background:#f5f5f5;border:2px solid #e0e0e0;\
             transition:{};",
            NO_BUTTON_TRANSITION
        ),
        "NO 😶",
    )?;
    no.set_id(NO_BUTTON_ID);
    dom::append(&panel, &buttons)?;
    dom::append(card, &panel)?;

    Ok(AskPanel {
        panel,
        message,
        yes,
        no,
    })
}

fn build_celebration_panel(
    document: &web::Document,
    card: &web::Element,
) -> anyhow::Result<web::Element> {
    let panel = dom::element(
        document,
        "div",
        "animation:valentine-pop 0.6s cubic-bezier(0.34,1.56,0.64,1) both;",
    )?;
    panel.set_id(CELEBRATION_PANEL_ID);

    let wiggle = dom::element(
        document,
        "div",
        "display:flex;justify-content:center;margin-bottom:16px;\
         animation:valentine-wiggle 1.3s ease-in-out 3;",
    )?;
    let img = dom::element(document, "img", "")?;
    _ = img.set_attribute("width", "150");
    _ = img.set_attribute("src", CELEBRATION_GIF_URL);
    _ = img.set_attribute("alt", "");
    dom::append(&wiggle, &img)?;
    dom::append(&panel, &wiggle)?;

    dom::append_text(
        document,
        &panel,
        "h1",
        "font-size:3rem;font-weight:800;color:#e11d48;line-height:1.25;margin-bottom:12px;\
         font-family:Georgia, serif;",
        CELEBRATION_TITLE,
    )?;
    dom::append_text(
        document,
        &panel,
        "p",
        "font-size:1.125rem;color:#fb7185;margin-bottom:24px;",
        CELEBRATION_SUBTITLE,
    )?;
    build_perks(document, &panel, &CELEBRATION_PERKS)?;

    let signoff = dom::element(document, "p", "margin-top:24px;")?;
    let link = dom::append_text(
        document,
        &signoff,
        "a",
        "color:#fef9c3;font-size:1.125rem;padding:8px 24px;background:#f59e0b;\
         border-radius:16px;font-style:italic;text-decoration:none;",
        CELEBRATION_SIGNOFF,
    )?;
    _ = link.set_attribute("href", SIGNOFF_LINK_URL);
    dom::append(&panel, &signoff)?;

    dom::append(card, &panel)?;
    Ok(panel)
}
