#![cfg(target_arch = "wasm32")]
use crate::config::PageConfig;
use crate::core::RISING_HEART_COUNT;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod view;
mod widget;

fn wire_resize(widget: &std::rc::Rc<widget::Widget>) {
    let w = widget.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        widget::resize(&w);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Find `#valentine-root`, or create it under `<body>` when the host page has none.
fn mount_point(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(constants::ROOT_ID) {
        return Ok(el);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
    let el = dom::element(document, "div", "")?;
    el.set_id(constants::ROOT_ID);
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root = mount_point(&document)?;
    let config = PageConfig::from_element(&root);
    log::info!(
        "[config] base_path={:?} audio={} confetti_pieces={}",
        config.base_path,
        config.audio_url(),
        config.confetti_pieces
    );

    let view = view::View::mount(&document, &root, RISING_HEART_COUNT)?;
    let widget = widget::Widget::new(view, config);

    events::wire_answer_buttons(&widget);
    events::wire_no_button_evasion(&widget);
    wire_resize(&widget);

    log::info!("valentine-web ready");
    Ok(())
}
