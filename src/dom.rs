use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_mouse_listener(
    el: &web::Element,
    event: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>
    );
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Create `<tag style="...">` without attaching it.
pub fn element(document: &web::Document, tag: &str, style: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    if !style.is_empty() {
        _ = el.set_attribute("style", style);
    }
    Ok(el)
}

/// Create an element, set its text and append it to `parent`.
pub fn append_text(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    style: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let el = element(document, tag, style)?;
    el.set_text_content(Some(text));
    append(parent, &el)?;
    Ok(el)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

/// Set a single inline style property, ignoring failures.
#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}
