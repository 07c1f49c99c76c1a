use crate::core::BoundingBox;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn client_box(el: &web::Element) -> BoundingBox {
    let rect = el.get_bounding_client_rect();
    BoundingBox {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
