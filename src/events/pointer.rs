use crate::core::{Evasion, ESCAPE_MAGNITUDE_PX};
use crate::dom;
use crate::input;
use crate::widget::Widget;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// The No button jumps away from the pointer on enter and returns home on leave.
pub fn wire_no_button_evasion(widget: &Rc<Widget>) {
    let evasion = Rc::new(RefCell::new(Evasion::new(ESCAPE_MAGNITUDE_PX)));
    let button = widget.view.no_button.clone();

    let w = widget.clone();
    let ev_state = evasion.clone();
    let target = button.clone();
    dom::add_mouse_listener(&button, "mouseenter", move |ev: web::MouseEvent| {
        if w.state().is_accepted() {
            return;
        }
        let pointer = input::pointer_client(&ev);
        let bbox = input::client_box(&target);
        let offset = ev_state.borrow_mut().on_enter(pointer, bbox);
        log::debug!(
            "[pointer] escape from ({:.0},{:.0}) -> ({:.1},{:.1})",
            pointer.x,
            pointer.y,
            offset.x,
            offset.y
        );
        w.view.set_no_offset(offset.x, offset.y);
    });

    let w = widget.clone();
    dom::add_mouse_listener(&button, "mouseleave", move |_ev: web::MouseEvent| {
        let offset = evasion.borrow_mut().on_leave();
        w.view.set_no_offset(offset.x, offset.y);
    });
}
