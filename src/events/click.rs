use crate::core::Event;
use crate::dom;
use crate::widget::{self, Widget};
use std::rc::Rc;

pub fn wire_answer_buttons(widget: &Rc<Widget>) {
    let w = widget.clone();
    dom::add_click_listener(&widget.view.yes_button, move || {
        log::info!("[click] yes");
        widget::dispatch(&w, Event::Accept);
    });

    let w = widget.clone();
    dom::add_click_listener(&widget.view.no_button, move || {
        log::info!("[click] no");
        widget::dispatch(&w, Event::Decline);
    });
}
