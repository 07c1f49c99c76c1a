pub mod click;
pub mod pointer;

pub use click::wire_answer_buttons;
pub use pointer::wire_no_button_evasion;
