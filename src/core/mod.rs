pub mod confetti;
pub mod constants;
pub mod evasion;
pub mod messages;
pub mod particles;
pub mod scenery;
pub mod state;

pub use confetti::*;
pub use constants::*;
pub use evasion::*;
pub use messages::*;
pub use particles::*;
pub use scenery::*;
pub use state::*;
