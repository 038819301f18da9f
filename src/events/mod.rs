pub mod keyboard;
pub mod navigation;
pub mod observe;
pub mod pointer;

pub use keyboard::wire_section_keys;
pub use navigation::{wire_lifecycle, wire_menu, wire_scroll};
pub use observe::{observe_reveals, observe_stats};
pub use pointer::{wire_back_to_top, wire_card_tilt};
