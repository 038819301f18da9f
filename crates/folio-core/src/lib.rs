pub mod config;
pub mod constants;
pub mod controller;
pub mod counter;
pub mod effects;
pub mod hygiene;
pub mod nav;
pub mod patch;
pub mod reveal;
pub mod schedule;
pub mod typing;

pub use config::ControllerConfig;
pub use controller::{Layout, PageSnapshot, UiController, UiEvent};
pub use patch::{Disposition, Patch, StyleProp, Target};
pub use schedule::{Millis, Scheduler, TimerKind};
