pub mod menu;
pub mod play;

pub use menu::MenuMode;
pub use play::PlayMode;
