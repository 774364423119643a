//! Food catalog data contract
//!
//! Request payload, response decoding and the degrade-to-empty loading
//! policy. No HTTP client lives here; sources hand back raw bodies.

pub mod catalog;
pub mod request;
pub mod source;

pub use catalog::{FoodItem, ItemId, parse_catalog};
pub use request::{ChatMessage, ChatRequest, MenuConfig};
pub use source::{FileSource, FoodSource, load_foods};
