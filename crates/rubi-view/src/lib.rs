pub mod popup;
pub mod script;

pub use popup::{PopupView, popup, rewrite_anchors};
pub use script::compile;
