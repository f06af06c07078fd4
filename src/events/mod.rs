pub mod pointer;
pub mod resize;

pub use pointer::{wire_pointer, PointerListeners};
pub use resize::{wire_resize, ResizeListener};
