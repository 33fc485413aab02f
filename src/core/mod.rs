pub mod color;
pub mod listener_list;
pub mod property;
pub mod symbol;

pub use color::Color;
pub use listener_list::ListenerList;
pub(crate) use property::LazyField;
pub use property::{Property, ValueListener};
pub use symbol::Symbol;
