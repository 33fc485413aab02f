//! chart-items: observable data items for charting widgets.
//!
//! Items keep plain field storage and upgrade a field to an observable
//! [`Property`] only when a caller asks for it. Every mutation notifies
//! the item's listeners synchronously, in registration order.

pub mod core;
pub mod data;
pub mod error;
pub mod telemetry;

pub use crate::core::{Color, Property, Symbol};
pub use crate::data::{ItemEvent, ItemEventListener, ItemField, MatrixChartItem, MatrixItem};
pub use crate::error::{ItemError, ItemResult};
