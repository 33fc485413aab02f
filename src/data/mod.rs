pub mod event;
pub mod item_config;
pub mod item_model;
pub mod matrix_chart_item;

pub use event::{ItemEvent, ItemEventListener, ItemField};
pub use item_config::ItemConfig;
pub use item_model::{ChartItemModel, ChartModelEvent, ChartModelListener};
pub use matrix_chart_item::{MatrixChartItem, MatrixItem};
