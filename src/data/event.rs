use serde::{Deserialize, Serialize};

use crate::data::MatrixChartItem;
use crate::error::ItemResult;

/// Field of a [`MatrixChartItem`] that a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemField {
    X,
    Y,
    Z,
    Name,
    Color,
    Symbol,
}

impl ItemField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Name => "name",
            Self::Color => "color",
            Self::Symbol => "symbol",
        }
    }
}

/// Notification delivered to item listeners after each mutation.
#[derive(Debug, Clone)]
pub struct ItemEvent {
    item: MatrixChartItem,
    field: ItemField,
}

impl ItemEvent {
    #[must_use]
    pub fn new(item: MatrixChartItem, field: ItemField) -> Self {
        Self { item, field }
    }

    /// Handle to the item that changed.
    #[must_use]
    pub fn item(&self) -> &MatrixChartItem {
        &self.item
    }

    #[must_use]
    pub fn field(&self) -> ItemField {
        self.field
    }
}

/// Receives [`ItemEvent`]s. Returning an error stops delivery to the
/// remaining listeners and surfaces from the mutating call.
pub trait ItemEventListener {
    fn on_item_event(&self, event: &ItemEvent) -> ItemResult<()>;
}

impl<F> ItemEventListener for F
where
    F: Fn(&ItemEvent) -> ItemResult<()>,
{
    fn on_item_event(&self, event: &ItemEvent) -> ItemResult<()> {
        self(event)
    }
}
