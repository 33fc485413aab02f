use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ListenerList;
use crate::data::MatrixChartItem;
use crate::error::ItemResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartModelEvent {
    /// Every item should be treated as dirty.
    Refresh,
}

pub trait ChartModelListener {
    fn on_model_event(&self, event: ChartModelEvent) -> ItemResult<()>;
}

impl<F> ChartModelListener for F
where
    F: Fn(ChartModelEvent) -> ItemResult<()>,
{
    fn on_model_event(&self, event: ChartModelEvent) -> ItemResult<()> {
        self(event)
    }
}

/// Collection of items shared with renderers.
///
/// Item events and model refreshes are independent: mutating an item never
/// refreshes the model, and [`ChartItemModel::refresh`] fires no item events.
#[derive(Debug, Default)]
pub struct ChartItemModel {
    items: Vec<MatrixChartItem>,
    listeners: ListenerList<dyn ChartModelListener>,
}

impl ChartItemModel {
    #[must_use]
    pub fn new(items: Vec<MatrixChartItem>) -> Self {
        Self {
            items,
            listeners: ListenerList::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MatrixChartItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: MatrixChartItem) {
        self.items.push(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_model_listener(&self, listener: Rc<dyn ChartModelListener>) -> bool {
        self.listeners.add(listener)
    }

    pub fn remove_model_listener(&self, listener: &Rc<dyn ChartModelListener>) -> bool {
        self.listeners.remove(listener)
    }

    /// Tells model listeners to redraw the whole collection.
    pub fn refresh(&self) -> ItemResult<()> {
        let listeners = self.listeners.snapshot();
        debug!(
            items = self.items.len(),
            listeners = listeners.len(),
            "refresh chart item model"
        );
        for listener in listeners.iter() {
            listener.on_model_event(ChartModelEvent::Refresh)?;
        }
        Ok(())
    }
}
