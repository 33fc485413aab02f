use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{Color, LazyField, ListenerList, Property, Symbol};
use crate::data::{ItemConfig, ItemEvent, ItemEventListener, ItemField};
use crate::error::ItemResult;

/// Read access shared by every item a matrix renderer consumes.
pub trait MatrixItem {
    fn x(&self) -> i32;
    fn y(&self) -> i32;
    fn z(&self) -> f64;
    fn name(&self) -> String;
    fn color(&self) -> Color;
    fn symbol(&self) -> Symbol;
}

/// Mutable chart data item that notifies listeners on every field change.
///
/// Each field is stored as a plain value until its `*_property()` accessor is
/// called. From then on the returned [`Property`] is the only storage for that
/// field, and writes through either the setter or the slot notify listeners
/// exactly once.
///
/// The type is a cheap handle: clones share the same item. It is not `Send`;
/// all access happens on the owning UI thread.
#[derive(Clone)]
pub struct MatrixChartItem {
    inner: Rc<ItemInner>,
}

struct ItemInner {
    listeners: ListenerList<dyn ItemEventListener>,
    x: LazyField<i32>,
    y: LazyField<i32>,
    z: LazyField<f64>,
    name: LazyField<String>,
    color: LazyField<Color>,
    symbol: LazyField<Symbol>,
}

impl MatrixChartItem {
    #[must_use]
    pub fn new(x: i32, y: i32, z: f64, name: impl Into<String>, color: Color) -> Self {
        Self {
            inner: Rc::new(ItemInner {
                listeners: ListenerList::new(),
                x: LazyField::new(x),
                y: LazyField::new(y),
                z: LazyField::new(z),
                name: LazyField::new(name.into()),
                color: LazyField::new(color),
                symbol: LazyField::new(Symbol::None),
            }),
        }
    }

    #[must_use]
    pub fn from_xyz(x: i32, y: i32, z: f64) -> Self {
        Self::new(x, y, z, "", Color::RED)
    }

    #[must_use]
    pub fn with_name(x: i32, y: i32, z: f64, name: impl Into<String>) -> Self {
        Self::new(x, y, z, name, Color::RED)
    }

    #[must_use]
    pub fn from_config(config: ItemConfig) -> Self {
        Self::new(config.x, config.y, config.z, config.name, config.color)
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.inner.x.get()
    }

    pub fn set_x(&self, x: i32) -> ItemResult<()> {
        self.store(&self.inner.x, ItemField::X, x)
    }

    pub fn x_property(&self) -> Property<i32> {
        self.promote(&self.inner.x, ItemField::X)
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.inner.y.get()
    }

    pub fn set_y(&self, y: i32) -> ItemResult<()> {
        self.store(&self.inner.y, ItemField::Y, y)
    }

    pub fn y_property(&self) -> Property<i32> {
        self.promote(&self.inner.y, ItemField::Y)
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.inner.z.get()
    }

    pub fn set_z(&self, z: f64) -> ItemResult<()> {
        self.store(&self.inner.z, ItemField::Z, z)
    }

    pub fn z_property(&self) -> Property<f64> {
        self.promote(&self.inner.z, ItemField::Z)
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.inner.name.get()
    }

    pub fn set_name(&self, name: impl Into<String>) -> ItemResult<()> {
        self.store(&self.inner.name, ItemField::Name, name.into())
    }

    pub fn name_property(&self) -> Property<String> {
        self.promote(&self.inner.name, ItemField::Name)
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.inner.color.get()
    }

    pub fn set_color(&self, color: Color) -> ItemResult<()> {
        self.store(&self.inner.color, ItemField::Color, color)
    }

    pub fn color_property(&self) -> Property<Color> {
        self.promote(&self.inner.color, ItemField::Color)
    }

    /// Always [`Symbol::None`]; matrix items do not draw markers.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        Symbol::None
    }

    /// Ignored: the symbol is fixed to [`Symbol::None`] and no event fires.
    pub fn set_symbol(&self, _symbol: Symbol) -> ItemResult<()> {
        Ok(())
    }

    /// Slot seeded with the stored symbol. Writes to it fire item events but
    /// do not change [`MatrixChartItem::symbol`].
    pub fn symbol_property(&self) -> Property<Symbol> {
        self.promote(&self.inner.symbol, ItemField::Symbol)
    }

    /// Registers `listener` unless it is already registered.
    pub fn add_item_event_listener(&self, listener: Rc<dyn ItemEventListener>) -> bool {
        self.inner.listeners.add(listener)
    }

    pub fn set_on_item_event(&self, listener: Rc<dyn ItemEventListener>) -> bool {
        self.add_item_event_listener(listener)
    }

    pub fn remove_item_event_listener(&self, listener: &Rc<dyn ItemEventListener>) -> bool {
        self.inner.listeners.remove(listener)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Delivers an event for `field` to the listeners registered when the
    /// call starts, in registration order.
    pub fn fire_item_event(&self, field: ItemField) -> ItemResult<()> {
        let listeners = self.inner.listeners.snapshot();
        trace!(
            field = field.name(),
            listeners = listeners.len(),
            "fire item event"
        );
        if listeners.is_empty() {
            return Ok(());
        }

        let event = ItemEvent::new(self.clone(), field);
        for listener in listeners.iter() {
            if let Err(err) = listener.on_item_event(&event) {
                warn!(
                    field = field.name(),
                    error = %err,
                    "item listener failed; skipping remaining listeners"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Returns `true` once the field's `*_property()` accessor has been called.
    #[must_use]
    pub fn is_promoted(&self, field: ItemField) -> bool {
        match field {
            ItemField::X => self.inner.x.is_promoted(),
            ItemField::Y => self.inner.y.is_promoted(),
            ItemField::Z => self.inner.z.is_promoted(),
            ItemField::Name => self.inner.name.is_promoted(),
            ItemField::Color => self.inner.color.is_promoted(),
            ItemField::Symbol => self.inner.symbol.is_promoted(),
        }
    }

    /// Returns `true` when both handles refer to the same item.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    fn store<T: Clone>(&self, slot: &LazyField<T>, field: ItemField, value: T) -> ItemResult<()> {
        match slot.store_or_defer(value) {
            None => self.fire_item_event(field),
            Some((property, value)) => property.set(value),
        }
    }

    fn promote<T: Clone>(&self, slot: &LazyField<T>, field: ItemField) -> Property<T> {
        let (property, created) = slot.promote(|seed| {
            let item = Rc::downgrade(&self.inner);
            Property::with_invalidation(seed, move || match item.upgrade() {
                Some(inner) => MatrixChartItem { inner }.fire_item_event(field),
                None => Ok(()),
            })
        });
        if created {
            debug!(field = field.name(), "promoted item field to observable slot");
        }
        property
    }
}

impl Default for MatrixChartItem {
    fn default() -> Self {
        Self::new(0, 0, 0.0, "", Color::RED)
    }
}

impl From<ItemConfig> for MatrixChartItem {
    fn from(config: ItemConfig) -> Self {
        Self::from_config(config)
    }
}

impl MatrixItem for MatrixChartItem {
    fn x(&self) -> i32 {
        MatrixChartItem::x(self)
    }

    fn y(&self) -> i32 {
        MatrixChartItem::y(self)
    }

    fn z(&self) -> f64 {
        MatrixChartItem::z(self)
    }

    fn name(&self) -> String {
        MatrixChartItem::name(self)
    }

    fn color(&self) -> Color {
        MatrixChartItem::color(self)
    }

    fn symbol(&self) -> Symbol {
        MatrixChartItem::symbol(self)
    }
}

impl fmt::Debug for MatrixChartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixChartItem")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("name", &self.name())
            .field("color", &self.color())
            .field("symbol", &self.symbol())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl fmt::Display for MatrixChartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  \"name\":\"{}\",", self.name())?;
        writeln!(f, "  \"x\":{},", self.x())?;
        writeln!(f, "  \"y\":{},", self.y())?;
        writeln!(f, "  \"z\":{:?},", self.z())?;
        writeln!(f, "  \"color\":\"{}\",", self.color())?;
        writeln!(f, "  \"symbol\":\"{}\"", self.symbol())?;
        write!(f, "}}")
    }
}
