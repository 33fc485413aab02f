use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::ListenerList;
use crate::error::ItemResult;

/// Callback notified with the new value after every [`Property::set`].
pub type ValueListener<T> = dyn Fn(&T);

type InvalidationHook = Box<dyn Fn() -> ItemResult<()>>;

/// Observable value slot.
///
/// Cloning yields another handle to the same slot; use [`Property::ptr_eq`]
/// to compare slot identity.
pub struct Property<T> {
    inner: Rc<PropertyInner<T>>,
}

struct PropertyInner<T> {
    value: RefCell<T>,
    on_invalidated: Option<InvalidationHook>,
    listeners: ListenerList<ValueListener<T>>,
}

impl<T: Clone> Property<T> {
    /// Free-standing slot that only notifies its own value listeners.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::build(value, None)
    }

    pub(crate) fn with_invalidation(
        value: T,
        on_invalidated: impl Fn() -> ItemResult<()> + 'static,
    ) -> Self {
        Self::build(value, Some(Box::new(on_invalidated)))
    }

    fn build(value: T, on_invalidated: Option<InvalidationHook>) -> Self {
        Self {
            inner: Rc::new(PropertyInner {
                value: RefCell::new(value),
                on_invalidated,
                listeners: ListenerList::new(),
            }),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Stores `value`, runs the invalidation hook and then notifies value
    /// listeners. Writing an equal value still notifies.
    ///
    /// The first failing callback aborts the remaining delivery; the new value
    /// stays stored.
    pub fn set(&self, value: T) -> ItemResult<()> {
        *self.inner.value.borrow_mut() = value;

        if let Some(hook) = &self.inner.on_invalidated {
            hook()?;
        }

        let listeners = self.inner.listeners.snapshot();
        if listeners.is_empty() {
            return Ok(());
        }
        let current = self.get();
        for listener in listeners.iter() {
            listener(&current);
        }
        Ok(())
    }

    pub fn add_listener(&self, listener: Rc<ValueListener<T>>) -> bool {
        self.inner.listeners.add(listener)
    }

    pub fn remove_listener(&self, listener: &Rc<ValueListener<T>>) -> bool {
        self.inner.listeners.remove(listener)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl<T> Property<T> {
    /// Returns `true` when both handles refer to the same slot.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.inner.value.borrow())
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

/// Field storage that starts as a plain value and is upgraded to a
/// [`Property`] on first request.
pub(crate) struct LazyField<T> {
    storage: RefCell<FieldStorage<T>>,
}

enum FieldStorage<T> {
    Plain(T),
    Tracked(Property<T>),
}

impl<T: Clone> LazyField<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            storage: RefCell::new(FieldStorage::Plain(value)),
        }
    }

    pub(crate) fn get(&self) -> T {
        match &*self.storage.borrow() {
            FieldStorage::Plain(value) => value.clone(),
            FieldStorage::Tracked(property) => property.get(),
        }
    }

    pub(crate) fn is_promoted(&self) -> bool {
        matches!(&*self.storage.borrow(), FieldStorage::Tracked(_))
    }

    /// Overwrites the plain value. Once promoted, the slot and the value are
    /// handed back so the caller can route the write through the slot.
    pub(crate) fn store_or_defer(&self, value: T) -> Option<(Property<T>, T)> {
        match &mut *self.storage.borrow_mut() {
            FieldStorage::Plain(current) => {
                *current = value;
                None
            }
            FieldStorage::Tracked(property) => Some((property.clone(), value)),
        }
    }

    /// Promotes the field on first call, seeding the slot with the plain
    /// value; later calls return the same slot. `make` runs at most once.
    pub(crate) fn promote(&self, make: impl FnOnce(T) -> Property<T>) -> (Property<T>, bool) {
        let mut storage = self.storage.borrow_mut();
        let seed = match &*storage {
            FieldStorage::Tracked(property) => return (property.clone(), false),
            FieldStorage::Plain(value) => value.clone(),
        };
        let property = make(seed);
        *storage = FieldStorage::Tracked(property.clone());
        (property, true)
    }
}
