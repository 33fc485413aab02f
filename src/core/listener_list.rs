use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Ordered, duplicate-free set of shared listeners.
///
/// Writers copy on write: a traversal started from [`ListenerList::snapshot`]
/// keeps iterating its own view even when listeners are added or removed
/// from inside a callback.
pub struct ListenerList<L: ?Sized> {
    entries: RefCell<Rc<Vec<Rc<L>>>>,
}

impl<L: ?Sized> ListenerList<L> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Rc::new(Vec::new())),
        }
    }

    /// Registers `listener` unless the same allocation is already present.
    /// Returns `true` when the listener was added.
    pub fn add(&self, listener: Rc<L>) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.iter().any(|entry| same_listener(entry, &listener)) {
            return false;
        }
        Rc::make_mut(&mut entries).push(listener);
        true
    }

    /// Removes `listener` if present. Returns `true` when removed.
    pub fn remove(&self, listener: &Rc<L>) -> bool {
        let mut entries = self.entries.borrow_mut();
        let Some(position) = entries
            .iter()
            .position(|entry| same_listener(entry, listener))
        else {
            return false;
        };
        Rc::make_mut(&mut entries).remove(position);
        true
    }

    pub fn clear(&self) {
        *self.entries.borrow_mut() = Rc::new(Vec::new());
    }

    #[must_use]
    pub fn contains(&self, listener: &Rc<L>) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|entry| same_listener(entry, listener))
    }

    /// Stable view of the listeners registered right now, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Rc<Vec<Rc<L>>> {
        Rc::clone(&self.entries.borrow())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerList<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.len())
            .finish()
    }
}

fn same_listener<L: ?Sized>(a: &Rc<L>, b: &Rc<L>) -> bool {
    // Address only; vtable pointers of the same type may differ across codegen units.
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
