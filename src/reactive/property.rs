use parking_lot::RwLock;

/// Externally owned mutable value slot.
///
/// The owner shares it as `Arc<PropertyCell<T>>` and observes the current
/// value elsewhere; a bound motion overwrites the slot on every produced
/// value. No history is kept.
#[derive(Debug, Default)]
pub struct PropertyCell<T> {
    value: RwLock<T>,
}

impl<T> PropertyCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    /// Overwrites the current value.
    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone> PropertyCell<T> {
    /// Clones the current value out of the slot.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}
