//! Ownership of disposable observers.
//!
//! Every subscription a mount creates is registered here. Disposal drops the
//! handles in registration order; handle types release their underlying
//! resource in `Drop`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u32);

pub struct ObserverRegistry<T> {
    next_id: u32,
    entries: Vec<(ObserverId, &'static str, T)>,
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> ObserverRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `handle`; `kind` labels it for logging and counts.
    pub fn register(&mut self, kind: &'static str, handle: T) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, kind, handle));
        id
    }

    pub fn get(&self, id: ObserverId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(i, _, _)| *i == id)
            .map(|(_, _, h)| h)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObserverId, &'static str, &mut T)> {
        self.entries.iter_mut().map(|(i, k, h)| (*i, *k, h))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.entries.iter().filter(|(_, k, _)| *k == kind).count()
    }

    pub fn dispose(&mut self, id: ObserverId) -> bool {
        match self.entries.iter().position(|(i, _, _)| *i == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop every handle; returns how many were disposed.
    pub fn dispose_all(&mut self) -> usize {
        let n = self.entries.len();
        // Drain front to back so handles release in registration order
        for entry in self.entries.drain(..) {
            drop(entry);
        }
        n
    }
}
