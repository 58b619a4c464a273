use std::cell::Cell;

/// Counter that can be bumped through a shared reference.
///
/// Used for reads that only borrow the map (`find`). The map is not
/// internally synchronized, so neither is the cell: it is `!Sync`.
#[repr(transparent)]
#[derive(Debug, Default, Clone)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_through_shared_reference() {
        let cell = MetricsCell::new();
        let shared = &cell;
        shared.incr();
        shared.incr();
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let cell = MetricsCell::new();
        cell.incr();
        let copy = cell.clone();
        copy.incr();
        assert_eq!(cell.get(), 1);
        assert_eq!(copy.get(), 2);
    }
}
