//! Dot storage: the committed list of points shown on the canvas and in
//! the table.

/// Numeric identifier for a dot, assigned by the store at creation.
pub type DotId = u32;

/// A single point in logical coordinates.
///
/// Ids are unique among live dots and assigned monotonically as
/// `count + 1`; individual dots are never deleted, so ids are never
/// reused within a session (a whole-store clear resets the counter).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dot {
    pub id: DotId,
    pub x: f64,
    pub y: f64,
}

/// Insertion-ordered collection of committed dots.
///
/// The store is exclusively owned by the app; the canvas and the table
/// render from a read-only view of it.
#[derive(Debug, Clone, Default)]
pub struct DotStore {
    dots: Vec<Dot>,
}

impl DotStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Append a new dot at the given logical position and return it.
    /// The id is `count + 1` at the time of creation.
    pub fn add_at(&mut self, x: f64, y: f64) -> Dot {
        let dot = Dot {
            id: self.dots.len() as DotId + 1,
            x,
            y,
        };
        self.dots.push(dot);
        dot
    }

    /// Overwrite the stored dot whose id matches `dot.id`. Returns `true`
    /// if an entry was replaced.
    pub fn commit(&mut self, dot: Dot) -> bool {
        for d in &mut self.dots {
            if d.id == dot.id {
                *d = dot;
                return true;
            }
        }
        false
    }

    pub fn get(&self, id: DotId) -> Option<&Dot> {
        self.dots.iter().find(|d| d.id == id)
    }

    /// All dots in insertion order (table row order).
    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Remove every dot and reset id assignment.
    pub fn clear_all(&mut self) {
        self.dots.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_from_one() {
        let mut store = DotStore::new();
        for i in 1..=5u32 {
            let d = store.add_at(i as f64, 10.0 - i as f64);
            assert_eq!(d.id, i, "ids must be count + 1 with no gaps");
        }
        let ids: Vec<DotId> = store.dots().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn duplicate_positions_are_permitted() {
        let mut store = DotStore::new();
        let a = store.add_at(3.0, 3.0);
        let b = store.add_at(3.0, 3.0);
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn commit_replaces_only_the_matching_id() {
        let mut store = DotStore::new();
        store.add_at(1.0, 1.0);
        store.add_at(2.0, 2.0);

        let moved = Dot {
            id: 1,
            x: 7.5,
            y: 0.25,
        };
        assert!(store.commit(moved));
        assert_eq!(store.get(1), Some(&moved));
        assert_eq!(
            store.get(2),
            Some(&Dot {
                id: 2,
                x: 2.0,
                y: 2.0
            }),
            "committing dot 1 must leave dot 2 untouched"
        );
    }

    #[test]
    fn commit_unknown_id_is_rejected() {
        let mut store = DotStore::new();
        store.add_at(1.0, 1.0);
        assert!(!store.commit(Dot {
            id: 99,
            x: 0.0,
            y: 0.0
        }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_all_resets_id_assignment() {
        let mut store = DotStore::new();
        store.add_at(1.0, 1.0);
        store.add_at(2.0, 2.0);
        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.add_at(4.0, 4.0).id, 1);
    }

    #[test]
    fn dot_serializes_as_a_table_row() {
        let d = Dot {
            id: 3,
            x: 1.5,
            y: 9.0,
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"id":3,"x":1.5,"y":9.0}"#);
    }
}
