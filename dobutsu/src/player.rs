use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Orientation, PieceKind};

/// The captured pieces a player may drop back onto the board.
///
/// A kind is only present while its count is positive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reserve {
    bag: BTreeMap<PieceKind, u32>,
}

impl Reserve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: PieceKind) {
        self.add_many(kind, 1);
    }

    /// Adds `count` pieces of one kind at once. Adding zero is a no-op.
    pub fn add_many(&mut self, kind: PieceKind, count: u32) {
        if count == 0 {
            return;
        }
        let held = self.bag.entry(kind).or_insert(0);
        *held = held.saturating_add(count);
    }

    /// Takes one piece of the given kind out of the reserve.
    ///
    /// # Panics
    ///
    /// If there is no piece of that kind in the reserve.
    pub fn remove(&mut self, kind: PieceKind) {
        let count = self
            .bag
            .get_mut(&kind)
            .unwrap_or_else(|| panic!("no {} in the reserve", kind));
        *count -= 1;
        if *count == 0 {
            self.bag.remove(&kind);
        }
    }

    pub fn count(&self, kind: PieceKind) -> u32 {
        self.bag.get(&kind).copied().unwrap_or(0)
    }

    pub fn contains(&self, kind: PieceKind) -> bool {
        self.bag.contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// The number of pieces, counting duplicates.
    pub fn len(&self) -> usize {
        self.bag.values().map(|&count| count as usize).sum()
    }

    /// The distinct kinds in catalog order. Each one is a slot for the
    /// input mapper to address.
    pub fn kinds(&self) -> Vec<PieceKind> {
        self.bag.keys().copied().collect()
    }

    /// The slots in catalog order, with the number of pieces in each.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u32)> + '_ {
        self.bag.iter().map(|(&kind, &count)| (kind, count))
    }
}

impl FromIterator<PieceKind> for Reserve {
    fn from_iter<T: IntoIterator<Item = PieceKind>>(iter: T) -> Self {
        let mut reserve = Reserve::new();
        for kind in iter {
            reserve.add(kind);
        }
        reserve
    }
}

/// One of the two sides of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    orientation: Orientation,
    reserve: Reserve,
}

impl Player {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_reserve(orientation, Reserve::new())
    }

    pub fn with_reserve(orientation: Orientation, reserve: Reserve) -> Self {
        Self {
            orientation,
            reserve,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn reserve(&self) -> &Reserve {
        &self.reserve
    }

    pub fn add_captured(&mut self, kind: PieceKind) {
        self.reserve.add(kind);
    }

    /// See [`Reserve::remove()`].
    pub fn remove_captured(&mut self, kind: PieceKind) {
        self.reserve.remove(kind);
    }

    pub fn reserve_contents(&self) -> Vec<PieceKind> {
        self.reserve.kinds()
    }
}
