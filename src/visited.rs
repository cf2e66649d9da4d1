use std::collections::{hash_set, BTreeMap};
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;

use fnv::FnvHashSet;
use log::{debug, info, trace};
use separator::Separatable;

use crate::config::Hashing;
use crate::hash::PackedHashSet;
use crate::state::State;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created: i32,
    duplicates: i32,
    collisions: i32,
    unique_by_distance: BTreeMap<i32, i32>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created
    }

    pub fn total_unique(&self) -> i32 {
        self.unique_by_distance.values().sum::<i32>()
    }

    pub fn total_duplicates(&self) -> i32 {
        self.duplicates
    }

    /// New states whose packed hash was already taken by a different state.
    pub fn total_collisions(&self) -> i32 {
        self.collisions
    }

    pub fn unique_at_distance(&self, distance: i32) -> i32 {
        self.unique_by_distance.get(&distance).cloned().unwrap_or(0)
    }

    /// Largest `distance_from_origin` among the unique states.
    pub fn max_distance(&self) -> Option<i32> {
        self.unique_by_distance.keys().next_back().cloned()
    }

    fn add_created(&mut self) {
        self.created += 1;
    }

    fn add_duplicate(&mut self) {
        self.duplicates += 1;
    }

    fn add_collision(&mut self) {
        self.collisions += 1;
    }

    /// Returns true if this is the first state at its distance.
    fn add_unique(&mut self, state: &State) -> bool {
        let cnt = self
            .unique_by_distance
            .entry(state.distance_from_origin())
            .or_insert(0);
        *cnt += 1;
        *cnt == 1
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "unique by distance: {:?}", self.unique_by_distance)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "total collisions: {}", self.total_collisions().separated_string())?;
        writeln!(f, "total unique: {}", self.total_unique().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Unique states total: {}", self.total_unique().separated_string())?;
        writeln!(f, "Duplicates total: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "Packed hash collisions total: {}", self.total_collisions().separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{}", "Distance", "Unique")?;
        for (&distance, &cnt) in &self.unique_by_distance {
            let distance = format!("{}:", distance);
            writeln!(f, "{:<15}{}", distance, cnt.separated_string())?;
        }
        Ok(())
    }
}

#[derive(Clone)]
enum Set {
    Packed(PackedHashSet<State>),
    Fnv(FnvHashSet<State>),
}

/// Closed list - every state inserted so far, compared by full equality.
///
/// Also remembers which packed hashes are taken to count collisions.
#[derive(Clone)]
pub struct Visited {
    states: Set,
    taken_hashes: FnvHashSet<u32>,
    stats: Stats,
}

impl Visited {
    pub fn new() -> Self {
        Visited::with_hashing(Hashing::default())
    }

    pub fn with_hashing(hashing: Hashing) -> Self {
        let states = match hashing {
            Hashing::Packed => Set::Packed(PackedHashSet::default()),
            Hashing::Fnv => Set::Fnv(FnvHashSet::default()),
        };
        Visited {
            states,
            taken_hashes: FnvHashSet::default(),
            stats: Stats::new(),
        }
    }

    pub fn hashing(&self) -> Hashing {
        match self.states {
            Set::Packed(_) => Hashing::Packed,
            Set::Fnv(_) => Hashing::Fnv,
        }
    }

    /// Returns true if the state wasn't there before.
    pub fn insert(&mut self, state: State) -> bool {
        self.stats.add_created();

        let inserted = match self.states {
            Set::Packed(ref mut set) => set.insert(state),
            Set::Fnv(ref mut set) => set.insert(state),
        };
        if !inserted {
            self.stats.add_duplicate();
            return false;
        }

        let hash = state.packed_hash();
        if !self.taken_hashes.insert(hash) {
            trace!("Packed hash {:#010x} collision: {}", hash, state);
            self.stats.add_collision();
        }
        if self.stats.add_unique(&state) {
            debug!("Reached new distance: {}", state.distance_from_origin());
        }
        true
    }

    pub fn contains(&self, state: &State) -> bool {
        match self.states {
            Set::Packed(ref set) => set.contains(state),
            Set::Fnv(ref set) => set.contains(state),
        }
    }

    pub fn len(&self) -> usize {
        match self.states {
            Set::Packed(ref set) => set.len(),
            Set::Fnv(ref set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> hash_set::Iter<'_, State> {
        match self.states {
            Set::Packed(ref set) => set.iter(),
            Set::Fnv(ref set) => set.iter(),
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn log_stats(&self) {
        info!("Visited {} states using {} hashing", self.len(), self.hashing());
        info!("{}", self.stats);
    }
}

impl Default for Visited {
    fn default() -> Self {
        Visited::new()
    }
}

impl Debug for Visited {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} hashing, {} states", self.hashing(), self.len())?;
        write!(f, "{:?}", self.stats)
    }
}

impl Extend<State> for Visited {
    fn extend<I: IntoIterator<Item = State>>(&mut self, iter: I) {
        for state in iter {
            self.insert(state);
        }
    }
}

impl FromIterator<State> for Visited {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        let mut visited = Visited::new();
        visited.extend(iter);
        visited
    }
}

impl<'a> IntoIterator for &'a Visited {
    type Item = &'a State;
    type IntoIter = hash_set::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
