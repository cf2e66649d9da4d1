use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::str::FromStr;

use crate::data::{Material, Pose};
use crate::hash;

const FIELDS: usize = 11;

/// One point in the state space.
///
/// Equality compares all 11 fields as they are, `angle` is not taken modulo anything.
/// There are no mutators, successors are built as new values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct State {
    pose: Pose,
    material: Material,
}

impl State {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ax: i32,
        bx: i32,
        ay: i32,
        by: i32,
        angle: i32,
        level: i32,
        straight: i32,
        turns: i32,
        ups: i32,
        downs: i32,
        pillars: i32,
    ) -> State {
        State {
            pose: Pose::new(ax, bx, ay, by, angle, level),
            material: Material::new(straight, turns, ups, downs, pillars),
        }
    }

    pub fn from_parts(pose: Pose, material: Material) -> State {
        State { pose, material }
    }

    /// Starting point of a closed track with the given pieces.
    pub fn with_material(material: Material) -> State {
        State::from_parts(Pose::default(), material)
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn ax(&self) -> i32 {
        self.pose.ax
    }

    pub fn bx(&self) -> i32 {
        self.pose.bx
    }

    pub fn ay(&self) -> i32 {
        self.pose.ay
    }

    pub fn by(&self) -> i32 {
        self.pose.by
    }

    pub fn angle(&self) -> i32 {
        self.pose.angle
    }

    pub fn level(&self) -> i32 {
        self.pose.level
    }

    pub fn straight(&self) -> i32 {
        self.material.straight
    }

    pub fn turns(&self) -> i32 {
        self.material.turns
    }

    pub fn ups(&self) -> i32 {
        self.material.ups
    }

    pub fn downs(&self) -> i32 {
        self.material.downs
    }

    pub fn pillars(&self) -> i32 {
        self.material.pillars
    }

    /// Largest absolute value among the five material counters.
    ///
    /// `i32::MIN` counts as `i32::MAX`.
    pub fn distance_from_origin(&self) -> i32 {
        let m = &self.material;
        [m.straight, m.turns, m.ups, m.downs, m.pillars]
            .iter()
            .map(|c| c.saturating_abs())
            .max()
            .unwrap_or(0)
    }

    /// Sum of straight, turns, ups and downs - pillars are not part of it. Wraps on overflow.
    pub fn available_distance(&self) -> i32 {
        let m = &self.material;
        m.straight
            .wrapping_add(m.turns)
            .wrapping_add(m.ups)
            .wrapping_add(m.downs)
    }

    /// The value `Hash` feeds to the hasher, see `hash::PackedHasher`.
    pub fn packed_hash(&self) -> u32 {
        hash::packed_hash(&self.pose, &self.material)
    }

    pub fn to_array(&self) -> [i32; FIELDS] {
        let (p, m) = (&self.pose, &self.material);
        [
            p.ax, p.bx, p.ay, p.by, p.angle, p.level,
            m.straight, m.turns, m.ups, m.downs, m.pillars,
        ]
    }
}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.packed_hash());
    }
}

impl From<[i32; FIELDS]> for State {
    fn from(f: [i32; FIELDS]) -> Self {
        State::new(
            f[0], f[1], f[2], f[3], f[4], f[5], f[6], f[7], f[8], f[9], f[10],
        )
    }
}

impl From<State> for [i32; FIELDS] {
    fn from(state: State) -> Self {
        state.to_array()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = &self.pose;
        let m = &self.material;
        write!(
            f,
            "({}, {}, {}, {}, {}, {}; {}, {}, {}, {}, {})",
            p.ax, p.bx, p.ay, p.by, p.angle, p.level,
            m.straight, m.turns, m.ups, m.downs, m.pillars
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStateErr {
    FieldCount(usize),
    Field(usize, ParseIntError),
}

impl Display for ParseStateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseStateErr::FieldCount(cnt) => {
                write!(f, "Expected {} fields, found {}", FIELDS, cnt)
            }
            ParseStateErr::Field(index, ref err) => {
                write!(f, "Invalid field at index {}: {}", index, err)
            }
        }
    }
}

impl Error for ParseStateErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ParseStateErr::FieldCount(_) => None,
            ParseStateErr::Field(_, ref err) => Some(err),
        }
    }
}

impl FromStr for State {
    type Err = ParseStateErr;

    /// Accepts what `Display` prints. Parentheses are optional,
    /// fields can be separated by `,` or `;`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.trim_start_matches('(').trim_end_matches(')');

        let parts: Vec<&str> = s.split(|c: char| c == ',' || c == ';').map(str::trim).collect();
        if parts.len() != FIELDS {
            return Err(ParseStateErr::FieldCount(parts.len()));
        }

        let mut fields = [0; FIELDS];
        for (i, part) in parts.iter().enumerate() {
            fields[i] = part.parse().map_err(|err| ParseStateErr::Field(i, err))?;
        }
        Ok(State::from(fields))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    use super::*;

    fn std_hash(state: &State) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    fn sample() -> State {
        State::new(1, 2, 3, 4, 5, 6, -5, 2, 0, 3, -7)
    }

    #[test]
    fn default_is_zero() {
        let state = State::default();
        assert_eq!(state.to_array(), [0; 11]);
        assert_eq!(state.distance_from_origin(), 0);
        assert_eq!(state.available_distance(), 0);
        assert!(state.pose().is_origin());
        assert_eq!(state, State::new(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn fields_stored_verbatim() {
        let state = State::new(1, -2, 3, -4, 13, -1, 100, -200, 300, -400, 500);
        assert_eq!(state.ax(), 1);
        assert_eq!(state.bx(), -2);
        assert_eq!(state.ay(), 3);
        assert_eq!(state.by(), -4);
        assert_eq!(state.angle(), 13); // not normalized
        assert_eq!(state.level(), -1);
        assert_eq!(state.straight(), 100);
        assert_eq!(state.turns(), -200);
        assert_eq!(state.ups(), 300);
        assert_eq!(state.downs(), -400);
        assert_eq!(state.pillars(), 500);
    }

    #[test]
    fn distance_from_origin() {
        assert_eq!(sample().distance_from_origin(), 7);
        let state = State::new(0, 0, 0, 0, 0, 0, 3, -9, 1, 0, 2);
        assert_eq!(state.distance_from_origin(), 9);
        let state = State::new(0, 0, 0, 0, 0, 0, 0, 0, 0, i32::min_value(), 0);
        assert_eq!(state.distance_from_origin(), i32::max_value());
    }

    #[test]
    fn available_distance_ignores_pillars() {
        assert_eq!(sample().available_distance(), 0);
        let state = State::new(0, 0, 0, 0, 0, 0, 4, 12, 2, 2, 4);
        assert_eq!(state.available_distance(), 20);
        let state = State::new(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1000);
        assert_eq!(state.available_distance(), 0);
    }

    #[test]
    fn pose_does_not_affect_metrics() {
        let state = State::new(9, 9, 9, 9, 9, 9, -5, 2, 0, 3, -7);
        assert_eq!(state.distance_from_origin(), sample().distance_from_origin());
        assert_eq!(state.available_distance(), sample().available_distance());
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = sample();
        let b = State::from(a.to_array());
        let c = State::new(1, 2, 3, 4, 5, 6, -5, 2, 0, 3, -6);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn swapping_any_two_fields_breaks_equality() {
        let fields: [i32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let state = State::from(fields);
        for i in 0..11 {
            for j in (i + 1)..11 {
                let mut swapped = fields;
                swapped.swap(i, j);
                assert_ne!(state, State::from(swapped), "swapped {} and {}", i, j);
            }
        }
    }

    #[test]
    fn equal_states_hash_equal() {
        let a = sample();
        let b = State::from_parts(a.pose(), a.material());
        assert_eq!(a.packed_hash(), b.packed_hash());
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn hash_is_deterministic() {
        let state = sample();
        assert_eq!(state.packed_hash(), state.packed_hash());
        assert_eq!(State::default().packed_hash(), 0x9e37_79b9);
        assert_eq!(
            State::new(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11).packed_hash(),
            0xb839_67e9
        );
    }

    #[test]
    fn colliding_states_stay_distinct() {
        let a = State::new(16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        let b = State::new(0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        assert_eq!(a.packed_hash(), b.packed_hash());
        assert_ne!(a, b);

        let mut set = HashSet::new();
        assert!(set.insert(a));
        assert!(set.insert(b));
        assert!(!set.insert(a));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn with_material_starts_at_origin() {
        let material = Material::new(4, 12, 2, 2, 4);
        let state = State::with_material(material);
        assert!(state.pose().is_origin());
        assert_eq!(state.material(), material);
        assert_eq!(state, State::new(0, 0, 0, 0, 0, 0, 4, 12, 2, 2, 4));
    }

    #[test]
    fn array_conversions() {
        let fields = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let state = State::from(fields);
        assert_eq!(state.pose(), Pose::new(1, 2, 3, 4, 5, 6));
        assert_eq!(state.material(), Material::new(7, 8, 9, 10, 11));
        let back: [i32; 11] = state.into();
        assert_eq!(back, fields);
    }

    #[test]
    fn ordering_follows_field_order() {
        let lower = State::new(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100);
        let higher = State::new(1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        assert!(lower < higher);
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "(1, 2, 3, 4, 5, 6; -5, 2, 0, 3, -7)"
        );
    }

    #[test]
    fn parse() {
        assert_eq!("(1, 2, 3, 4, 5, 6; -5, 2, 0, 3, -7)".parse::<State>(), Ok(sample()));
        assert_eq!("1,2,3,4,5,6,-5,2,0,3,-7".parse::<State>(), Ok(sample()));
        assert_eq!(" ( 0;0;0;0;0;0;0;0;0;0;0 ) ".parse::<State>(), Ok(State::default()));
        assert_eq!(sample().to_string().parse::<State>(), Ok(sample()));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "1, 2, 3".parse::<State>(),
            Err(ParseStateErr::FieldCount(3))
        );
        match "1, 2, 3, 4, x, 6, 7, 8, 9, 10, 11".parse::<State>() {
            Err(ParseStateErr::Field(4, _)) => {}
            other => panic!("unexpected: {:?}", other),
        }
        let err = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ".parse::<State>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid field at index 10: cannot parse integer from empty string");
        assert!(err.source().is_some());
        assert_eq!(
            ParseStateErr::FieldCount(2).to_string(),
            "Expected 11 fields, found 2"
        );
    }
}
