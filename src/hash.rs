use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

use crate::data::{Material, Pose};

// http://www.boost.org/doc/libs/1_35_0/doc/html/boost/hash_combine_id241013.html
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

pub type BuildPackedHasher = BuildHasherDefault<PackedHasher>;
pub type PackedHashSet<T> = HashSet<T, BuildPackedHasher>;
pub type PackedHashMap<K, V> = HashMap<K, V, BuildPackedHasher>;

/// Folds all 11 fields into 32 bits.
///
/// Pose fields start 4 bits apart, material fields at bits 0, 6, 12, 16 and 20.
/// Larger values overlap neighbouring fields and wider ones fall off the top,
/// so different states can end up with the same value. Equality stays exact.
///
/// Arithmetic is 32-bit two's complement: shifts drop high bits,
/// `>>` keeps the sign and additions wrap.
pub(crate) fn packed_hash(pose: &Pose, material: &Material) -> u32 {
    let pos = pose.ax
        ^ (pose.bx << 4)
        ^ (pose.ay << 8)
        ^ (pose.by << 12)
        ^ (pose.angle << 16)
        ^ (pose.level << 20);
    let mat = material.straight
        ^ (material.turns << 6)
        ^ (material.ups << 12)
        ^ (material.downs << 16)
        ^ (material.pillars << 20);

    let mut seed = pos;
    seed ^= mat
        .wrapping_add(GOLDEN_RATIO as i32)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2);
    seed as u32
}

fn combine(seed: u32, value: u32) -> u32 {
    seed ^ value
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hasher which doesn't rehash what `State` already packed.
///
/// After a single `write_u32` on a fresh hasher the low 32 bits of `finish` are exactly
/// that value, so bucket indices match `State::packed_hash` bit for bit. The value is
/// mirrored into the high half since std tables take their tag bits from the top.
/// Anything else written is mixed in with the same combine step.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedHasher {
    hash: u32,
    written: bool,
}

impl PackedHasher {
    fn push(&mut self, value: u32) {
        if self.written {
            self.hash = combine(self.hash, value);
        } else {
            self.hash = value;
            self.written = true;
        }
    }
}

impl Hasher for PackedHasher {
    fn finish(&self) -> u64 {
        (u64::from(self.hash) << 32) | u64::from(self.hash)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(u32::from(byte));
        }
    }

    fn write_u32(&mut self, i: u32) {
        self.push(i);
    }
}
