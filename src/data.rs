/// Where the track head is: two integer components per axis, orientation and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pose {
    pub ax: i32,
    pub bx: i32,
    pub ay: i32,
    pub by: i32,
    pub angle: i32,
    pub level: i32,
}

impl Pose {
    pub fn new(ax: i32, bx: i32, ay: i32, by: i32, angle: i32, level: i32) -> Pose {
        Pose {
            ax,
            bx,
            ay,
            by,
            angle,
            level,
        }
    }

    /// Back at the starting point, facing the starting direction, on the ground.
    pub fn is_origin(self) -> bool {
        self == Pose::default()
    }
}

/// Budget of track pieces, either remaining or used depending on the search direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Material {
    pub straight: i32,
    pub turns: i32,
    pub ups: i32,
    pub downs: i32,
    pub pillars: i32,
}

impl Material {
    pub fn new(straight: i32, turns: i32, ups: i32, downs: i32, pillars: i32) -> Material {
        Material {
            straight,
            turns,
            ups,
            downs,
            pillars,
        }
    }
}
