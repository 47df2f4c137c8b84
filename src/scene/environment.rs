use crate::accel::{Aabb, AabbList};
use crate::sdf::{sdf_box3d, sdf_cone, sdf_cylinder, sdf_plane, sdf_sphere, sdf_torus, union, Shape};
use glam::Vec3;

/// Infinite ground plane at `y = 0` with a checkerboard tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub colors: [Vec3; 2],
    /// Checker cells per world unit.
    pub checker_scale: f32,
    /// Half width of the finite slab used to cull rays against the ground.
    pub extent: f32,
}

impl Default for Ground {
    fn default() -> Self {
        Self {
            colors: [Vec3::new(0.45, 0.62, 0.3), Vec3::new(0.36, 0.52, 0.24)],
            checker_scale: 1.0,
            extent: 40.0,
        }
    }
}

impl Ground {
    pub fn sample(&self, p: Vec3) -> Shape {
        let cell = (p.x * self.checker_scale).floor() + (p.z * self.checker_scale).floor();
        let color = if cell.rem_euclid(2.0) < 1.0 {
            self.colors[0]
        } else {
            self.colors[1]
        };
        Shape::new(sdf_plane(p, Vec3::Y, 0.0), color)
    }

    /// Thin slab under `focus` covering everything the camera can reach.
    pub fn bounds(&self, focus: Vec3) -> Aabb {
        let e = self.extent;
        Aabb::new(
            Vec3::new(focus.x - e, -0.5, focus.z - e),
            Vec3::new(focus.x + e, 0.05, focus.z + e),
        )
    }
}

/// Static decoration placed on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prop {
    /// Trunk with three stacked cones.
    PineTree { position: Vec3 },
    /// Upright torus with a floating gem, on a stone plinth.
    Ring { position: Vec3 },
}

const BARK: Vec3 = Vec3::new(0.4, 0.25, 0.1);
const NEEDLES: [Vec3; 3] = [
    Vec3::new(0.1, 0.4, 0.1),
    Vec3::new(0.15, 0.5, 0.15),
    Vec3::new(0.2, 0.6, 0.2),
];
const STONE: Vec3 = Vec3::new(0.55, 0.55, 0.6);
const BRASS: Vec3 = Vec3::new(0.85, 0.65, 0.25);
const GEM: Vec3 = Vec3::new(0.7, 0.15, 0.4);

impl Prop {
    pub fn sample(&self, p: Vec3) -> Shape {
        match *self {
            Prop::PineTree { position } => {
                let q = p - position;
                let mut shape = Shape::new(sdf_cylinder(q - Vec3::Y, 0.15, 1.0), BARK);
                let layers = [(1.4, 0.8, 0.6), (2.0, 0.6, 0.5), (2.5, 0.4, 0.4)];
                for ((y, radius, half_height), color) in layers.into_iter().zip(NEEDLES) {
                    let cone = sdf_cone(q - Vec3::new(0.0, y, 0.0), radius, half_height);
                    shape = union(shape, Shape::new(cone, color));
                }
                shape
            }
            Prop::Ring { position } => {
                let q = p - position;
                let plinth = Shape::new(sdf_box3d(q - Vec3::Y * 0.25, Vec3::new(0.6, 0.25, 0.6)), STONE);
                // Swizzle so the ring stands in the XY plane.
                let r = q - Vec3::Y * 1.5;
                let ring = Shape::new(sdf_torus(Vec3::new(r.x, r.z, r.y), 0.9, 0.15), BRASS);
                let gem = Shape::new(sdf_sphere(r, 0.3), GEM);
                union(union(plinth, ring), gem)
            }
        }
    }

    pub fn bounds(&self) -> Aabb {
        match *self {
            Prop::PineTree { position } => {
                Aabb::from_center_half_extents(position + Vec3::Y * 1.5, Vec3::new(0.9, 1.6, 0.9))
            }
            Prop::Ring { position } => {
                Aabb::from_center_half_extents(position + Vec3::Y * 1.3, Vec3::new(1.1, 1.3, 0.7))
            }
        }
    }
}

/// Everything in the scene that is not the creature.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub ground: Ground,
    pub props: Vec<Prop>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            ground: Ground::default(),
            props: vec![
                Prop::PineTree {
                    position: Vec3::new(-3.0, 0.0, 2.0),
                },
                Prop::Ring {
                    position: Vec3::new(3.0, 0.0, -2.0),
                },
            ],
        }
    }
}

impl Environment {
    /// Ground only, no props.
    pub fn empty() -> Self {
        Self {
            ground: Ground::default(),
            props: Vec::new(),
        }
    }

    pub fn with_prop(mut self, prop: Prop) -> Self {
        self.props.push(prop);
        self
    }

    pub fn sample(&self, p: Vec3) -> Shape {
        self.props
            .iter()
            .fold(self.ground.sample(p), |acc, prop| union(acc, prop.sample(p)))
    }

    /// Pushes one box per prop and the ground slab around `focus`.
    pub fn push_bounds(&self, focus: Vec3, list: &mut AabbList) {
        for prop in &self.props {
            list.push(prop.bounds());
        }
        list.push(self.ground.bounds(focus));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_is_a_checkerboard() {
        let ground = Ground::default();
        let a = ground.sample(Vec3::new(0.5, 0.0, 0.5));
        let b = ground.sample(Vec3::new(1.5, 0.0, 0.5));
        let c = ground.sample(Vec3::new(-0.5, 0.0, -0.5));
        assert_eq!(a.dist, 0.0);
        assert_ne!(a.color, b.color);
        assert_eq!(a.color, c.color);
    }

    #[test]
    fn prop_surfaces_stay_inside_their_bounds() {
        let env = Environment::default();
        for prop in &env.props {
            let aabb = prop.bounds().padded(0.01);
            let c = aabb.center();
            let h = aabb.half_extents() + Vec3::splat(0.5);
            for i in 0..=10 {
                for j in 0..=10 {
                    for k in 0..=10 {
                        let t = Vec3::new(i as f32, j as f32, k as f32) / 5.0 - Vec3::ONE;
                        let p = c + t * h;
                        if !aabb.contains_point(p) {
                            assert!(prop.sample(p).dist > 0.0, "{prop:?} leaks at {p}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn tree_trunk_and_crown_are_solid() {
        let tree = Prop::PineTree {
            position: Vec3::new(-3.0, 0.0, 2.0),
        };
        let trunk = tree.sample(Vec3::new(-3.0, 0.5, 2.0));
        assert!(trunk.dist < 0.0);
        assert_eq!(trunk.color, BARK);
        assert!(tree.sample(Vec3::new(-3.0, 2.5, 2.0)).dist < 0.0);
    }

    #[test]
    fn bounds_cover_props_and_ground() {
        let env = Environment::default();
        let mut list = AabbList::new();
        env.push_bounds(Vec3::new(5.0, 0.0, 5.0), &mut list);
        assert_eq!(list.len(), 3);
        let slab = list.as_slice()[2];
        assert!(slab.contains_point(Vec3::new(5.0 + 39.0, 0.0, 5.0 - 39.0)));
    }
}
