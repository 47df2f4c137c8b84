//! Signed distance description of the creature, one part per bone.

use super::config::CreatureConfig;
use super::rig::{Rig, Side};
use crate::accel::Aabb;
use crate::sdf::{
    elongate, sdf_box3d, sdf_capped_torus, sdf_capsule_vertical, sdf_octahedron,
    sdf_rounded_box3d, sdf_sphere, sdf_torus, smooth_min, smooth_union, subtraction, union, Shape,
};
use crate::skeleton::BoneId;
use glam::{Mat4, Vec2, Vec3};

/// `(sin, cos)` of the mouth arc's half aperture, 0.2 rad.
const MOUTH_ARC: Vec2 = Vec2::new(0.198_669_33, 0.980_066_6);

/// Growth of parts past their bounds caused by smooth blending.
const BOUNDS_MARGIN: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub skin: Vec3,
    pub gear: Vec3,
    pub eye: Vec3,
}

/// Shape of a body part, expressed in its bone's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartKind {
    Head,
    Torso { shoulder: Vec3, neck: Vec3 },
    UpperArm { length: f32 },
    Forearm { length: f32 },
    Thigh { length: f32 },
    Shin { length: f32 },
    Foot { ankle_height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPart {
    pub bone: BoneId,
    pub kind: PartKind,
}

impl PartKind {
    /// Returns the skin surface and any hard-edged gear attached to it.
    fn eval(&self, p: Vec3, palette: &Palette) -> (Shape, Shape) {
        match *self {
            PartKind::Head => (head(p, palette), Shape::EMPTY),
            PartKind::Torso { shoulder, neck } => torso(p, shoulder, neck, palette),
            PartKind::UpperArm { length } => (
                Shape::new(sdf_capsule_vertical(p, length, 0.15), palette.skin),
                Shape::EMPTY,
            ),
            PartKind::Forearm { length } => {
                let arm = sdf_capsule_vertical(p, length, 0.13);
                let hand = sdf_sphere(p - Vec3::new(0.0, length, 0.0), 0.17);
                (Shape::new(smooth_min(arm, hand, 0.1), palette.skin), Shape::EMPTY)
            }
            PartKind::Thigh { length } => (limb_block(p, length, 0.2, palette), Shape::EMPTY),
            PartKind::Shin { length } => (limb_block(p, length, 0.17, palette), Shape::EMPTY),
            PartKind::Foot { ankle_height } => {
                let q = p - Vec3::new(0.0, 0.07 - ankle_height, 0.12);
                let d = sdf_rounded_box3d(q, Vec3::new(0.2, 0.07, 0.32), 0.05);
                (Shape::new(d, palette.skin), Shape::EMPTY)
            }
        }
    }

    /// Local bounding sphere as `(centre, radius)`.
    fn bounds(&self) -> (Vec3, f32) {
        match *self {
            PartKind::Head => (Vec3::new(0.0, 0.6, 0.05), 1.25),
            PartKind::Torso { shoulder, neck } => {
                let top = (neck.y + 0.3).max(shoulder.y + 0.3);
                let center = Vec3::new(0.0, top * 0.5, -0.25);
                let reach = Vec2::new(shoulder.x.abs() + 0.25, 0.8).length();
                (center, Vec2::new(reach, top * 0.5).length())
            }
            PartKind::UpperArm { length } => (Vec3::new(0.0, length * 0.5, 0.0), length * 0.5 + 0.15),
            PartKind::Forearm { length } => (Vec3::new(0.0, length * 0.5, 0.0), length * 0.5 + 0.17),
            PartKind::Thigh { length } | PartKind::Shin { length } => {
                (Vec3::new(0.0, length * 0.5, 0.0), Vec2::new(0.3, length * 0.5).length())
            }
            PartKind::Foot { ankle_height } => (Vec3::new(0.0, 0.07 - ankle_height, 0.12), 0.4),
        }
    }
}

fn head(p: Vec3, palette: &Palette) -> Shape {
    let q = p - Vec3::new(0.0, 0.6, 0.0);
    let q = Vec3::new(q.x.abs(), q.y, q.z);

    let mut d = sdf_rounded_box3d(q, Vec3::new(0.75, 0.65, 0.6), 0.45);

    let lip = sdf_capped_torus(q + Vec3::new(0.0, 2.6, -0.6), MOUTH_ARC, 2.5, 0.1);
    d = smooth_min(d, lip, 0.3);
    let frown = sdf_capped_torus(q + Vec3::new(0.0, 2.6, -0.7), MOUTH_ARC, 2.5, 0.05);
    d = subtraction(frown, d);

    // Eye bulges and cheeks.
    d = smooth_min(d, sdf_sphere(q - Vec3::new(0.45, 0.35, 0.2), 0.38), 0.2);
    d = smooth_min(d, sdf_sphere(q - Vec3::new(0.45, -0.25, 0.25), 0.35), 0.2);

    let eye = sdf_sphere(q - Vec3::new(0.45, 0.3, 0.5), 0.18);
    union(Shape::new(d, palette.skin), Shape::new(eye, palette.eye))
}

fn torso(p: Vec3, shoulder: Vec3, neck: Vec3, palette: &Palette) -> (Shape, Shape) {
    let q = Vec3::new(p.x.abs(), p.y, p.z);

    let chest = q - Vec3::new(0.0, 0.8, 0.0);
    let mut d = sdf_octahedron(elongate(chest, Vec3::new(0.2, 0.3, 0.0)), 0.1) - 0.4;
    d = smooth_min(d, sdf_sphere(q - shoulder.abs(), 0.22), 0.1);
    d = smooth_min(d, sdf_capsule_vertical(q - (neck - Vec3::Y * 0.4), 0.5, 0.2), 0.2);

    let pack = sdf_rounded_box3d(q - Vec3::new(0.0, 0.8, -0.75), Vec3::new(0.55, 0.65, 0.3), 0.15);
    let s = q - Vec3::new(0.35, 1.2, -0.2);
    let strap = sdf_torus(Vec3::new(s.y, s.x, s.z), 0.42, 0.04);

    (
        Shape::new(d, palette.skin),
        Shape::new(pack.min(strap), palette.gear),
    )
}

fn limb_block(p: Vec3, length: f32, half_width: f32, palette: &Palette) -> Shape {
    let half = length * 0.5;
    let d = sdf_rounded_box3d(
        p - Vec3::new(0.0, half, 0.0),
        Vec3::new(half_width, half, half_width),
        0.08,
    );
    Shape::new(d, palette.skin)
}

/// Every part of one creature plus how they blend.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureBody {
    pub parts: Vec<BodyPart>,
    pub palette: Palette,
    pub blend_radius: f32,
}

impl CreatureBody {
    pub fn new(config: &CreatureConfig, rig: &Rig) -> Self {
        let [thigh, shin] = config.leg_lengths;
        let [upper_arm, forearm] = config.arm_lengths;

        let mut parts = vec![
            BodyPart {
                bone: rig.head,
                kind: PartKind::Head,
            },
            BodyPart {
                bone: rig.body,
                kind: PartKind::Torso {
                    shoulder: config.shoulder_offset,
                    neck: config.neck_offset,
                },
            },
        ];
        for side in Side::BOTH {
            let arm = rig.arm(side);
            let leg = rig.leg(side);
            parts.extend([
                BodyPart {
                    bone: arm.upper,
                    kind: PartKind::UpperArm { length: upper_arm },
                },
                BodyPart {
                    bone: arm.lower,
                    kind: PartKind::Forearm { length: forearm },
                },
                BodyPart {
                    bone: leg.upper,
                    kind: PartKind::Thigh { length: thigh },
                },
                BodyPart {
                    bone: leg.lower,
                    kind: PartKind::Shin { length: shin },
                },
                BodyPart {
                    bone: rig.foot(side),
                    kind: PartKind::Foot {
                        ankle_height: config.ankle_height,
                    },
                },
            ]);
        }

        Self {
            parts,
            palette: Palette {
                skin: config.skin_color,
                gear: config.backpack_color,
                eye: config.eye_color,
            },
            blend_radius: config.blend_radius,
        }
    }

    /// Evaluates the creature at world point `p`.
    ///
    /// `inverses` holds each bone's world-to-local matrix indexed by bone id.
    /// Parts whose bone has no matrix in `inverses` are skipped. Skin parts are folded with [`smooth_union`]; gear is hard-unioned on
    /// top so its colour never bleeds into the skin.
    pub fn sample(&self, p: Vec3, inverses: &[Mat4]) -> Shape {
        let mut skin = Shape::EMPTY;
        let mut gear = Shape::EMPTY;

        for part in &self.parts {
            let Some(inverse) = inverses.get(part.bone.index()) else {
                continue;
            };
            let local = inverse.transform_point3(p);
            let (s, g) = part.kind.eval(local, &self.palette);
            skin = smooth_union(skin, s, self.blend_radius);
            gear = union(gear, g);
        }

        union(skin, gear)
    }

    /// World-space box enclosing every part, from each bone's local-to-world
    /// matrix. Parts without a matrix are left out.
    pub fn bounds(&self, matrices: &[Mat4]) -> Aabb {
        let mut aabb = Aabb::EMPTY;
        for part in &self.parts {
            let Some(matrix) = matrices.get(part.bone.index()) else {
                continue;
            };
            let (center, radius) = part.kind.bounds();
            let world = matrix.transform_point3(center);
            aabb.expand_sphere(world, radius);
        }
        aabb.padded(BOUNDS_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::Skeleton;

    fn rest_pose() -> (CreatureBody, Skeleton) {
        let config = CreatureConfig::default();
        let (mut skeleton, rig) = Rig::build(&config).unwrap();
        skeleton.set_pose(rig.body, Vec3::new(0.0, config.hip_height, 0.0), glam::Quat::IDENTITY);
        skeleton.compute();
        (CreatureBody::new(&config, &rig), skeleton)
    }

    fn inverses(skeleton: &Skeleton) -> Vec<Mat4> {
        skeleton.bones().iter().map(|b| b.inverse()).collect()
    }

    fn matrices(skeleton: &Skeleton) -> Vec<Mat4> {
        skeleton.bones().iter().map(|b| b.matrix()).collect()
    }

    #[test]
    fn one_part_per_bone() {
        let (body, skeleton) = rest_pose();
        assert_eq!(body.parts.len(), skeleton.len());
    }

    #[test]
    fn torso_centre_is_inside() {
        let (body, skeleton) = rest_pose();
        let inv = inverses(&skeleton);
        let chest = Vec3::new(0.0, 1.45 + 0.8, 0.0);
        assert!(body.sample(chest, &inv).dist < 0.0);
        assert!(body.sample(Vec3::new(0.0, 1.5, 10.0), &inv).dist > 5.0);
    }

    #[test]
    fn gear_keeps_its_colour() {
        let (body, skeleton) = rest_pose();
        let inv = inverses(&skeleton);
        // Just behind the back panel of the pack.
        let p = Vec3::new(0.0, 1.45 + 0.8, -1.04);
        let shape = body.sample(p, &inv);
        assert!(shape.dist < 0.0);
        assert_eq!(shape.color, body.palette.gear);
    }

    #[test]
    fn bounds_enclose_surface_samples() {
        let (body, skeleton) = rest_pose();
        let inv = inverses(&skeleton);
        let aabb = body.bounds(&matrices(&skeleton));

        // Every point outside the box must be outside the creature.
        let mut outside = 0;
        for i in 0..20 {
            for j in 0..20 {
                for k in 0..20 {
                    let p = Vec3::new(
                        -2.0 + i as f32 * 0.2,
                        -0.5 + j as f32 * 0.25,
                        -2.0 + k as f32 * 0.2,
                    );
                    if !aabb.contains_point(p) {
                        outside += 1;
                        assert!(body.sample(p, &inv).dist > 0.0, "surface escapes bounds at {p}");
                    }
                }
            }
        }
        assert!(outside > 0);
    }
}
