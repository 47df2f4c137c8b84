use super::config::MarchConfig;
use crate::accel::{AabbList, Ray, SortedHits};
use crate::scene::DistanceField;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchOutcome {
    Hit { distance: f32, color: Vec3 },
    /// Left every box, ran past the maximum distance or out of steps.
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchResult {
    pub outcome: MarchOutcome,
    /// Field samples taken.
    pub steps: u32,
    /// Smallest creature distance seen along the ray, `f32::MAX` if none.
    pub nearest: f32,
}

impl MarchResult {
    pub fn is_hit(&self) -> bool {
        matches!(self.outcome, MarchOutcome::Hit { .. })
    }

    pub fn hit_distance(&self) -> Option<f32> {
        match self.outcome {
            MarchOutcome::Hit { distance, .. } => Some(distance),
            MarchOutcome::Miss => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RayMarcher {
    pub config: MarchConfig,
}

impl RayMarcher {
    pub fn new(config: MarchConfig) -> Self {
        Self { config }
    }

    /// Intersects `ray` with `boxes` and marches the resulting intervals.
    pub fn march_boxes<F>(&self, field: &F, ray: &Ray, boxes: &AabbList) -> MarchResult
    where
        F: DistanceField + ?Sized,
    {
        self.march(field, ray, &boxes.hits(ray))
    }

    /// Sphere traces `field` inside each interval of `hits`, nearest first.
    ///
    /// Each box starts at `max(distance, enter)`, so overlapping intervals
    /// never move the ray backwards. The step budget is shared by all boxes
    /// and running out of it is a miss.
    pub fn march<F>(&self, field: &F, ray: &Ray, hits: &SortedHits) -> MarchResult
    where
        F: DistanceField + ?Sized,
    {
        let MarchConfig {
            max_steps,
            max_distance,
            surface_threshold,
        } = self.config;

        let mut steps = 0;
        let mut nearest = f32::MAX;
        let mut distance: f32 = 0.0;

        for hit in hits.as_slice() {
            distance = distance.max(hit.enter);

            while steps < max_steps && distance < max_distance {
                if distance >= hit.exit {
                    break;
                }

                let shape = field.sample_tracked(ray.at(distance), &mut nearest);
                steps += 1;

                if shape.dist < surface_threshold {
                    return MarchResult {
                        outcome: MarchOutcome::Hit {
                            distance,
                            color: shape.color,
                        },
                        steps,
                        nearest,
                    };
                }
                distance += shape.dist;
            }

            if steps >= max_steps || distance >= max_distance {
                break;
            }
        }

        MarchResult {
            outcome: MarchOutcome::Miss,
            steps,
            nearest,
        }
    }
}
