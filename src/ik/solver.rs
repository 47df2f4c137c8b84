use super::chain::Chain;
use glam::Vec3;

/// Relaxation passes per solve. Fixed so the work per call is bounded.
pub const SOLVER_ITERATIONS: usize = 10;

/// Solved joint positions, root first, relative to the chain root.
///
/// Holds `chain.segment_count() + 1` points: index 0 is the root at the
/// origin, the last is the end effector.
#[derive(Debug, Clone, PartialEq)]
pub struct JointSequence {
    points: Vec<Vec3>,
}

impl JointSequence {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn root(&self) -> Vec3 {
        self.points[0]
    }

    pub fn end_effector(&self) -> Vec3 {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Moves every point by `offset`, e.g. from hip-local to world space.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }

    pub fn segment_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.windows(2).map(|w| (w[1] - w[0]).length())
    }
}

pub struct FabrikSolver;

impl FabrikSolver {
    /// Solves `chain` rooted at the origin towards `target`.
    ///
    /// `pull` nudges the initial layout sideways so the chain has a bend
    /// plane to work with. `target` must not be the zero vector.
    pub fn solve(chain: &Chain, target: Vec3, pull: Vec3) -> JointSequence {
        let mut points = Self::seed(chain, target, pull);

        for _ in 0..SOLVER_ITERATIONS {
            Self::backward_pass(&mut points, &chain.lengths, target);
            Self::forward_pass(&mut points, &chain.lengths);
        }

        JointSequence { points }
    }

    fn seed(chain: &Chain, target: Vec3, pull: Vec3) -> Vec<Vec3> {
        let direction = target.normalize_or(Vec3::Y);

        let mut points = Vec::with_capacity(chain.joint_count());
        points.push(Vec3::ZERO);

        let mut acc = Vec3::ZERO;
        for &length in &chain.lengths {
            acc += direction * length;
            points.push(acc + pull);
        }
        points
    }

    fn backward_pass(points: &mut [Vec3], lengths: &[f32], target: Vec3) {
        let n = points.len();

        points[n - 1] = target;

        for i in (1..n - 1).rev() {
            let next_pos = points[i + 1];
            let curr_pos = points[i];
            points[i] = next_pos + direction_or_up(curr_pos - next_pos) * lengths[i];
        }
    }

    fn forward_pass(points: &mut [Vec3], lengths: &[f32]) {
        points[0] = Vec3::ZERO;

        for i in 1..points.len() {
            let prev_pos = points[i - 1];
            let curr_pos = points[i];
            points[i] = prev_pos + direction_or_up(curr_pos - prev_pos) * lengths[i - 1];
        }
    }
}

#[inline]
fn direction_or_up(dir: Vec3) -> Vec3 {
    let len = dir.length();
    if len > 0.0001 {
        dir / len
    } else {
        Vec3::Y
    }
}
