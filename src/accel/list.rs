use super::aabb::{Aabb, AabbHit};
use super::ray::Ray;

/// Maximum number of scene clusters tracked per frame.
pub const AABB_CAPACITY: usize = 32;

/// Fixed-capacity box list; pushes past capacity are dropped.
#[derive(Debug, Clone, Copy)]
pub struct AabbList {
    boxes: [Aabb; AABB_CAPACITY],
    len: usize,
}

impl Default for AabbList {
    fn default() -> Self {
        Self::new()
    }
}

impl AabbList {
    pub fn new() -> Self {
        Self {
            boxes: [Aabb::EMPTY; AABB_CAPACITY],
            len: 0,
        }
    }

    /// Returns false when the list is full and `aabb` was dropped.
    ///
    /// Dropping a cluster only loses culling for it, so this is not an error.
    pub fn push(&mut self, aabb: Aabb) -> bool {
        if self.len >= AABB_CAPACITY {
            log::debug!("aabb list full ({} boxes), dropping cluster", AABB_CAPACITY);
            return false;
        }
        self.boxes[self.len] = aabb;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Aabb] {
        &self.boxes[..self.len]
    }

    /// Valid intersections with `ray`, ordered by entry distance.
    pub fn hits(&self, ray: &Ray) -> SortedHits {
        let mut out = SortedHits::default();
        for aabb in self.as_slice() {
            let hit = aabb.intersect(ray);
            if hit.is_valid() {
                out.hits[out.len] = hit;
                out.len += 1;
            }
        }
        sort_hits(&mut out.hits[..out.len]);
        out
    }
}

/// Stack-allocated, entry-sorted hit list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedHits {
    hits: [AabbHit; AABB_CAPACITY],
    len: usize,
}

impl SortedHits {
    pub fn as_slice(&self) -> &[AabbHit] {
        &self.hits[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Bubble sort by ascending `enter`. Inputs are capped at `AABB_CAPACITY`.
pub fn sort_hits(hits: &mut [AabbHit]) {
    let n = hits.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            if hits[j].enter > hits[j + 1].enter {
                hits.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
