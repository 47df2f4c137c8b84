use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    #[error("a chain needs at least one segment")]
    Empty,
    #[error("segment {index} has non-positive length {length}")]
    NonPositiveLength { index: usize, length: f32 },
}

/// Ordered rigid segment lengths, root first.
///
/// Only constructible through validation, so every `Chain` has at least one
/// segment and all lengths are strictly positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub(crate) lengths: Vec<f32>,
}

impl Chain {
    pub fn new(lengths: impl Into<Vec<f32>>) -> Result<Self, ChainError> {
        let lengths = lengths.into();
        if lengths.is_empty() {
            return Err(ChainError::Empty);
        }
        if let Some((index, &length)) = lengths
            .iter()
            .enumerate()
            .find(|(_, l)| !(l.is_finite() && **l > 0.0))
        {
            return Err(ChainError::NonPositiveLength { index, length });
        }
        Ok(Self { lengths })
    }

    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    pub fn segment_count(&self) -> usize {
        self.lengths.len()
    }

    /// Number of points a solve produces: one more than the segment count.
    pub fn joint_count(&self) -> usize {
        self.lengths.len() + 1
    }

    pub fn total_length(&self) -> f32 {
        self.lengths.iter().sum()
    }

    pub fn can_reach(&self, distance: f32) -> bool {
        distance <= self.total_length()
    }
}

#[derive(Debug, Default)]
pub struct ChainBuilder {
    lengths: Vec<f32>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(mut self, length: f32) -> Self {
        self.lengths.push(length);
        self
    }

    /// Appends `count` segments of identical `length`.
    pub fn add_segments(mut self, count: usize, length: f32) -> Self {
        self.lengths.extend(std::iter::repeat(length).take(count));
        self
    }

    pub fn build(self) -> Result<Chain, ChainError> {
        Chain::new(self.lengths)
    }
}
