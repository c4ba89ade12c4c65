//! Per-entity suspicion scores
//!
//! Provides [`SuspicionTracker`], an insertion-ordered map from entity name to
//! a [`Score`] in `[0, 100]`, and its descending leaderboard view.
//!
//! Out-of-range scores are clamped rather than rejected; only NaN is refused.

use crate::error::{NotFoundError, Result, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Lowest possible score
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible score
pub const MAX_SCORE: f64 = 100.0;

/// Score assigned when none is given
pub const DEFAULT_SCORE: f64 = 50.0;

/// Suspicion score, clamped to `[0, 100]` with one decimal of precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Clamp and round `value`
    ///
    /// # Errors
    /// Returns [`ValidationError::ScoreNotANumber`] for NaN.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() {
            return Err(ValidationError::ScoreNotANumber);
        }
        let clamped = value.clamp(MIN_SCORE, MAX_SCORE);
        Ok(Self((clamped * 10.0).round() / 10.0))
    }

    /// Underlying value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(DEFAULT_SCORE)
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// Entity name
    pub entity: String,
    /// Current score
    pub score: Score,
}

impl Display for RankedEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entity, self.score)
    }
}

/// Entity → score map
#[derive(Debug, Clone, Default)]
pub struct SuspicionTracker {
    scores: IndexMap<String, Score>,
    default_score: Score,
}

impl SuspicionTracker {
    /// Create empty tracker with the standard default score
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty tracker whose unspecified scores are `default_score`
    ///
    /// # Errors
    /// Returns [`ValidationError::ScoreNotANumber`] for NaN.
    pub fn with_default_score(default_score: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            scores: IndexMap::new(),
            default_score: Score::new(default_score)?,
        })
    }

    /// Create or overwrite the entry for `entity`; returns the stored score
    ///
    /// # Errors
    /// Returns [`ValidationError::ScoreNotANumber`] for NaN. The tracker is
    /// unchanged on error.
    pub fn set(&mut self, entity: impl Into<String>, score: f64) -> Result<Score> {
        let score = Score::new(score)?;
        let entity = entity.into();
        tracing::debug!(%entity, %score, "suspicion set");
        // insert keeps the original position of an existing key
        self.scores.insert(entity, score);
        Ok(score)
    }

    /// Set `entity` to the default score
    pub fn set_default(&mut self, entity: impl Into<String>) -> Score {
        let score = self.default_score;
        self.scores.insert(entity.into(), score);
        score
    }

    /// Delete the entry for `entity`
    ///
    /// # Errors
    /// Returns [`NotFoundError::Suspicion`] if absent.
    pub fn remove(&mut self, entity: &str) -> Result<Score> {
        let score = self
            .scores
            .shift_remove(entity)
            .ok_or_else(|| NotFoundError::Suspicion(entity.to_string()))?;
        tracing::debug!(%entity, "suspicion removed");
        Ok(score)
    }

    /// Current score for `entity`
    #[must_use]
    pub fn get(&self, entity: &str) -> Option<Score> {
        self.scores.get(entity).copied()
    }

    /// Current score, or the default for untracked entities
    #[must_use]
    pub fn score_or_default(&self, entity: &str) -> Score {
        self.get(entity).unwrap_or(self.default_score)
    }

    /// Check if `entity` is tracked
    #[inline]
    #[must_use]
    pub fn contains(&self, entity: &str) -> bool {
        self.scores.contains_key(entity)
    }

    /// All entries by score, highest first; ties keep insertion order
    #[must_use]
    pub fn ranked_view(&self) -> Vec<RankedEntry> {
        let mut rows: Vec<RankedEntry> = self
            .scores
            .iter()
            .map(|(entity, score)| RankedEntry {
                entity: entity.clone(),
                score: *score,
            })
            .collect();
        // stable: equal scores stay in insertion order
        rows.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
        rows
    }

    /// Number of tracked entities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if nothing is tracked
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
