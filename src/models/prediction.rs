//! Title-chance prediction record.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored prediction.
pub type PredictionId = Uuid;

/// Derived cache entry: a team's championship chance in percent (0..=100).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: PredictionId,
    pub team_id: TeamId,
    pub probability: f64,
}

impl Prediction {
    pub fn new(team_id: TeamId, probability: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            probability,
        }
    }
}
