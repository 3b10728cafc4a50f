//! Planner policy knobs.

use crate::models::Area;
use serde::{Deserialize, Serialize};

/// Configuration for a planning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerRules {
    /// Area a fresh registry starts with
    #[serde(default)]
    pub default_area: Area,
    /// Clear start/end points that fall outside a newly set area.
    /// Off by default: endpoints are only checked when they are set.
    #[serde(default)]
    pub revalidate_endpoints: bool,
}

impl Default for PlannerRules {
    fn default() -> Self {
        Self {
            default_area: Area::default(),
            revalidate_endpoints: false,
        }
    }
}
