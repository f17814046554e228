/// Strategy configuration constants.
///
/// This module defines the tuning parameters of the targeting heuristic:
/// how close is close enough to fire, and how far above any real cost the
/// hunt-mode ceiling sits.
pub const ENGAGEMENT_RANGE: i64 = 3; // Cells along the firing axis still considered in range.

/// Added to `width + height` to build the hunt-mode best-cost ceiling.
/// No reachable opponent should ever cost this much.
pub const COST_CEILING_MARGIN: i64 = 4;
