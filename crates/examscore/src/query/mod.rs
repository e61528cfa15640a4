//! Query parameters and result shapes.
//!
//! Numeric parameters arrive as optional text (query strings, CLI flags)
//! and are parsed permissively: a missing or unparsable value falls back to
//! the documented default instead of being rejected.

mod params;
mod results;

pub use params::{DEFAULT_MAX_SCORE, DEFAULT_MIN_SCORE, DEFAULT_TOP_LIMIT, ScoreRange, parse_limit};
pub use results::{BatchLookup, CouncilStatistics, RangeStatistics, TopScores};
