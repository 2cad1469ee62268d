pub mod match_result;
pub mod player;

pub use match_result::{EventKind, MatchEvent, MatchResult, Side};
pub use player::{PlayerAttributes, Position, RatingGroup};
