pub mod keys;
pub mod normalize;
pub mod query;
pub mod raw;

pub use normalize::{normalize, normalize_with, NormalizeOptions};
pub use query::{PlayerStatus, Query, RepeatType, TrackInfo};
pub use raw::RawPlayerState;
