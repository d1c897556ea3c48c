use serde::{Deserialize, Serialize};

/// Neutral like status, used when the host reports none.
pub const LIKE_STATUS_INDIFFERENT: &str = "INDIFFERENT";
pub const LIKE_STATUS_LIKE: &str = "LIKE";
pub const LIKE_STATUS_DISLIKE: &str = "DISLIKE";

/// Response body of `GET /query`.
///
/// This is the wire contract consumed by third-party widgets. Field names and
/// types must not change without a version bump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub player: PlayerStatus,
    pub track: TrackInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    pub has_song: bool,
    pub is_paused: bool,
    /// 0–100.
    pub volume_percent: u32,
    /// Whole seconds (floored).
    pub seekbar_current_position: u64,
    pub seekbar_current_position_human: String,
    /// Unfloored position over the uncorrected duration.
    pub state_percent: f64,
    pub like_status: String,
    pub repeat_type: RepeatType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub author: String,
    pub title: String,
    pub album: String,
    pub cover: String,
    /// Whole seconds, with the host's off-by-one corrected.
    pub duration: u64,
    pub duration_human: String,
    pub url: String,
    pub id: String,
    pub is_video: bool,
    pub is_advertisement: bool,
    pub in_library: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RepeatType {
    #[default]
    None,
    One,
    All,
}

impl RepeatType {
    /// Map the host's repeat-mode string. Unknown or missing values mean no repeat.
    pub fn from_host(mode: Option<&str>) -> Self {
        match mode {
            Some("on") => RepeatType::One,
            Some("all") => RepeatType::All,
            _ => RepeatType::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatType::None => "NONE",
            RepeatType::One => "ONE",
            RepeatType::All => "ALL",
        }
    }
}

impl Query {
    /// The fixed record reported when nothing is playing.
    pub fn idle() -> Self {
        Query {
            player: PlayerStatus {
                has_song: false,
                is_paused: true,
                volume_percent: 0,
                seekbar_current_position: 0,
                seekbar_current_position_human: "0:00".to_string(),
                state_percent: 0.0,
                like_status: LIKE_STATUS_INDIFFERENT.to_string(),
                repeat_type: RepeatType::None,
            },
            track: TrackInfo::default(),
        }
    }
}
