//! Raw player state → canonical [`Query`].

use crate::player::query::{PlayerStatus, Query, RepeatType, TrackInfo, LIKE_STATUS_INDIFFERENT};
use crate::player::raw::{RawPlayerState, RawTrack};

/// Track page URL used when none is configured. `{id}` is replaced by the track id.
pub const DEFAULT_TRACK_URL_TEMPLATE: &str = "https://music.163.com/#/song?id={id}";

const ARTIST_SEPARATOR: &str = " / ";

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub track_url_template: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            track_url_template: DEFAULT_TRACK_URL_TEMPLATE.to_string(),
        }
    }
}

/// Normalize with default options.
pub fn normalize(raw: &RawPlayerState) -> Query {
    normalize_with(raw, &NormalizeOptions::default())
}

/// Build the canonical record from one raw snapshot. Total over any input:
/// missing or mistyped fields fall back to blanks and zeros, and an absent,
/// empty, or id-only track yields [`Query::idle`].
pub fn normalize_with(raw: &RawPlayerState, options: &NormalizeOptions) -> Query {
    let track = match raw.active_track() {
        Some(track) if !track.is_blank() => track,
        _ => return Query::idle(),
    };

    let duration_ms = track.duration_ms();
    let duration = corrected_duration_secs(duration_ms);
    let position = raw.progress().unwrap_or(0.0).max(0.0);
    let seekbar = position.floor() as u64;

    let raw_duration_secs = duration_ms / 1000.0;
    let state_percent = if raw_duration_secs > 0.0 {
        position / raw_duration_secs
    } else {
        0.0
    };

    let id = track.id();

    Query {
        player: PlayerStatus {
            has_song: raw.enabled().unwrap_or(true),
            is_paused: !raw.playing().unwrap_or(false),
            volume_percent: volume_percent(raw.volume().unwrap_or(0.0)),
            seekbar_current_position: seekbar,
            seekbar_current_position_human: to_duration_human(seekbar),
            state_percent,
            like_status: raw
                .like_status()
                .unwrap_or(LIKE_STATUS_INDIFFERENT)
                .to_string(),
            repeat_type: RepeatType::from_host(raw.repeat_mode()),
        },
        track: TrackInfo {
            author: format_author(&track),
            title: format_name(track.name(), &track.alternate_names()),
            album: track
                .album()
                .map(|album| format_name(album.name(), &album.alternate_names()))
                .unwrap_or_default(),
            cover: track
                .album()
                .map(|album| album.cover().to_string())
                .unwrap_or_default(),
            duration,
            duration_human: to_duration_human(duration),
            url: options.track_url_template.replace("{id}", &id),
            id,
            is_video: false,
            is_advertisement: false,
            in_library: false,
        },
    }
}

/// `primary` followed by the first alternate in full-width parentheses.
/// Later alternates are never shown.
pub fn format_name<S: AsRef<str>>(primary: &str, alternates: &[S]) -> String {
    match alternates.first() {
        Some(alt) => format!("{}（{}）", primary, alt.as_ref()),
        None => primary.to_string(),
    }
}

/// `m:ss`, with no hour component.
pub fn to_duration_human(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Whole seconds from a millisecond duration. The host over-reports by one
/// second; values of 0 and 1 are left alone.
pub fn corrected_duration_secs(duration_ms: f64) -> u64 {
    let secs = (duration_ms.max(0.0) as u64) / 1000;
    if secs > 1 {
        secs - 1
    } else {
        secs
    }
}

fn volume_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}

fn format_author(track: &RawTrack<'_>) -> String {
    track
        .artists()
        .map(|artist| format_name(artist.name(), &artist.alternate_names()))
        .collect::<Vec<_>>()
        .join(ARTIST_SEPARATOR)
}
