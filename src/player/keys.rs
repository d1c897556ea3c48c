//! Alternate-key precedence tables.
//!
//! The host has renamed the same field several times across versions. Each
//! table lists every known key for one concept, most preferred first. Lookups
//! consult the first key whose value is present and non-null.

// ── Player object ─────────────────────────────────────────────────────────────

pub const ENABLED: &[&str] = &["enabled", "_enabled"];
pub const PLAYING: &[&str] = &["playing", "_playing"];
pub const VOLUME: &[&str] = &["volume", "_volume"];
pub const PROGRESS: &[&str] = &["progress", "_progress"];
pub const LIKE_STATUS: &[&str] = &["likeStatus", "_likeStatus"];
pub const REPEAT_MODE: &[&str] = &["repeatMode", "_repeatMode"];
pub const RADIO_MODE: &[&str] = &["isPersonalFM", "_isPersonalFM"];
pub const RADIO_TRACK: &[&str] = &["personalFMTrack", "_personalFMTrack"];
pub const CURRENT_TRACK: &[&str] = &["currentTrack", "_currentTrack"];

// ── Track record ──────────────────────────────────────────────────────────────

pub const TRACK_ID: &[&str] = &["id"];
pub const TRACK_NAME: &[&str] = &["name"];
/// Milliseconds.
pub const TRACK_DURATION: &[&str] = &["dt", "duration"];
pub const TRACK_ARTISTS: &[&str] = &["ar", "artists"];
pub const TRACK_ALBUM: &[&str] = &["al", "album"];
pub const TRACK_ALT_NAMES: &[&str] = &["tns", "transNames", "alia"];

// ── Artist record ─────────────────────────────────────────────────────────────

pub const ARTIST_NAME: &[&str] = &["name"];
/// Alias list wins over the single translation string when both are present.
pub const ARTIST_ALT_NAMES: &[&str] = &["alias", "trans"];

// ── Album record ──────────────────────────────────────────────────────────────

pub const ALBUM_NAME: &[&str] = &["name"];
pub const ALBUM_ALT_NAMES: &[&str] = &["tns", "alia"];
pub const ALBUM_COVER: &[&str] = &["picUrl"];
