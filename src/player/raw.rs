use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::player::keys;

/// A single read of the host's player object.
///
/// Shape varies across host versions, so the record is kept as untyped JSON
/// and only ever read through the precedence tables in [`keys`]. Every
/// accessor is total: absent, null, or mistyped fields read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPlayerState(Value);

impl RawPlayerState {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn enabled(&self) -> Option<bool> {
        lookup(&self.0, keys::ENABLED).and_then(as_bool)
    }

    pub fn playing(&self) -> Option<bool> {
        lookup(&self.0, keys::PLAYING).and_then(as_bool)
    }

    /// Volume as a fraction in 0.0–1.0.
    pub fn volume(&self) -> Option<f64> {
        lookup(&self.0, keys::VOLUME).and_then(as_f64)
    }

    /// Playback position in (possibly fractional) seconds.
    pub fn progress(&self) -> Option<f64> {
        lookup(&self.0, keys::PROGRESS).and_then(as_f64)
    }

    pub fn like_status(&self) -> Option<&str> {
        lookup(&self.0, keys::LIKE_STATUS).and_then(Value::as_str)
    }

    pub fn repeat_mode(&self) -> Option<&str> {
        lookup(&self.0, keys::REPEAT_MODE).and_then(Value::as_str)
    }

    pub fn radio_mode(&self) -> bool {
        lookup(&self.0, keys::RADIO_MODE)
            .and_then(as_bool)
            .unwrap_or(false)
    }

    /// The track the host is currently presenting: the radio track in radio
    /// mode, the normal current track otherwise.
    pub fn active_track(&self) -> Option<RawTrack<'_>> {
        let table = if self.radio_mode() {
            keys::RADIO_TRACK
        } else {
            keys::CURRENT_TRACK
        };
        lookup(&self.0, table).map(RawTrack)
    }
}

impl From<Value> for RawPlayerState {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Borrowed view of a track record inside a [`RawPlayerState`].
#[derive(Debug, Clone, Copy)]
pub struct RawTrack<'a>(&'a Value);

impl<'a> RawTrack<'a> {
    /// True when the record carries nothing beyond (at most) a bare id, which
    /// the host reports between tracks.
    pub fn is_blank(&self) -> bool {
        match self.0.as_object() {
            Some(map) => map.keys().all(|k| keys::TRACK_ID.contains(&k.as_str())),
            None => true,
        }
    }

    /// Identifier rendered for display. Whole numbers print without a
    /// fractional part.
    pub fn id(&self) -> String {
        match lookup(self.0, keys::TRACK_ID) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => match (n.as_u64(), n.as_i64()) {
                (Some(u), _) => u.to_string(),
                (None, Some(i)) => i.to_string(),
                _ => n.to_string(),
            },
            _ => String::new(),
        }
    }

    pub fn name(&self) -> &'a str {
        lookup_str(self.0, keys::TRACK_NAME)
    }

    /// Raw duration in milliseconds, as reported.
    pub fn duration_ms(&self) -> f64 {
        lookup(self.0, keys::TRACK_DURATION)
            .and_then(as_f64)
            .unwrap_or(0.0)
    }

    pub fn alternate_names(&self) -> Vec<&'a str> {
        alternate_names(self.0, keys::TRACK_ALT_NAMES)
    }

    pub fn artists(&self) -> impl Iterator<Item = RawArtist<'a>> {
        lookup(self.0, keys::TRACK_ARTISTS)
            .and_then(Value::as_array)
            .map(|list| list.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|v| v.is_object())
            .map(RawArtist)
    }

    pub fn album(&self) -> Option<RawAlbum<'a>> {
        lookup(self.0, keys::TRACK_ALBUM)
            .filter(|v| v.is_object())
            .map(RawAlbum)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RawArtist<'a>(&'a Value);

impl<'a> RawArtist<'a> {
    pub fn name(&self) -> &'a str {
        lookup_str(self.0, keys::ARTIST_NAME)
    }

    pub fn alternate_names(&self) -> Vec<&'a str> {
        alternate_names(self.0, keys::ARTIST_ALT_NAMES)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RawAlbum<'a>(&'a Value);

impl<'a> RawAlbum<'a> {
    pub fn name(&self) -> &'a str {
        lookup_str(self.0, keys::ALBUM_NAME)
    }

    pub fn alternate_names(&self) -> Vec<&'a str> {
        alternate_names(self.0, keys::ALBUM_ALT_NAMES)
    }

    pub fn cover(&self) -> &'a str {
        lookup_str(self.0, keys::ALBUM_COVER)
    }
}

// ── Lookup primitives ─────────────────────────────────────────────────────────

/// First present, non-null value among `table`'s keys.
pub fn lookup<'a>(value: &'a Value, table: &[&str]) -> Option<&'a Value> {
    let map = value.as_object()?;
    table
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|v| !v.is_null())
}

fn lookup_str<'a>(value: &'a Value, table: &[&str]) -> &'a str {
    lookup(value, table).and_then(Value::as_str).unwrap_or("")
}

/// Alternate names from the first key in `table` that yields any non-empty
/// string. A key may hold a list of strings or a single string.
pub fn alternate_names<'a>(value: &'a Value, table: &[&str]) -> Vec<&'a str> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    for key in table {
        let names: Vec<&str> = match map.get(*key) {
            Some(Value::Array(list)) => list
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::String(s)) if !s.is_empty() => vec![s.as_str()],
            _ => continue,
        };
        if !names.is_empty() {
            return names;
        }
    }
    Vec::new()
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|f| f.is_finite())
}
