//! Local HTTP endpoint reporting a desktop player's now-playing state as a
//! stable JSON record, normalized across the host's shifting field names.

pub mod cli;
pub mod config;
pub mod http;
pub mod player;
pub mod server;
pub mod source;
