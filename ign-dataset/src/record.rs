//! Encoding for games held in the list store.
//!
//! Each entry is a standalone BSON document tagged with a format version so a store
//! populated by an older build is reported instead of being misread.
use serde::{Deserialize, Serialize};

use crate::{error::CacheError, game::Game};

pub const RECORD_VERSION: u32 = 1;

#[derive(Serialize)]
struct RecordRef<'a> {
    v: u32,
    game: &'a Game,
}

#[derive(Deserialize)]
struct RecordHeader {
    v: u32,
}

#[derive(Deserialize)]
struct Record {
    game: Game,
}

pub fn encode(game: &Game) -> Result<Vec<u8>, CacheError> {
    Ok(bson::to_vec(&RecordRef {
        v: RECORD_VERSION,
        game,
    })?)
}

pub fn decode(bytes: &[u8]) -> Result<Game, CacheError> {
    let RecordHeader { v } = bson::from_slice(bytes)?;
    if v != RECORD_VERSION {
        return Err(CacheError::UnsupportedVersion(v));
    }
    let Record { game } = bson::from_slice(bytes)?;
    Ok(game)
}
