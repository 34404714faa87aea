use std::{io::Read, str::FromStr};

use serde::Deserialize;
use tracing::warn;

use crate::{
    error::ParseError,
    game::{Game, ScorePhrase},
};

/// Columns we read from the IGN csv, everything else in the header is ignored.
#[derive(Deserialize)]
struct GameRow {
    title: String,
    score: String,
    score_phrase: String,
    platform: String,
    genre: String,
    release_year: String,
    release_month: String,
    release_day: String,
}

/// Parses the whole csv body. The first malformed row aborts the parse, rows rated
/// with a phrase outside the ten known ones (the export has a few "Disaster" games)
/// are skipped.
pub fn read_games<R: Read>(reader: R) -> Result<Vec<Game>, ParseError> {
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut games = Vec::new();
    let mut skipped = 0;
    for (i, row) in csv.deserialize::<GameRow>().enumerate() {
        match row_to_game(i + 1, row?)? {
            Some(game) => games.push(game),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("Skipped {skipped} games with an unknown score phrase");
    }
    Ok(games)
}

fn row_to_game(row: usize, raw: GameRow) -> Result<Option<Game>, ParseError> {
    let Ok(score_phrase) = ScorePhrase::from_str(raw.score_phrase.trim()) else {
        return Ok(None);
    };
    let invalid = |field: &'static str, value: &str| ParseError::InvalidField {
        row,
        field,
        value: value.to_string(),
    };
    let score = raw
        .score
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("score", &raw.score))?;
    let release_year =
        parse_whole(&raw.release_year).ok_or_else(|| invalid("release_year", &raw.release_year))?;
    let release_month = parse_whole(&raw.release_month)
        .ok_or_else(|| invalid("release_month", &raw.release_month))?;
    let release_day =
        parse_whole(&raw.release_day).ok_or_else(|| invalid("release_day", &raw.release_day))?;
    Ok(Some(Game {
        title: raw.title,
        score,
        score_phrase,
        platform: raw.platform,
        genre: raw.genre,
        release_year,
        release_month,
        release_day,
    }))
}

/// Integers in the export are sometimes written as floats (`2012.0`), accept those
/// as long as there is no fractional part.
fn parse_whole<T>(value: &str) -> Option<T>
where
    T: FromStr + TryFrom<i64>,
{
    let value = value.trim();
    if let Ok(parsed) = value.parse() {
        return Some(parsed);
    }
    let float = value.parse::<f64>().ok()?;
    if float.fract() != 0.0 || !float.is_finite() {
        return None;
    }
    T::try_from(float as i64).ok()
}
