use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Qualitative label IGN assigns to a review score.
/// Variants are declared best to worst, and that order is load bearing for the stats map.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum ScorePhrase {
    Masterpiece,
    Amazing,
    Great,
    Good,
    Okay,
    Mediocre,
    Bad,
    Awful,
    Painful,
    Unbearable,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown score phrase {0:?}")]
pub struct UnknownScorePhrase(pub String);

impl ScorePhrase {
    pub const COUNT: usize = 10;

    pub const ALL: [ScorePhrase; Self::COUNT] = [
        ScorePhrase::Masterpiece,
        ScorePhrase::Amazing,
        ScorePhrase::Great,
        ScorePhrase::Good,
        ScorePhrase::Okay,
        ScorePhrase::Mediocre,
        ScorePhrase::Bad,
        ScorePhrase::Awful,
        ScorePhrase::Painful,
        ScorePhrase::Unbearable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScorePhrase::Masterpiece => "Masterpiece",
            ScorePhrase::Amazing => "Amazing",
            ScorePhrase::Great => "Great",
            ScorePhrase::Good => "Good",
            ScorePhrase::Okay => "Okay",
            ScorePhrase::Mediocre => "Mediocre",
            ScorePhrase::Bad => "Bad",
            ScorePhrase::Awful => "Awful",
            ScorePhrase::Painful => "Painful",
            ScorePhrase::Unbearable => "Unbearable",
        }
    }

    /// Position in the best to worst ordering
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for ScorePhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScorePhrase {
    type Err = UnknownScorePhrase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phrase| phrase.label() == s)
            .ok_or_else(|| UnknownScorePhrase(s.to_string()))
    }
}

/// One row of the IGN review dataset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub title: String,
    pub score: f64,
    pub score_phrase: ScorePhrase,
    pub platform: String,
    pub genre: String,
    pub release_year: i32,
    pub release_month: u32,
    pub release_day: u32,
}

impl Game {
    pub fn is_playstation(&self) -> bool {
        self.platform.to_lowercase().contains("playstation")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_phrase_order() {
        let labels: Vec<_> = ScorePhrase::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "Masterpiece",
                "Amazing",
                "Great",
                "Good",
                "Okay",
                "Mediocre",
                "Bad",
                "Awful",
                "Painful",
                "Unbearable"
            ]
        );
        for (i, phrase) in ScorePhrase::ALL.iter().enumerate() {
            assert_eq!(phrase.index(), i);
        }
    }

    #[test]
    fn test_parse_phrase() {
        assert_eq!("Okay".parse::<ScorePhrase>(), Ok(ScorePhrase::Okay));
        assert_eq!(
            "okay".parse::<ScorePhrase>(),
            Err(UnknownScorePhrase("okay".to_string()))
        );
        assert!("".parse::<ScorePhrase>().is_err());
    }

    #[test]
    fn test_is_playstation() {
        let mut game = Game {
            title: "LittleBigPlanet".to_string(),
            score: 9.5,
            score_phrase: ScorePhrase::Amazing,
            platform: "PlayStation 3".to_string(),
            genre: "Platformer".to_string(),
            release_year: 2008,
            release_month: 10,
            release_day: 27,
        };
        assert!(game.is_playstation());
        game.platform = "PLAYSTATION VITA".to_string();
        assert!(game.is_playstation());
        game.platform = "Xbox 360".to_string();
        assert!(!game.is_playstation());
    }

    #[test]
    fn test_game_json_shape() {
        let game = Game {
            title: "Flow".to_string(),
            score: 7.0,
            score_phrase: ScorePhrase::Good,
            platform: "PlayStation 3".to_string(),
            genre: "Action".to_string(),
            release_year: 2007,
            release_month: 2,
            release_day: 22,
        };
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["score_phrase"], "Good");
        assert_eq!(value["release_year"], 2007);
        assert_eq!(value["score"], 7.0);
    }
}
