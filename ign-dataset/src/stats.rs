use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::game::{Game, ScorePhrase};

/// Number of games per score phrase. Always holds every phrase, zero when absent,
/// and iterates in the best to worst order of [`ScorePhrase::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreStats {
    counts: [u32; ScorePhrase::COUNT],
}

impl ScoreStats {
    pub fn get(&self, phrase: ScorePhrase) -> u32 {
        self.counts[phrase.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScorePhrase, u32)> + '_ {
        ScorePhrase::ALL
            .into_iter()
            .map(|phrase| (phrase, self.get(phrase)))
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        ScorePhrase::ALL.into_iter().map(|phrase| phrase.label())
    }

    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.iter().copied()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or_default()
    }

    fn increment(&mut self, phrase: ScorePhrase) {
        self.counts[phrase.index()] += 1;
    }
}

impl Serialize for ScoreStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ScorePhrase::COUNT))?;
        for (phrase, count) in self.iter() {
            map.serialize_entry(phrase.label(), &count)?;
        }
        map.end()
    }
}

/// Counts PlayStation games per score phrase.
pub fn aggregate(dataset: &[Game]) -> ScoreStats {
    dataset
        .iter()
        .filter(|game| game.is_playstation())
        .fold(ScoreStats::default(), |mut stats, game| {
            stats.increment(game.score_phrase);
            stats
        })
}
