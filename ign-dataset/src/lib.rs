pub mod error;
pub mod game;
pub mod loader;
mod parse;
pub mod record;
pub mod source;
pub mod stats;
pub mod store;

pub use error::{CacheError, DatasetError, NetworkError, ParseError};
pub use game::{Game, ScorePhrase};
pub use loader::DataLoader;
pub use parse::read_games;
pub use source::{DatasetSource, HttpSource};
pub use stats::{aggregate, ScoreStats};
pub use store::{ListStore, MemoryStore, RedisStore};
