use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Row {row}: invalid {field} {value:?}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
    #[error("Error deserializing BSON {0}")]
    BsonDeserializeError(#[from] bson::de::Error),
    #[error("Error serializing bson {0}")]
    BsonSerializeError(#[from] bson::ser::Error),
    #[error("Cached record has unsupported version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to fetch dataset: {0}")]
    Network(#[from] NetworkError),
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] ParseError),
    #[error("Dataset cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("IO Error {0}")]
    Io(#[from] std::io::Error),
}
