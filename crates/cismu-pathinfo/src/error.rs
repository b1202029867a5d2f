use thiserror::Error;

use crate::tags::Tag;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// El nombre no corresponde a ninguna variante de `Tag`.
    #[error("Unknown tag name: {0:?}")]
    UnknownTag(String),

    #[error("Keyword group for {0} has no fragments")]
    EmptyGroup(Tag),

    /// Un fragmento vacío coincidiría con cualquier texto.
    #[error("Empty fragment in group {group}")]
    EmptyFragment { group: String },

    #[error("Invalid pattern in group {group}")]
    Pattern {
        group: String,
        #[source]
        source: regex::Error,
    },

    #[error("Vocabulary parse error: {0}")]
    Config(#[from] config::ConfigError),
}
