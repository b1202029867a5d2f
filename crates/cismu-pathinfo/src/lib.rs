//! Crate `cismu_pathinfo`: autor, obra, etiquetas y extensión inferidos de la ruta de un archivo de música.
//!
//! ```
//! use cismu_pathinfo::{Tag, extract};
//!
//! let info = extract("Artist - Live at Club/03 - Artist - Song (Radio Edit).mp3");
//! assert_eq!(info.author.as_deref(), Some("Artist"));
//! assert_eq!(info.work.as_deref(), Some("Song"));
//! assert!(info.tags.has(Tag::Live) && info.tags.has(Tag::Radio));
//! assert_eq!(info.file_extension, ".mp3");
//! ```

mod basename;
mod brackets;
mod error;
mod extractor;
mod info;
mod matcher;
mod path;
mod scanner;
mod tags;
mod vocabulary;

pub use basename::UNKNOWN_EXTENSION;
pub use error::{Error, Result};
pub use extractor::Extractor;
pub use info::Info;
pub use matcher::Pattern;
pub use path::SplitPath;
pub use tags::{Tag, Tags};
pub use vocabulary::{KeywordGroup, OverrideRules, Vocabulary};

/// Extrae con el vocabulario incorporado.
pub fn extract(path: &str) -> Info {
    Extractor::builtin().extract(path)
}
