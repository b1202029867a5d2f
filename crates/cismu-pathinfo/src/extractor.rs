use once_cell::sync::Lazy;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::basename;
use crate::error::Result;
use crate::info::{Info, non_empty};
use crate::path::{SplitPath, split};
use crate::scanner::{Scope, TagScanner};
use crate::tags::Tags;
use crate::vocabulary::Vocabulary;

/// Extractor con el vocabulario incorporado, compilado una sola vez por proceso.
static BUILTIN: Lazy<Extractor> = Lazy::new(|| {
    Vocabulary::builtin()
        .and_then(|vocabulary| Extractor::new(&vocabulary))
        .unwrap_or_else(|e| panic!("Built-in vocabulary is out of sync with Tag: {e}"))
});

/// Patrones compilados a partir de un `Vocabulary`. Inmutable tras `new`,
/// se comparte por referencia entre hilos sin sincronización.
#[derive(Debug, Clone)]
pub struct Extractor {
    scanner: TagScanner,
}

impl Extractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let scanner = TagScanner::new(vocabulary)?;
        info!(groups = scanner.keyword_groups(), "path extractor compiled");
        Ok(Extractor { scanner })
    }

    pub fn builtin() -> &'static Extractor {
        &BUILTIN
    }

    pub fn extract(&self, path: &str) -> Info {
        match split(path) {
            Some(split) => self.extract_split(&split),
            None => Info::default(),
        }
    }

    /// Igual que `extract` pero sobre una ruta ya dividida en segmentos.
    pub fn extract_segments(&self, segments: &[&str]) -> Info {
        match SplitPath::from_segments(segments) {
            Some(split) => self.extract_split(&split),
            None => Info::default(),
        }
    }

    /// Extrae en paralelo; el resultado conserva el orden de entrada.
    pub fn extract_many<P>(&self, paths: &[P]) -> Vec<Info>
    where
        P: AsRef<str> + Sync,
    {
        paths.par_iter().map(|p| self.extract(p.as_ref())).collect()
    }

    pub fn scan_basename_tags(&self, text: &str) -> Tags {
        self.scanner.scan(text, Scope::Basename)
    }

    pub fn scan_directory_tags(&self, text: &str) -> Tags {
        self.scanner.scan(text, Scope::Directory)
    }

    fn extract_split(&self, split: &SplitPath<'_>) -> Info {
        let base = basename::decompose(&self.scanner, split.basename);

        let tags = split
            .dirs
            .iter()
            .fold(base.tags, |tags, dir| tags.union(self.scan_directory_tags(dir)));

        let info = Info {
            author: non_empty(base.author),
            album: None,
            work: non_empty(base.work),
            tags,
            file_extension: base.file_extension,
        };

        debug!(basename = split.basename, dirs = split.dirs.len(), ?info, "path info extracted");
        info
    }
}
