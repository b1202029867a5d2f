use tracing::trace;

use crate::brackets;
use crate::error::Result;
use crate::matcher::{KeywordMatcher, Pattern, Rule};
use crate::tags::{Tag, Tags};
use crate::vocabulary::Vocabulary;

/// Dónde aparece el texto escaneado. Sólo cambia la frase de "live at".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Basename,
    Directory,
}

#[derive(Debug, Clone)]
pub struct TagScanner {
    keywords: KeywordMatcher,
    live_at: Rule,
    dir_live_at: Rule,
    interview_with: Rule,
    cover_by: Rule,
    original_mix: Rule,
    mix_by: Rule,
}

impl TagScanner {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let keywords = KeywordMatcher::compile(
            vocabulary
                .groups()
                .iter()
                .map(|g| (g.tag, g.fragments.as_slice())),
        )?;

        let rules = vocabulary.rules();
        Ok(TagScanner {
            keywords,
            live_at: Rule::compile("live_at", &rules.live_at)?,
            dir_live_at: Rule::compile("dir_live_at", &rules.dir_live_at)?,
            interview_with: Rule::compile("interview_with", &rules.interview_with)?,
            cover_by: Rule::compile("cover_by", &rules.cover_by)?,
            original_mix: Rule::compile("original_mix", &rules.original_mix)?,
            mix_by: Rule::compile("mix_by", &rules.mix_by)?,
        })
    }

    pub fn keyword_groups(&self) -> usize {
        self.keywords.len()
    }

    /// Escaneo genérico: cada grupo de palabras clave presente aporta su etiqueta.
    pub fn keyword_tags(&self, text: &str) -> Tags {
        self.keywords.scan(text)
    }

    /// Escaneo genérico aplicado a cada tramo entre corchetes por separado.
    pub fn bracket_tags(&self, text: &str) -> Tags {
        brackets::spans(text).fold(Tags::empty(), |tags, span| tags.union(self.keyword_tags(span)))
    }

    /// El orden importa: "original mix" quita Remix, pero un "mix by" posterior lo repone.
    pub fn scan(&self, text: &str, scope: Scope) -> Tags {
        let mut tags = Tags::empty();

        let live_at = match scope {
            Scope::Basename => &self.live_at,
            Scope::Directory => &self.dir_live_at,
        };
        if live_at.matches(text) {
            tags = tags.with(Tag::Live);
        }
        if self.interview_with.matches(text) {
            tags = tags.with(Tag::Interview);
        }
        if self.cover_by.matches(text) {
            tags = tags.with(Tag::Cover);
        }

        tags = tags.union(self.bracket_tags(text));

        if self.original_mix.matches(text) {
            tags = tags.without(Tag::Remix);
        }
        if self.mix_by.matches(text) {
            tags = tags.with(Tag::Remix);
        }

        trace!(text, ?scope, %tags, "scanned tags");
        tags
    }
}
