use std::ops::Range;

use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

use crate::error::{Error, Result};
use crate::tags::{Tag, Tags};

/// Capacidad mínima que el escáner necesita de un patrón compilado.
pub trait Pattern {
    fn matches(&self, text: &str) -> bool;

    fn spans(&self, text: &str) -> Vec<Range<usize>>;
}

impl Pattern for Regex {
    fn matches(&self, text: &str) -> bool {
        self.is_match(text)
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        self.find_iter(text).map(|m| m.range()).collect()
    }
}

/// Une los fragmentos en una alternancia no capturante.
fn alternation(group: &str, fragments: &[String]) -> Result<String> {
    if fragments.iter().any(|f| f.is_empty()) {
        return Err(Error::EmptyFragment { group: group.to_string() });
    }

    let body = fragments
        .iter()
        .map(|f| format!("(?:{f})"))
        .collect::<Vec<_>>()
        .join("|");

    Ok(body)
}

/// Regla de anulación. Sin fragmentos queda desactivada y nunca coincide.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Option<Regex>,
}

impl Rule {
    pub fn compile(name: &str, fragments: &[String]) -> Result<Self> {
        if fragments.is_empty() {
            return Ok(Rule { regex: None });
        }

        let regex = RegexBuilder::new(&alternation(name, fragments)?)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::Pattern {
                group: name.to_string(),
                source,
            })?;

        Ok(Rule { regex: Some(regex) })
    }
}

impl Pattern for Rule {
    fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.as_ref().map(|re| re.spans(text)).unwrap_or_default()
    }
}

/// Todos los grupos de palabras clave compilados en un único `RegexSet`.
/// El índice de cada patrón del set coincide con la posición en `tags`.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    set: RegexSet,
    tags: Vec<Tag>,
}

impl KeywordMatcher {
    pub fn compile<'a, I>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Tag, &'a [String])>,
    {
        let mut patterns = Vec::new();
        let mut tags = Vec::new();

        for (tag, fragments) in groups {
            if fragments.is_empty() {
                return Err(Error::EmptyGroup(tag));
            }
            let pattern = alternation(tag.as_str(), fragments)?;

            // Validación por grupo para que el error nombre al culpable.
            RegexBuilder::new(&pattern)
                .build()
                .map_err(|source| Error::Pattern {
                    group: tag.to_string(),
                    source,
                })?;

            patterns.push(pattern);
            tags.push(tag);
        }

        let set = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::Pattern {
                group: "keywords".to_string(),
                source,
            })?;

        Ok(KeywordMatcher { set, tags })
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Une todas las etiquetas cuyo grupo aparece en cualquier parte de `text`.
    pub fn scan(&self, text: &str) -> Tags {
        self.set
            .matches(text)
            .into_iter()
            .map(|idx| self.tags[idx])
            .collect()
    }
}
