use std::collections::BTreeMap;
use std::path::Path;

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::tags::Tag;

/// Grupos de palabras clave incorporados: nombre de etiqueta → fragmentos de patrón.
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    ("Live", &["live", "(живой )?концерт", "кассета", "радиоэфир"]),
    (
        "Remix",
        &[
            "remix",
            "mix",
            "rmx",
            "alt",
            "bass",
            "boost",
            "disco",
            "club",
            "offmix",
            "(metal|rock|piano|guitar|sax|danc) version",
            "ремикс",
            "микс",
            "радио",
            "видео",
            "клуб",
            "бас",
        ],
    ),
    (
        "Instrumental",
        &["instrument", "instrumental", "instrumentals", "acoust", "инструмент", "инструментал"],
    ),
    ("Demo", &["demo", "демо"]),
    ("Orchestral", &["orchestra", "orchestral", "orch", "оркестр"]),
    ("Interview", &["interview", "интервью"]),
    ("Interlude", &["interlude", "антракт"]),
    ("Remaster", &["remaster", "ремастер"]),
    ("Capella", &["capella", "acapella", "капелла", "акапелла"]),
    ("Radio", &["radio", "video", "радио", "видео", "радиоверсия", "видеоверсия"]),
    (
        "BackingTrack",
        &["backingtrack", "back(ing)? track", "karaok", "минус", "караоке"],
    ),
    ("Fragment", &["fragment", "cut version", "фрагмент"]),
    ("Cover", &["cover", "кавер", "ковер", "перепевка", "на русском"]),
    ("Rehearsal", &["rehearsal", "репетиция"]),
    ("Bonus", &["bonus", "бонус"]),
    ("Draft", &["draft", "черновик", "чернов(ое)? сведение"]),
];

const LIVE_AT_COMMON: &[&str] = &[
    " - (живой )?концерт (в|на|у|из) ",
    "na stadione|на стадион(е)?",
    "концерт(н)?(ая|ые)? запис(ь|и)?",
    "на рад(ио)? ",
];

fn owned(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn live_at(head: &str) -> Vec<String> {
    std::iter::once(head).chain(LIVE_AT_COMMON.iter().copied()).map(String::from).collect()
}

/// Fragmentos de las reglas dedicadas que se aplican además del escaneo genérico.
/// Una lista vacía desactiva la regla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideRules {
    /// "En vivo en ..." dentro del nombre de archivo.
    pub live_at: Vec<String>,
    /// Variante más estricta para nombres de directorio.
    pub dir_live_at: Vec<String>,
    pub interview_with: Vec<String>,
    pub cover_by: Vec<String>,
    pub original_mix: Vec<String>,
    pub mix_by: Vec<String>,
}

impl Default for OverrideRules {
    fn default() -> Self {
        OverrideRules {
            live_at: live_at(" -[^-]*live( (from|at|on|in) )?"),
            dir_live_at: live_at(" - live (from|at|on|in) "),
            interview_with: owned(&["interview", "intervyu|интерв|интервью"]),
            cover_by: owned(&["cover by", "на русском"]),
            original_mix: owned(&["origin(al)? (mix|version)"]),
            mix_by: owned(&["mix by"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub tag: Tag,
    pub fragments: Vec<String>,
}

/// Tabla de grupos de palabras clave ya validada contra `Tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    groups: Vec<KeywordGroup>,
    rules: OverrideRules,
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    groups: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    rules: OverrideRules,
}

impl Vocabulary {
    /// Valida cada nombre de grupo contra la enumeración. Un nombre desconocido
    /// significa que la tabla y `Tag` se han desincronizado: `Error::UnknownTag`.
    pub fn new<I, S>(groups: I, rules: OverrideRules) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: AsRef<str>,
    {
        let mut by_tag: BTreeMap<Tag, Vec<String>> = BTreeMap::new();
        for (name, fragments) in groups {
            let tag = name.as_ref().parse::<Tag>()?;
            by_tag.entry(tag).or_default().extend(fragments);
        }

        let groups = by_tag
            .into_iter()
            .map(|(tag, fragments)| KeywordGroup { tag, fragments })
            .collect();

        Ok(Vocabulary { groups, rules })
    }

    pub fn builtin() -> Result<Self> {
        let groups = BUILTIN_GROUPS.iter().map(|(name, fragments)| (*name, owned(fragments)));
        Vocabulary::new(groups, OverrideRules::default())
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Self::from_config(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()?;
        let vocabulary = Self::from_config(cfg)?;
        info!(path = %path, groups = vocabulary.groups.len(), "vocabulary loaded");
        Ok(vocabulary)
    }

    fn from_config(cfg: Config) -> Result<Self> {
        let file = cfg.try_deserialize::<VocabularyFile>()?;
        Vocabulary::new(file.groups, file.rules)
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    pub fn rules(&self) -> &OverrideRules {
        &self.rules
    }

    pub fn group(&self, tag: Tag) -> Option<&KeywordGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }
}
