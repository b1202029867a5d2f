use once_cell::sync::Lazy;
use regex::Regex;

use crate::brackets;
use crate::scanner::{Scope, TagScanner};
use crate::tags::Tags;

/// Valor de `file_extension` cuando el nombre no tiene punto.
pub const UNKNOWN_EXTENSION: &str = ".";

/// Número de pista opcional ("03 ", "02.", "01 -", "07_") seguido de "Autor - Obra" u "Obra".
/// Los dígitos pegados a una letra no son número de pista ("2Pac").
static FILENAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:\d+(?:\.?\s*[-_]\s*|\.\s*|\s+))?(?P<body>(?P<author>.+)\s*-\s*(?P<work>.+)|.+)$").unwrap()
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basename {
    pub author: String,
    pub work: String,
    pub tags: Tags,
    pub file_extension: String,
}

/// Separa la extensión en el último punto. Sin punto la extensión es `"."`.
pub fn split_extension(name: &str) -> (&str, String) {
    match name.rfind('.') {
        Some(i) => (&name[..i], name[i..].trim().to_string()),
        None => (name, UNKNOWN_EXTENSION.to_string()),
    }
}

/// Autor y obra a partir del nombre ya sin corchetes. Si no hay "Autor - Obra"
/// con ambos lados no vacíos, todo el resto es la obra.
pub fn author_and_work(stripped: &str) -> (String, String) {
    let Some(caps) = FILENAME_REGEX.captures(stripped) else {
        return (String::new(), stripped.trim().to_string());
    };

    let body = caps.name("body").map_or("", |m| m.as_str());
    let author = caps.name("author").map_or("", |m| m.as_str().trim());
    let work = caps.name("work").map_or("", |m| m.as_str().trim());

    if !author.is_empty() && !work.is_empty() {
        return (author.to_string(), work.to_string());
    }

    let work = match body.trim() {
        "" => stripped.trim(),
        body => body,
    };
    (String::new(), work.to_string())
}

pub fn decompose(scanner: &TagScanner, name: &str) -> Basename {
    let (remainder, file_extension) = split_extension(name);

    // Los corchetes se escanean antes de quitarlos: "(live)" tiene que contar.
    let tags = scanner.scan(remainder, Scope::Basename);

    let stripped = brackets::strip(remainder);
    let (author, work) = author_and_work(&stripped);

    Basename {
        author,
        work,
        tags,
        file_extension,
    }
}
