use once_cell::sync::Lazy;
use regex::Regex;

use crate::matcher::Pattern;

/// Un tramo entre corchetes de un solo nivel; si no hay cierre llega hasta el final.
static OPEN_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(\[][^()\[\]]+(?:[)\]]|$)").unwrap());

static CLOSED_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(\[][^()\[\]]*[)\]]").unwrap());

static STRAY_OPENERS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(\[]").unwrap());

/// Tramos entre paréntesis o corchetes, marcadores incluidos.
pub fn spans(text: &str) -> impl Iterator<Item = &str> {
    OPEN_SPAN_REGEX.spans(text).into_iter().map(move |range| &text[range])
}

/// Elimina los tramos cerrados hasta que no quede ninguno (así caen también los anidados)
/// y luego los `(` y `[` sueltos.
pub fn strip(text: &str) -> String {
    let mut current = text.to_string();
    while CLOSED_SPAN_REGEX.matches(&current) {
        current = CLOSED_SPAN_REGEX.replace_all(&current, "").into_owned();
    }
    STRAY_OPENERS_REGEX.replace_all(&current, "").into_owned()
}
