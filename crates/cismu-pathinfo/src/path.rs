/// Ruta dividida en directorios (del más externo al más interno) y nombre final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath<'a> {
    pub dirs: Vec<&'a str>,
    pub basename: &'a str,
}

impl<'a> SplitPath<'a> {
    /// `None` cuando no hay ningún segmento.
    pub fn from_segments(segments: &[&'a str]) -> Option<Self> {
        let (basename, dirs) = segments.split_last()?;
        Some(SplitPath {
            dirs: dirs.to_vec(),
            basename: *basename,
        })
    }
}

/// Divide por `/`. El texto vacío no produce segmentos.
pub fn split(path: &str) -> Option<SplitPath<'_>> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<&str> = path.split('/').collect();
    SplitPath::from_segments(&segments)
}
