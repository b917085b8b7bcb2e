//! Recognized color phrases.

/// Phrase to canonical CSS color value.
const STANDARD_COLORS: &[(&str, &str)] = &[
    ("red", "red"),
    ("blue", "blue"),
    ("light blue", "lightblue"),
    ("dark blue", "darkblue"),
    ("green", "green"),
    ("light green", "lightgreen"),
    ("dark green", "darkgreen"),
    ("yellow", "yellow"),
    ("black", "black"),
    ("white", "white"),
    ("purple", "purple"),
    ("orange", "orange"),
    ("pink", "pink"),
    ("brown", "brown"),
    ("gray", "gray"),
    ("grey", "gray"),
    ("light gray", "lightgray"),
    ("light grey", "lightgray"),
    ("dark gray", "darkgray"),
    ("dark grey", "darkgray"),
    ("cyan", "cyan"),
    ("magenta", "magenta"),
    ("silver", "silver"),
    ("gold", "gold"),
    ("beige", "beige"),
    ("mint", "mintcream"),
    ("lavender", "lavender"),
    ("sky blue", "skyblue"),
    ("navy", "navy"),
    ("teal", "teal"),
    ("olive", "olive"),
    ("maroon", "maroon"),
    ("cream", "cornsilk"),
];

/// Fixed mapping from lowercase color phrases to canonical color values.
///
/// Entries are kept ordered longest phrase first, so a compound phrase such as
/// "light blue" is always found before the "blue" it contains, whatever order
/// the entries were supplied in.
#[derive(Debug, Clone)]
pub struct ColorTable {
    entries: Vec<(String, String)>,
}

impl ColorTable {
    /// Build a table from `(phrase, value)` pairs. Phrases are lowercased.
    pub fn new<P, V>(entries: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(phrase, value)| (phrase.into().to_lowercase(), value.into()))
            .filter(|(phrase, _)| !phrase.is_empty())
            .collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries.dedup_by(|later, earlier| later.0 == earlier.0);
        Self { entries }
    }

    /// The built-in table of color names and synonyms.
    pub fn standard() -> Self {
        Self::new(STANDARD_COLORS.iter().copied())
    }

    /// Canonical value of the first phrase contained in `text`.
    ///
    /// `text` is expected to be lowercase already.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(phrase, _)| text.contains(phrase.as_str()))
            .map(|(_, value)| value.as_str())
    }

    /// Exact lookup of a single phrase.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        let phrase = phrase.to_lowercase();
        self.entries
            .iter()
            .find(|(p, _)| *p == phrase)
            .map(|(_, value)| value.as_str())
    }

    /// Entries in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}
