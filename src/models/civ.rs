//! Civilization identifier to display name lookup.

use std::collections::HashMap;

/// Name given to every identifier missing from the lookup.
pub const UNKNOWN_CIV: &str = "Unknown Civ";

/// Built-in Age of Empires II civilization table, keyed by in-game civ id.
const BUILTIN_CIVS: &[(i64, &str)] = &[
    (1, "Britons"),
    (2, "Franks"),
    (3, "Goths"),
    (4, "Teutons"),
    (5, "Japanese"),
    (6, "Chinese"),
    (7, "Byzantines"),
    (8, "Persians"),
    (9, "Saracens"),
    (10, "Turks"),
    (11, "Vikings"),
    (12, "Mongols"),
    (13, "Celts"),
    (14, "Spanish"),
    (15, "Aztecs"),
    (16, "Mayans"),
    (17, "Huns"),
    (18, "Koreans"),
    (19, "Italians"),
    (20, "Hindustanis"),
    (21, "Incas"),
    (22, "Magyars"),
    (23, "Slavs"),
    (24, "Portuguese"),
    (25, "Ethiopians"),
    (26, "Malians"),
    (27, "Berbers"),
    (28, "Khmer"),
    (29, "Malay"),
    (30, "Burmese"),
    (31, "Vietnamese"),
    (32, "Bulgarians"),
    (33, "Tatars"),
    (34, "Cumans"),
    (35, "Lithuanians"),
    (36, "Burgundians"),
    (37, "Sicilians"),
    (38, "Poles"),
    (39, "Bohemians"),
    (40, "Dravidians"),
    (41, "Bengalis"),
    (42, "Gurjaras"),
    (43, "Romans"),
    (44, "Armenians"),
    (45, "Georgians"),
];

/// Mapping from integer civilization id to display name.
#[derive(Debug, Clone, Default)]
pub struct CivLookup {
    names: HashMap<i64, String>,
}

impl CivLookup {
    /// The static table compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_CIVS.iter().copied())
    }

    /// Build a lookup from `(id, name)` pairs. Later duplicates win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        }
    }

    /// Display name for `id`, if known.
    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Display name for `id`, falling back to [`UNKNOWN_CIV`].
    pub fn name_of(&self, id: i64) -> &str {
        self.get(id).unwrap_or(UNKNOWN_CIV)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
