use crate::error::Error;

/// Palette/algorithm revision stamped onto every classification run.
/// Any change to the built-in palette or the similarity formula must bump
/// this so previously stored results can be invalidated and re-run.
pub const VERSION: u32 = 20181130;

/// Rough working-set budget for one classifier instance, in megabytes.
pub const APPROX_RAM_MB: u32 = 120;

/// Hint for how many classifier workers a host should schedule at once.
pub const MAX_NUM_WORKERS: u32 = 2;

// Reference colors, hand-tuned against real photo sets. The ordering value
// is presentation order for stored tags, never classification order.
const BUILTIN: [(&str, [u8; 3], u32); 15] = [
    ("Red", [120, 4, 20], 1),
    ("Dark orange", [162, 70, 21], 2),
    ("Orange", [255, 124, 0], 3),
    ("Pale pink", [255, 159, 156], 4),
    ("Lemon yellow", [255, 250, 0], 5),
    ("School bus yellow", [255, 207, 0], 6),
    ("Green", [144, 226, 0], 7),
    ("Dark lime green", [0, 171, 0], 8),
    ("Cyan", [0, 178, 212], 9),
    ("Blue", [0, 98, 198], 10),
    ("Violet", [140, 32, 186], 11),
    ("Pink", [245, 35, 148], 12),
    ("White", [255, 255, 255], 13),
    ("Gray", [124, 124, 124], 14),
    ("Black", [0, 0, 0], 15),
];

/// One named reference color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub rgb: [u8; 3],
    /// Presentation order for the label when displayed as a tag.
    pub ordering: u32,
}

/// Immutable, ordered set of reference colors used as classification targets.
///
/// Iteration order is fixed at construction time; pixel-vs-entry ties and
/// equal-score output ties both break by this order, so it is part of the
/// classifier's observable behavior.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build a palette from an ordered list of entries.
    ///
    /// Duplicate label names are a configuration error and are rejected here,
    /// at startup, never during classification.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, Error> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(Error::DuplicateLabel(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in 15-color reference palette: primary hues, pastel and
    /// neutral tones, and grayscale.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(name, rgb, ordering)| PaletteEntry {
                name: name.to_string(),
                rgb,
                ordering,
            })
            .collect();
        Self::new(entries).expect("built-in palette has unique labels")
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}
