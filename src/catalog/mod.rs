// Static content catalog: the folders under review and the danger badge table

mod folders;

use crate::errors::{BloatkillError, Result};
use crate::models::{Danger, DangerClassification, FolderEntry};
use egui::Color32;
use std::collections::HashSet;

pub use folders::CATALOG;

/// Read-only mapping from folder key to entry, in tab order.
#[derive(Debug)]
pub struct Catalog {
    folders: &'static [FolderEntry],
}

impl Catalog {
    /// Wraps an authored folder table. Usable in `static` items.
    pub const fn new(folders: &'static [FolderEntry]) -> Self {
        Self { folders }
    }

    /// Finds a folder by key.
    pub fn lookup(&self, key: &str) -> Result<&'static FolderEntry> {
        self.folders
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| BloatkillError::FolderNotFound {
                key: key.to_string(),
            })
    }

    /// Folder keys in authoring order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.folders.iter().map(|f| f.key)
    }

    pub fn folders(&self) -> &'static [FolderEntry] {
        self.folders
    }

    /// The entry shown before any selection is made.
    pub fn first(&self) -> Option<&'static FolderEntry> {
        self.folders.first()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.folders.iter().any(|f| f.key == key)
    }

    /// Badge styling for a danger tag.
    pub fn classify(&self, danger: Danger) -> &'static DangerClassification {
        classify(danger)
    }

    /// Badge styling for a textual tag, rejecting anything outside the fixed set.
    pub fn classify_tag(&self, tag: &str) -> Result<&'static DangerClassification> {
        let danger: Danger = tag.parse()?;
        Ok(classify(danger))
    }

    /// Checks the authoring invariants the view relies on.
    pub fn validate(&self) -> Result<()> {
        if self.folders.is_empty() {
            return Err(integrity("catalog has no folders"));
        }

        let mut seen = HashSet::new();
        for folder in self.folders {
            if folder.key.is_empty() {
                return Err(integrity("folder with an empty key"));
            }
            if !seen.insert(folder.key) {
                return Err(integrity(format!("duplicate folder key `{}`", folder.key)));
            }
            if folder.methods.is_empty() {
                return Err(integrity(format!("folder `{}` has no cleanup methods", folder.key)));
            }
            for (i, method) in folder.methods.iter().enumerate() {
                if method.cmd.trim().is_empty() {
                    return Err(integrity(format!(
                        "method {} (`{}`) of `{}` has an empty command",
                        i, method.label, folder.key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn integrity(details: impl Into<String>) -> BloatkillError {
    BloatkillError::DataIntegrity {
        details: details.into(),
    }
}

/// Applies a straight alpha to an opaque color, premultiplied so it can be `const`.
pub(crate) const fn tint(r: u8, g: u8, b: u8, a: u8) -> Color32 {
    const fn mul(c: u8, a: u8) -> u8 {
        ((c as u16 * a as u16 + 127) / 255) as u8
    }
    Color32::from_rgba_premultiplied(mul(r, a), mul(g, a), mul(b, a), a)
}

// Indexed by `Danger` discriminant, mildest first
static DANGER_TABLE: [DangerClassification; 4] = [
    DangerClassification {
        background: tint(0x00, 0xff, 0x88, 0x22),
        border: Color32::from_rgb(0x00, 0xff, 0x88),
        text: Color32::from_rgb(0x00, 0xff, 0x88),
        label: "SAFE",
    },
    DangerClassification {
        background: tint(0xff, 0xe0, 0x66, 0x22),
        border: Color32::from_rgb(0xff, 0xe0, 0x66),
        text: Color32::from_rgb(0xff, 0xe0, 0x66),
        label: "LOW RISK",
    },
    DangerClassification {
        background: tint(0xff, 0x8c, 0x00, 0x22),
        border: Color32::from_rgb(0xff, 0x8c, 0x00),
        text: Color32::from_rgb(0xff, 0x8c, 0x00),
        label: "MEDIUM",
    },
    DangerClassification {
        background: tint(0xff, 0x00, 0x33, 0x22),
        border: Color32::from_rgb(0xff, 0x00, 0x33),
        text: Color32::from_rgb(0xff, 0x00, 0x33),
        label: "DANGER",
    },
];

/// Badge styling for a danger tag.
pub fn classify(danger: Danger) -> &'static DangerClassification {
    &DANGER_TABLE[danger as usize]
}
