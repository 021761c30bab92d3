// Selection state of the dashboard: active folder tab and expanded method

use crate::catalog::Catalog;
use crate::errors::{BloatkillError, Result};
use crate::models::{CleanupMethod, FolderEntry};

/// The two pieces of view state, tied to the catalog they index into.
///
/// `active` is always a key present in `catalog`, and `expanded` is always
/// `None` right after the active folder changes. At most one method is
/// expanded at a time.
#[derive(Debug, Clone)]
pub struct DashboardState<'a> {
    catalog: &'a Catalog,
    active: &'static FolderEntry,
    expanded: Option<usize>,
}

impl<'a> DashboardState<'a> {
    /// Starts on the first folder with everything collapsed.
    pub fn new(catalog: &'a Catalog) -> Result<Self> {
        let active = catalog.first().ok_or_else(|| BloatkillError::DataIntegrity {
            details: "catalog has no folders".to_string(),
        })?;
        Ok(Self {
            catalog,
            active,
            expanded: None,
        })
    }

    /// Starts on `key` with everything collapsed.
    pub fn starting_at(catalog: &'a Catalog, key: &str) -> Result<Self> {
        let active = catalog.lookup(key)?;
        Ok(Self {
            catalog,
            active,
            expanded: None,
        })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn active_key(&self) -> &'static str {
        self.active.key
    }

    pub fn active_folder(&self) -> &'static FolderEntry {
        self.active
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// The expanded method of the active folder, if any.
    pub fn expanded_method(&self) -> Option<&'static CleanupMethod> {
        self.expanded.and_then(|i| self.active.methods.get(i))
    }

    /// Switches tabs and collapses whatever was open.
    /// An unknown key leaves the state untouched.
    pub fn select_folder(&mut self, key: &str) -> Result<()> {
        let folder = self.catalog.lookup(key)?;
        tracing::debug!(folder = folder.key, "folder selected");
        self.active = folder;
        self.expanded = None;
        Ok(())
    }

    /// Expands `index`, or collapses it if it is already the open one.
    /// An index past the active folder's methods leaves the state untouched.
    pub fn toggle_method(&mut self, index: usize) -> Result<()> {
        let count = self.active.methods.len();
        if index >= count {
            return Err(BloatkillError::DataIntegrity {
                details: format!(
                    "method {} out of range for `{}` ({} methods)",
                    index, self.active.key, count
                ),
            });
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!(
            folder = self.active.key,
            index,
            expanded = self.expanded.is_some(),
            "method toggled"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use proptest::prelude::*;

    #[test]
    fn starts_on_first_folder_collapsed() {
        let state = DashboardState::new(&CATALOG).unwrap();
        assert_eq!(state.active_key(), "WinSxS");
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn empty_catalog_has_no_initial_state() {
        static EMPTY: Catalog = Catalog::new(&[]);
        assert!(DashboardState::new(&EMPTY).is_err());
    }

    #[test]
    fn selecting_every_folder_collapses() {
        let mut state = DashboardState::new(&CATALOG).unwrap();
        for key in CATALOG.keys() {
            state.toggle_method(0).unwrap();
            state.select_folder(key).unwrap();
            assert_eq!(state.active_key(), key);
            assert_eq!(state.expanded(), None);
        }
    }

    #[test]
    fn reselecting_the_active_folder_collapses() {
        let mut state = DashboardState::new(&CATALOG).unwrap();
        state.toggle_method(2).unwrap();
        state.select_folder("WinSxS").unwrap();
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn unknown_folder_keeps_state() {
        let mut state = DashboardState::new(&CATALOG).unwrap();
        state.toggle_method(1).unwrap();
        assert!(state.select_folder("Prefetch").is_err());
        assert_eq!(state.active_key(), "WinSxS");
        assert_eq!(state.expanded(), Some(1));
    }

    #[test]
    fn out_of_range_toggle_keeps_state() {
        let mut state = DashboardState::new(&CATALOG).unwrap();
        let err = state.toggle_method(7).unwrap_err();
        assert!(err.is_authoring_defect());
        assert_eq!(state.expanded(), None);
        assert!(!state.is_expanded(7));

        state.toggle_method(3).unwrap();
        assert!(state.toggle_method(4).is_err());
        assert_eq!(state.expanded(), Some(3));
    }

    #[test]
    fn range_follows_the_active_folder() {
        static SHORT: [CleanupMethod; 1] = [CleanupMethod {
            label: "only",
            cmd: "echo",
            note: "",
            danger: crate::models::Danger::Safe,
        }];
        static FOLDERS: [FolderEntry; 1] = [FolderEntry {
            key: "Short",
            icon: "#",
            color: egui::Color32::WHITE,
            glow: egui::Color32::WHITE,
            size: "1 GB",
            location: "C:\\Short",
            description: "",
            risks: "",
            methods: &SHORT,
        }];
        static ONE_METHOD: Catalog = Catalog::new(&FOLDERS);

        let mut state = DashboardState::new(&ONE_METHOD).unwrap();
        state.toggle_method(0).unwrap();
        assert!(state.toggle_method(1).is_err());
        assert_eq!(state.expanded(), Some(0));
    }

    #[test]
    fn expanded_method_follows_index() {
        let mut state = DashboardState::starting_at(&CATALOG, "Installer").unwrap();
        state.toggle_method(1).unwrap();
        assert_eq!(state.expanded_method().unwrap().label, "msizap.exe (legacy SDK tool)");
    }

    proptest! {
        #[test]
        fn toggle_is_its_own_inverse(
            prior in proptest::option::of(0usize..4),
            i in 0usize..4,
        ) {
            let mut state = DashboardState::new(&CATALOG).unwrap();
            if let Some(p) = prior {
                state.toggle_method(p).unwrap();
            }
            let before = state.expanded();
            state.toggle_method(i).unwrap();
            state.toggle_method(i).unwrap();
            prop_assert_eq!(state.expanded(), before);
        }

        #[test]
        fn only_the_last_toggled_is_open(i in 0usize..4, j in 0usize..4) {
            prop_assume!(i != j);
            let mut state = DashboardState::new(&CATALOG).unwrap();
            state.toggle_method(i).unwrap();
            state.toggle_method(j).unwrap();
            prop_assert_eq!(state.expanded(), Some(j));
            prop_assert!(!state.is_expanded(i));
        }

        #[test]
        fn switching_folders_collapses(i in 0usize..4, target in 0usize..2) {
            let mut state = DashboardState::new(&CATALOG).unwrap();
            state.toggle_method(i).unwrap();
            let key = CATALOG.folders()[target].key;
            state.select_folder(key).unwrap();
            prop_assert_eq!(state.active_key(), key);
            prop_assert_eq!(state.expanded(), None);
        }
    }
}
