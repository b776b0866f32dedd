//! Menu arena and navigation

use super::{BuildFn, Menu, MenuId, MenuNode, MENU_COUNT};
use crate::traits::RecordCounts;

/// Outcome of a menu change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Navigation {
    /// The target is now current and built
    Entered,
    /// The target is now current but has no build function
    Inert,
    /// The target is an empty record list; nothing changed
    Ignored,
}

/// All menus plus the one on screen
#[derive(Debug, Clone)]
pub struct MenuTree {
    menus: [Menu; MENU_COUNT],
    current: Option<MenuId>,
}

impl MenuTree {
    /// Create the arena, asking `menu` for the parent and build function of
    /// every id
    pub fn from_fn(mut menu: impl FnMut(MenuId) -> (Option<MenuId>, Option<BuildFn>)) -> Self {
        let menus = core::array::from_fn(|i| {
            let (parent, build) = menu(MenuId::ALL[i]);
            Menu::new(parent, build)
        });
        Self {
            menus,
            current: None,
        }
    }

    pub fn current(&self) -> Option<MenuId> {
        self.current
    }

    pub fn menu(&self, id: MenuId) -> &Menu {
        &self.menus[id.index()]
    }

    /// The menu on screen
    pub fn current_menu(&self) -> Option<&Menu> {
        self.current.map(|id| self.menu(id))
    }

    /// Cursor position in the menu on screen
    pub fn selected_index(&self) -> usize {
        self.current_menu().map_or(0, Menu::selected)
    }

    /// Node under the cursor, if any
    pub fn selected_node(&self) -> Option<&MenuNode> {
        self.current_menu().and_then(Menu::selected_node)
    }

    /// Make `target` the current menu
    ///
    /// The menu being left is cleared. Moving into a non-root menu from
    /// somewhere other than its own descendants records where it was entered
    /// from, so `[BACK]` returns there. Record lists without records are not
    /// entered, except to rebuild the list already on screen.
    pub fn change_menu(&mut self, target: MenuId, counts: &dyn RecordCounts) -> Navigation {
        let previous = self.current;
        if previous != Some(target) {
            if let Some(kind) = target.record_list() {
                if counts.count(kind) == 0 {
                    debug!("menu {} has no records, not entered", target);
                    return Navigation::Ignored;
                }
            }
            if let Some(prev) = previous {
                if !self.is_ancestor(target, prev) {
                    self.menus[target.index()].set_parent(prev);
                }
            }
        }
        self.enter(target, counts)
    }

    /// Return to the parent of the current menu; no-op at a root
    pub fn go_back(&mut self, counts: &dyn RecordCounts) -> Navigation {
        let Some(parent) = self.current_menu().and_then(Menu::parent) else {
            return Navigation::Ignored;
        };
        self.enter(parent, counts)
    }

    /// Move the cursor down, wrapping to the top
    pub fn select_next(&mut self) {
        if let Some(menu) = self.current_mut() {
            menu.select_next();
        }
    }

    /// Move the cursor up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if let Some(menu) = self.current_mut() {
            menu.select_previous();
        }
    }

    /// Restrict the cursor of the current menu to its first `limit` nodes
    pub fn clamp_selection(&mut self, limit: usize) {
        if let Some(menu) = self.current_mut() {
            menu.clamp_selection(limit);
        }
    }

    fn current_mut(&mut self) -> Option<&mut Menu> {
        let id = self.current?;
        Some(&mut self.menus[id.index()])
    }

    fn enter(&mut self, target: MenuId, counts: &dyn RecordCounts) -> Navigation {
        if let Some(prev) = self.current {
            if prev != target {
                self.menus[prev.index()].clear();
            }
        }
        self.current = Some(target);
        if self.menus[target.index()].rebuild(counts) {
            debug!("entered menu {}", target);
            Navigation::Entered
        } else {
            warn!("menu {} has no build function", target);
            Navigation::Inert
        }
    }

    /// Check if `ancestor` is on the parent chain of `menu`
    fn is_ancestor(&self, ancestor: MenuId, menu: MenuId) -> bool {
        let mut cursor = self.menu(menu).parent();
        for _ in 0..MENU_COUNT {
            match cursor {
                Some(id) if id == ancestor => return true,
                Some(id) => cursor = self.menu(id).parent(),
                None => return false,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Label, MenuBuilder, NodeAction};
    use crate::traits::RecordKind;

    struct Counts(usize);

    impl RecordCounts for Counts {
        fn count(&self, _kind: RecordKind) -> usize {
            self.0
        }
    }

    fn build_main(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
        menu.add_submenu("SCAN", MenuId::Scan);
        menu.add_submenu("SHOW", MenuId::Show);
    }

    fn build_show(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
        menu.add_submenu("APs", MenuId::AccessPoints);
    }

    fn build_list(menu: &mut MenuBuilder<'_>, counts: &dyn RecordCounts) {
        for i in 0..counts.count(RecordKind::AccessPoint) {
            menu.add(Label::Record(RecordKind::AccessPoint, i as u16), NodeAction::Inert);
        }
    }

    fn tree() -> MenuTree {
        MenuTree::from_fn(|id| match id {
            MenuId::Main => (None, Some(build_main as BuildFn)),
            MenuId::Show => (Some(MenuId::Main), Some(build_show as BuildFn)),
            MenuId::AccessPoints => (Some(MenuId::Show), Some(build_list as BuildFn)),
            MenuId::Scan => (Some(MenuId::Main), None),
            _ => (Some(MenuId::Main), None),
        })
    }

    #[test]
    fn test_root_entry() {
        let mut tree = tree();
        assert_eq!(tree.change_menu(MenuId::Main, &Counts(0)), Navigation::Entered);
        assert_eq!(tree.current(), Some(MenuId::Main));
        assert_eq!(tree.current_menu().map(Menu::len), Some(2));
        assert_eq!(tree.selected_index(), 0);
    }

    #[test]
    fn test_forward_and_back() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(0));
        tree.change_menu(MenuId::Show, &Counts(0));
        assert_eq!(tree.selected_index(), 1);
        assert_eq!(tree.selected_node().map(|n| n.label), Some(Label::Text("APs")));

        assert_eq!(tree.go_back(&Counts(0)), Navigation::Entered);
        assert_eq!(tree.current(), Some(MenuId::Main));
        // Leaving clears the menu
        assert!(tree.menu(MenuId::Show).is_empty());
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(0));
        tree.select_next();
        assert_eq!(tree.go_back(&Counts(0)), Navigation::Ignored);
        assert_eq!(tree.current(), Some(MenuId::Main));
        assert_eq!(tree.selected_index(), 1);
    }

    #[test]
    fn test_empty_list_not_entered() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(0));
        tree.change_menu(MenuId::Show, &Counts(0));
        assert_eq!(
            tree.change_menu(MenuId::AccessPoints, &Counts(0)),
            Navigation::Ignored
        );
        assert_eq!(tree.current(), Some(MenuId::Show));
        assert_eq!(tree.current_menu().map(Menu::len), Some(2));
    }

    #[test]
    fn test_list_entry() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(3));
        tree.change_menu(MenuId::Show, &Counts(3));
        assert_eq!(
            tree.change_menu(MenuId::AccessPoints, &Counts(3)),
            Navigation::Entered
        );
        assert_eq!(tree.current_menu().map(Menu::len), Some(4));
    }

    #[test]
    fn test_rebuild_current_list_when_empty() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(2));
        tree.change_menu(MenuId::Show, &Counts(2));
        tree.change_menu(MenuId::AccessPoints, &Counts(2));

        assert_eq!(
            tree.change_menu(MenuId::AccessPoints, &Counts(0)),
            Navigation::Entered
        );
        assert_eq!(tree.current_menu().map(Menu::len), Some(1));
        assert_eq!(tree.selected_index(), 0);
    }

    #[test]
    fn test_missing_build_is_inert() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(0));
        assert_eq!(tree.change_menu(MenuId::Scan, &Counts(0)), Navigation::Inert);
        assert_eq!(tree.current(), Some(MenuId::Scan));
        assert_eq!(tree.current_menu().map(Menu::len), Some(1));
        assert_eq!(tree.go_back(&Counts(0)), Navigation::Entered);
        assert_eq!(tree.current(), Some(MenuId::Main));
    }

    #[test]
    fn test_parent_follows_entry_point() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(1));
        tree.change_menu(MenuId::Scan, &Counts(1));
        // Jump sideways into the list from Scan
        tree.change_menu(MenuId::AccessPoints, &Counts(1));
        assert_eq!(tree.menu(MenuId::AccessPoints).parent(), Some(MenuId::Scan));
        tree.go_back(&Counts(1));
        assert_eq!(tree.current(), Some(MenuId::Scan));
    }

    #[test]
    fn test_jump_to_ancestor_keeps_chain() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(1));
        tree.change_menu(MenuId::Show, &Counts(1));
        tree.change_menu(MenuId::AccessPoints, &Counts(1));
        tree.change_menu(MenuId::Show, &Counts(1));
        assert_eq!(tree.menu(MenuId::Show).parent(), Some(MenuId::Main));
    }

    #[test]
    fn test_root_parent_never_set() {
        let mut tree = tree();
        tree.change_menu(MenuId::Main, &Counts(0));
        tree.change_menu(MenuId::Show, &Counts(0));
        tree.change_menu(MenuId::Main, &Counts(0));
        assert_eq!(tree.menu(MenuId::Main).parent(), None);
    }
}
