//! Menus
//!
//! Menus live in a fixed arena indexed by `MenuId` and refer to each other
//! by id. A menu owns no data of its own: its nodes are rebuilt by its build
//! function every time it is entered.

mod node;
mod tree;

pub use node::{Command, Label, LabelContext, MenuNode, NodeAction, BACK_LABEL};
pub use tree::{MenuTree, Navigation};

use heapless::Vec;

use crate::traits::{RecordCounts, RecordKind};

/// Maximum nodes per menu, `[BACK]` included
pub const MAX_NODES: usize = 64;

/// Number of menus in the arena
pub const MENU_COUNT: usize = 12;

/// Menu identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuId {
    Main,
    Scan,
    Show,
    Attack,
    AccessPoints,
    Stations,
    Names,
    Ssids,
    AccessPoint,
    Station,
    Name,
    Ssid,
}

impl MenuId {
    pub const ALL: [MenuId; MENU_COUNT] = [
        MenuId::Main,
        MenuId::Scan,
        MenuId::Show,
        MenuId::Attack,
        MenuId::AccessPoints,
        MenuId::Stations,
        MenuId::Names,
        MenuId::Ssids,
        MenuId::AccessPoint,
        MenuId::Station,
        MenuId::Name,
        MenuId::Ssid,
    ];

    /// Position in the arena
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Record kind listed by this menu, if it is a record list
    pub const fn record_list(self) -> Option<RecordKind> {
        match self {
            MenuId::AccessPoints => Some(RecordKind::AccessPoint),
            MenuId::Stations => Some(RecordKind::Station),
            MenuId::Names => Some(RecordKind::Name),
            MenuId::Ssids => Some(RecordKind::Ssid),
            _ => None,
        }
    }

    /// List menu of a record kind
    pub const fn list_of(kind: RecordKind) -> MenuId {
        match kind {
            RecordKind::AccessPoint => MenuId::AccessPoints,
            RecordKind::Station => MenuId::Stations,
            RecordKind::Name => MenuId::Names,
            RecordKind::Ssid => MenuId::Ssids,
        }
    }

    /// Detail menu of a record kind
    pub const fn detail_of(kind: RecordKind) -> MenuId {
        match kind {
            RecordKind::AccessPoint => MenuId::AccessPoint,
            RecordKind::Station => MenuId::Station,
            RecordKind::Name => MenuId::Name,
            RecordKind::Ssid => MenuId::Ssid,
        }
    }
}

/// Fills a menu with nodes
///
/// Builders get record counts only; everything else about a record is
/// looked up when its label is rendered.
pub type BuildFn = fn(&mut MenuBuilder<'_>, &dyn RecordCounts);

/// A menu in the arena
#[derive(Debug, Clone)]
pub struct Menu {
    nodes: Vec<MenuNode, MAX_NODES>,
    /// Menu that `[BACK]` returns to; `None` for roots
    parent: Option<MenuId>,
    root: bool,
    selected: usize,
    build: Option<BuildFn>,
}

impl Menu {
    /// Create a menu
    ///
    /// A menu created without a parent is a root: it never gets a `[BACK]`
    /// node and its parent is never overwritten by navigation.
    pub const fn new(parent: Option<MenuId>, build: Option<BuildFn>) -> Self {
        Self {
            nodes: Vec::new(),
            parent,
            root: parent.is_none(),
            selected: 0,
            build,
        }
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// Cursor position, clamped to the current nodes
    pub fn selected(&self) -> usize {
        self.selected.min(self.nodes.len().saturating_sub(1))
    }

    /// Node under the cursor, `None` for an empty menu
    pub fn selected_node(&self) -> Option<&MenuNode> {
        self.nodes.get(self.selected())
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.selected = 0;
    }

    /// Restrict the cursor to the first `limit` nodes
    pub(crate) fn clamp_selection(&mut self, limit: usize) {
        let limit = limit.min(self.nodes.len());
        self.selected = self.selected.min(limit.saturating_sub(1));
    }

    pub(crate) fn select_next(&mut self) {
        let len = self.nodes.len();
        if len > 0 {
            self.selected = (self.selected() + 1) % len;
        }
    }

    pub(crate) fn select_previous(&mut self) {
        let len = self.nodes.len();
        if len > 0 {
            self.selected = (self.selected() + len - 1) % len;
        }
    }

    /// Rebuild the nodes and put the cursor on the first entry
    ///
    /// Returns `false` if the menu has no build function and stays without
    /// entries.
    pub(crate) fn rebuild(&mut self, counts: &dyn RecordCounts) -> bool {
        self.clear();
        if !self.root {
            let _ = self.nodes.push(MenuNode::back());
        }
        let Some(build) = self.build else {
            return false;
        };
        let mut builder = MenuBuilder::new(&mut self.nodes);
        build(&mut builder, counts);
        if builder.dropped > 0 {
            warn!("menu full, {} nodes dropped", builder.dropped);
        }
        if !self.root && self.nodes.len() > 1 {
            self.selected = 1;
        }
        true
    }

    pub(crate) fn set_parent(&mut self, parent: MenuId) {
        if !self.root {
            self.parent = Some(parent);
        }
    }
}

/// Appends nodes to a menu being built
pub struct MenuBuilder<'a> {
    nodes: &'a mut Vec<MenuNode, MAX_NODES>,
    dropped: usize,
}

impl<'a> MenuBuilder<'a> {
    fn new(nodes: &'a mut Vec<MenuNode, MAX_NODES>) -> Self {
        Self { nodes, dropped: 0 }
    }

    /// Append a node; returns `false` once the menu is full
    pub fn add_node(
        &mut self,
        label: impl Into<Label>,
        on_activate: NodeAction,
        on_hold: Option<NodeAction>,
    ) -> bool {
        let node = MenuNode {
            label: label.into(),
            on_activate,
            on_hold,
        };
        match self.nodes.push(node) {
            Ok(()) => true,
            Err(_) => {
                self.dropped += 1;
                false
            }
        }
    }

    /// Append a node without a hold action
    pub fn add(&mut self, label: impl Into<Label>, on_activate: NodeAction) -> bool {
        self.add_node(label, on_activate, None)
    }

    /// Append a node that navigates into `target`
    pub fn add_submenu(&mut self, label: impl Into<Label>, target: MenuId) -> bool {
        self.add(label, NodeAction::Submenu(target))
    }

    /// Number of nodes so far, `[BACK]` included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
