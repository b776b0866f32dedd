//! Menu nodes
//!
//! A node is a label plus what happens on click and, optionally, on hold.
//! Labels are descriptions, not text: they are rendered every frame so that
//! counts and selection marks stay live.

use core::fmt::Write;

use super::MenuId;
use crate::traits::{
    AttackControl, AttackKind, AttackModes, DetailField, LabelError, LabelText, RecordCounts,
    RecordKind, ScanMode, ScanSource,
};

/// Text of the node that leads back to the parent menu
pub const BACK_LABEL: &str = "[BACK]";

/// How a node's text is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Label {
    /// Fixed text
    Text(&'static str),
    /// List row of a record, prefixed with its selection mark
    Record(RecordKind, u16),
    /// Title followed by the number of records of a kind
    Count(&'static str, RecordKind),
    /// One detail of the record opened in a detail menu
    Detail(RecordKind, DetailField),
    /// Attack kind with its armed mark
    AttackToggle(AttackKind),
    /// START or STOP depending on the attack engine
    AttackRunState,
    /// SELECT or DESELECT for the record opened in a detail menu
    SelectState(RecordKind),
    /// `[BACK]`
    Back,
}

impl From<&'static str> for Label {
    fn from(text: &'static str) -> Self {
        Label::Text(text)
    }
}

/// Commands a node can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Start a scan and show its progress
    StartScan(ScanMode),
    /// Switch to the packet monitor screen
    OpenPacketMonitor,
    /// Arm or disarm an attack kind
    ToggleAttackMode(AttackKind),
    /// Start the armed attacks, or stop the running ones
    StartStopAttack,
    /// Open the detail menu of a record
    OpenRecord(RecordKind, u16),
    /// Flip the selection of a record
    ToggleRecord(RecordKind, u16),
    /// Flip the selection of the record opened in a detail menu
    ToggleCurrentRecord(RecordKind),
}

/// What activating a node does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NodeAction {
    /// Informational row
    Inert,
    /// Navigate into a menu
    Submenu(MenuId),
    /// Navigate to the parent menu
    Back,
    /// Run a command
    Run(Command),
}

/// One row of a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuNode {
    pub label: Label,
    pub on_activate: NodeAction,
    /// `None` lets a hold fall back to `on_activate`
    pub on_hold: Option<NodeAction>,
}

impl MenuNode {
    pub const fn new(label: Label, on_activate: NodeAction) -> Self {
        Self {
            label,
            on_activate,
            on_hold: None,
        }
    }

    pub const fn with_hold(mut self, on_hold: NodeAction) -> Self {
        self.on_hold = Some(on_hold);
        self
    }

    /// The node every non-root menu starts with
    pub const fn back() -> Self {
        Self::new(Label::Back, NodeAction::Back)
    }

    /// Write the node's text for the current frame
    pub fn write_label<S>(
        &self,
        ctx: &LabelContext<'_, S>,
        out: &mut LabelText,
    ) -> Result<(), LabelError>
    where
        S: ScanSource + AttackControl + ?Sized,
    {
        match self.label {
            Label::Text(text) => out.push_str(text).map_err(|_| LabelError::Overflow),
            Label::Back => out.push_str(BACK_LABEL).map_err(|_| LabelError::Overflow),
            Label::Record(kind, index) => {
                let mark = if ctx.services.is_selected(kind, index) { '*' } else { ' ' };
                out.push(mark).map_err(|_| LabelError::Overflow)?;
                ctx.services.write_label(kind, index, out)
            }
            Label::Count(title, kind) => {
                write!(out, "{} {}", title, ctx.services.count(kind))?;
                Ok(())
            }
            Label::Detail(kind, field) => {
                let index = ctx.current_record(kind)?;
                ctx.services.write_detail(kind, index, field, out)
            }
            Label::AttackToggle(kind) => {
                let mark = if ctx.attack_modes.is_set(kind) { 'x' } else { ' ' };
                write!(out, "[{}] {}", mark, kind.name())?;
                Ok(())
            }
            Label::AttackRunState => {
                let text = if ctx.services.is_running() { "STOP" } else { "START" };
                out.push_str(text).map_err(|_| LabelError::Overflow)
            }
            Label::SelectState(kind) => {
                let index = ctx.current_record(kind)?;
                let text = if ctx.services.is_selected(kind, index) {
                    "DESELECT"
                } else {
                    "SELECT"
                };
                out.push_str(text).map_err(|_| LabelError::Overflow)
            }
        }
    }
}

/// What labels are rendered against
pub struct LabelContext<'a, S: ?Sized> {
    pub services: &'a S,
    pub attack_modes: AttackModes,
    /// Record opened by the last `OpenRecord`
    pub selected_id: u16,
}

impl<S: ScanSource + ?Sized> LabelContext<'_, S> {
    /// The opened record, if it still exists
    fn current_record(&self, kind: RecordKind) -> Result<u16, LabelError> {
        if (self.selected_id as usize) < self.services.count(kind) {
            Ok(self.selected_id)
        } else {
            Err(LabelError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeServices;

    fn render(
        node: MenuNode,
        services: &FakeServices,
        modes: AttackModes,
        selected_id: u16,
    ) -> Result<LabelText, LabelError> {
        let ctx = LabelContext {
            services,
            attack_modes: modes,
            selected_id,
        };
        let mut out = LabelText::new();
        node.write_label(&ctx, &mut out).map(|_| out)
    }

    #[test]
    fn test_text_and_back() {
        let services = FakeServices::default();
        let node = MenuNode::new("SCAN".into(), NodeAction::Inert);
        let text = render(node, &services, AttackModes::default(), 0);
        assert_eq!(text.as_deref(), Ok("SCAN"));
        let back = render(MenuNode::back(), &services, AttackModes::default(), 0);
        assert_eq!(back.as_deref(), Ok(BACK_LABEL));
    }

    #[test]
    fn test_record_mark() {
        let mut services = FakeServices::default();
        services.counts[RecordKind::AccessPoint.index()] = 2;
        services.set_selected(RecordKind::AccessPoint, 1, true);

        let node = MenuNode::new(Label::Record(RecordKind::AccessPoint, 0), NodeAction::Inert);
        let text = render(node, &services, AttackModes::default(), 0);
        assert_eq!(text.as_deref(), Ok(" AccessPoint 0"));
        let node = MenuNode::new(Label::Record(RecordKind::AccessPoint, 1), NodeAction::Inert);
        let text = render(node, &services, AttackModes::default(), 0);
        assert_eq!(text.as_deref(), Ok("*AccessPoint 1"));
    }

    #[test]
    fn test_missing_record_fails() {
        let services = FakeServices::default();
        let node = MenuNode::new(Label::Record(RecordKind::Station, 3), NodeAction::Inert);
        assert_eq!(render(node, &services, AttackModes::default(), 0), Err(LabelError::NotFound));
        let label = Label::Detail(RecordKind::Station, DetailField::Mac);
        let node = MenuNode::new(label, NodeAction::Inert);
        assert_eq!(render(node, &services, AttackModes::default(), 0), Err(LabelError::NotFound));
    }

    #[test]
    fn test_count_label() {
        let mut services = FakeServices::default();
        services.counts[RecordKind::Station.index()] = 7;
        let node = MenuNode::new(Label::Count("STATIONS", RecordKind::Station), NodeAction::Inert);
        assert_eq!(render(node, &services, AttackModes::default(), 0).as_deref(), Ok("STATIONS 7"));
    }

    #[test]
    fn test_attack_labels() {
        let mut services = FakeServices::default();
        let mut modes = AttackModes::default();
        modes.toggle(AttackKind::Deauth);

        let node = MenuNode::new(Label::AttackToggle(AttackKind::Deauth), NodeAction::Inert);
        assert_eq!(render(node, &services, modes, 0).as_deref(), Ok("[x] DEAUTH"));
        let node = MenuNode::new(Label::AttackToggle(AttackKind::Probe), NodeAction::Inert);
        assert_eq!(render(node, &services, modes, 0).as_deref(), Ok("[ ] PROBE"));

        let node = MenuNode::new(Label::AttackRunState, NodeAction::Inert);
        assert_eq!(render(node, &services, modes, 0).as_deref(), Ok("START"));
        services.start(modes);
        assert_eq!(render(node, &services, modes, 0).as_deref(), Ok("STOP"));
    }

    #[test]
    fn test_select_state_follows_opened_record() {
        let mut services = FakeServices::default();
        services.counts[RecordKind::Name.index()] = 3;
        services.set_selected(RecordKind::Name, 2, true);
        let node = MenuNode::new(Label::SelectState(RecordKind::Name), NodeAction::Inert);
        assert_eq!(render(node, &services, AttackModes::default(), 1).as_deref(), Ok("SELECT"));
        assert_eq!(render(node, &services, AttackModes::default(), 2).as_deref(), Ok("DESELECT"));
    }

    #[test]
    fn test_hold_builder() {
        let node = MenuNode::new(Label::Back, NodeAction::Back).with_hold(NodeAction::Inert);
        assert_eq!(node.on_hold, Some(NodeAction::Inert));
    }
}
