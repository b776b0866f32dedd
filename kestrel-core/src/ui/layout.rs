//! Device menu layout
//!
//! ```text
//! MAIN
//!  ├─ SCAN ─────────── scan modes
//!  ├─ SELECT ───────── ACCESS POINTS / STATIONS / NAMES / SSIDs
//!  │                    └─ record list ── record details
//!  ├─ ATTACK ───────── attack kinds, START/STOP
//!  └─ PACKET MONITOR
//! ```

use crate::menu::{BuildFn, Command, Label, MenuBuilder, MenuId, MenuTree, NodeAction};
use crate::traits::{AttackKind, DetailField, RecordCounts, RecordKind, ScanMode};

/// Build the arena with the device menus
pub fn device_tree() -> MenuTree {
    MenuTree::from_fn(|id| (default_parent(id), Some(build_fn(id))))
}

/// Parent a menu returns to unless it was entered from elsewhere
pub const fn default_parent(id: MenuId) -> Option<MenuId> {
    match id {
        MenuId::Main => None,
        MenuId::Scan | MenuId::Show | MenuId::Attack => Some(MenuId::Main),
        MenuId::AccessPoints | MenuId::Stations | MenuId::Names | MenuId::Ssids => {
            Some(MenuId::Show)
        }
        MenuId::AccessPoint => Some(MenuId::AccessPoints),
        MenuId::Station => Some(MenuId::Stations),
        MenuId::Name => Some(MenuId::Names),
        MenuId::Ssid => Some(MenuId::Ssids),
    }
}

fn build_fn(id: MenuId) -> BuildFn {
    match id {
        MenuId::Main => build_main,
        MenuId::Scan => build_scan,
        MenuId::Show => build_show,
        MenuId::Attack => build_attack,
        MenuId::AccessPoints => build_access_points,
        MenuId::Stations => build_stations,
        MenuId::Names => build_names,
        MenuId::Ssids => build_ssids,
        MenuId::AccessPoint => build_access_point,
        MenuId::Station => build_station,
        MenuId::Name => build_name,
        MenuId::Ssid => build_ssid,
    }
}

fn build_main(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    menu.add_submenu("SCAN", MenuId::Scan);
    menu.add_submenu("SELECT", MenuId::Show);
    menu.add_submenu("ATTACK", MenuId::Attack);
    menu.add("PACKET MONITOR", NodeAction::Run(Command::OpenPacketMonitor));
}

fn build_scan(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    menu.add("SCAN AP + ST", NodeAction::Run(Command::StartScan(ScanMode::All)));
    menu.add("SCAN APs", NodeAction::Run(Command::StartScan(ScanMode::AccessPoints)));
    menu.add("SCAN Stations", NodeAction::Run(Command::StartScan(ScanMode::Stations)));
}

fn build_show(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    for (title, kind) in [
        ("ACCESS POINTS", RecordKind::AccessPoint),
        ("STATIONS", RecordKind::Station),
        ("NAMES", RecordKind::Name),
        ("SSIDs", RecordKind::Ssid),
    ] {
        menu.add_submenu(Label::Count(title, kind), MenuId::list_of(kind));
    }
}

fn build_attack(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    for kind in AttackKind::ALL {
        menu.add(
            Label::AttackToggle(kind),
            NodeAction::Run(Command::ToggleAttackMode(kind)),
        );
    }
    menu.add(Label::AttackRunState, NodeAction::Run(Command::StartStopAttack));
}

/// One row per record: tap opens it, hold flips its selection
fn build_record_list(menu: &mut MenuBuilder<'_>, counts: &dyn RecordCounts, kind: RecordKind) {
    let count = counts.count(kind).min(u16::MAX as usize);
    for index in 0..count as u16 {
        let added = menu.add_node(
            Label::Record(kind, index),
            NodeAction::Run(Command::OpenRecord(kind, index)),
            Some(NodeAction::Run(Command::ToggleRecord(kind, index))),
        );
        if !added {
            break;
        }
    }
}

fn build_access_points(menu: &mut MenuBuilder<'_>, counts: &dyn RecordCounts) {
    build_record_list(menu, counts, RecordKind::AccessPoint);
}

fn build_stations(menu: &mut MenuBuilder<'_>, counts: &dyn RecordCounts) {
    build_record_list(menu, counts, RecordKind::Station);
}

fn build_names(menu: &mut MenuBuilder<'_>, counts: &dyn RecordCounts) {
    build_record_list(menu, counts, RecordKind::Name);
}

fn build_ssids(menu: &mut MenuBuilder<'_>, counts: &dyn RecordCounts) {
    build_record_list(menu, counts, RecordKind::Ssid);
}

/// Detail rows followed by the SELECT/DESELECT toggle
fn build_record_details(menu: &mut MenuBuilder<'_>, kind: RecordKind, fields: &[DetailField]) {
    for &field in fields {
        menu.add(Label::Detail(kind, field), NodeAction::Inert);
    }
    menu.add(
        Label::SelectState(kind),
        NodeAction::Run(Command::ToggleCurrentRecord(kind)),
    );
}

fn build_access_point(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    build_record_details(
        menu,
        RecordKind::AccessPoint,
        &[
            DetailField::Title,
            DetailField::Mac,
            DetailField::Channel,
            DetailField::Rssi,
            DetailField::Encryption,
            DetailField::Vendor,
        ],
    );
}

fn build_station(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    build_record_details(
        menu,
        RecordKind::Station,
        &[
            DetailField::Title,
            DetailField::Mac,
            DetailField::Vendor,
            DetailField::Network,
            DetailField::Packets,
        ],
    );
}

fn build_name(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    build_record_details(
        menu,
        RecordKind::Name,
        &[DetailField::Title, DetailField::Mac, DetailField::Vendor],
    );
}

fn build_ssid(menu: &mut MenuBuilder<'_>, _counts: &dyn RecordCounts) {
    build_record_details(
        menu,
        RecordKind::Ssid,
        &[DetailField::Title, DetailField::Encryption],
    );
}
