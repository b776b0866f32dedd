//! UI controller
//!
//! Owns the buttons, the menu arena and the screen mode. The board calls
//! `update()` from its main loop as often as it likes; input is polled on
//! every call while frames are paced by the draw interval.

use heapless::Vec;
use kestrel_display::{DisplayError, DrawSurface, GlyphMetrics};

use super::input;
use super::layout;
use super::render::{FrameInfo, Renderer};
use super::scheduler::{FrameScheduler, ScrollState};
use crate::button::{ButtonId, ButtonInput, ButtonSet, BUTTON_COUNT};
use crate::config::{ConfigError, UiConfig};
use crate::menu::{Command, LabelContext, MenuId, MenuTree, Navigation, NodeAction};
use crate::state::{ModeEvent, NavEvent, ScreenMode};
use crate::traits::{AttackModes, RecordCounts, RecordKind, ScanMode, Services};

/// Maximum problems `setup()` can report
pub const MAX_SETUP_ERRORS: usize = BUTTON_COUNT + 2;

/// The UI
pub struct UiController<I> {
    config: UiConfig,
    mode: ScreenMode,
    /// Time the current mode was entered
    mode_since_ms: u32,
    tree: MenuTree,
    buttons: ButtonSet<I>,
    scheduler: FrameScheduler,
    scroll: ScrollState,
    renderer: Renderer,
    attack_modes: AttackModes,
    /// Record opened by the last `OpenRecord`
    selected_id: u16,
    /// Panel power change not yet applied
    power_request: Option<bool>,
    now_ms: u32,
}

impl<I: ButtonInput> UiController<I> {
    /// Create a controller with the device menus
    pub fn new(config: UiConfig, buttons: ButtonSet<I>) -> Self {
        Self::with_tree(config, buttons, layout::device_tree())
    }

    /// Create a controller with a custom menu arena
    pub fn with_tree(config: UiConfig, buttons: ButtonSet<I>, tree: MenuTree) -> Self {
        Self {
            config,
            mode: ScreenMode::Off,
            mode_since_ms: 0,
            tree,
            buttons,
            scheduler: FrameScheduler::new(config.draw_interval_ms),
            scroll: ScrollState::default(),
            renderer: Renderer::new(config),
            attack_modes: AttackModes::default(),
            selected_id: 0,
            power_request: None,
            now_ms: 0,
        }
    }

    /// Check the config, set up the buttons and enter the main menu
    ///
    /// Problems are reported but never fatal: an invalid config is replaced
    /// by the defaults, a button without input stays inert and a menu
    /// without build function stays empty.
    pub fn setup(&mut self, counts: &dyn RecordCounts) -> Vec<ConfigError, MAX_SETUP_ERRORS> {
        let mut errors = Vec::new();

        if let Err(e) = self.config.validate() {
            warn!("invalid ui config ({}), using defaults", e);
            let _ = errors.push(e);
            self.config = UiConfig::default();
            self.scheduler = FrameScheduler::new(self.config.draw_interval_ms);
            self.renderer = Renderer::new(self.config);
        }

        for e in self.buttons.setup_all() {
            let _ = errors.push(e);
        }

        if self.tree.change_menu(MenuId::Main, counts) == Navigation::Inert {
            let _ = errors.push(ConfigError::MissingBuild(MenuId::Main));
        }

        info!("ui ready, {} setup problems", errors.len());
        errors
    }

    /// Switch the display on and show the intro
    pub fn on(&mut self, now_ms: u32) {
        if self.mode == ScreenMode::Off {
            self.now_ms = now_ms;
            self.apply(ModeEvent::PowerOn);
            self.power_request = Some(true);
        }
    }

    /// Switch the display off
    pub fn off(&mut self) {
        if self.mode != ScreenMode::Off {
            self.apply(ModeEvent::PowerOff);
            self.power_request = Some(false);
        }
    }

    /// Poll input, run timers and draw a frame if one is due
    ///
    /// Returns what was drawn, or `None` if no frame was due, the display is
    /// off or the surface failed.
    pub fn update<S, D>(
        &mut self,
        now_ms: u32,
        services: &mut S,
        surface: &mut D,
    ) -> Option<FrameInfo>
    where
        S: Services,
        D: DrawSurface + GlyphMetrics,
    {
        self.now_ms = now_ms;

        let timing = self.config.button_timing();
        for (id, edge) in self.buttons.poll_all(now_ms, &timing) {
            // Pressed together with a button that changed the screen
            if self.buttons.get(id).is_consumed() {
                continue;
            }
            if let Some(event) = input::decode(self.mode, id, edge) {
                self.dispatch(event, Some(id), services);
            }
        }

        if let Some(on) = self.power_request.take() {
            if let Err(e) = surface.set_power(on) {
                warn!("display power change failed: {}", e);
            }
        }

        self.run_timers(services);

        if !self.mode.is_drawn() || !self.scheduler.is_due(now_ms) || !surface.is_ready() {
            return None;
        }
        self.scheduler.mark_drawn(now_ms);
        self.clamp_to_records(services);

        match self.draw(services, surface) {
            Ok(frame) => {
                self.scroll
                    .advance(self.config.scroll_speed, frame.selected_label_px, frame.row_px);
                Some(frame)
            }
            Err(e) => {
                warn!("frame dropped: {}", e);
                None
            }
        }
    }

    /// Feed a navigation event that did not come from a button
    pub fn handle<S: Services>(&mut self, event: NavEvent, services: &mut S) {
        self.dispatch(event, None, services);
    }

    /// Start a scan and show its progress until the scanner is done
    pub fn start_scan<S: Services>(&mut self, mode: ScanMode, services: &mut S) {
        info!("starting scan {}", mode);
        services.start_scan(mode);
        self.apply(ModeEvent::ScanStarted);
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn current_menu(&self) -> Option<MenuId> {
        self.tree.current()
    }

    pub fn selected_index(&self) -> usize {
        self.tree.selected_index()
    }

    pub fn selected_id(&self) -> u16 {
        self.selected_id
    }

    pub fn attack_modes(&self) -> AttackModes {
        self.attack_modes
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn buttons(&self) -> &ButtonSet<I> {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonSet<I> {
        &mut self.buttons
    }

    fn dispatch<S: Services>(
        &mut self,
        event: NavEvent,
        source: Option<ButtonId>,
        services: &mut S,
    ) {
        debug!("nav {} in {}", event, self.mode);
        match event {
            NavEvent::TogglePower => {
                if self.mode == ScreenMode::Off {
                    self.on(self.now_ms);
                } else {
                    self.off();
                }
            }
            NavEvent::ToggleButtonTest => self.apply(ModeEvent::ToggleButtonTest),
            NavEvent::Dismiss => self.apply(ModeEvent::ButtonActivity),
            _ if !self.mode.accepts_navigation() => {}
            NavEvent::SelectNext => {
                self.tree.select_next();
                self.scroll.reset();
            }
            NavEvent::SelectPrevious => {
                self.tree.select_previous();
                self.scroll.reset();
            }
            NavEvent::Activate => {
                if let Some(node) = self.tree.selected_node().copied() {
                    self.run(node.on_activate, services);
                }
            }
            NavEvent::ActivateHold => {
                let Some(node) = self.tree.selected_node().copied() else {
                    return;
                };
                match (node.on_hold, source) {
                    (Some(action), _) => self.run(action, services),
                    // Release of the press becomes a tap
                    (None, Some(id)) => self.buttons.get_mut(id).cancel_hold(),
                    (None, None) => self.run(node.on_activate, services),
                }
            }
            NavEvent::Back => {
                self.tree.go_back(services);
                self.scroll.reset();
            }
        }
    }

    fn run<S: Services>(&mut self, action: NodeAction, services: &mut S) {
        match action {
            NodeAction::Inert => {}
            NodeAction::Submenu(target) => {
                self.tree.change_menu(target, services);
                self.scroll.reset();
            }
            NodeAction::Back => {
                self.tree.go_back(services);
                self.scroll.reset();
            }
            NodeAction::Run(command) => self.execute(command, services),
        }
    }

    fn execute<S: Services>(&mut self, command: Command, services: &mut S) {
        match command {
            Command::StartScan(mode) => self.start_scan(mode, services),
            Command::OpenPacketMonitor => self.apply(ModeEvent::OpenPacketMonitor),
            Command::ToggleAttackMode(kind) => self.attack_modes.toggle(kind),
            Command::StartStopAttack => {
                if services.is_running() {
                    info!("stopping attack");
                    services.stop();
                } else {
                    info!("starting attack {}", self.attack_modes);
                    services.start(self.attack_modes);
                }
            }
            Command::OpenRecord(kind, index) => {
                if !record_exists(services, kind, index) {
                    debug!("record {} {} gone", kind, index);
                    return;
                }
                self.selected_id = index;
                self.tree.change_menu(MenuId::detail_of(kind), services);
                self.scroll.reset();
            }
            Command::ToggleRecord(kind, index) => toggle_record(services, kind, index),
            Command::ToggleCurrentRecord(kind) => toggle_record(services, kind, self.selected_id),
        }
    }

    fn apply(&mut self, event: ModeEvent) {
        let next = self.mode.transition(event);
        if next != self.mode {
            info!("screen {} -> {}", self.mode, next);
            self.mode = next;
            self.mode_since_ms = self.now_ms;
            self.scheduler.reset();
            self.scroll.reset();
            // Presses that led here belong to the previous screen
            self.buttons.consume_all();
        }
    }

    fn run_timers<S: Services>(&mut self, services: &mut S) {
        match self.mode {
            ScreenMode::Intro
                if self.now_ms.wrapping_sub(self.mode_since_ms) >= self.config.intro_time_ms =>
            {
                self.apply(ModeEvent::IntroElapsed);
                if self.tree.current().is_none() {
                    self.tree.change_menu(MenuId::Main, services);
                }
            }
            ScreenMode::LoadScan if !services.is_scanning() => {
                self.apply(ModeEvent::ScanFinished);
                // Counts changed, rebuild what is on screen
                if let Some(id) = self.tree.current() {
                    self.tree.change_menu(id, services);
                }
            }
            _ => {}
        }
    }

    /// Keep the cursor of a record list on records that still exist
    fn clamp_to_records<S: Services>(&mut self, services: &S) {
        if let Some(kind) = self.tree.current().and_then(MenuId::record_list) {
            self.tree.clamp_selection(1 + services.count(kind));
        }
    }

    fn draw<S, D>(&self, services: &S, surface: &mut D) -> Result<FrameInfo, DisplayError>
    where
        S: Services,
        D: DrawSurface + GlyphMetrics,
    {
        surface.clear()?;
        let mut selected_label_px = 0;
        match self.mode {
            ScreenMode::Off => {}
            ScreenMode::Intro => self.renderer.intro(surface)?,
            ScreenMode::Menu => {
                let ctx = LabelContext {
                    services,
                    attack_modes: self.attack_modes,
                    selected_id: self.selected_id,
                };
                selected_label_px = self
                    .renderer
                    .menu(&self.tree, &ctx, self.scroll.offset(), surface)?;
            }
            ScreenMode::LoadScan => self.renderer.loading_scan(services, surface)?,
            ScreenMode::PacketMonitor => self.renderer.packet_monitor(services, surface)?,
            ScreenMode::ButtonTest => self.renderer.button_test(&self.buttons, surface)?,
        }
        surface.commit()?;
        Ok(FrameInfo {
            mode: self.mode,
            selected_label_px,
            row_px: self.renderer.row_px(surface),
        })
    }
}

fn record_exists<S: Services>(services: &S, kind: RecordKind, index: u16) -> bool {
    (index as usize) < services.count(kind)
}

fn toggle_record<S: Services>(services: &mut S, kind: RecordKind, index: u16) {
    if record_exists(services, kind, index) {
        let selected = services.is_selected(kind, index);
        services.set_selected(kind, index, !selected);
    }
}
