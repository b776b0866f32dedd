//! Attack control

/// Attack kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttackKind {
    /// Deauthenticate selected stations/access points
    Deauth,
    /// Broadcast beacons for the SSID list
    Beacon,
    /// Send probe requests for the SSID list
    Probe,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [AttackKind::Deauth, AttackKind::Beacon, AttackKind::Probe];

    /// Menu label
    pub const fn name(self) -> &'static str {
        match self {
            AttackKind::Deauth => "DEAUTH",
            AttackKind::Beacon => "BEACON",
            AttackKind::Probe => "PROBE",
        }
    }
}

/// Set of armed attack kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttackModes {
    pub deauth: bool,
    pub beacon: bool,
    pub probe: bool,
}

impl AttackModes {
    /// Check if `kind` is armed
    pub const fn is_set(&self, kind: AttackKind) -> bool {
        match kind {
            AttackKind::Deauth => self.deauth,
            AttackKind::Beacon => self.beacon,
            AttackKind::Probe => self.probe,
        }
    }

    /// Flip `kind`
    pub fn toggle(&mut self, kind: AttackKind) {
        let flag = match kind {
            AttackKind::Deauth => &mut self.deauth,
            AttackKind::Beacon => &mut self.beacon,
            AttackKind::Probe => &mut self.probe,
        };
        *flag = !*flag;
    }

    /// Check if anything is armed
    pub const fn any(&self) -> bool {
        self.deauth || self.beacon || self.probe
    }
}

/// Attack engine
pub trait AttackControl {
    /// Start the armed attacks; replaces whatever is running
    fn start(&mut self, modes: AttackModes);

    /// Stop all attacks
    fn stop(&mut self);

    /// Check if an attack is running
    fn is_running(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_modes() {
        let mut modes = AttackModes::default();
        assert!(!modes.any());

        modes.toggle(AttackKind::Beacon);
        assert!(modes.is_set(AttackKind::Beacon));
        assert!(!modes.is_set(AttackKind::Deauth));
        assert!(modes.any());

        modes.toggle(AttackKind::Beacon);
        assert!(!modes.any());
    }
}
