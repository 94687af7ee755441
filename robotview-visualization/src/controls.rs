//! User-facing toggles of the robot renderer

use robotview_io::KeyFile;

/// The boolean controls the robot renderer exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Draw the detailed model instead of the footprint
    Bling,
    Shadow,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Bling, Control::Shadow];

    /// Name used in the UI and in the preference file
    pub fn name(self) -> &'static str {
        match self {
            Control::Bling => "Bling",
            Control::Shadow => "Shadow",
        }
    }

    fn default_value(self) -> bool {
        match self {
            Control::Bling => true,
            Control::Shadow => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Toggle {
    value: bool,
    enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotControls {
    bling: Toggle,
    shadow: Toggle,
}

impl Default for RobotControls {
    fn default() -> Self {
        let toggle = |control: Control| Toggle {
            value: control.default_value(),
            enabled: true,
        };
        Self {
            bling: toggle(Control::Bling),
            shadow: toggle(Control::Shadow),
        }
    }
}

impl RobotControls {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle(&self, control: Control) -> &Toggle {
        match control {
            Control::Bling => &self.bling,
            Control::Shadow => &self.shadow,
        }
    }

    fn toggle_mut(&mut self, control: Control) -> &mut Toggle {
        match control {
            Control::Bling => &mut self.bling,
            Control::Shadow => &mut self.shadow,
        }
    }

    pub fn get(&self, control: Control) -> bool {
        self.toggle(control).value
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.toggle(control).enabled
    }

    /// User change; ignored while the control is disabled.
    /// Returns whether the value changed.
    pub fn set(&mut self, control: Control, value: bool) -> bool {
        let toggle = self.toggle_mut(control);
        if !toggle.enabled {
            tracing::debug!(control = control.name(), "ignoring change to disabled control");
            return false;
        }
        let changed = toggle.value != value;
        toggle.value = value;
        changed
    }

    pub fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.toggle_mut(control).enabled = enabled;
    }

    /// Restore values saved under `section`; absent entries keep their value.
    /// Returns whether any value changed.
    pub fn load_from(&mut self, prefs: &KeyFile, section: &str) -> bool {
        let mut changed = false;
        for control in Control::ALL {
            if let Some(value) = prefs.get_bool(section, control.name()) {
                let toggle = self.toggle_mut(control);
                changed |= toggle.value != value;
                toggle.value = value;
            }
        }
        changed
    }

    pub fn save_to(&self, prefs: &mut KeyFile, section: &str) {
        for control in Control::ALL {
            prefs.set_bool(section, control.name(), self.get(control));
        }
    }
}
