use super::settings::{Setting, Settings};

impl Settings {
    /// Overlays environment overrides.
    ///
    /// A variable only takes effect when `lookup` returns a non-empty value;
    /// an empty variable never blanks out a value from the rc file.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for setting in Setting::ALL {
            if let Some(value) = lookup(setting.env_var()).filter(|v| !v.is_empty()) {
                self.set(setting, value);
            }
        }
        self
    }
}
