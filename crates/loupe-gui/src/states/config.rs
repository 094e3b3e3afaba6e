use loupe_core::config::WidgetConfig;

/// Widget options as edited in the side panel. `applied` is what the running
/// controller was mounted with.
#[derive(Default)]
pub struct ConfigState {
    pub widget: WidgetConfig,
    pub applied: WidgetConfig,
    pub error: Option<String>,
}

impl ConfigState {
    pub fn is_dirty(&self) -> bool {
        self.widget != self.applied
    }

    pub fn replace(&mut self, config: WidgetConfig) {
        self.widget = config;
    }
}
