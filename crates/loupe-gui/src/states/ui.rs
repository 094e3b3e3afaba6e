use loupe_core::controller::InputEvent;

const MAX_LOG_LINES: usize = 200;

#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,

    /// Last non-hover event routed to the controller, for the status bar.
    pub last_event: Option<String>,

    /// Set while input comes from a touchscreen, so the pointer events egui
    /// synthesizes from touches are not routed a second time.
    pub touch_mode: bool,
    /// The touch that started on the widget, if one is down.
    pub active_touch: Option<egui::TouchId>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    pub fn record_event(&mut self, event: &InputEvent, default_prevented: bool) {
        if matches!(event, InputEvent::PointerMove { .. }) {
            return;
        }
        let suffix = if default_prevented { " (handled)" } else { "" };
        self.last_event = Some(format!("{event}{suffix}"));
    }
}
