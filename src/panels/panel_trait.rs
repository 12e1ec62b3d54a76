use egui::Ui;

use crate::data::DotGridData;

/// Shared state carried by every panel: title, icon, visibility.
#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon,
            visible: true,
        }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    /// Icon without the title, for collapsed/narrow labels.
    fn icon_only(&self) -> Option<&'static str> {
        let icon = self.state().icon;
        if icon.is_empty() {
            None
        } else {
            Some(icon)
        }
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{} {}", icon, self.title()),
            None => self.title().to_string(),
        }
    }

    // Optional hook with default empty impl
    fn render_panel(&mut self, _ui: &mut Ui, _data: &mut DotGridData<'_>) {}
}
