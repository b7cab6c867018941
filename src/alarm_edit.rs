use eframe::egui::{self, Window};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmDraft {
    time: String,
}

impl Default for AlarmDraft {
    // start at the current time so the user only has to nudge it
    fn default() -> Self {
        Self {
            time: chrono::Local::now().naive_local().format("%H:%M").to_string(),
        }
    }
}

impl AlarmDraft {
    #[must_use]
    pub fn new(time: impl Into<String>) -> Self {
        Self { time: time.into() }
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn render_alarm_editor(&mut self, ctx: &egui::Context) -> EditingState {
        let mut ret = EditingState::Editing;
        Window::new("new alarm")
            .collapsible(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("time");
                    ui.text_edit_singleline(&mut self.time);
                });
                ui.horizontal(|ui| {
                    if ui.button("done").clicked() {
                        ret = EditingState::Done(self.time.clone());
                    } else if ui.button("cancel").clicked() {
                        ret = EditingState::Cancelled;
                    }
                });
            });
        ret
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditingState {
    Cancelled,
    Editing,
    Done(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_current_time() {
        let draft = AlarmDraft::default();
        assert!(chrono::NaiveTime::parse_from_str(draft.time(), "%H:%M").is_ok());
    }
}
