use std::{sync::mpsc::Receiver, time::Duration};

use eframe::egui::{self, Button, CentralPanel, Grid, Layout, ScrollArea, TopBottomPanel};
use log::{error, info};

use crate::{
    alarm_edit::{AlarmDraft, EditingState},
    app::App,
    communication::{Mutation, MutationKind},
};

/// the root view, it owns the app context for the whole session
pub struct AlarmView {
    app: App,
    adding_alarm: Option<AlarmDraft>,
    mutations: Option<Receiver<Mutation>>,
    last_created: Option<String>,
}

impl AlarmView {
    #[must_use]
    pub fn new(mut app: App) -> Self {
        let mutations = match app.alarm_store() {
            Ok(store) => Some(store.subscribe()),
            Err(e) => {
                error!("alarm list will not update: {e}");
                None
            }
        };
        Self {
            app,
            adding_alarm: None,
            mutations,
            last_created: None,
        }
    }

    fn drain_mutations(&mut self) {
        let Some(mutations) = &self.mutations else {
            return;
        };
        for mutation in mutations.try_iter() {
            match mutation.kind {
                MutationKind::AlarmCreated { index, time } => {
                    info!("{} store: alarm {index} created at `{time}`", mutation.store_id);
                    self.last_created = Some(time);
                }
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("time_and_ctrl").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let theme_icon = match self.app.config().theme {
                    crate::config::Theme::Dark => self.app.icon("sun"),
                    crate::config::Theme::Light => self.app.icon("moon"),
                };
                if ui.add(Button::new(theme_icon)).clicked() {
                    let config = self.app.config_mut();
                    config.theme = !config.theme;
                }

                let mut navigate_to = None;
                if let Some(router) = self.app.router() {
                    for route in router.routes() {
                        let selected = router.current() == route;
                        if ui.selectable_label(selected, &route.name).clicked() {
                            navigate_to = Some(route.path.clone());
                        }
                    }
                }
                if let (Some(path), Some(router)) = (navigate_to, self.app.router_mut()) {
                    if let Err(e) = router.navigate(&path) {
                        error!("{e}");
                    }
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} {}",
                        self.app.icon("clock"),
                        chrono::Local::now()
                            .naive_local()
                            .format(&self.app.config().time_format)
                    ));
                });
            });
        });
    }

    fn render_alarms(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(self.app.icon("plus"))
            .on_hover_text("add alarm")
            .clicked()
        {
            self.adding_alarm = Some(AlarmDraft::default());
        }
        if let Some(time) = &self.last_created {
            ui.label(format!("{} last added: {time}", self.app.icon("bell")));
        }

        let store = match self.app.alarm_store() {
            Ok(store) => store,
            Err(e) => {
                ui.label(e.to_string());
                return;
            }
        };
        if store.is_empty() {
            ui.label("no alarms yet");
            return;
        }
        ScrollArea::vertical().show(ui, |ui| {
            Grid::new("alarms").striped(true).show(ui, |ui| {
                for (i, time) in store.alarms().iter().enumerate() {
                    ui.label(format!("#{}", i + 1));
                    ui.label(time);
                    ui.end_row();
                }
            });
        });
    }

    fn render_about(ui: &mut egui::Ui) {
        ui.heading("roosty alarms");
        ui.label("keeps a list of alarm times for as long as the app is open");
    }
}

impl eframe::App for AlarmView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // keep the header clock ticking
        ctx.request_repaint_after(Duration::from_secs(1));
        ctx.set_visuals(self.app.config().theme.into());

        if let Some(editing) = &mut self.adding_alarm {
            match editing.render_alarm_editor(ctx) {
                EditingState::Done(time) => {
                    self.adding_alarm = None;
                    match self.app.alarm_store() {
                        Ok(store) => store.create_alarm(time),
                        Err(e) => error!("couldn't add alarm: {e}"),
                    }
                }
                EditingState::Cancelled => {
                    self.adding_alarm = None;
                }
                EditingState::Editing => {}
            }
        }
        self.drain_mutations();

        self.render_header(ctx);
        let page = self
            .app
            .router()
            .map_or_else(|| "alarms".to_string(), |router| router.current().name.clone());
        CentralPanel::default().show(ctx, |ui| match page.as_str() {
            "about" => Self::render_about(ui),
            _ => self.render_alarms(ui),
        });
    }
}
