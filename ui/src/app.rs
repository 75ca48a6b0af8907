use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Members");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let State {
                config,
                fetcher,
                members,
            } = &mut self.state;
            widgets::members_panel(ui, members, fetcher.as_ref(), config.members_url());
        });
    }
}
