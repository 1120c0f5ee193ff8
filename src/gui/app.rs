// src/gui/app.rs
use std::error::Error;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use crate::config::state::AppState;
use crate::group::{self, FilterTag, Group, Summary};
use crate::record::RecordSet;
use crate::worker::{self, RefreshEvent};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Tablero de pólizas",
        options,
        Box::new(|cc| {
            let events = worker::spawn(cc.egui_ctx.clone());
            Ok(Box::new(App::new(AppState::default(), events)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Current record list; replaced wholesale on each successful refresh.
    pub records: RecordSet,

    /// Refresh results from the worker thread.
    pub events: Receiver<RefreshEvent>,

    // derived view, rebuilt on search/filter/refresh
    pub base_rows: Vec<usize>,   // search-filtered record indices
    pub summary: Summary,        // tiles + indicators, over base_rows
    pub table: Vec<Group>,       // table-granularity groups after tile filter

    /// Open detail window: one table group (indices into `records`).
    pub detail: Option<Group>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, events: Receiver<RefreshEvent>) -> Self {
        logf!("Init: waiting for first feed load");
        let mut app = Self {
            state,
            records: RecordSet::default(),
            events,
            base_rows: Vec::new(),
            summary: Summary::default(),
            table: Vec::new(),
            detail: None,
            status: s!("Cargando datos…"),
        };
        app.rebuild_view();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Drain worker events. On success the record list is swapped atomically
    /// (from the UI's point of view) and the view rebuilt; on failure the
    /// previous data stays visible with a warning.
    pub fn handle_events(&mut self) {
        while let Ok(ev) = self.events.try_recv() {
            match ev {
                RefreshEvent::Loaded(set) => {
                    logf!("Refresh: {} records", set.len());
                    self.records = set;
                    // group indices point into the old list
                    self.detail = None;
                    self.rebuild_view();
                    self.status(format!("Actualizado: {} registros", self.records.len()));
                }
                RefreshEvent::Failed(why) => {
                    self.status(format!("Sin conexión al feed; mostrando datos anteriores ({why})"));
                }
            }
        }
    }

    pub fn run_search(&mut self) {
        logd!("UI: search \"{}\"", self.state.gui.search_text);
        // a new search resets the tile filter, like reloading the summary
        self.state.gui.active_filter = FilterTag::All;
        self.rebuild_view();
    }

    pub fn set_filter(&mut self, tag: FilterTag) {
        logd!("UI: filter → {:?}", tag);
        self.state.gui.active_filter = tag;
        self.rebuild_view();
    }

    /// Recompute everything derived from the record list. Aggregation is
    /// pure; this is the only place view state is written.
    pub fn rebuild_view(&mut self) {
        let records = &self.records.records;
        self.base_rows = group::search_rows(records, &self.state.gui.search_text);
        let summary_groups = group::summary_groups(records, &self.base_rows);
        self.summary = group::summarize(records, &summary_groups);
        let filtered = group::filter_rows(records, &self.base_rows, self.state.gui.active_filter);
        self.table = group::table_groups(records, &filtered);
    }

    pub fn open_detail(&mut self, table_ix: usize) {
        if let Some(g) = self.table.get(table_ix) {
            self.detail = Some(g.clone());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::summary_tiles::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });

        crate::gui::components::detail::draw(ctx, self);
        crate::gui::components::indicators::draw(ctx, self);

        // keep draining worker events even when idle
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
