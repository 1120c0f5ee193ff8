// src/worker.rs
//
// Background refresh: one thread, one loop. Fetches immediately at startup,
// then every REFRESH_INTERVAL_SECS for the life of the app. A single looping
// thread means a refresh can never overlap another one; results cross to the
// UI thread over a channel and the record list is swapped there, whole, only
// after a successful parse.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use eframe::egui;

use crate::config::consts::REFRESH_INTERVAL_SECS;
use crate::feed;
use crate::record::RecordSet;

pub enum RefreshEvent {
    Loaded(RecordSet),
    Failed(String),
}

pub fn spawn(ctx: egui::Context) -> Receiver<RefreshEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || refresh_loop(tx, ctx));
    rx
}

fn refresh_loop(tx: Sender<RefreshEvent>, ctx: egui::Context) {
    loop {
        let ev = match feed::load() {
            Ok(set) => RefreshEvent::Loaded(set),
            Err(e) => {
                loge!("Feed: {}", e);
                RefreshEvent::Failed(e.to_string())
            }
        };

        // Receiver gone → UI closed, stop polling.
        if tx.send(ev).is_err() {
            return;
        }
        ctx.request_repaint();

        thread::sleep(Duration::from_secs(REFRESH_INTERVAL_SECS));
    }
}
