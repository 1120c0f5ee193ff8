// src/config/state.rs
use super::options::AppOptions;
use crate::group::FilterTag;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Search box contents (filters by identification or contract substring)
    pub search_text: String,

    /// Active summary-tile filter applied to the results table
    pub active_filter: FilterTag,

    /// Indicators window visibility
    pub show_indicators: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            search_text: s!(),
            active_filter: FilterTag::All,
            show_indicators: false,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
