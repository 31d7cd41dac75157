use std::sync::mpsc::{Receiver, TryRecvError};

use anyhow::Result;
use eframe::egui::{Pos2, Vec2};

use crate::chart::layout::Layout;
use crate::chart::scene::{Scene, build_scene};
use crate::chart::tooltip::{TooltipEvent, TooltipState, transition};
use crate::config::ChartConfig;
use crate::data::model::{Dataset, VarianceRecord};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ChartConfig,

    /// Loaded dataset (None until the fetch completes or a file is opened).
    pub dataset: Option<Dataset>,

    /// Scene built from the dataset at the first frame after it arrived.
    pub scene: Option<Scene>,

    pub tooltip: TooltipState,

    /// In-flight startup fetch.
    pub pending: Option<Receiver<Result<Dataset>>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            dataset: None,
            scene: None,
            tooltip: TooltipState::Hidden,
            pending: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Track a fetch started with [`crate::data::loader::spawn_fetch`].
    pub fn begin_fetch(&mut self, rx: Receiver<Result<Dataset>>) {
        self.pending = Some(rx);
        self.loading = true;
    }

    /// Take the fetch result if it has arrived. A failure is only logged;
    /// the canvas then stays empty.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Dataset fetch ended without a result");
                self.pending = None;
                self.loading = false;
            }
            Ok(Ok(dataset)) => {
                self.pending = None;
                self.set_dataset(dataset);
            }
            Ok(Err(e)) => {
                log::error!("Failed to fetch dataset: {e:#}");
                self.pending = None;
                self.loading = false;
            }
        }
    }

    /// Ingest a newly loaded dataset; the scene is rebuilt on the next frame.
    /// Any fetch still in flight is abandoned so it cannot replace this one.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let (first, last) = dataset.year_extent();
        log::info!(
            "Loaded {} monthly records ({first}–{last}), base temperature {}°C",
            dataset.len(),
            dataset.base_temperature
        );
        self.dataset = Some(dataset);
        self.pending = None;
        self.scene = None;
        self.tooltip = TooltipState::Hidden;
        self.status_message = None;
        self.loading = false;
    }

    /// Report a failed user action in the status line.
    pub fn report_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.loading = self.pending.is_some();
    }

    /// Build the scene once for the given viewport size. Later calls are
    /// no-ops until a new dataset arrives.
    pub fn ensure_scene(&mut self, viewport: Vec2) -> Option<&Scene> {
        if self.scene.is_none() {
            if let Some(ds) = &self.dataset {
                let layout = Layout::new(viewport.x, viewport.y, &self.config);
                self.scene = Some(build_scene(ds, layout, &self.config));
            }
        }
        self.scene.as_ref()
    }

    /// Feed one frame of hover sampling into the tooltip state machine.
    pub fn apply_hover(&mut self, hovered: Option<VarianceRecord>, pointer: Option<Pos2>) {
        if let Some(event) = TooltipEvent::from_hover(&self.tooltip, hovered, pointer) {
            self.tooltip = transition(self.tooltip, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use eframe::egui::{pos2, vec2};

    fn dataset() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![VarianceRecord { year: 1900, month: 1, variance: -0.8 }],
        }
    }

    #[test]
    fn test_fetch_success_sets_dataset() {
        let mut state = AppState::default();
        let (tx, rx) = mpsc::channel();
        state.begin_fetch(rx);
        state.poll_fetch();
        assert!(state.loading);
        tx.send(Ok(dataset())).unwrap();
        state.poll_fetch();
        assert!(!state.loading);
        assert!(state.pending.is_none());
        assert_eq!(state.dataset, Some(dataset()));
    }

    #[test]
    fn test_fetch_failure_leaves_canvas_empty() {
        let mut state = AppState::default();
        let (tx, rx) = mpsc::channel();
        state.begin_fetch(rx);
        tx.send(Err(anyhow::anyhow!("connection refused"))).unwrap();
        state.poll_fetch();
        assert!(!state.loading);
        assert!(state.dataset.is_none());
        assert!(state.ensure_scene(vec2(1200.0, 800.0)).is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_opened_file_wins_over_late_fetch() {
        let mut state = AppState::default();
        let (tx, rx) = mpsc::channel();
        state.begin_fetch(rx);

        let mut opened = dataset();
        opened.base_temperature = 1.0;
        state.set_dataset(opened.clone());
        assert!(state.pending.is_none());

        // The fetch thread's send fails quietly once the receiver is gone.
        assert!(tx.send(Ok(dataset())).is_err());
        state.poll_fetch();
        assert_eq!(state.dataset, Some(opened));
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_open_keeps_fetch_loading() {
        let mut state = AppState::default();
        let (_tx, rx) = mpsc::channel();
        state.begin_fetch(rx);
        state.report_error("Error: bad file".to_string());
        assert!(state.loading);
        assert_eq!(state.status_message.as_deref(), Some("Error: bad file"));

        let mut idle = AppState::default();
        idle.loading = true;
        idle.report_error("Error: bad file".to_string());
        assert!(!idle.loading);
    }

    #[test]
    fn test_scene_built_once() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        let width = state.ensure_scene(vec2(1200.0, 800.0)).unwrap().layout.canvas_width;
        assert_eq!(width, 1200.0);
        // A resize does not rebuild.
        let width = state.ensure_scene(vec2(900.0, 600.0)).unwrap().layout.canvas_width;
        assert_eq!(width, 1200.0);
    }

    #[test]
    fn test_hover_drives_tooltip() {
        let mut state = AppState::default();
        let rec = dataset().monthly_variance[0];
        state.apply_hover(Some(rec), Some(pos2(5.0, 5.0)));
        assert!(matches!(state.tooltip, TooltipState::Visible { .. }));
        state.apply_hover(None, Some(pos2(500.0, 5.0)));
        assert_eq!(state.tooltip, TooltipState::Hidden);
    }
}
