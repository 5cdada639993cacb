//! Progress display for batch extraction over many map files

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static MAP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix:30} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum MapStatus {
    Collecting,
    Collected(usize),
}

#[derive(Debug, Clone)]
struct MapState {
    name: String,
    status: MapStatus,
}

impl MapState {
    fn message(&self) -> String {
        match self.status {
            MapStatus::Collecting => "collecting".to_string(),
            MapStatus::Collected(pairs) => format!("✓ {pairs} pairs"),
        }
    }
}

/// Progress bars for a batch of map files
///
/// Spinner rows show the most recently started maps. A batch bar is added when
/// the batch holds more maps than there are spinner rows.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    rows: Vec<ProgressBar>,
    maps: Vec<Option<MapState>>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            rows: Vec::new(),
            maps: Vec::new(),
            file_count: 0,
        }
    }

    /// Create the bars for a batch of `file_count` maps
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.maps = vec![None; file_count];

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        self.rows = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let row = ProgressBar::new_spinner();
                row.set_style(MAP_STYLE.clone());
                self.multi_progress.add(row)
            })
            .collect();
    }

    /// Number of maps in the batch
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Show that the map at `index` is being collected
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if index >= self.maps.len() {
            self.maps.resize(index + 1, None);
        }
        if let Some(slot) = self.maps.get_mut(index) {
            *slot = Some(MapState {
                name,
                status: MapStatus::Collecting,
            });
        }
        self.redraw();
    }

    /// Show that the map at `index` is done and how many pairs it contributed
    pub fn complete_file(&mut self, index: usize, recorded_pairs: usize) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(Some(state)) = self.maps.get_mut(index) {
            state.status = MapStatus::Collected(recorded_pairs);
        }
        self.redraw();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All maps collected");
        }
        let _ = self.multi_progress.clear();
    }

    // Rows show the last started maps, oldest on top
    fn redraw(&self) {
        let started: Vec<&MapState> = self.maps.iter().flatten().collect();
        let skip = started.len().saturating_sub(self.rows.len());

        for (row_index, row) in self.rows.iter().enumerate() {
            match started.get(skip + row_index) {
                Some(state) => {
                    row.set_prefix(state.name.clone());
                    row.set_message(state.message());
                    if state.status == MapStatus::Collecting {
                        row.tick();
                    }
                }
                None => {
                    row.set_prefix(String::new());
                    row.set_message(String::new());
                }
            }
        }
    }
}
