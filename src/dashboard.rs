//! The state owner of a dashboard session.
//!
//! A [`Dashboard`] is mounted once, fires the single telemetry fetch in the
//! background, and from then on answers [`Dashboard::view`] as a pure function of
//! the loaded readings and the selected day. Views are memoized by that pair.
//! Dropping the dashboard aborts a fetch that is still in flight.

use crate::presentation::table::DataTable;
use crate::telemetry::fetcher::{error_chain, TelemetryFetcher};
use crate::transform::ReadingSet;
use crate::types::averages::Averages;
use crate::types::day::{DayKey, DaySelection};
use crate::types::reading::Reading;
use bon::bon;
use chrono::FixedOffset;
use log::{debug, error, info};
use polars::prelude::{DataFrame, PolarsResult};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Where the session is in its single fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// The fetch has not resolved yet; views are empty.
    Pending,
    /// The fetch resolved and its readings are in place.
    Loaded,
    /// The fetch failed. Views stay empty; the message is kept for display.
    Failed(String),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }
}

#[derive(Debug)]
struct Snapshot {
    // Bumped every time a new reading set is published
    generation: u64,
    status: LoadStatus,
    readings: Arc<ReadingSet>,
}

impl Snapshot {
    fn pending() -> Self {
        Self {
            generation: 0,
            status: LoadStatus::Pending,
            readings: Arc::new(ReadingSet::default()),
        }
    }
}

/// Everything the presentation layer needs for one (readings, selection) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub status: LoadStatus,
    pub selection: DaySelection,
    /// Every day present in the loaded readings, in first-seen order.
    pub days: Vec<DayKey>,
    /// The readings for `selection`, oldest first.
    pub readings: Vec<Reading>,
    pub averages: Averages,
}

impl DashboardView {
    fn compute(snapshot: &Snapshot, selection: &DaySelection) -> Self {
        let selected = snapshot.readings.select(selection);
        Self {
            status: snapshot.status.clone(),
            selection: selected.selection,
            days: snapshot.readings.days().to_vec(),
            readings: selected.readings,
            averages: selected.averages,
        }
    }

    /// The last load failure, if any.
    pub fn load_error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The filtered readings as a table frame with the display headers.
    pub fn to_frame(&self, offset: &FixedOffset) -> PolarsResult<DataFrame> {
        DataTable::from_readings(&self.readings, offset).to_frame()
    }
}

struct Memo {
    generation: u64,
    view: DashboardView,
}

/// A dashboard session: one fetch, one selected day, derived views.
pub struct Dashboard {
    snapshots: watch::Receiver<Arc<Snapshot>>,
    selection: DaySelection,
    memo: Memo,
    fetch_task: Option<JoinHandle<()>>,
}

#[bon]
impl Dashboard {
    /// Mounts a dashboard and starts its one fetch in the background.
    ///
    /// Returns immediately; until the fetch resolves every view is empty with
    /// zero averages. Must be called from within a tokio runtime.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use weather_dashboard::{Dashboard, DashboardConfig, DashboardError, TelemetryFetcher};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DashboardError> {
    /// let config = DashboardConfig::from_env()?;
    /// let mut dashboard = Dashboard::mount()
    ///     .fetcher(TelemetryFetcher::from_config(&config))
    ///     .call();
    /// dashboard.wait_until_loaded().await;
    /// dashboard.select_day("2024-01-02");
    /// println!("{}", dashboard.view().averages.temperature_label());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn mount(fetcher: TelemetryFetcher, selection: Option<DaySelection>) -> Self {
        let initial = Arc::new(Snapshot::pending());
        let (sender, receiver) = watch::channel(Arc::clone(&initial));

        let fetch_task = tokio::spawn(async move {
            let (status, readings) = match fetcher.fetch_readings().await {
                Ok(raw) => (LoadStatus::Loaded, ReadingSet::from_raw(raw)),
                Err(e) => {
                    let message = error_chain(&e);
                    error!("Error fetching data: {}", message);
                    (LoadStatus::Failed(message), ReadingSet::default())
                }
            };
            info!(
                "Loaded {} readings across {} days",
                readings.len(),
                readings.days().len()
            );
            let snapshot = Arc::new(Snapshot {
                generation: 1,
                status,
                readings: Arc::new(readings),
            });
            if sender.send(snapshot).is_err() {
                debug!("Dashboard was torn down before the fetch resolved");
            }
        });

        Self::with_snapshot(receiver, initial, selection, Some(fetch_task))
    }

    /// A dashboard over readings that are already in hand; no fetch is made.
    pub fn from_readings(raw: Vec<Reading>) -> Self {
        let snapshot = Arc::new(Snapshot {
            generation: 1,
            status: LoadStatus::Loaded,
            readings: Arc::new(ReadingSet::from_raw(raw)),
        });
        let (_sender, receiver) = watch::channel(Arc::clone(&snapshot));
        Self::with_snapshot(receiver, snapshot, None, None)
    }

    fn with_snapshot(
        snapshots: watch::Receiver<Arc<Snapshot>>,
        current: Arc<Snapshot>,
        selection: Option<DaySelection>,
        fetch_task: Option<JoinHandle<()>>,
    ) -> Self {
        let selection = selection.unwrap_or_default();
        let memo = Memo {
            generation: current.generation,
            view: DashboardView::compute(&current, &selection),
        };
        Self {
            snapshots,
            selection,
            memo,
            fetch_task,
        }
    }

    /// Resolves once the fetch has finished, successfully or not.
    pub async fn wait_until_loaded(&mut self) -> LoadStatus {
        let result = self
            .snapshots
            .wait_for(|snapshot| !snapshot.status.is_pending())
            .await
            .map(|snapshot| snapshot.status.clone());
        // The sender only goes away once it has published (or the task was aborted)
        result.unwrap_or_else(|_| self.snapshots.borrow().status.clone())
    }

    pub fn status(&self) -> LoadStatus {
        self.snapshots.borrow().status.clone()
    }

    /// The full loaded reading set, sorted.
    pub fn readings(&self) -> Arc<ReadingSet> {
        Arc::clone(&self.snapshots.borrow().readings)
    }

    pub fn selection(&self) -> &DaySelection {
        &self.selection
    }

    /// Selects the day to show. `"General"` clears the filter.
    pub fn select_day(&mut self, selection: impl Into<DaySelection>) {
        self.selection = selection.into();
        debug!("Selected {}", self.selection);
    }

    /// The view for the current readings and selection.
    ///
    /// Recomputed only when either of the two changed since the last call.
    pub fn view(&mut self) -> &DashboardView {
        let snapshot = Arc::clone(&self.snapshots.borrow());
        if self.memo.generation != snapshot.generation || self.memo.view.selection != self.selection
        {
            self.memo = Memo {
                generation: snapshot.generation,
                view: DashboardView::compute(&snapshot, &self.selection),
            };
        }
        &self.memo.view
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            if !task.is_finished() {
                debug!("Aborting in-flight telemetry fetch");
                task.abort();
            }
        }
    }
}
