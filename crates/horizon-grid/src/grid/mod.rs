//! The editable grid.
//!
//! [`EditableGrid`] shows one row per record and one control per column in
//! every row. Columns are registered up front (or later; existing rows then
//! gain the new column at once). Rows are materialized lazily in batches as
//! the viewport reaches the bottom of the loaded content.
//!
//! # Example
//!
//! ```
//! use horizon_grid::{EditableGrid, Record};
//!
//! #[derive(Debug)]
//! struct Task {
//!     title: String,
//!     done: bool,
//! }
//!
//! let mut grid = EditableGrid::<Task>::new();
//! grid.append_column_text("title", "Title", |t: &Task| t.title.clone(), |t, v| t.title = v.to_owned());
//! grid.append_column_checkbox("done", "Done", |t: &Task| t.done, |t, v| t.done = v);
//!
//! let first = Record::new(Task { title: "write docs".into(), done: false });
//! grid.append_row(first.clone());
//!
//! // The first batch loads on the next UI tick.
//! grid.tick();
//! assert_eq!(grid.visible_row_count(), 1);
//! assert_eq!(grid.selected_item(), Some(first));
//! ```
//!
//! # Threading
//!
//! The grid lives on the UI thread. Work that must wait for layout (the
//! initial batch, refocusing after a selection change, suppressing traversal
//! of freshly built rows) is queued and runs on the next [`EditableGrid::tick`].

mod column;
mod factory;
mod loader;
mod navigation;
mod row;
mod selection;
mod traversal;
mod viewport;


use chrono::NaiveDate;
use horizon_grid_core::logging::targets;
use horizon_grid_core::{PerfSpan, TaskQueue};

pub use column::{Column, ColumnRegistry};
pub use factory::{
    ButtonAction, ButtonFactory, CheckboxFactory, ChoiceFactory, ColumnFactory, DateFactory,
    EditableFactory, LabelFactory, PasswordFactory, ReadOnlyFactory, TextFactory,
};
pub use loader::{LOAD_TRIGGER_FRACTION, LazyRowLoader};
pub use navigation::{EdgeCallback, RowDirection, RowNavigator};
pub use row::{RowContainer, RowId, RowStore};
pub use selection::SelectionState;
pub use traversal::FocusTraversalSnapshot;
pub use viewport::{DEFAULT_PAGE_ROWS, RowViewport, ScrollViewport};

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::record::Record;
use crate::widget::{Button, Control, ControlId, FocusManager, FocusReason, GridControl};

/// An editable row/column grid over records of type `S`.
pub struct EditableGrid<S: Send + Sync + 'static> {
    config: GridConfig,
    columns: ColumnRegistry<S>,
    rows: RowStore<S>,
    loader: LazyRowLoader,
    traversal: FocusTraversalSnapshot,
    selection: SelectionState<S>,
    focus: FocusManager,
    navigator: RowNavigator<S>,
    viewport: Box<dyn ScrollViewport>,
    tasks: TaskQueue<EditableGrid<S>>,
    enabled: bool,
}

impl<S: Send + Sync + 'static> EditableGrid<S> {
    /// Create a grid with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Create a grid with the given configuration.
    pub fn with_config(config: GridConfig) -> Self {
        let mut grid = Self {
            columns: ColumnRegistry::new(),
            rows: RowStore::new(),
            loader: LazyRowLoader::new(config.load_rows_count),
            traversal: FocusTraversalSnapshot::new(),
            selection: SelectionState::new(),
            focus: FocusManager::new(),
            navigator: RowNavigator::new(config.navigation_modifiers),
            viewport: Box::new(RowViewport::default()),
            tasks: TaskQueue::new(),
            enabled: true,
            config,
        };
        if grid.config.initial_load_deferred {
            grid.tasks.post_labeled("initial load", |grid: &mut Self| {
                grid.load_more();
            });
        }
        grid
    }

    /// Builder-style viewport.
    pub fn with_viewport(mut self, viewport: impl ScrollViewport + 'static) -> Self {
        self.set_viewport(viewport);
        self
    }

    /// Replace the viewport hosting the rows.
    pub fn set_viewport(&mut self, viewport: impl ScrollViewport + 'static) {
        self.viewport = Box::new(viewport);
        self.viewport.set_content_rows(self.loader.visible_row_count());
    }

    /// The viewport hosting the rows.
    pub fn viewport(&self) -> &dyn ScrollViewport {
        self.viewport.as_ref()
    }

    /// The viewport hosting the rows, mutably.
    pub fn viewport_mut(&mut self) -> &mut dyn ScrollViewport {
        self.viewport.as_mut()
    }

    /// The grid's configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Register a column at the end.
    ///
    /// An id that is already registered is ignored and `false` is returned.
    /// Materialized rows gain a control for the new column immediately.
    pub fn append_column(
        &mut self,
        id: impl Into<String>,
        header_text: impl Into<String>,
        factory: ColumnFactory<S>,
    ) -> bool {
        let Some(position) = self.columns.append(Column::new(id, header_text, factory)) else {
            return false;
        };
        let Some(column) = self.columns.at(position) else {
            return false;
        };

        for row_id in self.rows.row_ids_in_order() {
            let Some(record) = self.rows.row(row_id).map(|r| r.record().clone()) else {
                continue;
            };
            let mut control = build_control(column, &record, self.enabled);
            self.traversal.suppress_control(row_id, &mut control);
            self.rows.push_control(row_id, control);
        }
        true
    }

    /// Register a read-only text column.
    pub fn append_column_label<G>(&mut self, id: &str, header_text: &str, text: G) -> bool
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
    {
        self.append_column(id, header_text, ColumnFactory::label(LabelFactory::new(text)))
    }

    /// Register an editable text column.
    pub fn append_column_text<G, W>(&mut self, id: &str, header_text: &str, get: G, set: W) -> bool
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
        W: Fn(&mut S, &str) + Send + Sync + 'static,
    {
        self.append_column(id, header_text, ColumnFactory::text(TextFactory::new(get, set)))
    }

    /// Register a masked text column.
    pub fn append_column_password<G, W>(
        &mut self,
        id: &str,
        header_text: &str,
        get: G,
        set: W,
    ) -> bool
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
        W: Fn(&mut S, &str) + Send + Sync + 'static,
    {
        self.append_column(
            id,
            header_text,
            ColumnFactory::password(PasswordFactory::new(get, set)),
        )
    }

    /// Register a column choosing one of `items`.
    pub fn append_column_choice<I, T, G, W>(
        &mut self,
        id: &str,
        header_text: &str,
        items: I,
        get: G,
        set: W,
    ) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        G: Fn(&S) -> Option<String> + Send + Sync + 'static,
        W: Fn(&mut S, Option<&str>) + Send + Sync + 'static,
    {
        self.append_column(
            id,
            header_text,
            ColumnFactory::choice(ChoiceFactory::new(items, get, set)),
        )
    }

    /// Register a date column.
    pub fn append_column_date<G, W>(&mut self, id: &str, header_text: &str, get: G, set: W) -> bool
    where
        G: Fn(&S) -> Option<NaiveDate> + Send + Sync + 'static,
        W: Fn(&mut S, Option<NaiveDate>) + Send + Sync + 'static,
    {
        self.append_column(id, header_text, ColumnFactory::date(DateFactory::new(get, set)))
    }

    /// Register a checkbox column.
    pub fn append_column_checkbox<G, W>(
        &mut self,
        id: &str,
        header_text: &str,
        get: G,
        set: W,
    ) -> bool
    where
        G: Fn(&S) -> bool + Send + Sync + 'static,
        W: Fn(&mut S, bool) + Send + Sync + 'static,
    {
        self.append_column(
            id,
            header_text,
            ColumnFactory::checkbox(CheckboxFactory::new(get, set)),
        )
    }

    /// Register a button column running `action` for the clicked row.
    pub fn append_column_button<F>(
        &mut self,
        id: &str,
        header_text: &str,
        caption: &str,
        action: F,
    ) -> bool
    where
        F: Fn(&Record<S>) + Send + Sync + 'static,
    {
        self.append_column(
            id,
            header_text,
            ColumnFactory::button(ButtonFactory::with_caption(caption), action),
        )
    }

    /// Set a column's preferred width. Returns `false` for an unknown id.
    pub fn set_column_preferred_width(&mut self, id: &str, width: Option<f32>) -> bool {
        match self.columns.get_mut(id) {
            Some(column) => {
                column.set_preferred_width(width);
                true
            }
            None => false,
        }
    }

    /// The registered columns.
    pub fn columns(&self) -> &ColumnRegistry<S> {
        &self.columns
    }

    /// Header texts in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.headers()
    }

    /// Column ids in display order.
    pub fn column_ids(&self) -> Vec<&str> {
        self.columns.ids()
    }

    /// Number of registered columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Append a record at the end.
    ///
    /// A record that is already an item is ignored and `false` is returned.
    pub fn append_row(&mut self, record: Record<S>) -> bool {
        if self.rows.contains(&record) {
            tracing::debug!(target: targets::ROWS, "ignoring record that is already an item");
            return false;
        }
        self.rows.push_record(record);
        self.records_arrived();
        true
    }

    /// Insert a record at `index`.
    ///
    /// Inside the materialized range the record gets its row immediately.
    pub fn insert_row(&mut self, record: Record<S>, index: usize) -> Result<bool> {
        if self.rows.contains(&record) {
            tracing::debug!(target: targets::ROWS, "ignoring record that is already an item");
            return Ok(false);
        }
        self.rows.insert_record(index, record.clone())?;
        if self.loader.record_inserted(index) {
            let row = self.materialize(record);
            self.viewport.set_content_rows(self.loader.visible_row_count());
            self.defer_suppression(vec![row]);
        }
        self.records_arrived();
        Ok(true)
    }

    /// Append several records. Returns how many were added.
    pub fn append_rows(&mut self, records: impl IntoIterator<Item = Record<S>>) -> usize {
        records
            .into_iter()
            .map(|record| self.append_row(record))
            .filter(|added| *added)
            .count()
    }

    /// Remove a record and its row.
    ///
    /// Removing the selected record selects its neighbor: the record that
    /// took its place, else the one before it.
    pub fn remove_row(&mut self, record: &Record<S>) -> bool {
        let was_selected = self.selection.is_selected(record);
        let Some((index, row)) = self.rows.remove_record(record) else {
            return false;
        };
        self.loader.record_removed(index);

        if let Some(row) = row {
            self.traversal.forget(row.id());
            for control in row.controls() {
                if self.focus.forget(control.id()) || self.selection.focused() == Some(control.id())
                {
                    self.selection.set_focused(None);
                }
            }
        }
        self.viewport.set_content_rows(self.loader.visible_row_count());
        tracing::debug!(target: targets::ROWS, index, "removed row");

        if was_selected {
            let neighbor = self
                .rows
                .record_at(index)
                .or_else(|| index.checked_sub(1).and_then(|i| self.rows.record_at(i)))
                .cloned();
            match neighbor {
                // The old row is gone, so there is nothing to suppress.
                Some(next) => self.select(next),
                None => self.clear_selection(),
            }
        }
        true
    }

    /// Remove every record and row.
    pub fn clear_rows(&mut self) {
        if let Some(focused) = self.focus.focused_control() {
            self.focus.forget(focused);
        }
        self.selection.set_focused(None);
        self.rows.clear();
        self.traversal.clear();
        self.loader.reset();
        self.viewport.set_content_rows(0);
        self.clear_selection();
        tracing::debug!(target: targets::ROWS, "cleared rows");
    }

    /// Re-read the record's values into its row's controls.
    ///
    /// Selection and focus are left alone. A value that fails to convert is
    /// logged and the control keeps its previous value.
    pub fn update_row(&mut self, record: &Record<S>) -> Result<()> {
        let index = self.rows.index_of(record).ok_or(GridError::UnknownRecord)?;
        let row_id = self
            .rows
            .row_id(record)
            .ok_or(GridError::NotMaterialized { index })?;
        let Some(row) = self.rows.row_mut(row_id) else {
            return Err(GridError::NotMaterialized { index });
        };

        let value = record.read();
        for control in row.controls_mut() {
            let Some(column) = self.columns.get(control.column_id()) else {
                continue;
            };
            if let Err(err) = column.factory().read_from_record(column.id(), &value, control) {
                tracing::warn!(target: targets::ROWS, index, error = %err, "failed to refresh control");
            }
        }
        tracing::trace!(target: targets::ROWS, index, "updated row");
        Ok(())
    }

    /// All records, materialized or not.
    pub fn items(&self) -> &[Record<S>] {
        self.rows.records()
    }

    /// Number of records.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of materialized records.
    pub fn visible_row_count(&self) -> usize {
        self.loader.visible_row_count()
    }

    /// Whether a record has a row.
    pub fn is_materialized(&self, record: &Record<S>) -> bool {
        self.rows.is_materialized(record)
    }

    /// The row of a record, if materialized.
    pub fn row(&self, record: &Record<S>) -> Option<&RowContainer<S>> {
        self.rows.row_for(record)
    }

    /// The controls of a record's row in column order.
    pub fn row_controls(&self, record: &Record<S>) -> Option<&[Control]> {
        self.rows.row_for(record).map(RowContainer::controls)
    }

    /// Every materialized control of a column, in row order.
    pub fn controls_of_column(&self, column_id: &str) -> Vec<&Control> {
        self.rows
            .materialized()
            .filter_map(|row| row.control(column_id))
            .collect()
    }

    /// Look up a control anywhere in the grid by id.
    pub fn control_by_id(&self, id: ControlId) -> Option<&Control> {
        self.rows.control(id)
    }

    // =========================================================================
    // Typed control access
    // =========================================================================

    /// Get the control of `column_id` in the row of `record` as type `C`.
    ///
    /// Asking for a type other than the column's control type is a
    /// [`GridError::TypeMismatch`].
    pub fn control<C: GridControl>(&self, record: &Record<S>, column_id: &str) -> Result<&C> {
        self.check_column_kind::<C>(column_id)?;
        let row = self.materialized_row(record)?;
        let control = row
            .control(column_id)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_owned()))?;
        let actual = control.kind();
        control.downcast_ref::<C>().ok_or_else(|| {
            GridError::type_mismatch(
                column_id,
                C::KIND.control_type_name(),
                actual.control_type_name(),
            )
        })
    }

    /// Edit a control the way a user would, then store its value in the
    /// record.
    ///
    /// Read-only columns skip the write-back.
    pub fn edit_control<C, R>(
        &mut self,
        record: &Record<S>,
        column_id: &str,
        edit: impl FnOnce(&mut C) -> R,
    ) -> Result<R>
    where
        C: GridControl,
    {
        let column = self.check_column_kind::<C>(column_id)?;
        let editable = self.columns.at(column).is_some_and(|c| c.kind().is_editable());
        let row_id = self.materialized_row(record)?.id();

        let Some(control) = self.rows.row_mut(row_id).and_then(|r| r.control_mut(column_id)) else {
            return Err(GridError::UnknownColumn(column_id.to_owned()));
        };
        let actual = control.kind();
        let Some(typed) = control.downcast_mut::<C>() else {
            return Err(GridError::type_mismatch(
                column_id,
                C::KIND.control_type_name(),
                actual.control_type_name(),
            ));
        };
        let result = edit(typed);

        if editable {
            self.write_back(record, row_id, column_id)?;
        }
        Ok(result)
    }

    /// Store every editable control of the row in the record.
    ///
    /// All columns are attempted; the first failure is returned.
    pub fn commit_row(&mut self, record: &Record<S>) -> Result<()> {
        let row_id = self.materialized_row(record)?.id();
        let editable: Vec<String> = self
            .columns
            .iter()
            .filter(|c| c.kind().is_editable())
            .map(|c| c.id().to_owned())
            .collect();

        let mut first_error = None;
        for column_id in editable {
            if let Err(err) = self.write_back(record, row_id, &column_id) {
                tracing::warn!(target: targets::ROWS, column = %column_id, error = %err, "failed to commit control");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Activate the button of `column_id` in the row of `record`.
    ///
    /// The button takes focus first, as a mouse press would, which selects
    /// its row. Returns `false` if the button is disabled.
    pub fn click_button(&mut self, record: &Record<S>, column_id: &str) -> Result<bool> {
        let button = self.control::<Button>(record, column_id)?;
        if !button.base().is_enabled() {
            return Ok(false);
        }
        let id = button.base().id();
        self.focus_control(id, FocusReason::Mouse);

        if let Some(button) = self
            .rows
            .control_mut(id)
            .and_then(|c| c.downcast_mut::<Button>())
        {
            button.record_click();
        }
        let action = self
            .columns
            .get(column_id)
            .and_then(|c| c.factory().button_action())
            .cloned();
        if let Some(action) = action {
            action(record);
        }
        Ok(true)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Materialize the next batch of records.
    ///
    /// Returns how many rows were built; zero once every record has a row.
    /// If nothing is selected, the first record of the batch is selected.
    pub fn load_more(&mut self) -> usize {
        let batch = self.loader.next_batch(self.rows.len());
        if batch.is_empty() {
            tracing::trace!(target: targets::LOADER, "no more rows to load");
            return 0;
        }
        let _perf = PerfSpan::new("load_more");

        let start = batch.start;
        let mut built = Vec::with_capacity(batch.len());
        for index in batch {
            if let Some(record) = self.rows.record_at(index).cloned() {
                built.push(self.materialize(record));
            }
        }
        let count = built.len();
        self.loader.advance(count);
        self.viewport.set_content_rows(self.loader.visible_row_count());
        tracing::debug!(
            target: targets::LOADER,
            count,
            visible = self.loader.visible_row_count(),
            total = self.rows.len(),
            "loaded rows"
        );

        if self.config.auto_select_first_row
            && self.selection.selected().is_none()
            && let Some(first) = self.rows.record_at(start).cloned()
        {
            self.select(first);
        }
        self.defer_suppression(built);
        count
    }

    /// Set the number of rows per batch. Zero is treated as one.
    pub fn set_load_rows_count(&mut self, count: usize) {
        self.loader.set_batch_size(count);
        self.config.load_rows_count = self.loader.batch_size();
    }

    /// Rows per batch.
    pub fn load_rows_count(&self) -> usize {
        self.loader.batch_size()
    }

    /// The host's scroll position changed.
    ///
    /// Loads the next batch when the lower bound is reached. Returns how many
    /// rows were built.
    pub fn handle_vertical_scroll(&mut self, fraction: f64) -> usize {
        if LazyRowLoader::should_load(fraction) {
            self.load_more()
        } else {
            0
        }
    }

    /// Run one UI frame.
    ///
    /// Runs the tasks that were pending when the frame started, then loads
    /// the next batch if the viewport sits at its lower bound. Returns how
    /// many tasks ran.
    pub fn tick(&mut self) -> usize {
        let pending = self.tasks.pending_count();
        let mut ran = 0;
        for _ in 0..pending {
            let Some(task) = self.tasks.pop() else {
                break;
            };
            task.run(self);
            ran += 1;
        }

        if !self.loader.is_exhausted(self.rows.len())
            && LazyRowLoader::should_load(self.viewport.vertical_fraction())
        {
            self.load_more();
        }
        ran
    }

    /// Number of deferred tasks waiting for the next tick.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.pending_count()
    }

    // =========================================================================
    // Enabled state
    // =========================================================================

    /// Whether the grid accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the whole grid.
    ///
    /// Disabling disables every control, drops focus and suppresses traversal
    /// of every row but the selected one. Enabling re-enables the controls
    /// and restores the selected row's traversal.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        let selected_row = self
            .selection
            .selected()
            .and_then(|record| self.rows.row_id(&record));

        if !enabled
            && let Some(lost) = self.focus.clear_focus(&mut self.rows)
            && self.selection.focused() == Some(lost)
        {
            self.selection.set_focused(None);
        }

        for row_id in self.rows.row_ids_in_order() {
            let Some(row) = self.rows.row_mut(row_id) else {
                continue;
            };
            for control in row.controls_mut() {
                control.base_mut().set_enabled(enabled);
            }
            if !enabled && Some(row_id) != selected_row {
                self.traversal.suppress(row);
            }
        }

        if enabled
            && let Some(row) = selected_row.and_then(|id| self.rows.row_mut(id))
        {
            self.traversal.restore(row);
        }
        tracing::debug!(target: targets::SELECTION, enabled, "grid enabled state changed");
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Without a deferred initial load, the first batch fills up as records
    /// arrive.
    fn records_arrived(&mut self) {
        if !self.config.initial_load_deferred
            && self.loader.visible_row_count() < self.loader.batch_size()
        {
            self.load_more();
        }
    }

    fn materialize(&mut self, record: Record<S>) -> RowId {
        let controls = self
            .columns
            .iter()
            .map(|column| build_control(column, &record, self.enabled))
            .collect();
        let row = self.rows.insert_row(record, controls);
        tracing::trace!(target: targets::ROWS, ?row, "materialized row");
        row
    }

    /// Load batches until the record at `index` has a row.
    fn ensure_materialized(&mut self, index: usize) {
        while self.loader.visible_row_count() <= index {
            if self.load_more() == 0 {
                break;
            }
        }
    }

    fn defer_suppression(&mut self, rows: Vec<RowId>) {
        if rows.is_empty() {
            return;
        }
        self.tasks.post_labeled("suppress new rows", move |grid: &mut Self| {
            let selected = grid
                .selection
                .selected()
                .and_then(|record| grid.rows.row_id(&record));
            for id in rows {
                if Some(id) == selected {
                    continue;
                }
                if let Some(row) = grid.rows.row_mut(id) {
                    grid.traversal.suppress(row);
                }
            }
        });
    }

    fn check_column_kind<C: GridControl>(&self, column_id: &str) -> Result<usize> {
        let position = self
            .columns
            .position(column_id)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_owned()))?;
        let kind = self
            .columns
            .at(position)
            .map(Column::kind)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_owned()))?;
        if kind != C::KIND {
            return Err(GridError::type_mismatch(
                column_id,
                C::KIND.control_type_name(),
                kind.control_type_name(),
            ));
        }
        Ok(position)
    }

    fn materialized_row(&self, record: &Record<S>) -> Result<&RowContainer<S>> {
        let index = self.rows.index_of(record).ok_or(GridError::UnknownRecord)?;
        self.rows
            .row_for(record)
            .ok_or(GridError::NotMaterialized { index })
    }

    fn write_back(&mut self, record: &Record<S>, row_id: RowId, column_id: &str) -> Result<()> {
        let column = self
            .columns
            .get(column_id)
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_owned()))?;
        let control = self
            .rows
            .row(row_id)
            .and_then(|row| row.control(column_id))
            .ok_or_else(|| GridError::UnknownColumn(column_id.to_owned()))?;
        column
            .factory()
            .write_to_record(column_id, &mut record.write(), control)?;
        tracing::trace!(target: targets::ROWS, column = column_id, "wrote control to record");
        Ok(())
    }
}

impl<S: Send + Sync + 'static> Default for EditableGrid<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Send + Sync + 'static> std::fmt::Debug for EditableGrid<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditableGrid")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("loader", &self.loader)
            .field("selection", &self.selection)
            .field("enabled", &self.enabled)
            .field("pending_tasks", &self.tasks.pending_count())
            .finish()
    }
}

/// Build and fill one column's control for a record.
///
/// A value that fails to read is logged; the control keeps its default.
fn build_control<S>(column: &Column<S>, record: &Record<S>, enabled: bool) -> Control {
    let value = record.read();
    let factory = column.factory();
    let mut control = factory.new_instance(&value);
    control.base_mut().attach(column.id());
    if let Err(err) = factory.read_from_record(column.id(), &value, &mut control) {
        tracing::warn!(target: targets::ROWS, column = column.id(), error = %err, "failed to read record into control");
    }
    if !enabled {
        control.base_mut().set_enabled(false);
    }
    control
}
