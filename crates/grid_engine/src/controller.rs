//! Grid controller: the single owner of grid state

use crate::{
    center, reconcile_detailed, EngineError, EventOutcome, GridEvent, GridSettings, RenderItem,
    RenderSurface, Result, DEFAULT_ROW_HEIGHT,
};
use grid_model::{BoxId, ContentKind, ContentPayload, GridBox, GridModel, LayoutItem};

/// Applies user and layout-surface events to the grid.
///
/// Every operation runs to completion and replaces the box collection as a
/// whole. Operations that name an unknown box are no-ops rather than errors,
/// since the surface may briefly lag behind the model.
#[derive(Debug, Clone)]
pub struct GridController {
    model: GridModel,
    row_height: u32,
}

impl GridController {
    /// Create a controller around an existing grid
    pub fn new(model: GridModel) -> Self {
        Self {
            model,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }

    /// Create a controller from settings, optionally using the viewport width
    /// to pick the column count
    pub fn from_settings(settings: &GridSettings, viewport_width: Option<u32>) -> Result<Self> {
        settings.validate()?;
        let columns = viewport_width.map_or(settings.columns, |w| settings.columns_for_width(w));

        // The seed is laid out for five columns; other widths recenter it
        let model = if settings.seed_composition {
            GridModel::from_boxes(columns, center(GridModel::seed().boxes(), columns))?
        } else {
            GridModel::new(columns)?
        };

        tracing::debug!(columns, boxes = model.len(), "grid controller created");
        Ok(Self {
            model,
            row_height: settings.row_height,
        })
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    /// Copy of the current grid for handing to the surface
    pub fn snapshot(&self) -> GridModel {
        self.model.clone()
    }

    pub fn columns(&self) -> u32 {
        self.model.columns()
    }

    /// Row height in pixels for the surface
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Fill or replace a box's content.
    ///
    /// A referenced (non-raw) component also halves the box's width and
    /// height, flooring, with a minimum of one unit. Returns `false` when
    /// the id is unknown.
    pub fn set_content(&mut self, id: &str, payload: ContentPayload) -> bool {
        if !self.model.contains(id) {
            tracing::debug!(box_id = id, "set_content: unknown box ignored");
            return false;
        }

        let shrink = payload.is_component_reference();
        let kind = payload.kind();
        let mut payload = Some(payload);
        let boxes: Vec<GridBox> = self
            .model
            .boxes()
            .iter()
            .map(|b| {
                let mut next = b.clone();
                if b.id().as_str() == id {
                    if let Some(content) = payload.take() {
                        next.set_content(content);
                    }
                    if shrink {
                        next.halve_size();
                    }
                }
                next
            })
            .collect();

        let committed = self.commit(boxes, "set_content");
        if committed {
            tracing::debug!(box_id = id, kind = %kind, shrink, "content set");
        }
        committed
    }

    /// Validate a content-form submission, then set it.
    ///
    /// Blank values are rejected with an error. Components default to raw
    /// markup when `is_raw` is not given. Returns `Ok(false)` when the id is
    /// unknown.
    pub fn submit_content(
        &mut self,
        id: &str,
        kind: ContentKind,
        value: impl Into<String>,
        is_raw: Option<bool>,
    ) -> Result<bool> {
        let payload = ContentPayload::from_submission(kind, value, is_raw.unwrap_or(true))?;
        Ok(self.set_content(id, payload))
    }

    /// Remove a box and recenter the rest. Returns `false` when the id is
    /// unknown.
    pub fn delete_box(&mut self, id: &str) -> bool {
        if !self.model.contains(id) {
            tracing::debug!(box_id = id, "delete_box: unknown box ignored");
            return false;
        }

        let remaining: Vec<GridBox> = self
            .model
            .boxes()
            .iter()
            .filter(|b| b.id().as_str() != id)
            .cloned()
            .collect();
        let centered = center(&remaining, self.model.columns());

        let committed = self.commit(centered, "delete_box");
        if committed {
            tracing::debug!(box_id = id, remaining = self.model.len(), "box deleted");
        }
        committed
    }

    /// Append an empty 1x1 box below all content and recenter.
    ///
    /// The layout surface assigns the actual row on its next pass.
    pub fn add_box(&mut self) -> BoxId {
        let mut id = BoxId::generate();
        while self.model.contains(id.as_str()) {
            id = BoxId::generate();
        }

        let mut boxes = self.model.boxes().to_vec();
        boxes.push(GridBox::appended(id.clone()));
        let centered = center(&boxes, self.model.columns());

        if self.commit(centered, "add_box") {
            tracing::debug!(box_id = %id, total = self.model.len(), "box added");
        }
        id
    }

    /// Merge a layout report from the surface. No recentering happens here,
    /// so an in-progress gesture is never fought. Returns how many boxes
    /// took new geometry.
    pub fn apply_layout_update(&mut self, updates: &[LayoutItem]) -> usize {
        let result = reconcile_detailed(self.model.boxes(), updates);

        if !result.ignored.is_empty() {
            tracing::debug!(ignored = ?result.ignored, "layout update: unknown boxes dropped");
        }
        tracing::trace!(
            target: "grid_engine::reconcile",
            applied = result.applied,
            clamped = result.clamped,
            "layout update"
        );

        let applied = result.applied;
        if applied == 0 {
            return 0;
        }
        if self.commit(result.boxes, "apply_layout_update") {
            applied
        } else {
            0
        }
    }

    /// Route an event to its operation
    pub fn dispatch(&mut self, event: GridEvent) -> Result<EventOutcome> {
        let name = event.name();
        let outcome = match event {
            GridEvent::AddBox => EventOutcome::added(self.add_box()),
            GridEvent::DeleteBox { id } => EventOutcome::changed(self.delete_box(id.as_str())),
            GridEvent::SetContent { id, content } => {
                EventOutcome::changed(self.set_content(id.as_str(), content))
            }
            GridEvent::SubmitContent {
                id,
                kind,
                value,
                is_raw,
            } => EventOutcome::changed(self.submit_content(id.as_str(), kind, value, is_raw)?),
            GridEvent::LayoutChange { items } => {
                EventOutcome::changed(self.apply_layout_update(&items) > 0)
            }
        };

        tracing::trace!(target: "grid_engine::dispatch", event = name, changed = outcome.changed, "event handled");
        Ok(outcome)
    }

    /// Render items for every box, in model order
    pub fn render(&self) -> Vec<RenderItem> {
        self.model.boxes().iter().map(RenderItem::from).collect()
    }

    /// Draw the whole grid onto a surface
    pub fn render_to(&self, surface: &mut dyn RenderSurface) {
        surface.begin_frame(self.model.columns(), self.row_height);
        for item in self.render() {
            surface.render(&item);
        }
        surface.end_frame();
    }

    /// Store a new collection. The model rejects a collection that breaks
    /// its invariants, in which case the grid stays as it was.
    fn commit(&mut self, boxes: Vec<GridBox>, operation: &str) -> bool {
        match self.model.replace_boxes(boxes) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(operation, "rejected grid update: {}", EngineError::from(e));
                false
            }
        }
    }
}

impl Default for GridController {
    fn default() -> Self {
        Self::new(GridModel::seed())
    }
}
