//! Projection of the grid into items the rendering surface draws

use grid_model::{BoxId, ComponentSource, ContentPayload, GridBox, GridCoord, RowSlot};
use serde::{Deserialize, Serialize};

/// How the surface should draw one box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderKind {
    /// Empty box showing the "add content" affordance
    Placeholder,
    /// Bounded media element
    Image { src: String },
    /// Bounded media element with playback controls
    Video { src: String },
    /// Markup injected verbatim; sanitizing is up to the surface
    Markup { html: String },
    /// Invoke the named renderable unit
    Component { name: String },
}

impl RenderKind {
    pub fn for_content(content: Option<&ContentPayload>) -> Self {
        match content {
            None => Self::Placeholder,
            Some(ContentPayload::Image { url }) => Self::Image { src: url.clone() },
            Some(ContentPayload::Video { url }) => Self::Video { src: url.clone() },
            Some(ContentPayload::Text { markup }) => Self::Markup {
                html: markup.clone(),
            },
            Some(ContentPayload::Component { source }) => match source {
                ComponentSource::Markup(html) => Self::Markup { html: html.clone() },
                ComponentSource::Reference(name) => Self::Component { name: name.clone() },
            },
        }
    }
}

/// One box as handed to the rendering surface.
///
/// Carries no callbacks: the surface addresses actions back to the
/// controller by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderItem {
    pub id: BoxId,
    pub x: GridCoord,
    pub y: RowSlot,
    pub w: u32,
    pub h: u32,
    #[serde(flatten)]
    pub kind: RenderKind,
}

impl From<&GridBox> for RenderItem {
    fn from(b: &GridBox) -> Self {
        Self {
            id: b.id().clone(),
            x: b.x(),
            y: b.y(),
            w: b.w(),
            h: b.h(),
            kind: RenderKind::for_content(b.content()),
        }
    }
}

/// The external surface that draws boxes
pub trait RenderSurface {
    /// Draw one box
    fn render(&mut self, item: &RenderItem);

    /// Called once before a full redraw, with the grid's column count and
    /// row height in pixels
    fn begin_frame(&mut self, _columns: u32, _row_height: u32) {}

    /// Called once after every box has been drawn
    fn end_frame(&mut self) {}
}
