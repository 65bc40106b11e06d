//! Typed content payloads a box can display

use crate::{GridModelError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where a component's markup comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum ComponentSource {
    /// A raw markup fragment injected verbatim
    Markup(String),
    /// The name of a renderable unit the surface knows how to invoke
    Reference(String),
}

impl ComponentSource {
    /// Raw markup, as opposed to a referenced unit
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Markup(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Markup(s) | Self::Reference(s) => s,
        }
    }
}

/// What a box displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPayload {
    /// An image loaded from a URL
    Image { url: String },
    /// A playable video loaded from a URL (MP4 assumed, not checked)
    Video { url: String },
    /// A markup fragment
    Text { markup: String },
    /// An embedded component
    Component { source: ComponentSource },
}

impl ContentPayload {
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image { url: url.into() }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self::Video { url: url.into() }
    }

    pub fn text(markup: impl Into<String>) -> Self {
        Self::Text {
            markup: markup.into(),
        }
    }

    /// A component built from raw markup
    pub fn raw_component(markup: impl Into<String>) -> Self {
        Self::Component {
            source: ComponentSource::Markup(markup.into()),
        }
    }

    /// A component that refers to a renderable unit by name
    pub fn component_ref(name: impl Into<String>) -> Self {
        Self::Component {
            source: ComponentSource::Reference(name.into()),
        }
    }

    /// Build a payload from a content-entry submission.
    ///
    /// Blank values are rejected here so an empty payload never reaches the
    /// model. For components, `is_raw` selects markup versus reference.
    pub fn from_submission(kind: ContentKind, value: impl Into<String>, is_raw: bool) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(GridModelError::EmptyContent(kind));
        }

        Ok(match kind {
            ContentKind::Image => Self::Image { url: value },
            ContentKind::Video => Self::Video { url: value },
            ContentKind::Text => Self::Text { markup: value },
            ContentKind::Component if is_raw => Self::raw_component(value),
            ContentKind::Component => Self::component_ref(value),
        })
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image { .. } => ContentKind::Image,
            Self::Video { .. } => ContentKind::Video,
            Self::Text { .. } => ContentKind::Text,
            Self::Component { .. } => ContentKind::Component,
        }
    }

    /// Whether this payload embeds a referenced (non-raw) component.
    /// Such boxes get a smaller default footprint when filled.
    pub fn is_component_reference(&self) -> bool {
        matches!(
            self,
            Self::Component {
                source: ComponentSource::Reference(_)
            }
        )
    }
}

/// The content type tag offered by the content-entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    Video,
    Text,
    Component,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Text => "text",
            Self::Component => "component",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = GridModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "text" => Ok(Self::Text),
            "component" => Ok(Self::Component),
            _ => Err(GridModelError::UnknownContentKind(s.to_string())),
        }
    }
}
