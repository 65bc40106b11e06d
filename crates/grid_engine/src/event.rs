//! Events sent to the controller by external collaborators

use grid_model::{BoxId, ContentKind, ContentPayload, LayoutItem};
use serde::{Deserialize, Serialize};

/// An event from the toolbar, the content form, or the layout surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// Toolbar asks for a new empty box
    AddBox,
    /// Context menu asks to remove a box
    DeleteBox { id: BoxId },
    /// Set an already-built payload
    SetContent { id: BoxId, content: ContentPayload },
    /// Raw submission from the content form
    SubmitContent {
        id: BoxId,
        kind: ContentKind,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_raw: Option<bool>,
    },
    /// Layout surface finished a drag or resize
    LayoutChange { items: Vec<LayoutItem> },
}

impl GridEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddBox => "add_box",
            Self::DeleteBox { .. } => "delete_box",
            Self::SetContent { .. } => "set_content",
            Self::SubmitContent { .. } => "submit_content",
            Self::LayoutChange { .. } => "layout_change",
        }
    }
}

/// What an event did to the grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Whether the grid changed
    pub changed: bool,
    /// Id of a box created by the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<BoxId>,
}

impl EventOutcome {
    pub fn changed(changed: bool) -> Self {
        Self {
            changed,
            added: None,
        }
    }

    pub fn added(id: BoxId) -> Self {
        Self {
            changed: true,
            added: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_box() {
        let event: GridEvent = serde_json::from_str(r#"{"type":"add_box"}"#).unwrap();
        assert_eq!(event, GridEvent::AddBox);
    }

    #[test]
    fn test_parse_submit_without_raw_flag() {
        let event: GridEvent = serde_json::from_str(
            r#"{"type":"submit_content","id":"main","kind":"video","value":"clip.mp4"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            GridEvent::SubmitContent {
                id: BoxId::new("main"),
                kind: ContentKind::Video,
                value: "clip.mp4".into(),
                is_raw: None,
            }
        );
    }

    #[test]
    fn test_parse_layout_change() {
        let event: GridEvent = serde_json::from_str(
            r#"{"type":"layout_change","items":[{"i":"a","x":1,"y":0,"w":2,"h":1}]}"#,
        )
        .unwrap();
        assert_eq!(event.name(), "layout_change");
        match event {
            GridEvent::LayoutChange { items } => assert_eq!(items[0], LayoutItem::new("a", 1, 0, 2, 1)),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_parse_set_content() {
        let event: GridEvent = serde_json::from_str(
            r#"{"type":"set_content","id":"a","content":{"type":"text","markup":"<p>x</p>"}}"#,
        )
        .unwrap();
        assert!(matches!(event, GridEvent::SetContent { content: ContentPayload::Text { .. }, .. }));
    }
}
