//! Starting composition for a fresh grid

use crate::{ContentPayload, GridBox};

const MAIN_IMAGE_URL: &str = "https://images.unsplash.com/photo-1709884735626-63e92727d8b6?q=80&w=2128&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

/// The seed boxes, laid out for a five-column grid.
///
/// Seed boxes are plain data; actions are bound by id at render time.
pub fn seed_boxes() -> Vec<GridBox> {
    vec![
        GridBox::new("header", 0, 0, 2, 1).with_content(ContentPayload::text("Tech Arsenal")),
        GridBox::new("stats1", 2, 0, 1, 1).with_content(ContentPayload::text("56+ Projects")),
        GridBox::new("stats2", 3, 0, 1, 1).with_content(ContentPayload::text("23+ Clients")),
        GridBox::new("stats3", 4, 0, 1, 2),
        GridBox::new("main", 0, 1, 3, 2).with_content(ContentPayload::image(MAIN_IMAGE_URL)),
        GridBox::new("testimonials", 3, 1, 1, 1),
        GridBox::new("workflow", 3, 2, 2, 1),
        GridBox::new("social1", 0, 3, 1, 1),
        GridBox::new("social2", 1, 3, 2, 1),
        GridBox::new("social3", 3, 3, 1, 1),
        GridBox::new("contact", 4, 3, 1, 1),
    ]
}
