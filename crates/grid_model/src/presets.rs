//! Predefined raw-markup components offered by the content form

use crate::ContentPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentPreset {
    Button,
    Card,
    Alert,
    Stat,
}

impl ComponentPreset {
    pub const ALL: [ComponentPreset; 4] = [Self::Button, Self::Card, Self::Alert, Self::Stat];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Card => "card",
            Self::Alert => "alert",
            Self::Stat => "stat",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The markup fragment this preset fills into the form
    pub fn markup(&self) -> &'static str {
        match self {
            Self::Button => {
                r#"<button class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600">Click me</button>"#
            }
            Self::Card => {
                r#"<div class="p-4 text-black bg-gradient-to-t rounded-lg shadow-md"><h3 class="text-lg font-bold mb-2">Card Title</h3><p>Card content goes here</p></div>"#
            }
            Self::Alert => {
                r#"<div class="p-4 bg-yellow-100 border-l-4 border-yellow-500 text-yellow-700">Important alert message!</div>"#
            }
            Self::Stat => {
                r#"<div class="text-center"><div class="text-3xl font-bold">100+</div><div class="text-gray-600">Users</div></div>"#
            }
        }
    }
}

impl ContentPayload {
    /// A raw component filled from a preset
    pub fn preset(preset: ComponentPreset) -> Self {
        Self::raw_component(preset.markup())
    }
}
