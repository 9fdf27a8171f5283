use super::enums::MarkerKind;
use serde::Serialize;

/// Point on the floor plan, in percent of width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Derived view of an asset or patient on the floor plan. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub id: String,
    pub kind: MarkerKind,
    pub position: Position,
    pub label: String,
    pub details: String,
}
