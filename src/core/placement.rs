//! Deterministic floor-plan placement.
//!
//! Positions are derived from the record id only, so the same id always lands
//! on the same point. This is a demo layout: no collision avoidance and no
//! relation to where the item really is.

use crate::models::{Asset, Marker, MarkerKind, Patient, Position};

/// First plus last UTF-16 code unit of `id`; 0 for an empty id.
pub fn id_hash(id: &str) -> u32 {
    let mut units = id.encode_utf16();
    let Some(first) = units.next() else {
        return 0;
    };
    let last = units.last().unwrap_or(first);
    u32::from(first) + u32::from(last)
}

/// x in [10, 90), y in [15, 85).
pub fn asset_position(id: &str) -> Position {
    let hash = id_hash(id);
    Position {
        x: 10 + hash % 80,
        y: 15 + (hash * 3) % 70,
    }
}

/// x in [15, 85), y in [20, 80).
pub fn patient_position(id: &str) -> Position {
    let hash = id_hash(id);
    Position {
        x: 15 + hash % 70,
        y: 20 + (hash * 2) % 60,
    }
}

pub fn asset_marker(asset: &Asset) -> Marker {
    Marker {
        id: asset.id.clone(),
        kind: if asset.is_alerting() {
            MarkerKind::Emergency
        } else {
            MarkerKind::Asset
        },
        position: asset_position(&asset.id),
        label: asset.name.clone(),
        details: format!("{}, {}", asset.kind, asset.location),
    }
}

pub fn patient_marker(patient: &Patient) -> Marker {
    Marker {
        id: patient.id.clone(),
        kind: if patient.is_emergency() {
            MarkerKind::Emergency
        } else {
            MarkerKind::Patient
        },
        position: patient_position(&patient.id),
        label: patient.name.clone(),
        details: format!("{}, {}", patient.kind, patient.room),
    }
}

/// Asset markers first, then patient markers, each in input order. Floor
/// selection is the caller's job.
pub fn place_markers(assets: &[Asset], patients: &[Patient]) -> Vec<Marker> {
    assets
        .iter()
        .map(asset_marker)
        .chain(patients.iter().map(patient_marker))
        .collect()
}
