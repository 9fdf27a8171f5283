//! Dashboard view model: floor selection, markers, recent items and locate.

use crate::core::placement::{asset_marker, patient_marker, place_markers};
use crate::core::summary::Summary;
use crate::errors::{AppError, AppResult};
use crate::models::{Asset, ItemType, Marker, Patient};
use crate::store::RecordStore;
use clap::ValueEnum;

/// Which record kinds the dashboard shows in its item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    #[default]
    All,
    Assets,
    Patients,
}

impl Tab {
    pub fn shows_assets(&self) -> bool {
        matches!(self, Tab::All | Tab::Assets)
    }

    pub fn shows_patients(&self) -> bool {
        matches!(self, Tab::All | Tab::Patients)
    }
}

/// Everything one dashboard screen needs.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub floor: u32,
    pub total_floors: u32,
    pub summary: Summary,
    pub markers: Vec<Marker>,
    pub recent_assets: Vec<&'a Asset>,
    pub recent_patients: Vec<&'a Patient>,
}

/// Where an asset or patient is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub item_type: ItemType,
    pub name: String,
    pub location: String,
    pub floor: u32,
    pub marker: Marker,
}

pub struct Dashboard;

impl Dashboard {
    pub fn check_floor(floor: u32, total_floors: u32) -> AppResult<u32> {
        if floor == 0 || floor > total_floors {
            return Err(AppError::InvalidFloor(format!(
                "{floor} (building has floors 1-{total_floors})"
            )));
        }
        Ok(floor)
    }

    /// Markers of the records on `floor` only.
    pub fn markers_for_floor(store: &RecordStore, floor: u32) -> Vec<Marker> {
        let assets: Vec<Asset> = store
            .assets
            .iter()
            .filter(|a| a.floor == floor)
            .cloned()
            .collect();
        let patients: Vec<Patient> = store
            .patients
            .iter()
            .filter(|p| p.floor == floor)
            .cloned()
            .collect();
        place_markers(&assets, &patients)
    }

    pub fn build(
        store: &RecordStore,
        floor: u32,
        total_floors: u32,
        tab: Tab,
        recent_items: usize,
    ) -> AppResult<DashboardView<'_>> {
        let floor = Self::check_floor(floor, total_floors)?;

        let recent_assets = if tab.shows_assets() {
            store.assets.iter().take(recent_items).collect()
        } else {
            Vec::new()
        };
        let recent_patients = if tab.shows_patients() {
            store.patients.iter().take(recent_items).collect()
        } else {
            Vec::new()
        };

        Ok(DashboardView {
            floor,
            total_floors,
            summary: Summary::build(&store.assets, &store.patients, &store.alerts),
            markers: Self::markers_for_floor(store, floor),
            recent_assets,
            recent_patients,
        })
    }

    /// Find an asset or patient by exact id. Assets win on an id clash.
    pub fn locate(store: &RecordStore, id: &str) -> AppResult<Located> {
        if let Some(asset) = store.find_asset(id) {
            return Ok(Located {
                item_type: ItemType::Asset,
                name: asset.name.clone(),
                location: asset.location.clone(),
                floor: asset.floor,
                marker: asset_marker(asset),
            });
        }
        if let Some(patient) = store.find_patient(id) {
            return Ok(Located {
                item_type: ItemType::Patient,
                name: patient.name.clone(),
                location: patient.room.clone(),
                floor: patient.floor,
                marker: patient_marker(patient),
            });
        }
        Err(AppError::NotFound(id.to_string()))
    }
}
