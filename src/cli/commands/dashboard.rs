use crate::cli::filters::parse_floor;
use crate::context::AppContext;
use crate::core::dashboard::{Dashboard, Tab};
use crate::errors::AppResult;
use crate::ui::floor_map;
use crate::ui::messages::{header, info};
use crate::ui::render;

/// Handle the `dashboard` command
pub fn handle(ctx: &mut AppContext, floor: &Option<String>, tab: Tab, map: bool) -> AppResult<()> {
    ctx.require_login()?;

    let floor = parse_floor(floor)?.unwrap_or(ctx.cfg.default_floor);
    let total_floors = ctx.cfg.total_floors;
    let recent_items = ctx.cfg.recent_items;

    let records = ctx.records()?;
    let view = Dashboard::build(records, floor, total_floors, tab, recent_items)?;

    header("Hospital dashboard");
    print!("{}", render::summary(&view.summary));

    header(format!("Floor {} of {}", view.floor, view.total_floors));
    if view.markers.is_empty() {
        info("No assets or patients on this floor.");
    } else if map {
        print!("{}", floor_map::render(&view.markers));
    } else {
        print!("{}", render::markers(&view.markers));
    }

    if tab.shows_assets() {
        header("Recent assets");
        print!("{}", render::assets(&view.recent_assets));
    }
    if tab.shows_patients() {
        header("Recent patients");
        print!("{}", render::patients(&view.recent_patients));
    }

    Ok(())
}
