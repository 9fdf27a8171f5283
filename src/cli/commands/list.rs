//! Filtered list views, one handler per record kind.

use crate::cli::parser::{
    AlertFilterArgs, AssetFilterArgs, HistoryFilterArgs, PatientFilterArgs, TimeLogFilterArgs,
};
use crate::context::AppContext;
use crate::core::filter::filter_refs;
use crate::errors::AppResult;
use crate::ui::messages::{empty_state, info};
use crate::ui::render;

fn show(rendered: String, shown: usize, total: usize, kind: &str) {
    if shown == 0 {
        empty_state(kind);
        return;
    }
    print!("{rendered}");
    info(render::showing(shown, total, kind));
}

pub fn assets(ctx: &mut AppContext, args: &AssetFilterArgs) -> AppResult<()> {
    ctx.require_login()?;
    let criteria = args.to_criteria()?;
    let records = ctx.records()?;

    let rows = filter_refs(&records.assets, &criteria);
    show(render::assets(&rows), rows.len(), records.assets.len(), "assets");
    Ok(())
}

pub fn patients(ctx: &mut AppContext, args: &PatientFilterArgs) -> AppResult<()> {
    ctx.require_login()?;
    let criteria = args.to_criteria()?;
    let records = ctx.records()?;

    let rows = filter_refs(&records.patients, &criteria);
    show(render::patients(&rows), rows.len(), records.patients.len(), "patients");
    Ok(())
}

pub fn alerts(ctx: &mut AppContext, args: &AlertFilterArgs) -> AppResult<()> {
    ctx.require_login()?;
    let criteria = args.to_criteria()?;
    let records = ctx.records()?;

    let rows = filter_refs(&records.alerts, &criteria);
    show(render::alerts(&rows), rows.len(), records.alerts.len(), "alerts");
    Ok(())
}

pub fn history(ctx: &mut AppContext, args: &HistoryFilterArgs) -> AppResult<()> {
    ctx.require_login()?;
    let criteria = args.to_criteria(ctx.cfg.date_basis)?;
    let records = ctx.records()?;

    let rows = filter_refs(&records.history, &criteria);
    show(
        render::history(&rows),
        rows.len(),
        records.history.len(),
        "history entries",
    );
    Ok(())
}

pub fn time_logs(ctx: &mut AppContext, args: &TimeLogFilterArgs) -> AppResult<()> {
    ctx.require_login()?;
    let criteria = args.to_criteria(ctx.cfg.date_basis)?;
    let records = ctx.records()?;

    let rows = filter_refs(&records.time_logs, &criteria);
    show(
        render::time_logs(&rows),
        rows.len(),
        records.time_logs.len(),
        "time logs",
    );
    Ok(())
}
