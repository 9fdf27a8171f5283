use crate::cli::parser::ExportTarget;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(ctx: &mut AppContext, target: &ExportTarget) -> AppResult<()> {
    ctx.require_login()?;
    let basis = ctx.cfg.date_basis;

    let (label, output, written) = match target {
        ExportTarget::History { output, filters } => {
            let criteria = filters.to_criteria(basis)?;
            let records = ctx.records()?;
            let n = ExportLogic::history(
                &records.history,
                &criteria,
                output.format,
                &output.file,
                output.force,
            )?;
            ("history", output, n)
        }
        ExportTarget::Timelogs { output, filters } => {
            let criteria = filters.to_criteria(basis)?;
            let records = ctx.records()?;
            let n = ExportLogic::time_logs(
                &records.time_logs,
                &criteria,
                output.format,
                &output.file,
                output.force,
            )?;
            ("timelogs", output, n)
        }
    };

    if written > 0 {
        ctx.audit(
            "export",
            label,
            &format!("{written} rows as {} to {}", output.format.as_str(), output.file),
        );
    }
    Ok(())
}
