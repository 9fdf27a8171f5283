use crate::context::AppContext;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::render;

/// Handle the `locate` command
pub fn handle(ctx: &mut AppContext, id: &str) -> AppResult<()> {
    ctx.require_login()?;

    let located = Dashboard::locate(ctx.records()?, id.trim())?;
    print!("{}", render::located(&located));
    Ok(())
}
