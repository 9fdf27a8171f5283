use crate::context::AppContext;
use crate::core::session::{CredentialVerifier, StaticPassword};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

fn prompt_password() -> AppResult<String> {
    print!("🔑 Access password: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

/// Handle the `login` command
pub fn login(ctx: &mut AppContext, password: &Option<String>) -> AppResult<()> {
    if ctx.session.is_authenticated() {
        info("Already logged in.");
        return Ok(());
    }

    let password = match password {
        Some(p) => p.clone(),
        None => prompt_password()?,
    };

    let verifier = StaticPassword::new(ctx.cfg.access_password.clone());
    if !verifier.verify(&password) {
        ctx.audit("login_failed", "", "Wrong access password");
        return Err(AppError::InvalidCredentials);
    }

    ctx.session.login();
    ctx.audit("login", "", "Dashboard unlocked");

    if let Some(reason) = &ctx.storage_error {
        warning(format!(
            "State database unavailable ({reason}); the login lasts for this command only."
        ));
    }
    success("Logged in. The dashboard is unlocked.");
    Ok(())
}

/// Handle the `logout` command. Logging out twice is harmless.
pub fn logout(ctx: &mut AppContext) -> AppResult<()> {
    let was_logged_in = ctx.session.is_authenticated();
    ctx.session.logout();

    if was_logged_in {
        ctx.audit("logout", "", "Dashboard locked");
        success("Logged out.");
    } else {
        info("Not logged in.");
    }
    Ok(())
}

/// Handle the `status` command
pub fn status(ctx: &AppContext) -> AppResult<()> {
    if ctx.session.is_authenticated() {
        success("Logged in: the dashboard is unlocked.");
    } else {
        info("Logged out: run `hospitrack login` to unlock the dashboard.");
    }
    if let Some(reason) = &ctx.storage_error {
        warning(format!("State database unavailable: {reason}"));
    }
    Ok(())
}
