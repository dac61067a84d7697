//! Theme CLI command

use clap::ValueEnum;

use crate::config::{AppContext, Theme};
use crate::error::FintrackResult;

/// What to do with the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl ThemeAction {
    fn apply(self, current: Theme) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::Toggle => current.toggled(),
        }
    }
}

/// Show the theme, or change and save it
pub fn handle_theme_command(ctx: &mut AppContext, action: Option<ThemeAction>) -> FintrackResult<()> {
    if let Some(action) = action {
        ctx.settings.theme = action.apply(ctx.settings.theme);
        ctx.save_settings()?;
        tracing::info!(theme = %ctx.settings.theme, "theme changed");
    }

    println!("Theme: {}", ctx.settings.theme);
    Ok(())
}
