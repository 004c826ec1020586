use std::fmt::Write as _;
use std::time::Duration;

use super::{App, ProfileView, Screen};

/// Draw the current screen as terminal text
pub fn draw_ui(app: &App) -> String {
    draw_ui_after(app, Duration::ZERO)
}

/// Draw the screen as it looks `elapsed` after the last load; banners past
/// their dismiss delay are left out.
pub fn draw_ui_after(app: &App, elapsed: Duration) -> String {
    let mut out = String::new();

    for banner in app.visible_banners(elapsed) {
        let _ = writeln!(out, "! {}", banner.message);
    }

    match app.screen() {
        Screen::LoggedOut { form_error } => {
            let _ = writeln!(out, "Signed out.");
            if let Some(error) = form_error {
                let _ = writeln!(out, "{}", error);
            }
            let _ = writeln!(out, "Run `xpstats login --identifier <login or email>` to sign in.");
        }
        Screen::LoggedIn { profile: None, .. } => {
            let _ = writeln!(out, "Signed in. No profile data loaded.");
        }
        Screen::LoggedIn {
            profile: Some(profile),
            ..
        } => draw_profile(&mut out, profile),
    }
    out
}

fn draw_profile(out: &mut String, profile: &ProfileView) {
    let _ = writeln!(out, "{} ({})", profile.login, profile.user_id);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total XP:           {}", profile.stats.total_xp_label);
    let _ = writeln!(out, "Projects completed: {}", profile.stats.completed);
    let _ = writeln!(out, "Success rate:       {}", profile.stats.success_rate_label);

    if let (Some(first), Some(last)) = (profile.charts.daily.first(), profile.charts.daily.last()) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "XP progress: {} → {} over {} active days",
            first.label(),
            last.label(),
            profile.charts.daily.len()
        );
    }

    if !profile.event_bars.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "XP by event:");
        for bar in &profile.event_bars {
            let _ = writeln!(out, "  {}", bar.tooltip);
        }
    }

    if !profile.pie.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Audit results:");
        for slice in &profile.pie {
            let _ = writeln!(out, "  {}", slice.tooltip);
        }
    }

    if !profile.completed_items.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Completed:");
        for name in &profile.completed_items {
            let _ = writeln!(out, "  - {}", name);
        }
    }
}
