use serde::Serialize;
use std::time::Duration;
use tracing::info;

use super::session::Session;
use crate::analysis::{
    by_event, completed_count, completed_names, daily_cumulative, event_labels, pass_fail, percent,
    pie_angles, success_rate, total_xp, ResultFilter,
};
use crate::api::ProfileLoad;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::plotting::ChartData;
use crate::types::ProfileData;
use crate::utils::{format_xp, short_label};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";
pub const CONNECTION_FAILED_MESSAGE: &str = "Login failed. Please check your connection.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load profile data";

/// A transient message shown above the profile.
///
/// The dismiss delay matters to long-lived front ends that redraw; a one-shot
/// CLI run draws once, right after the banner was raised.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Banner {
    pub message: String,
    pub dismiss_after_secs: u64,
}

impl Banner {
    pub fn new(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            message: message.into(),
            dismiss_after_secs: dismiss_after.as_secs(),
        }
    }

    /// Whether the banner is still shown `elapsed` after it was raised
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        elapsed < Duration::from_secs(self.dismiss_after_secs)
    }
}

/// Summary cards at the top of the profile
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatCards {
    pub total_xp: i64,
    pub total_xp_label: String,
    pub completed: usize,
    pub success_rate: u32,
    pub success_rate_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventBar {
    pub label: String,
    pub tooltip: String,
    pub xp: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliceView {
    pub label: String,
    pub count: usize,
    pub percent: u32,
    pub tooltip: String,
    pub start: f64,
    pub end: f64,
}

/// Everything the profile screen shows, independent of how it is drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileView {
    pub login: String,
    pub user_id: String,
    pub stats: StatCards,
    pub completed_items: Vec<String>,
    pub event_bars: Vec<EventBar>,
    pub pie: Vec<SliceView>,
    pub charts: ChartData,
}

/// Build the profile view model from fetched records
pub fn build_profile_view(data: &ProfileData, config: &Config) -> ProfileView {
    let filter = ResultFilter::from_types(&config.success_rate_types);
    let total = total_xp(&data.transactions);
    let rate = success_rate(&data.results, &filter);
    let (pass, fail) = pass_fail(&data.results, &filter);

    let labels = event_labels(&data.events);
    let events = by_event(&data.transactions, &labels);
    let event_bars = events
        .iter()
        .map(|e| EventBar {
            label: short_label(&e.label),
            tooltip: format!("{}: {}", e.label, format_xp(e.xp)),
            xp: e.xp,
        })
        .collect();

    let pie = pie_angles(pass, fail)
        .map(|angles| {
            let total = pass + fail;
            [("Pass", pass, angles.pass_slice()), ("Fail", fail, angles.fail_slice())]
                .into_iter()
                .filter(|(_, count, _)| *count > 0)
                .map(|(label, count, slice)| {
                    let pct = percent(count, total);
                    SliceView {
                        label: label.to_string(),
                        count,
                        percent: pct,
                        tooltip: format!("{}: {} ({}%)", label, count, pct),
                        start: slice.start,
                        end: slice.end,
                    }
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    ProfileView {
        login: data.user.display_name(),
        user_id: format!("ID: {}", data.user.id),
        stats: StatCards {
            total_xp: total,
            total_xp_label: format_xp(total),
            completed: completed_count(&data.transactions),
            success_rate: rate,
            success_rate_label: format!("{}%", rate),
        },
        completed_items: completed_names(&data.transactions, &data.objects),
        event_bars,
        pie,
        charts: ChartData {
            daily: daily_cumulative(&data.transactions),
            has_xp: data.transactions.iter().any(|t| t.is_xp()),
            pass,
            fail,
            events,
        },
    }
}

/// The two screens
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    LoggedOut {
        form_error: Option<String>,
    },
    LoggedIn {
        session: Session,
        profile: Option<ProfileView>,
    },
}

/// Screen state plus pending banners. Every transition is a method taking
/// the outcome of the corresponding I/O.
#[derive(Clone, Debug, PartialEq)]
pub struct App {
    screen: Screen,
    banners: Vec<Banner>,
}

impl App {
    /// Start on the profile when a stored session exists
    pub fn start(stored: Option<Session>) -> Self {
        let screen = match stored {
            Some(session) => Screen::LoggedIn {
                session,
                profile: None,
            },
            None => Screen::LoggedOut { form_error: None },
        };
        Self {
            screen,
            banners: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::LoggedIn { session, .. } => Some(session),
            Screen::LoggedOut { .. } => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn profile(&self) -> Option<&ProfileView> {
        match &self.screen {
            Screen::LoggedIn { profile, .. } => profile.as_ref(),
            Screen::LoggedOut { .. } => None,
        }
    }

    pub fn form_error(&self) -> Option<&str> {
        match &self.screen {
            Screen::LoggedOut { form_error } => form_error.as_deref(),
            Screen::LoggedIn { .. } => None,
        }
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// Banners still shown `elapsed` after they were raised
    pub fn visible_banners(&self, elapsed: Duration) -> Vec<&Banner> {
        self.banners.iter().filter(|b| b.is_visible(elapsed)).collect()
    }

    pub fn on_sign_in(&mut self, result: Result<Session>) {
        match result {
            Ok(session) => {
                info!("signed in");
                self.screen = Screen::LoggedIn {
                    session,
                    profile: None,
                };
                self.banners.clear();
            }
            Err(e) => {
                let message = match e {
                    Error::InvalidCredentials { .. } | Error::EmptyToken => INVALID_CREDENTIALS_MESSAGE,
                    _ => CONNECTION_FAILED_MESSAGE,
                };
                self.screen = Screen::LoggedOut {
                    form_error: Some(message.to_string()),
                };
            }
        }
    }

    pub fn on_logout(&mut self) {
        info!("logged out");
        self.screen = Screen::LoggedOut { form_error: None };
        self.banners.clear();
    }

    /// Apply a profile load. `Unauthorized` logs out; any other error becomes
    /// a banner.
    pub fn on_profile_loaded(&mut self, outcome: Result<ProfileLoad>, config: &Config) {
        let load = match outcome {
            Ok(load) => load,
            Err(e) if e.is_unauthorized() => {
                self.on_logout();
                return;
            }
            Err(_) => {
                self.banners
                    .push(Banner::new(LOAD_FAILED_MESSAGE, config.banner_duration()));
                return;
            }
        };

        self.banners.extend(
            load.notices
                .into_iter()
                .map(|notice| Banner::new(notice, config.banner_duration())),
        );
        if let Screen::LoggedIn { profile, .. } = &mut self.screen {
            *profile = load.data.as_ref().map(|data| build_profile_view(data, config));
        }
    }
}
