use super::*;
use crate::api::ProfileLoad;
use crate::config::Config;
use crate::error::Error;
use crate::types::{Event, ObjectRecord, ProfileData, ResultRecord, Transaction, User};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn xp(amount: i64, created_at: &str, object_id: Option<i64>, event_id: Option<i64>) -> Transaction {
    Transaction {
        kind: "xp".to_string(),
        amount,
        created_at: created_at.to_string(),
        path: "/kisumu/module/project".to_string(),
        object_id,
        event_id,
    }
}

fn result(kind: &str, grade: f64) -> ResultRecord {
    ResultRecord {
        grade: Some(grade),
        object_id: Some(1),
        kind: kind.to_string(),
    }
}

fn sample_profile() -> ProfileData {
    ProfileData {
        user: User {
            id: 1234,
            login: Some("jdoe".to_string()),
        },
        transactions: vec![
            xp(100_000, "2024-01-01T09:00:00+00:00", Some(1), Some(20)),
            xp(50_000, "2024-01-02T09:00:00+00:00", Some(2), Some(20)),
            xp(5_000, "2024-01-02T18:00:00+00:00", Some(2), Some(72)),
            Transaction {
                kind: "up".to_string(),
                ..xp(999, "2024-01-03T00:00:00+00:00", Some(3), Some(20))
            },
        ],
        results: vec![
            result("tester", 1.0),
            result("tester", 0.0),
            result("user_audit", 1.0),
            result("user_audit", 1.0),
            result("admin_selection", 0.0),
        ],
        objects: vec![ObjectRecord {
            id: 1,
            name: "go-reloaded".to_string(),
            kind: "project".to_string(),
        }],
        events: vec![Event {
            id: 20,
            path: Some("/kisumu/module".to_string()),
            object_id: Some(100),
        }],
    }
}

fn session() -> Session {
    Session::new("header.payload.signature").unwrap()
}

#[test]
fn test_build_profile_view() {
    let view = build_profile_view(&sample_profile(), &Config::default());

    assert_eq!(view.login, "jdoe");
    assert_eq!(view.user_id, "ID: 1234");
    assert_eq!(view.stats.total_xp, 155_000);
    assert_eq!(view.stats.total_xp_label, "155.0 kB");
    assert_eq!(view.stats.completed, 2);
    assert_eq!(view.stats.success_rate, 75);
    assert_eq!(view.stats.success_rate_label, "75%");
    assert_eq!(view.completed_items, vec!["Object 2", "go-reloaded"]);

    let cumulative: Vec<i64> = view.charts.daily.iter().map(|p| p.cumulative_xp).collect();
    assert_eq!(cumulative, vec![100_000, 155_000]);
    assert!(view.charts.has_xp);
    assert_eq!((view.charts.pass, view.charts.fail), (3, 1));

    assert_eq!(view.event_bars.len(), 2);
    assert_eq!(view.event_bars[0].label, "module");
    assert_eq!(view.event_bars[0].tooltip, "/kisumu/module: 150.0 kB");
    assert_eq!(view.event_bars[1].tooltip, "Event 72: 5.0 kB");

    assert_eq!(view.pie.len(), 2);
    assert_eq!(view.pie[0].tooltip, "Pass: 3 (75%)");
    assert_eq!(view.pie[1].tooltip, "Fail: 1 (25%)");
    assert_eq!(view.pie[0].end, view.pie[1].start);
}

#[test]
fn test_build_profile_view_counts_all_results_without_filter() {
    let config = Config {
        success_rate_types: Vec::new(),
        ..Config::default()
    };
    let view = build_profile_view(&sample_profile(), &config);
    assert_eq!(view.stats.success_rate, 60);
    assert_eq!((view.charts.pass, view.charts.fail), (3, 2));
}

#[test]
fn test_build_profile_view_with_no_records() {
    let data = ProfileData {
        user: User { id: 7, login: None },
        ..ProfileData::default()
    };
    let view = build_profile_view(&data, &Config::default());
    assert_eq!(view.login, "User 7");
    assert_eq!(view.stats.total_xp_label, "0 B");
    assert_eq!(view.stats.success_rate_label, "0%");
    assert!(view.pie.is_empty());
    assert!(view.charts.daily.is_empty());
    assert!(!view.charts.has_xp);
}

#[test]
fn test_start_depends_on_stored_session() {
    let app = App::start(None);
    assert!(!app.is_logged_in());
    assert_eq!(app.form_error(), None);

    let app = App::start(Some(session()));
    assert!(app.is_logged_in());
    assert_eq!(app.profile(), None);
}

#[test]
fn test_sign_in_transitions() {
    let mut app = App::start(None);
    app.on_sign_in(Err(Error::InvalidCredentials { status: 403 }));
    assert!(!app.is_logged_in());
    assert_eq!(app.form_error(), Some(INVALID_CREDENTIALS_MESSAGE));

    app.on_sign_in(Err(Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "refused",
    ))));
    assert_eq!(app.form_error(), Some(CONNECTION_FAILED_MESSAGE));

    app.on_sign_in(Ok(session()));
    assert!(app.is_logged_in());
    assert_eq!(app.session(), Some(&session()));

    app.on_logout();
    assert!(!app.is_logged_in());
    assert_eq!(app.form_error(), None);
}

#[test]
fn test_profile_loaded_builds_view_and_banners() {
    let config = Config::default();
    let mut app = App::start(Some(session()));
    app.on_profile_loaded(
        Ok(ProfileLoad {
            data: Some(sample_profile()),
            notices: vec!["GraphQL query failed: boom".to_string()],
        }),
        &config,
    );

    assert_eq!(app.profile().map(|p| p.stats.completed), Some(2));
    assert_eq!(app.banners().len(), 1);
    assert_eq!(app.banners()[0].message, "GraphQL query failed: boom");
    assert_eq!(app.visible_banners(Duration::from_secs(4)).len(), 1);
    assert!(app.visible_banners(Duration::from_secs(5)).is_empty());
}

#[test]
fn test_banners_drop_out_of_drawn_screen() {
    let config = Config {
        banner_secs: 3,
        ..Config::default()
    };
    let mut app = App::start(Some(session()));
    app.on_profile_loaded(
        Ok(ProfileLoad {
            data: Some(sample_profile()),
            notices: vec!["Network error: Failed to connect to GraphQL API".to_string()],
        }),
        &config,
    );

    assert!(draw_ui(&app).contains("! Network error"));
    assert!(draw_ui_after(&app, Duration::from_secs(2)).contains("! Network error"));
    let later = draw_ui_after(&app, Duration::from_secs(3));
    assert!(!later.contains("! Network error"));
    assert!(later.contains("jdoe"));
}

#[test]
fn test_unauthorized_load_logs_out() {
    let mut app = App::start(Some(session()));
    app.on_profile_loaded(Err(Error::Unauthorized), &Config::default());
    assert_eq!(*app.screen(), Screen::LoggedOut { form_error: None });
}

#[test]
fn test_other_load_failure_keeps_session() {
    let mut app = App::start(Some(session()));
    app.on_profile_loaded(Err(Error::Query("oops".to_string())), &Config::default());
    assert!(app.is_logged_in());
    assert_eq!(app.banners()[0].message, LOAD_FAILED_MESSAGE);
}

#[test]
fn test_draw_ui_screens() {
    let mut app = App::start(None);
    app.on_sign_in(Err(Error::EmptyToken));
    let text = draw_ui(&app);
    assert!(text.contains("Signed out."));
    assert!(text.contains(INVALID_CREDENTIALS_MESSAGE));

    let mut app = App::start(Some(session()));
    app.on_profile_loaded(
        Ok(ProfileLoad {
            data: Some(sample_profile()),
            notices: Vec::new(),
        }),
        &Config::default(),
    );
    let text = draw_ui(&app);
    assert!(text.contains("jdoe (ID: 1234)"));
    assert!(text.contains("Total XP:           155.0 kB"));
    assert!(text.contains("Success rate:       75%"));
    assert!(text.contains("2024-01-01 → 2024-01-02 over 2 active days"));
    assert!(text.contains("Pass: 3 (75%)"));
    assert!(text.contains("  - go-reloaded"));
}
