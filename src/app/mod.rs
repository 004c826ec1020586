mod session;
mod state;
mod ui;

#[cfg(test)]
mod tests;

pub use session::{Session, SessionStore};
pub use state::{
    build_profile_view, App, Banner, EventBar, ProfileView, Screen, SliceView, StatCards,
    CONNECTION_FAILED_MESSAGE, INVALID_CREDENTIALS_MESSAGE, LOAD_FAILED_MESSAGE,
};
pub use ui::{draw_ui, draw_ui_after};
