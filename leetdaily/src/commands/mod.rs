//! Command handlers behind the CLI
//!
//! This module organizes commands into logical submodules:
//! - `daily`: today's problem, notes, completion, history
//! - `assistance`: hints, review, similar problems
//! - `settings`: notifications, reminder time, locale
//!
//! Every handler returns the text to print.

pub mod assistance;
pub mod daily;
pub mod settings;

pub use assistance::*;
pub use daily::*;
pub use settings::*;

use crate::app::AppState;

/// Application information
pub fn app_info(state: &AppState) -> String {
    format!(
        "leetdaily {}\nData directory: {}",
        env!("CARGO_PKG_VERSION"),
        state.data_dir.display()
    )
}
