pub mod commands;
pub mod ui;
pub mod util;

pub use ui::{Output, Tally};
pub use util::CommandContext;
