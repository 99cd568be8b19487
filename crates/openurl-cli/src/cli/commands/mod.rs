//! CLI command handlers, one file per command.

mod completions;
mod normalize;
mod open;
mod render;
mod shell;
mod view;

pub use completions::{run_completions, run_man};
pub use normalize::run_normalize;
pub use open::{open_page, run_open};
pub use shell::{run_shell, run_shell_stdio, ViewerCommand};
pub use view::run_view;
