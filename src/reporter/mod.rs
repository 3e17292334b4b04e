mod console;
mod output;

pub use console::{ConsoleReporter, print_error};
pub use output::MatchWriter;
