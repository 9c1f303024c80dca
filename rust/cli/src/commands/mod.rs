mod play;
mod rules;

pub use play::handle_play_command;
pub use rules::handle_rules_command;
