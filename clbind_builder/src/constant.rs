/// The marker that identifies a token as a parameter flag rather than a command.
pub(crate) const FLAG_PREFIX: char = '-';

pub(crate) const DEFAULT_HELP_TRIGGERS: [&str; 2] = ["--help", "-h"];

// Indentation of the global command listing, and the base of the per-command view.
pub(crate) const LISTING_INDENT: usize = 8;
pub(crate) const COMMAND_INDENT: usize = 4;
pub(crate) const PARAMETER_INDENT: usize = 8;
pub(crate) const LABEL_SEPARATOR: &str = " - ";
