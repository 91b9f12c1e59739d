mod command;
mod parameter;
mod program;
