use thiserror::Error;

use crate::coerce::CoercionError;
use crate::constant::FLAG_PREFIX;
use crate::parser::interface::UserInterface;
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A problem reported to the user while scanning the arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum Diagnostic {
    #[error("ERROR: Unrecognized parameter \"{0}\".")]
    UnrecognizedParameter(String),

    #[error(transparent)]
    BadValue(#[from] CoercionError),

    #[error("ERROR: Parameter \"{0}\" expects a value.")]
    MissingValue(String),

    #[error("ERROR: Multiple commands are not supported. Encountered second command \"{0}\".")]
    MultipleCommands(String),

    #[error("ERROR: Specified command \"{0}\" is not implemented.")]
    UnimplementedCommand(String),
}

impl Diagnostic {
    /// Whether the diagnostic ends the scan (no command will run).
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(
            self,
            Diagnostic::MultipleCommands(_) | Diagnostic::UnimplementedCommand(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    // The position of the pending (non-toggle) parameter.
    AwaitingParameterValue(usize),
    Done,
    Aborted,
}

/// What to do once the scan is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Invoke the command at this position.
    Invoke(usize),
    /// The scan completed, but no command was selected.
    Idle,
    /// A help trigger was seen; render help for the selected command (if any).
    PrintHelp(Option<usize>),
    /// A fatal diagnostic was reported; nothing may run.
    Abort,
}

/// The token classification state machine.
///
/// Tokens are fed left to right.
/// Command selection is decoupled from parameter binding, so flags are applied regardless of their position relative to the command.
#[derive(Debug)]
pub(crate) struct Dispatcher<'t> {
    help_triggers: &'t [String],
    state: State,
    selected: Option<usize>,
}

impl<'t> Dispatcher<'t> {
    pub(crate) fn new(help_triggers: &'t [String]) -> Self {
        Self {
            help_triggers,
            state: State::Scanning,
            selected: None,
        }
    }

    /// Feed all the tokens, then close.
    pub(crate) fn consume<H>(
        mut self,
        registry: &mut Registry<'_, H>,
        host: &mut H,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Action {
        for token in tokens {
            if self.is_terminal() {
                break;
            }

            self.feed(registry, host, token, user_interface);
        }

        self.close(registry, user_interface)
    }

    fn is_terminal(&self) -> bool {
        matches!(self.state, State::Done | State::Aborted)
    }

    pub(crate) fn feed<H>(
        &mut self,
        registry: &mut Registry<'_, H>,
        host: &mut H,
        token: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        if self.help_triggers.iter().any(|trigger| trigger == token) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help trigger '{token}' in state {:?}.", self.state);
            }
            self.state = State::Done;
            return;
        }

        let next = match self.state {
            State::AwaitingParameterValue(position) => {
                // The prior value remains in place when the bind fails.
                match registry.bind_at(host, position, token) {
                    Ok(()) => State::Scanning,
                    Err(error) => report(Diagnostic::from(error), user_interface),
                }
            }
            State::Scanning => match token.strip_prefix(FLAG_PREFIX) {
                Some(flag) => match registry.parameter_position(flag) {
                    Some(position) if registry.parameter_at(position).is_toggle() => {
                        registry.toggle_at(host, position);
                        State::Scanning
                    }
                    Some(position) => State::AwaitingParameterValue(position),
                    None => report(
                        Diagnostic::UnrecognizedParameter(token.to_string()),
                        user_interface,
                    ),
                },
                None => self.select(registry, token, user_interface),
            },
            State::Done | State::Aborted => {
                unreachable!("internal error - cannot feed a terminal dispatcher")
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}': {:?} -> {next:?}.", self.state);
        }
        self.state = next;
    }

    fn select<H>(
        &mut self,
        registry: &Registry<'_, H>,
        token: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> State {
        if self.selected.is_some() {
            return report(
                Diagnostic::MultipleCommands(token.to_string()),
                user_interface,
            );
        }

        match registry.command_position(token) {
            Some(position) => {
                self.selected.replace(position);
                State::Scanning
            }
            None => report(
                Diagnostic::UnimplementedCommand(token.to_string()),
                user_interface,
            ),
        }
    }

    pub(crate) fn close<H>(
        self,
        registry: &Registry<'_, H>,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Action {
        match self.state {
            State::Done => Action::PrintHelp(self.selected),
            State::Aborted => Action::Abort,
            State::AwaitingParameterValue(position) => {
                user_interface.print_diagnostic(Diagnostic::MissingValue(format!(
                    "{FLAG_PREFIX}{}",
                    registry.parameter_at(position).flag()
                )));
                self.selected.map_or(Action::Idle, Action::Invoke)
            }
            State::Scanning => self.selected.map_or(Action::Idle, Action::Invoke),
        }
    }
}

/// Print the diagnostic, and decide the state it leads to.
fn report(diagnostic: Diagnostic, user_interface: &(impl UserInterface + ?Sized)) -> State {
    let next = if diagnostic.is_fatal() {
        State::Aborted
    } else {
        State::Scanning
    };
    user_interface.print_diagnostic(diagnostic);
    next
}
