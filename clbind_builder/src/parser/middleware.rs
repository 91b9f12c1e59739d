use std::env;

use crate::parser::dispatch::{Action, Dispatcher};
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The result of executing a [`Program`] against a list of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command with this key was selected and invoked.
    Invoked(String),
    /// The tokens were processed, but no command was selected.
    NoCommand,
    /// A help trigger was encountered; help was printed and nothing was invoked.
    Help,
    /// Processing stopped at a multiple-command or unimplemented-command error; nothing was invoked.
    Aborted,
}

impl Outcome {
    /// A conventional process exit code for this outcome: `1` when no command ran for lack of (a valid) one, `0` otherwise.
    ///
    /// `clbind` never exits on its own during [`Program::execute`]; this is offered for the host to use.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Invoked(_) | Outcome::Help => 0,
            Outcome::NoCommand | Outcome::Aborted => 1,
        }
    }
}

/// The configured command line binder, over the host value `H`.
/// Built via [`CommandLineBinder::build`](crate::CommandLineBinder::build).
pub struct Program<'a, H> {
    registry: Registry<'a, H>,
    help_triggers: Vec<String>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a, H> std::fmt::Debug for Program<'a, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("registry", &self.registry)
            .field("help_triggers", &self.help_triggers)
            .finish()
    }
}

impl<'a, H> Program<'a, H> {
    pub(crate) fn new(
        program: impl Into<String>,
        registry: Registry<'a, H>,
        help_triggers: Vec<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        let printer = Printer::new(program, &help_triggers);
        Self {
            registry,
            help_triggers,
            printer,
            user_interface,
        }
    }

    /// The registry of commands and parameters.
    ///
    /// After an execution, [`ParameterDescriptor::was_set`](crate::ParameterDescriptor::was_set) reports which parameters were supplied.
    pub fn registry(&self) -> &Registry<'a, H> {
        &self.registry
    }

    /// Run the binder against the input tokens (excluding the program name).
    ///
    /// The tokens are scanned left to right:
    /// * A help trigger (`--help` or `-h` by default) prints help and stops the scan.
    /// When a command was selected before the trigger, the help for that command is shown; otherwise, all commands are listed.
    /// * `-FLAG` names a parameter.
    /// A toggle parameter is set to `true`; any other parameter takes the next token as its value.
    /// * Any other token selects a command.
    ///
    /// Parameters are bound into `host` as they are scanned, regardless of where they appear relative to the command.
    /// The selected command is invoked once the scan completes.
    ///
    /// Diagnostics are printed as they are detected.
    /// An unrecognized parameter, or an invalid value, does not stop the scan (the parameter keeps its prior value).
    /// A second command, or an unknown command, aborts the scan: no command is invoked.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::{Command, CommandLineBinder, Outcome, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Tool {
    ///     verbose: bool,
    ///     built: bool,
    /// }
    ///
    /// let mut tool = Tool::default();
    /// let mut program = CommandLineBinder::new("tool")
    ///     .command(Command::new("build", |tool: &mut Tool| tool.built = true))
    ///     .add(Parameter::new("verbose", |tool: &mut Tool| &mut tool.verbose).toggle())
    ///     .build();
    ///
    /// let outcome = program.execute(&mut tool, &["-verbose", "build"]);
    ///
    /// assert_eq!(outcome, Outcome::Invoked("build".to_string()));
    /// assert!(tool.verbose);
    /// assert!(tool.built);
    /// ```
    pub fn execute(&mut self, host: &mut H, tokens: &[&str]) -> Outcome {
        self.registry.reset();
        let action = Dispatcher::new(&self.help_triggers).consume(
            &mut self.registry,
            host,
            tokens,
            &*self.user_interface,
        );
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Dispatch finished with {action:?}.");
        }

        match action {
            Action::Invoke(position) => {
                self.registry.invoke_at(host, position);
                Outcome::Invoked(self.registry.command_at(position).key().to_string())
            }
            Action::Idle => Outcome::NoCommand,
            Action::PrintHelp(selected) => {
                self.printer
                    .print_help(&self.registry, selected, &*self.user_interface);
                Outcome::Help
            }
            Action::Abort => Outcome::Aborted,
        }
    }

    /// Run the binder against the Cli [`env::args`].
    ///
    /// Behaves as [`Program::execute`].
    /// When no command is selected, additionally prints a usage hint.
    pub fn run(&mut self, host: &mut H) -> Outcome {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.run_tokens(
            host,
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    pub(crate) fn run_tokens(&mut self, host: &mut H, tokens: &[&str]) -> Outcome {
        let outcome = self.execute(host, tokens);

        if outcome == Outcome::NoCommand {
            self.printer.print_usage(&*self.user_interface);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::registry::test::{sample, Host};
    use crate::test::assert_contains;
    use rstest::rstest;

    fn program(interface: &InMemoryInterface) -> Program<'static, Host> {
        Program::new(
            "tool",
            sample(),
            vec!["--help".to_string(), "-h".to_string()],
            Box::new(interface.clone()),
        )
    }

    #[test]
    fn execute_empty() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.execute(&mut host, &[]);

        // Verify
        assert_eq!(outcome, Outcome::NoCommand);
        assert_eq!(host, Host::default());
        assert_eq!(interface.consume(), (None, vec![]));
    }

    #[rstest]
    #[case(vec!["build", "-verbose"])]
    #[case(vec!["-verbose", "build"])]
    fn execute_invokes(#[case] tokens: Vec<&str>) {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.execute(&mut host, &tokens);

        // Verify
        assert_eq!(outcome, Outcome::Invoked("build".to_string()));
        assert_eq!(host.invoked, vec!["build".to_string()]);
        assert!(host.verbose);
        assert!(program.registry().lookup_parameter("verbose").unwrap().was_set());
        assert_eq!(interface.consume(), (None, vec![]));
    }

    #[test]
    fn execute_resets_was_set() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();
        program.execute(&mut host, &["-count", "2"]);
        assert!(program.registry().lookup_parameter("count").unwrap().was_set());

        // Execute
        program.execute(&mut host, &["-name", "x"]);

        // Verify
        assert!(!program.registry().lookup_parameter("count").unwrap().was_set());
        assert!(program.registry().lookup_parameter("name").unwrap().was_set());
        // The host keeps the value of the earlier execution.
        assert_eq!(host.count, 2);
    }

    #[test]
    fn execute_help_listing() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.execute(&mut host, &["--help"]);

        // Verify
        assert_eq!(outcome, Outcome::Help);
        assert!(host.invoked.is_empty());
        let message = interface.consume_message();
        assert_contains!(message, "The following commands are available in this program:");
        assert_contains!(message, "        build - Build the project.");
        assert_contains!(message, "Try \"tool [COMMAND] --help\"");
    }

    #[test]
    fn execute_help_command() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.execute(&mut host, &["build", "-h"]);

        // Verify
        assert_eq!(outcome, Outcome::Help);
        assert!(host.invoked.is_empty());
        let message = interface.consume_message();
        assert_contains!(message, "    build - Build the project.");
        assert_contains!(message, "        -count - How many times to build.");
        assert!(!message.contains("-ratio"));
        assert!(!message.contains("deploy"));
    }

    #[test]
    fn execute_aborted() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.execute(&mut host, &["deploy", "build"]);

        // Verify
        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(outcome.exit_code(), 1);
        assert!(host.invoked.is_empty());
        let (message, diagnostics) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(
            diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["ERROR: Multiple commands are not supported. Encountered second command \"build\".".to_string()]
        );
    }

    #[test]
    fn execute_bad_value() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host {
            count: 3,
            ..Host::default()
        };

        // Execute
        let outcome = program.execute(&mut host, &["-count", "notanumber"]);

        // Verify
        assert_eq!(outcome, Outcome::NoCommand);
        assert_eq!(host.count, 3);
        assert!(host.invoked.is_empty());
        let diagnostics = interface.consume_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "ERROR: Bad parameter value. ParameterName=\"count\" Value=\"notanumber\"\nValue must be a 32-bit signed integer"
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["-verbose"])]
    #[case(vec!["-count", "notanumber"])]
    fn run_no_command(#[case] tokens: Vec<&str>) {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.run_tokens(&mut host, &tokens);

        // Verify
        assert_eq!(outcome, Outcome::NoCommand);
        assert!(host.invoked.is_empty());
        let (message, _) = interface.consume();
        assert_eq!(
            message.unwrap(),
            r#"usage: tool [COMMAND] [-PARAMETER VALUE]... [-TOGGLE]...
Try "tool --help" for more information."#
        );
    }

    #[rstest]
    #[case(vec!["build"], Outcome::Invoked("build".to_string()))]
    #[case(vec!["deploy", "build"], Outcome::Aborted)]
    fn run_command(#[case] tokens: Vec<&str>, #[case] expected: Outcome) {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.run_tokens(&mut host, &tokens);

        // Verify
        assert_eq!(outcome, expected);
        // The usage hint is only printed when no command was selected.
        let (message, _) = interface.consume();
        assert_eq!(message, None);
    }

    #[test]
    fn run_help() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut program = program(&interface);
        let mut host = Host::default();

        // Execute
        let outcome = program.run_tokens(&mut host, &["-h"]);

        // Verify
        assert_eq!(outcome, Outcome::Help);
        let message = interface.consume_message();
        assert_contains!(message, "The following commands are available in this program:");
        assert!(!message.contains("usage: tool [COMMAND]"));
    }

    #[rstest]
    #[case(Outcome::Invoked("x".to_string()), 0)]
    #[case(Outcome::Help, 0)]
    #[case(Outcome::NoCommand, 1)]
    #[case(Outcome::Aborted, 1)]
    fn exit_code(#[case] outcome: Outcome, #[case] expected: i32) {
        assert_eq!(outcome.exit_code(), expected);
    }
}
