use crate::api::{Command, Parameter};
use crate::constant::{DEFAULT_HELP_TRIGGERS, FLAG_PREFIX};
use crate::parser::{ConsoleInterface, Program, UserInterface};
use crate::registry::{CommandEntry, ConfigError, ParameterEntry, Registry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The base command line binder, over the host value `H`.
///
/// ### Example
/// ```
/// # use clbind_builder as clbind;
/// use clbind::CommandLineBinder;
///
/// struct Tool;
///
/// let mut program = CommandLineBinder::<Tool>::new("tool")
///     // Configure with CommandLineBinder::command and CommandLineBinder::add.
///     .build();
/// program.execute(&mut Tool, &[]);
/// ```
pub struct CommandLineBinder<'a, H> {
    program: String,
    help_triggers: Vec<String>,
    commands: Vec<CommandEntry<'a, H>>,
    parameters: Vec<ParameterEntry<'a, H>>,
}

impl<'a, H> CommandLineBinder<'a, H> {
    /// Create a command line binder for the program named `program`.
    /// The help triggers default to `--help` and `-h`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            help_triggers: DEFAULT_HELP_TRIGGERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            commands: Vec::default(),
            parameters: Vec::default(),
        }
    }

    /// Replace the help triggers: the tokens which request help.
    /// The first trigger is the one advertised in the usage hints.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::{CommandLineBinder, Outcome};
    ///
    /// struct Tool;
    ///
    /// let mut program = CommandLineBinder::<Tool>::new("tool")
    ///     .help_triggers(["-?"])
    ///     .build();
    ///
    /// assert_eq!(program.execute(&mut Tool, &["-?"]), Outcome::Help);
    /// ```
    pub fn help_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.help_triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    /// Register a command.
    /// Help lists the commands in the order they are registered.
    pub fn command(mut self, command: Command<'a, H>) -> Self {
        self.commands.push(CommandEntry::from(command));
        self
    }

    /// Register a parameter.
    /// Help lists the parameters in the order they are registered.
    pub fn add(mut self, parameter: Parameter<'a, H>) -> Self {
        self.parameters.push(ParameterEntry::from(parameter));
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<Program<'a, H>, ConfigError> {
        let registry = Registry::new(self.commands, self.parameters)?;

        for trigger in &self.help_triggers {
            if trigger.trim().is_empty() {
                return Err(ConfigError(
                    "Help triggers cannot be empty or whitespace.".to_string(),
                ));
            }

            if registry.lookup_command(trigger).is_some() {
                return Err(ConfigError(format!(
                    "Help trigger '{trigger}' shadows the command '{trigger}'."
                )));
            }

            if let Some(flag) = trigger.strip_prefix(FLAG_PREFIX) {
                if registry.lookup_parameter(flag).is_some() {
                    return Err(ConfigError(format!(
                        "Help trigger '{trigger}' shadows the parameter '{flag}'."
                    )));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built {registry:?} with help triggers {:?}.", self.help_triggers);
        }

        Ok(Program::new(
            self.program,
            registry,
            self.help_triggers,
            user_interface,
        ))
    }

    /// Build the [`Program`], returning the configuration error if the setup is invalid.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::{Command, CommandLineBinder};
    ///
    /// struct Tool;
    ///
    /// let result = CommandLineBinder::new("tool")
    ///     .command(Command::new("build", |_: &mut Tool| {}))
    ///     .command(Command::new("build", |_: &mut Tool| {}))
    ///     .build_program();
    ///
    /// assert_eq!(
    ///     result.unwrap_err().to_string(),
    ///     "Config error: Cannot duplicate the command 'build'."
    /// );
    /// ```
    pub fn build_program(self) -> Result<Program<'a, H>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the [`Program`].
    /// Exits with error code 1 if the setup is invalid.
    pub fn build(self) -> Program<'a, H> {
        match self.build_program() {
            Ok(program) => program,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use crate::parser::Outcome;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[derive(Debug, Default, PartialEq)]
    struct Tool {
        verbose: bool,
        count: u32,
        target: Option<String>,
        log: Vec<String>,
    }

    fn binder() -> CommandLineBinder<'static, Tool> {
        CommandLineBinder::new("tool")
            .command(
                Command::new("build", |tool: &mut Tool| {
                    let line = format!("build x{}", tool.count);
                    tool.log.push(line);
                })
                .help("Build it."),
            )
            .command(
                Command::new("deploy", |tool: &mut Tool| {
                    let line = format!("deploy to {:?}", tool.target);
                    tool.log.push(line);
                })
                .usage("deploy -target NAME"),
            )
            .add(
                Parameter::new("verbose", |tool: &mut Tool| &mut tool.verbose)
                    .toggle()
                    .help("Talk more."),
            )
            .add(Parameter::new("count", |tool: &mut Tool| &mut tool.count).commands(["build"]))
            .add(
                Parameter::new("target", |tool: &mut Tool| &mut tool.target)
                    .commands(["deploy"]),
            )
    }

    #[test]
    fn empty_build() {
        // Setup
        let clb = CommandLineBinder::<Tool>::new("tool");

        // Execute
        let mut program = clb.build_program().unwrap();

        // Verify
        let mut tool = Tool::default();
        assert_eq!(
            program.execute(&mut tool, &[]),
            Outcome::NoCommand
        );
        assert_eq!(program.registry().commands().count(), 0);
        assert_eq!(tool, Tool::default());
    }

    #[rstest]
    #[case(vec!["build"], "build x0", false)]
    #[case(vec!["build", "-count", "3"], "build x3", false)]
    #[case(vec!["-count", " 3 ", "build", "-verbose"], "build x3", true)]
    #[case(vec!["deploy", "-target", "prod"], "deploy to Some(\"prod\")", false)]
    #[case(vec!["-target", "", "deploy"], "deploy to Some(\"\")", false)]
    fn build(#[case] tokens: Vec<&str>, #[case] expected_log: &str, #[case] expected_verbose: bool) {
        // Setup
        let interface = InMemoryInterface::default();
        let mut tool = Tool::default();
        let mut program = binder()
            .build_with_interface(Box::new(interface.clone()))
            .unwrap();

        // Execute
        let outcome = program.execute(&mut tool, &tokens);

        // Verify
        assert_matches!(outcome, Outcome::Invoked(_));
        assert_eq!(tool.log, vec![expected_log.to_string()]);
        assert_eq!(tool.verbose, expected_verbose);
        assert_eq!(interface.consume(), (None, vec![]));
    }

    #[test]
    fn build_help() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut tool = Tool::default();
        let mut program = binder()
            .build_with_interface(Box::new(interface.clone()))
            .unwrap();

        // Execute
        let outcome = program.execute(&mut tool, &["deploy", "--help"]);

        // Verify
        assert_eq!(outcome, Outcome::Help);
        assert!(tool.log.is_empty());
        let message = interface.consume_message();
        assert_contains!(message, "    deploy");
        assert_contains!(message, "    usage: tool deploy -target NAME");
        assert_contains!(message, "        -verbose - Talk more.");
        assert_contains!(message, "        -target");
        assert!(!message.contains("-count"));
    }

    #[test]
    fn build_help_triggers() {
        // Setup
        let interface = InMemoryInterface::default();
        let mut tool = Tool::default();
        let mut program = binder()
            .help_triggers(["help"])
            .build_with_interface(Box::new(interface.clone()))
            .unwrap();

        // Execute
        let outcome = program.execute(&mut tool, &["help"]);
        let outcome_default = program.execute(&mut tool, &["--help"]);

        // Verify
        assert_eq!(outcome, Outcome::Help);
        assert_eq!(outcome_default, Outcome::NoCommand);
        let (message, diagnostics) = interface.consume();
        let message = message.unwrap();
        assert_contains!(
            message,
            "Try \"tool [COMMAND] help\" for more information on individual commands."
        );
        assert_eq!(
            diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["ERROR: Unrecognized parameter \"--help\".".to_string()]
        );
    }

    #[rstest]
    #[case(vec![""], "Config error: Help triggers cannot be empty or whitespace.")]
    #[case(vec!["--help", "  "], "Config error: Help triggers cannot be empty or whitespace.")]
    #[case(vec!["build"], "Config error: Help trigger 'build' shadows the command 'build'.")]
    #[case(vec!["-count"], "Config error: Help trigger '-count' shadows the parameter 'count'.")]
    fn build_invalid_help_triggers(#[case] triggers: Vec<&str>, #[case] expected: &str) {
        // Setup
        let clb = binder().help_triggers(triggers);

        // Execute
        let error = clb.build_program().unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn build_default_trigger_shadows_parameter() {
        // Setup
        let clb = CommandLineBinder::new("tool")
            .add(Parameter::new("h", |tool: &mut Tool| &mut tool.verbose).toggle());

        // Execute
        let error = clb.build_program().unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Config error: Help trigger '-h' shadows the parameter 'h'."
        );
    }

    #[rstest]
    #[case(
        CommandLineBinder::new("tool").command(Command::new(" ", |_: &mut Tool| {})),
        "Config error: Command keys cannot be empty or whitespace."
    )]
    #[case(
        CommandLineBinder::new("tool").command(Command::new("-build", |_: &mut Tool| {})),
        "Config error: Command '-build' cannot begin with the flag prefix '-'."
    )]
    #[case(
        CommandLineBinder::new("tool")
            .add(Parameter::new("count", |tool: &mut Tool| &mut tool.count).toggle()),
        "Config error: Toggle parameter 'count' must be declared bool, found uint32."
    )]
    #[case(
        CommandLineBinder::new("tool")
            .add(Parameter::new("count", |tool: &mut Tool| &mut tool.count).commands(["build"])),
        "Config error: Parameter 'count' applies to unknown command 'build'."
    )]
    fn build_invalid(#[case] clb: CommandLineBinder<'static, Tool>, #[case] expected: &str) {
        // Execute
        let error = clb.build_program().unwrap_err();

        // Verify
        assert_eq!(error.to_string(), expected);
    }
}
