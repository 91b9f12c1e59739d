use crate::registry::{Action, CommandDescriptor, CommandEntry};

/// A command that may be selected on the command line.
///
/// The command's action is invoked against the host value `H` when its key is the selected command.
pub struct Command<'a, H> {
    key: String,
    help: Option<String>,
    usage: Option<String>,
    action: Action<'a, H>,
}

impl<'a, H> std::fmt::Debug for Command<'a, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let help = if let Some(h) = &self.help {
            format!(", {h}")
        } else {
            "".to_string()
        };

        write!(f, "Command[{k}{help}]", k = self.key)
    }
}

impl<'a, H> Command<'a, H> {
    /// Create a command keyed by `key`, which runs `action` when selected.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::{Command, CommandLineBinder};
    ///
    /// #[derive(Default)]
    /// struct Tool {
    ///     built: bool,
    /// }
    ///
    /// let mut tool = Tool::default();
    /// let mut program = CommandLineBinder::new("tool")
    ///     .command(Command::new("build", |tool: &mut Tool| tool.built = true))
    ///     .build();
    ///
    /// program.execute(&mut tool, &["build"]);
    /// assert!(tool.built);
    /// ```
    pub fn new(key: impl Into<String>, action: impl Fn(&mut H) + 'a) -> Self {
        Self {
            key: key.into(),
            help: None,
            usage: None,
            action: Box::new(action),
        }
    }

    /// Document the help message for this command.
    /// If repeated, only the final help message will apply.
    ///
    /// Line breaks (`'\n'`) are preserved in the help output, aligned under the first line.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Document the usage line for this command, shown after the program name in the command's help.
    /// If repeated, only the final usage will apply.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::Command;
    ///
    /// struct Tool;
    ///
    /// let command = Command::new("deploy", |_: &mut Tool| {})
    ///     .help("Deploy the project.")
    ///     .usage("deploy -target NAME");
    /// ```
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.replace(usage.into());
        self
    }
}

impl<'a, H> From<Command<'a, H>> for CommandEntry<'a, H> {
    fn from(value: Command<'a, H>) -> Self {
        CommandEntry {
            descriptor: CommandDescriptor::new(value.key, value.help, value.usage),
            action: value.action,
        }
    }
}
