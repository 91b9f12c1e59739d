use crate::coerce::Primitive;
use crate::registry::{ParameterDescriptor, ParameterEntry, Slot};

/// A parameter that may be specified on the command line as `-FLAG VALUE` (or `-FLAG` for a toggle).
///
/// The value is bound into the host value `H` through its accessor.
pub struct Parameter<'a, H> {
    flag: String,
    help: Option<String>,
    toggle: bool,
    commands: Option<Vec<String>>,
    slot: Slot<'a, H>,
}

impl<'a, H> std::fmt::Debug for Parameter<'a, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let toggle = if self.toggle { " toggle" } else { "" };
        let help = if let Some(h) = &self.help {
            format!(", {h}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "Parameter[-{f} {k}{toggle}{help}]",
            f = self.flag,
            k = self.slot.kind(),
        )
    }
}

impl<'a, H> Parameter<'a, H> {
    /// Create a parameter named `-flag`, bound through `accessor` into the host value.
    /// The value kind is taken from the accessor's target type.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::{CommandLineBinder, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Tool {
    ///     retries: u8,
    /// }
    ///
    /// let mut tool = Tool::default();
    /// let mut program = CommandLineBinder::new("tool")
    ///     .add(Parameter::new("retries", |tool: &mut Tool| &mut tool.retries))
    ///     .build();
    ///
    /// program.execute(&mut tool, &["-retries", "3"]);
    /// assert_eq!(tool.retries, 3);
    /// ```
    pub fn new<T, F>(flag: impl Into<String>, accessor: F) -> Self
    where
        T: Primitive + 'a,
        F: Fn(&mut H) -> &mut T + 'a,
    {
        Self {
            flag: flag.into(),
            help: None,
            toggle: false,
            commands: None,
            slot: Slot::from_accessor(accessor),
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Make this a toggle: a presence-only `-FLAG` which sets the (`bool`) target to `true` without consuming a value.
    ///
    /// ### Example
    /// ```
    /// # use clbind_builder as clbind;
    /// use clbind::{CommandLineBinder, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Tool {
    ///     verbose: bool,
    /// }
    ///
    /// let mut tool = Tool::default();
    /// let mut program = CommandLineBinder::new("tool")
    ///     .add(Parameter::new("verbose", |tool: &mut Tool| &mut tool.verbose).toggle())
    ///     .build();
    ///
    /// program.execute(&mut tool, &["-verbose"]);
    /// assert!(tool.verbose);
    /// ```
    pub fn toggle(mut self) -> Self {
        self.toggle = true;
        self
    }

    /// Restrict the commands under whose help this parameter is listed.
    /// Without this, the parameter applies to every command.
    ///
    /// This only affects the help output; the parameter is accepted regardless of the selected command.
    pub fn commands<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands
            .replace(keys.into_iter().map(Into::into).collect());
        self
    }
}

impl<'a, H> From<Parameter<'a, H>> for ParameterEntry<'a, H> {
    fn from(value: Parameter<'a, H>) -> Self {
        ParameterEntry {
            descriptor: ParameterDescriptor::new(
                value.flag,
                value.help,
                value.toggle,
                value.commands,
                value.slot.kind(),
            ),
            slot: value.slot,
        }
    }
}
