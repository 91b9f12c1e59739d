use std::collections::HashMap;
use thiserror::Error;

use crate::coerce::{coerce, CoercionError, Primitive};
use crate::constant::FLAG_PREFIX;
use crate::model::{Value, ValueKind};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid binder configuration, detected when building the [`Program`](crate::Program).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The metadata of a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    key: String,
    help: Option<String>,
    usage: Option<String>,
}

impl CommandDescriptor {
    pub(crate) fn new(key: String, help: Option<String>, usage: Option<String>) -> Self {
        Self { key, help, usage }
    }

    /// The token which selects this command.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The help text, if documented.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The usage text, if documented.
    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }
}

/// The metadata of a registered parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    flag: String,
    help: Option<String>,
    toggle: bool,
    commands: Option<Vec<String>>,
    kind: ValueKind,
    was_set: bool,
}

impl ParameterDescriptor {
    pub(crate) fn new(
        flag: String,
        help: Option<String>,
        toggle: bool,
        commands: Option<Vec<String>>,
        kind: ValueKind,
    ) -> Self {
        Self {
            flag,
            help,
            toggle,
            commands,
            kind,
            was_set: false,
        }
    }

    /// The flag, without the leading `-`.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// The help text, if documented.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Whether the mere presence of the flag sets the parameter to `true`.
    pub fn is_toggle(&self) -> bool {
        self.toggle
    }

    /// The command keys this parameter is documented under.
    /// `None` means it applies to all commands.
    pub fn commands(&self) -> Option<&[String]> {
        self.commands.as_deref()
    }

    /// The declared kind of the parameter's value.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether the parameter was explicitly, and successfully, supplied during the latest execution.
    pub fn was_set(&self) -> bool {
        self.was_set
    }

    /// Whether the parameter is documented under the `key` command.
    pub fn applies_to(&self, key: &str) -> bool {
        match &self.commands {
            Some(commands) => commands.iter().any(|command| command == key),
            None => true,
        }
    }
}

pub(crate) type Action<'a, H> = Box<dyn Fn(&mut H) + 'a>;

/// The write-slot of a parameter: an explicit write into the host value `H`.
pub(crate) struct Slot<'a, H> {
    kind: ValueKind,
    write: Box<dyn Fn(&mut H, Value) + 'a>,
}

impl<'a, H> Slot<'a, H> {
    pub(crate) fn from_accessor<T, F>(accessor: F) -> Self
    where
        T: Primitive + 'a,
        F: Fn(&mut H) -> &mut T + 'a,
    {
        Self {
            kind: T::KIND,
            write: Box::new(move |host, value| {
                *accessor(host) = T::from_value(value)
                    .expect("internal error - coerced value must match the slot kind");
            }),
        }
    }

    pub(crate) fn kind(&self) -> ValueKind {
        self.kind
    }

    fn write(&self, host: &mut H, value: Value) {
        (self.write)(host, value);
    }
}

pub(crate) struct CommandEntry<'a, H> {
    pub(crate) descriptor: CommandDescriptor,
    pub(crate) action: Action<'a, H>,
}

pub(crate) struct ParameterEntry<'a, H> {
    pub(crate) descriptor: ParameterDescriptor,
    pub(crate) slot: Slot<'a, H>,
}

/// The registry of commands and parameters for a host value `H`.
///
/// Iteration order follows registration order.
pub struct Registry<'a, H> {
    commands: Vec<CommandEntry<'a, H>>,
    command_index: HashMap<String, usize>,
    parameters: Vec<ParameterEntry<'a, H>>,
    parameter_index: HashMap<String, usize>,
}

impl<'a, H> std::fmt::Debug for Registry<'a, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field(
                "commands",
                &self.commands.iter().map(|c| &c.descriptor).collect::<Vec<_>>(),
            )
            .field(
                "parameters",
                &self
                    .parameters
                    .iter()
                    .map(|p| &p.descriptor)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a, H> Registry<'a, H> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), Vec::default())
            .expect("internal error - empty registry must be valid")
    }

    pub(crate) fn new(
        commands: Vec<CommandEntry<'a, H>>,
        parameters: Vec<ParameterEntry<'a, H>>,
    ) -> Result<Self, ConfigError> {
        let mut command_index = HashMap::default();
        let mut parameter_index = HashMap::default();

        for (i, entry) in commands.iter().enumerate() {
            let key = entry.descriptor.key();

            if key.trim().is_empty() {
                return Err(ConfigError(
                    "Command keys cannot be empty or whitespace.".to_string(),
                ));
            }

            if key.starts_with(FLAG_PREFIX) {
                return Err(ConfigError(format!(
                    "Command '{key}' cannot begin with the flag prefix '{FLAG_PREFIX}'."
                )));
            }

            if command_index.insert(key.to_string(), i).is_some() {
                return Err(ConfigError(format!("Cannot duplicate the command '{key}'.")));
            }
        }

        for (i, entry) in parameters.iter().enumerate() {
            let descriptor = &entry.descriptor;
            let flag = descriptor.flag();

            if flag.trim().is_empty() {
                return Err(ConfigError(
                    "Parameter flags cannot be empty or whitespace.".to_string(),
                ));
            }

            if parameter_index.insert(flag.to_string(), i).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{flag}'."
                )));
            }

            if descriptor.is_toggle() && descriptor.kind() != ValueKind::Bool {
                return Err(ConfigError(format!(
                    "Toggle parameter '{flag}' must be declared bool, found {}.",
                    descriptor.kind()
                )));
            }

            for key in descriptor.commands().unwrap_or_default() {
                if !command_index.contains_key(key) {
                    return Err(ConfigError(format!(
                        "Parameter '{flag}' applies to unknown command '{key}'."
                    )));
                }
            }
        }

        Ok(Self {
            commands,
            command_index,
            parameters,
            parameter_index,
        })
    }

    /// Find the command registered under `key`.
    pub fn lookup_command(&self, key: &str) -> Option<&CommandDescriptor> {
        self.command_position(key)
            .map(|i| &self.commands[i].descriptor)
    }

    /// Find the parameter registered under `flag` (without the leading `-`).
    pub fn lookup_parameter(&self, flag: &str) -> Option<&ParameterDescriptor> {
        self.parameter_position(flag)
            .map(|i| &self.parameters[i].descriptor)
    }

    /// All commands, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().map(|entry| &entry.descriptor)
    }

    /// All parameters, in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().map(|entry| &entry.descriptor)
    }

    /// The parameters documented under the `key` command, in registration order.
    pub fn parameters_applicable_to<'r>(
        &'r self,
        key: &'r str,
    ) -> impl Iterator<Item = &'r ParameterDescriptor> + 'r {
        self.parameters().filter(move |p| p.applies_to(key))
    }

    /// Coerce `raw` for the parameter `flag` and write it into the `host`.
    ///
    /// On failure the host is left untouched and the parameter is not marked as set.
    pub fn bind(&mut self, host: &mut H, flag: &str, raw: &str) -> Result<(), BindError> {
        let position = self
            .parameter_position(flag)
            .ok_or_else(|| BindError::UnknownParameter(flag.to_string()))?;
        self.bind_at(host, position, raw)?;
        Ok(())
    }

    pub(crate) fn command_position(&self, key: &str) -> Option<usize> {
        self.command_index.get(key).copied()
    }

    pub(crate) fn parameter_position(&self, flag: &str) -> Option<usize> {
        self.parameter_index.get(flag).copied()
    }

    pub(crate) fn command_at(&self, position: usize) -> &CommandDescriptor {
        &self.commands[position].descriptor
    }

    pub(crate) fn parameter_at(&self, position: usize) -> &ParameterDescriptor {
        &self.parameters[position].descriptor
    }

    pub(crate) fn bind_at(
        &mut self,
        host: &mut H,
        position: usize,
        raw: &str,
    ) -> Result<(), CoercionError> {
        let ParameterEntry { descriptor, slot } = &mut self.parameters[position];
        let value = coerce(slot.kind(), descriptor.flag(), raw)?;
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Binding '{}' to {value:?}.", descriptor.flag());
        }
        slot.write(host, value);
        descriptor.was_set = true;
        Ok(())
    }

    pub(crate) fn toggle_at(&mut self, host: &mut H, position: usize) {
        let ParameterEntry { descriptor, slot } = &mut self.parameters[position];
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Toggling '{}'.", descriptor.flag());
        }
        slot.write(host, Value::Bool(true));
        descriptor.was_set = true;
    }

    pub(crate) fn invoke_at(&self, host: &mut H, position: usize) {
        (self.commands[position].action)(host);
    }

    pub(crate) fn reset(&mut self) {
        for entry in self.parameters.iter_mut() {
            entry.descriptor.was_set = false;
        }
    }
}

/// A failure of [`Registry::bind`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// No parameter is registered under the flag.
    #[error("no parameter is registered for '{0}'.")]
    UnknownParameter(String),
    /// The raw text did not coerce into the parameter's declared kind.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    pub(crate) struct Host {
        pub(crate) verbose: bool,
        pub(crate) count: i32,
        pub(crate) name: String,
        pub(crate) ratio: Option<f64>,
        pub(crate) invoked: Vec<String>,
    }

    pub(crate) fn command<'a>(key: &str, help: Option<&str>) -> CommandEntry<'a, Host> {
        let invoked = key.to_string();
        CommandEntry {
            descriptor: CommandDescriptor::new(key.to_string(), help.map(str::to_string), None),
            action: Box::new(move |host: &mut Host| host.invoked.push(invoked.clone())),
        }
    }

    pub(crate) fn parameter<'a, T, F>(
        flag: &str,
        help: Option<&str>,
        toggle: bool,
        commands: Option<Vec<&str>>,
        accessor: F,
    ) -> ParameterEntry<'a, Host>
    where
        T: Primitive + 'a,
        F: Fn(&mut Host) -> &mut T + 'a,
    {
        let slot = Slot::from_accessor(accessor);
        ParameterEntry {
            descriptor: ParameterDescriptor::new(
                flag.to_string(),
                help.map(str::to_string),
                toggle,
                commands.map(|keys| keys.into_iter().map(str::to_string).collect()),
                slot.kind(),
            ),
            slot,
        }
    }

    pub(crate) fn sample<'a>() -> Registry<'a, Host> {
        Registry::new(
            vec![
                command("build", Some("Build the project.")),
                command("deploy", Some("Deploy the project.\nRequires credentials.")),
            ],
            vec![
                parameter(
                    "verbose",
                    Some("Print more output."),
                    true,
                    None,
                    |h: &mut Host| &mut h.verbose,
                ),
                parameter(
                    "count",
                    Some("How many times to build."),
                    false,
                    Some(vec!["build"]),
                    |h: &mut Host| &mut h.count,
                ),
                parameter("name", None, false, None, |h: &mut Host| &mut h.name),
                parameter(
                    "ratio",
                    Some("The rollout ratio.\nBetween 0 and 1."),
                    false,
                    Some(vec!["deploy"]),
                    |h: &mut Host| &mut h.ratio,
                ),
            ],
        )
        .unwrap()
    }
}
