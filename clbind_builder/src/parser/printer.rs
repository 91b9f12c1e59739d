use crate::constant::*;
use crate::parser::interface::{LabelRenderer, UserInterface};
use crate::registry::{CommandDescriptor, Registry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct Printer {
    program: String,
    help_trigger: Option<String>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", &[DEFAULT_HELP_TRIGGERS[0].to_string()])
    }

    pub(crate) fn new(program: impl Into<String>, help_triggers: &[String]) -> Self {
        Self {
            program: program.into(),
            // The hint lines advertise the first trigger only.
            help_trigger: help_triggers.first().cloned(),
        }
    }

    /// Print the per-command view when a command is selected, otherwise the global listing.
    pub(crate) fn print_help<H>(
        &self,
        registry: &Registry<'_, H>,
        selected: Option<usize>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Rendering help (selected: {selected:?}).");
        }

        match selected {
            Some(position) => {
                self.print_command(registry, registry.command_at(position), user_interface)
            }
            None => self.print_listing(registry, user_interface),
        }
    }

    fn print_listing<H>(
        &self,
        registry: &Registry<'_, H>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let renderer = LabelRenderer::new(LISTING_INDENT);
        user_interface.print("".to_string());
        user_interface.print("The following commands are available in this program:".to_string());

        for command in registry.commands() {
            user_interface.print("".to_string());

            for line in renderer.render(command.key(), command.help()) {
                user_interface.print(line);
            }
        }

        if let Some(trigger) = &self.help_trigger {
            user_interface.print("".to_string());
            user_interface.print(format!(
                "{:LISTING_INDENT$}Try \"{p} [COMMAND] {trigger}\" for more information on individual commands.",
                "",
                p = self.program,
            ));
        }
    }

    fn print_command<H>(
        &self,
        registry: &Registry<'_, H>,
        command: &CommandDescriptor,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let command_renderer = LabelRenderer::new(COMMAND_INDENT);
        let parameter_renderer = LabelRenderer::new(PARAMETER_INDENT);
        user_interface.print("".to_string());

        for line in command_renderer.render(command.key(), command.help()) {
            user_interface.print(line);
        }

        if let Some(usage) = command.usage() {
            user_interface.print(format!(
                "{:COMMAND_INDENT$}usage: {p} {usage}",
                "",
                p = self.program,
            ));
        }

        for parameter in registry.parameters_applicable_to(command.key()) {
            user_interface.print("".to_string());
            let label = format!("{FLAG_PREFIX}{}", parameter.flag());

            for line in parameter_renderer.render(&label, parameter.help()) {
                user_interface.print(line);
            }
        }
    }

    /// The hint for when no command was selected.
    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(format!(
            "usage: {p} [COMMAND] [{FLAG_PREFIX}PARAMETER VALUE]... [{FLAG_PREFIX}TOGGLE]...",
            p = self.program,
        ));

        if let Some(trigger) = &self.help_trigger {
            user_interface.print(format!(
                "Try \"{p} {trigger}\" for more information.",
                p = self.program,
            ));
        }
    }
}
