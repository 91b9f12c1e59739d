use crate::constant::LABEL_SEPARATOR;
use crate::parser::Diagnostic;

/// Renders a label followed by its (multi-line) help text.
///
/// Help text is split on explicit line breaks only.
/// Continuation lines align under the first line's text, not under the label.
#[derive(Debug)]
pub(crate) struct LabelRenderer {
    indent: usize,
}

impl LabelRenderer {
    pub(crate) fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub(crate) fn render(&self, label: &str, text: Option<&str>) -> Vec<String> {
        let indent = self.indent;
        let prefix = format!("{:indent$}{label}{LABEL_SEPARATOR}", "");
        let width = prefix.chars().count();

        let text = match text {
            Some(text) => text,
            None => return vec![prefix.trim_end().to_string()],
        };

        lines(text)
            .enumerate()
            .map(|(i, line)| {
                let rendered = if i == 0 {
                    format!("{prefix}{line}")
                } else {
                    format!("{:width$}{line}", "")
                };
                rendered.trim_end().to_string()
            })
            .collect()
    }
}

pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_diagnostic(&self, diagnostic: Diagnostic);
}

/// Writes help and diagnostics to standard output.
#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_diagnostic(&self, diagnostic: Diagnostic) {
        println!("{diagnostic}");
    }
}
