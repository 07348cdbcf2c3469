use std::collections::BTreeMap;

use crate::api::Opt;
use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::{TabExpander, WordWrapper};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct Printer {
    display_columns: usize,
    description_min_columns: usize,
    tab_expander: TabExpander,
}

impl Printer {
    pub(crate) fn standard() -> Self {
        Self {
            display_columns: DISPLAY_COLUMNS,
            description_min_columns: DESCRIPTION_MIN_COLUMNS,
            tab_expander: TabExpander::new(TAB_STOP),
        }
    }

    pub(crate) fn print_help(
        &self,
        options: &[Opt],
        program: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(options, program) {
            user_interface.print(line);
        }
    }

    /// Render the usage line(s), followed by the aligned option descriptions.
    pub(crate) fn render(&self, options: &[Opt], program: &str) -> Vec<String> {
        let labels = self.labels(options);
        let mut lines = self.usage(options, program, &labels);

        if options.is_empty() {
            return lines;
        }

        lines.push("".to_string());
        lines.push("Options:".to_string());

        let widest = labels
            .values()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let columns_available = self.display_columns.saturating_sub(widest);
        let description_start = if columns_available < self.description_min_columns {
            self.display_columns - self.description_min_columns
        } else {
            widest
        };
        let description_columns = self.display_columns - description_start;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help layout: widest label {widest}, descriptions at column {description_start} with width {description_columns}.");
        }

        let wrapper = WordWrapper::new(description_columns);

        for option in options {
            let description_lines = describe(option, &wrapper);
            let names: Vec<&String> = option.names().collect();

            for i in 0..std::cmp::max(names.len(), description_lines.len()) {
                let mut line = String::default();
                let mut column = 0;

                if let Some(name) = names.get(i) {
                    let label = &labels[name.as_str()];
                    line.push_str(label);
                    column = label.chars().count();
                }

                if let Some(description) = description_lines.get(i) {
                    if column > description_start {
                        // The label overruns the description column.
                        lines.push(line.trim_end().to_string());
                        line = String::default();
                        column = 0;
                    }

                    line.push_str(&" ".repeat(description_start - column));
                    line.push_str(description);
                }

                lines.push(line.trim_end().to_string());
            }
        }

        lines
    }

    /// Map every option name to its tab-expanded label.
    /// The primary name carries the full syntax; other names are indented further, without syntax.
    fn labels<'a>(&self, options: &'a [Opt]) -> BTreeMap<&'a str, String> {
        let mut labels = BTreeMap::default();

        for option in options {
            let primary = option.primary_name();
            labels.insert(
                primary,
                self.tab_expander.expand(&format!("\t{}\t", syntax(option))),
            );

            for name in option.names().skip(1) {
                labels.insert(
                    name.as_str(),
                    self.tab_expander.expand(&format!("\t\t{name}\t")),
                );
            }
        }

        labels
    }

    fn usage(&self, options: &[Opt], program: &str, labels: &BTreeMap<&str, String>) -> Vec<String> {
        let mut parts = vec![program.to_string()];
        let required: Vec<&Opt> = options.iter().filter(|o| o.is_required()).collect();

        for option in &required {
            parts.push(labels[option.primary_name()].trim().to_string());
        }

        if required.len() < options.len() {
            parts.push("[options]".to_string());
        }

        let indent = USAGE_PREFIX.len();
        let wrapper = WordWrapper::new(self.display_columns - indent);

        wrapper
            .wrap_words(&parts.join(" "))
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{USAGE_PREFIX}{line}")
                } else {
                    format!("{}{line}", " ".repeat(indent))
                }
            })
            .collect()
    }
}

/// The primary name, followed by the slot syntax unless the option is a switch (ex: `--size=<width>x<height>`).
fn syntax(option: &Opt) -> String {
    if option.slots().is_empty() || option.is_switch() {
        return option.primary_name().to_string();
    }

    let slots: Vec<String> = option
        .slots()
        .iter()
        .map(|slot| format!("<{}>", slot.name().to_lowercase()))
        .collect();

    format!(
        "{}={}",
        option.primary_name(),
        slots.join(&option.delimiter().to_string())
    )
}

/// Wrap the description, fitting the default description onto its last line if there is room.
fn describe(option: &Opt, wrapper: &WordWrapper) -> Vec<String> {
    let mut lines = wrapper.wrap_words(option.description());

    if option.default_description().is_empty() {
        return lines;
    }

    let defaults = format!("[Default: {}]", option.default_description());

    match lines.last_mut() {
        Some(last) if last.is_empty() => {
            lines.pop();
            lines.extend(wrapper.wrap_words(&defaults));
        }
        // Leave room for the separating space and the newline.
        Some(last) if last.chars().count() + 1 + defaults.chars().count() + 1 < wrapper.columns() => {
            last.push(' ');
            last.push_str(&defaults);
        }
        _ => {
            lines.extend(wrapper.wrap_words(&defaults));
        }
    }

    lines
}
