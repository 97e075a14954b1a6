use crate::constant::*;
use crate::matcher::{Descriptor, Registry};
use crate::parser::buffer::{append, MessageBuffer};
use crate::parser::{AllocationError, ParseError};

/// Renders usage, help, and error messages from the registry into the message buffer.
/// Each `print_*` overwrites whatever the buffer held before.
pub(crate) struct Printer<'r, 'a> {
    program: &'a str,
    registry: &'r Registry<'a>,
}

impl<'r, 'a> Printer<'r, 'a> {
    pub(crate) fn new(program: &'a str, registry: &'r Registry<'a>) -> Self {
        Self { program, registry }
    }

    pub(crate) fn print_usage(&self, buffer: &mut MessageBuffer) -> Result<(), AllocationError> {
        buffer.clear();
        self.append_usage(buffer)
    }

    pub(crate) fn print_error(
        &self,
        error: &ParseError,
        buffer: &mut MessageBuffer,
    ) -> Result<(), AllocationError> {
        buffer.clear();
        self.append_usage(buffer)?;
        append!(buffer, "{}: error: {error}\n", self.program)?;
        Ok(())
    }

    pub(crate) fn print_help(&self, buffer: &mut MessageBuffer) -> Result<(), AllocationError> {
        buffer.clear();
        self.append_usage(buffer)?;
        append!(buffer, "\n")?;

        if !self.registry.positional().is_empty() {
            append!(buffer, "positional arguments:\n")?;

            for descriptor in self.registry.positional() {
                let offset = append!(buffer, "{:width$}{}", "", descriptor.name(), width = PADDING)?;
                append_help(buffer, offset, descriptor)?;
            }

            append!(buffer, "\n")?;
        }

        if !self.registry.optional().is_empty() {
            append!(buffer, "optional arguments:\n")?;

            for descriptor in self.registry.optional() {
                let mut offset = append!(buffer, "{:width$}", "", width = PADDING)?;

                if let Some(short) = descriptor.short() {
                    offset += append!(buffer, "{short}")?;
                    offset += append_placeholder(buffer, descriptor)?;

                    if descriptor.long().is_some() {
                        offset += append!(buffer, ", ")?;
                    }
                }

                if let Some(long) = descriptor.long() {
                    offset += append!(buffer, "{long}")?;
                    offset += append_placeholder(buffer, descriptor)?;
                }

                append_help(buffer, offset, descriptor)?;
            }

            append!(buffer, "\n")?;
        }

        Ok(())
    }

    fn append_usage(&self, buffer: &mut MessageBuffer) -> Result<(), AllocationError> {
        append!(buffer, "usage: {}", self.program)?;

        for descriptor in self.registry.optional() {
            // Prefer the short form in the summary.
            let form = descriptor.short().or(descriptor.long()).unwrap_or_default();
            append!(buffer, " [{form}")?;
            append_placeholder(buffer, descriptor)?;
            append!(buffer, "]")?;
        }

        for descriptor in self.registry.positional() {
            append!(buffer, " {}", descriptor.name())?;
        }

        append!(buffer, "\n")?;
        Ok(())
    }
}

/// The upper-cased value name of a value-taking option, derived from its long form when present (ex: `-f, --first` => `FIRST`).
fn placeholder(descriptor: &Descriptor<'_>) -> Option<String> {
    if !descriptor.takes_value() {
        return None;
    }

    let name = match (descriptor.long(), descriptor.short()) {
        (Some(long), _) => long.strip_prefix("--").unwrap_or(long),
        (None, Some(short)) => short.strip_prefix('-').unwrap_or(short),
        (None, None) => descriptor.name(),
    };

    Some(name.to_ascii_uppercase())
}

fn append_placeholder(
    buffer: &mut MessageBuffer,
    descriptor: &Descriptor<'_>,
) -> Result<usize, AllocationError> {
    match placeholder(descriptor) {
        Some(name) => append!(buffer, " {name}"),
        None => Ok(0),
    }
}

/// Align the help message to `FIRST_COLUMN_SIZE`.
/// When the entry already reaches the column, the help message moves onto its own line.
fn append_help(
    buffer: &mut MessageBuffer,
    mut offset: usize,
    descriptor: &Descriptor<'_>,
) -> Result<(), AllocationError> {
    if offset >= FIRST_COLUMN_SIZE {
        append!(buffer, "\n")?;
        offset = 0;
    }

    append!(buffer, "{:width$}", "", width = FIRST_COLUMN_SIZE - offset)?;

    if let Some(help) = descriptor.help() {
        append!(buffer, "{help}")?;
    }

    append!(buffer, "\n")?;
    Ok(())
}
