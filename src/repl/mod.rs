//! The interactive command loop
//!
//! Reads one command per line, dispatches it against the registry, and
//! prints one report per command. Every error is recovered here: only the
//! `exit` command (or end of input) leaves the loop, and a failing command
//! never disturbs registry state.
//!
//! - [`command`] - line grammar and parsing
//! - [`run`] - the loop itself

mod command;

pub use command::{
    Command, ParseError, USAGE_ADD_CLASSROOM, USAGE_ADD_STUDENT, USAGE_SCHEDULE_ASSIGNMENT,
    USAGE_SUBMIT_ASSIGNMENT, parse_line,
};

use std::io::BufRead;

use log::{error, info, warn};

use crate::output::{CommandReport, OutputMode};
use crate::registry::Registry;

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the command loop over `input` until `exit` or end of input
///
/// In human mode a prompt is printed before each read; JSON mode stays
/// prompt-free so the output remains one record per line.
pub fn run(input: impl BufRead, registry: &mut Registry, mode: OutputMode) -> anyhow::Result<()> {
    info!("Virtual classroom manager started.");

    let mut lines = input.lines();
    loop {
        if mode == OutputMode::Human {
            println!("Enter command:");
        }

        let Some(line) = lines.next() else {
            info!("End of input reached.");
            break;
        };

        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("Failed to read input line: {err}");
                CommandReport::failed(format!("Error: {err}")).render(mode);
                continue;
            },
        };

        if dispatch_line(&line, registry, mode) == Flow::Exit {
            break;
        }
    }

    info!("Virtual classroom manager stopped.");
    Ok(())
}

/// Parse and execute one line, rendering its report
fn dispatch_line(line: &str, registry: &mut Registry, mode: OutputMode) -> Flow {
    let Some(parsed) = parse_line(line) else {
        // Blank line: nothing to do, nothing to report
        return Flow::Continue;
    };

    match parsed {
        Ok(Command::Exit) => {
            CommandReport::ok("Exiting...").render(mode);
            Flow::Exit
        },
        Ok(command) => {
            execute(&command, registry).render(mode);
            Flow::Continue
        },
        Err(err) => {
            match &err {
                ParseError::UnknownCommand(keyword) => {
                    warn!("Invalid command entered: {keyword}");
                },
                ParseError::MissingArguments(_) => {
                    warn!("Malformed command: {line}");
                },
            }
            CommandReport::failed(err.to_string()).render(mode);
            Flow::Continue
        },
    }
}

/// Run a parsed command against the registry
fn execute(command: &Command, registry: &mut Registry) -> CommandReport {
    let result = match command {
        Command::AddClassroom { name } => registry.add_classroom(name),
        Command::AddStudent {
            student_id,
            class_name,
        } => registry.add_student(student_id, class_name),
        Command::ScheduleAssignment {
            class_name,
            details,
        } => registry.schedule_assignment(class_name, details),
        Command::SubmitAssignment {
            student_id,
            class_name,
            details,
        } => registry.submit_assignment(student_id, class_name, details),
        Command::Exit => Ok(()),
    };

    match result {
        Ok(()) => CommandReport::ok(confirmation(command)),
        Err(err) => CommandReport::failed(err.to_string()),
    }
}

/// Success message for a command, exactly as the operator sees it
fn confirmation(command: &Command) -> String {
    match command {
        Command::AddClassroom { name } => {
            format!("Classroom {name} has been created.")
        },
        Command::AddStudent {
            student_id,
            class_name,
        } => format!("Student {student_id} has been enrolled in {class_name}."),
        Command::ScheduleAssignment { class_name, .. } => {
            format!("Assignment for {class_name} has been scheduled.")
        },
        Command::SubmitAssignment {
            student_id,
            class_name,
            ..
        } => format!("Assignment submitted by Student {student_id} in {class_name}."),
        Command::Exit => "Exiting...".to_string(),
    }
}
