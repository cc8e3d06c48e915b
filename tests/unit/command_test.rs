//! Tests for the command-line grammar
//!
//! One command per line: case-insensitive keyword, whitespace-separated
//! arguments, with the final argument taken verbatim for assignment details.

use classreg::repl::{
    Command, ParseError, USAGE_ADD_CLASSROOM, USAGE_ADD_STUDENT, USAGE_SCHEDULE_ASSIGNMENT,
    USAGE_SUBMIT_ASSIGNMENT, parse_line,
};

fn parse_ok(line: &str) -> Command {
    parse_line(line).expect("line should not be blank").expect("line should parse")
}

fn parse_err(line: &str) -> ParseError {
    parse_line(line).expect("line should not be blank").expect_err("line should fail to parse")
}

// =============================================================================
// BLANK LINE TESTS
// =============================================================================

#[test]
fn empty_line_is_skipped() {
    assert_eq!(parse_line(""), None);
}

#[test]
fn whitespace_only_line_is_skipped() {
    assert_eq!(parse_line("   \t  "), None);
}

// =============================================================================
// KEYWORD TESTS
// =============================================================================

#[test]
fn keyword_is_case_insensitive() {
    assert_eq!(
        parse_ok("ADD_CLASSROOM Math101"),
        Command::AddClassroom {
            name: "Math101".to_string()
        }
    );
    assert_eq!(parse_ok("Exit"), Command::Exit);
    assert_eq!(parse_ok("EXIT"), Command::Exit);
}

#[test]
fn argument_case_is_preserved() {
    assert_eq!(
        parse_ok("add_classroom MATH101"),
        Command::AddClassroom {
            name: "MATH101".to_string()
        }
    );
}

#[test]
fn unknown_keyword_is_rejected() {
    let err = parse_err("remove_classroom Math101");
    assert_eq!(err, ParseError::UnknownCommand("remove_classroom".to_string()));
    assert_eq!(err.to_string(), "Invalid command.");
}

#[test]
fn unknown_keyword_without_arguments_is_rejected() {
    assert_eq!(parse_err("help"), ParseError::UnknownCommand("help".to_string()));
}

#[test]
fn exit_ignores_arguments() {
    assert_eq!(parse_ok("exit now please"), Command::Exit);
}

// =============================================================================
// ADD_CLASSROOM TESTS
// =============================================================================

#[test]
fn add_classroom_takes_rest_verbatim() {
    // The classroom name is the rest of the line, trimmed; embedded
    // whitespace is kept
    assert_eq!(
        parse_ok("add_classroom Advanced Math 101"),
        Command::AddClassroom {
            name: "Advanced Math 101".to_string()
        }
    );
}

#[test]
fn add_classroom_without_name_shows_usage() {
    let err = parse_err("add_classroom");
    assert_eq!(err, ParseError::MissingArguments(USAGE_ADD_CLASSROOM));
    assert_eq!(err.to_string(), "Invalid format. Use: add_classroom [ClassName]");
}

#[test]
fn add_classroom_with_trailing_whitespace_shows_usage() {
    assert_eq!(parse_err("add_classroom   "), ParseError::MissingArguments(USAGE_ADD_CLASSROOM));
}

// =============================================================================
// ADD_STUDENT TESTS
// =============================================================================

#[test]
fn add_student_takes_two_tokens() {
    assert_eq!(
        parse_ok("add_student S1 Math101"),
        Command::AddStudent {
            student_id: "S1".to_string(),
            class_name: "Math101".to_string(),
        }
    );
}

#[test]
fn add_student_tolerates_extra_whitespace() {
    assert_eq!(
        parse_ok("  add_student   S1    Math101  "),
        Command::AddStudent {
            student_id: "S1".to_string(),
            class_name: "Math101".to_string(),
        }
    );
}

#[test]
fn add_student_with_one_token_shows_usage() {
    let err = parse_err("add_student S1");
    assert_eq!(err, ParseError::MissingArguments(USAGE_ADD_STUDENT));
    assert_eq!(err.to_string(), "Invalid format. Use: add_student [StudentID] [ClassName]");
}

#[test]
fn add_student_without_arguments_shows_usage() {
    assert_eq!(parse_err("add_student"), ParseError::MissingArguments(USAGE_ADD_STUDENT));
}

// =============================================================================
// SCHEDULE_ASSIGNMENT TESTS
// =============================================================================

#[test]
fn schedule_assignment_keeps_details_verbatim() {
    assert_eq!(
        parse_ok("schedule_assignment Math101 Homework 1: read chapters 1-3"),
        Command::ScheduleAssignment {
            class_name: "Math101".to_string(),
            details: "Homework 1: read chapters 1-3".to_string(),
        }
    );
}

#[test]
fn schedule_assignment_without_details_shows_usage() {
    let err = parse_err("schedule_assignment Math101");
    assert_eq!(err, ParseError::MissingArguments(USAGE_SCHEDULE_ASSIGNMENT));
    assert_eq!(
        err.to_string(),
        "Invalid format. Use: schedule_assignment [ClassName] [AssignmentDetails]"
    );
}

#[test]
fn schedule_assignment_without_arguments_shows_usage() {
    assert_eq!(
        parse_err("schedule_assignment"),
        ParseError::MissingArguments(USAGE_SCHEDULE_ASSIGNMENT)
    );
}

// =============================================================================
// SUBMIT_ASSIGNMENT TESTS
// =============================================================================

#[test]
fn submit_assignment_keeps_details_verbatim() {
    assert_eq!(
        parse_ok("submit_assignment S1 Math101 Homework 1"),
        Command::SubmitAssignment {
            student_id: "S1".to_string(),
            class_name: "Math101".to_string(),
            details: "Homework 1".to_string(),
        }
    );
}

#[test]
fn submit_assignment_with_two_tokens_shows_usage() {
    let err = parse_err("submit_assignment S1 Math101");
    assert_eq!(err, ParseError::MissingArguments(USAGE_SUBMIT_ASSIGNMENT));
    assert_eq!(
        err.to_string(),
        "Invalid format. Use: submit_assignment [StudentID] [ClassName] [AssignmentDetails]"
    );
}

#[test]
fn submit_assignment_with_one_token_shows_usage() {
    assert_eq!(
        parse_err("submit_assignment S1"),
        ParseError::MissingArguments(USAGE_SUBMIT_ASSIGNMENT)
    );
}
