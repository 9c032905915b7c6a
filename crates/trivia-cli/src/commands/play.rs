use std::io::BufRead;

use clap::Args;
use tokio::sync::{mpsc, oneshot};
use trivia_core::{
    run_session, Config, Event, QuestionBank, QuizResult, QuizSession, SessionCommand,
    SubmitTrigger,
};

use super::questions::print_questions;

#[derive(Args)]
pub struct PlayArgs {
    /// Override the configured time limit (seconds)
    #[arg(long)]
    time_limit: Option<u64>,
    /// Emit events and the final result as JSON lines
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let time_limit = args.time_limit.unwrap_or(config.quiz.time_limit_secs);
    if time_limit == 0 {
        return Err("time limit must be at least 1 second".into());
    }

    // The start screen selections are shown, the question set stays fixed.
    tracing::debug!(options = ?config.options, "starting game with fixed question set");
    let bank = QuestionBank::builtin();

    if !args.json {
        let options = &config.options;
        println!(
            "Trivia: {} questions, {} / {} / {}",
            bank.len(),
            options.category,
            options.difficulty,
            options.question_type
        );
        print_questions(&bank);
        println!();
        println!("Answer with '<question> <option>', e.g. '1 2'. 'status' shows the clock, 'submit' ends the game.");
        println!("Time remaining: {time_limit} seconds");
    }

    let (tx, rx) = mpsc::channel(16);
    spawn_input_reader(bank.clone(), tx, args.json);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let session = QuizSession::new(bank, time_limit);
    let announce_every = config.display.announce_every_secs;
    let json = args.json;
    let result = runtime.block_on(run_session(session, config.tick_interval(), rx, |event| {
        if json {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{line}");
            }
        } else {
            print_event(event, announce_every);
        }
    }));

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        print_result(&result, config.display.show_review);
    }
    Ok(())
}

/// One line of player input. Question and option numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerInput {
    Select { index: usize, option: String },
    Submit,
    Status,
}

/// Read stdin on a plain thread and forward parsed commands. Dropping the
/// sender at EOF makes the runner submit.
///
/// `status` waits for the runner's reply and prints it here, so it is shown
/// before the next line is read.
fn spawn_input_reader(bank: QuestionBank, tx: mpsc::Sender<SessionCommand>, json: bool) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            let input = match parse_input(&line, &bank) {
                Ok(input) => input,
                Err(message) => {
                    eprintln!("{message}");
                    continue;
                }
            };
            let command = match input {
                PlayerInput::Select { index, option } => SessionCommand::Select { index, option },
                PlayerInput::Submit => SessionCommand::Submit,
                PlayerInput::Status => {
                    let (reply, snapshot) = oneshot::channel();
                    if tx.blocking_send(SessionCommand::Status { reply }).is_err() {
                        break;
                    }
                    // Err means the session finished first.
                    if let Ok(snapshot) = snapshot.blocking_recv() {
                        print_status(&snapshot, json);
                    }
                    continue;
                }
            };
            if tx.blocking_send(command).is_err() {
                break;
            }
        }
    });
}

fn parse_input(line: &str, bank: &QuestionBank) -> Result<PlayerInput, String> {
    let mut words = line.split_whitespace();
    let first = words.next().ok_or_else(|| "empty input".to_string())?;

    match first.to_ascii_lowercase().as_str() {
        "submit" | "s" => return Ok(PlayerInput::Submit),
        "status" | "t" => return Ok(PlayerInput::Status),
        _ => {}
    }

    let question_no: usize = first
        .parse()
        .map_err(|_| format!("unrecognized input: '{line}'"))?;
    let question = question_no
        .checked_sub(1)
        .and_then(|i| bank.question_at(i).ok())
        .ok_or_else(|| format!("no question {question_no} (1-{})", bank.len()))?;

    let option_no: usize = words
        .next()
        .ok_or_else(|| format!("missing option number for question {question_no}"))?
        .parse()
        .map_err(|_| "option must be a number".to_string())?;
    let option = option_no
        .checked_sub(1)
        .and_then(|i| question.options.get(i))
        .ok_or_else(|| {
            format!(
                "no option {option_no} for question {question_no} (1-{})",
                question.options.len()
            )
        })?;

    Ok(PlayerInput::Select {
        index: question_no - 1,
        option: option.clone(),
    })
}

fn print_status(snapshot: &Event, json: bool) {
    if json {
        if let Ok(line) = serde_json::to_string(snapshot) {
            println!("{line}");
        }
    } else if let Event::StateSnapshot {
        remaining_secs,
        answered,
        question_count,
        ..
    } = snapshot
    {
        println!("{}", status_line(*remaining_secs, *answered, *question_count));
    }
}

fn status_line(remaining_secs: u64, answered: usize, question_count: usize) -> String {
    format!("Time remaining: {remaining_secs} seconds ({answered}/{question_count} answered)")
}

fn print_event(event: &Event, announce_every: u64) {
    match event {
        Event::AnswerSelected { index, option, .. } => {
            println!("Question {}: {option}", index + 1);
        }
        Event::StateSnapshot {
            remaining_secs,
            answered,
            question_count,
            ..
        } => {
            let announce =
                *remaining_secs <= 5 || (announce_every > 0 && remaining_secs % announce_every == 0);
            if announce {
                println!("{}", status_line(*remaining_secs, *answered, *question_count));
            }
        }
        Event::TimerExpired { .. } => println!("Time's up!"),
        _ => {}
    }
}

fn print_result(result: &QuizResult, show_review: bool) {
    println!();
    println!("Your score: {}/{}", result.score, result.total);
    if result.trigger == SubmitTrigger::Expiry {
        println!("(submitted automatically when time ran out)");
    }
    if !show_review {
        return;
    }
    for item in &result.review {
        let mark = if item.is_correct { "+" } else { "-" };
        let selected = item.selected.as_deref().unwrap_or("(no answer)");
        println!("{mark} {}. {}", item.index + 1, item.text);
        if item.is_correct {
            println!("    {selected}");
        } else {
            println!("    {selected} -> {}", item.correct_answer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_with_one_based_numbers() {
        let bank = QuestionBank::builtin();
        assert_eq!(
            parse_input("2 1", &bank),
            Ok(PlayerInput::Select {
                index: 1,
                option: "Mars".into()
            })
        );
    }

    #[test]
    fn parses_keywords() {
        let bank = QuestionBank::builtin();
        assert_eq!(parse_input("submit", &bank), Ok(PlayerInput::Submit));
        assert_eq!(parse_input("STATUS", &bank), Ok(PlayerInput::Status));
        assert_eq!(parse_input("s", &bank), Ok(PlayerInput::Submit));
    }

    #[test]
    fn status_line_shows_progress() {
        assert_eq!(
            status_line(42, 3, 6),
            "Time remaining: 42 seconds (3/6 answered)"
        );
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let bank = QuestionBank::builtin();
        assert!(parse_input("0 1", &bank).is_err());
        assert!(parse_input("7 1", &bank).is_err());
        assert!(parse_input("1 5", &bank).is_err());
        assert!(parse_input("1", &bank).is_err());
        assert!(parse_input("hello", &bank).is_err());
    }
}
