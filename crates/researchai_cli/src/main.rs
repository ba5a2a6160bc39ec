//! Interactive terminal shell over `researchai_core`.
//!
//! # Responsibility
//! - Drive the planner, mock test, doubt solver and video studio flows from
//!   a line-oriented prompt.
//! - Render and read input only; every domain decision lives in
//!   `researchai_core`.

use chrono::NaiveDate;
use clap::Parser;
use researchai_core::{
    default_log_level, format_clock, format_duration, init_logging, local_today, parse_duration,
    summarize_day, tasks_on, ChatMessage, ChatRole, DoubtSession, MemoryTaskStore, Priority,
    StudyTask, TaskDraft, TaskId, TaskStore, TestSession, VideoJob, VideoRequest, TIME_LIMIT_SECS,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "researchai",
    version,
    about = "ResearchAI study shell (offline, in-memory)"
)]
struct CliArgs {
    /// Directory for rolling log files (defaults to ./logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = CliArgs::parse();

    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    let log_level = args
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&log_level, &log_dir.to_string_lossy()) {
        eprintln!("Logging disabled: {err}");
    }

    let mut store = MemoryTaskStore::new();

    println!("ResearchAI study shell");
    println!("Commands: plan, test, ask, video <prompt>, exit.\n");

    loop {
        print!("researchai> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Exiting.");
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye");
            break;
        }
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("plan") {
            planner_console(&mut store);
            continue;
        }
        if input.eq_ignore_ascii_case("test") {
            run_mock_test();
            continue;
        }
        if input.eq_ignore_ascii_case("ask") {
            doubt_console();
            continue;
        }
        if let Some(rest) = input.strip_prefix("video ") {
            run_video(rest.trim());
            continue;
        }
        if input.eq_ignore_ascii_case("video") {
            println!("Usage: video <prompt>");
            continue;
        }

        println!("Unknown command. Try plan, test, ask, video <prompt> or exit.");
    }
}

fn default_log_dir() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir.join("logs"),
        Err(_) => std::env::temp_dir().join("researchai-logs"),
    }
}

fn planner_console(store: &mut MemoryTaskStore) {
    let mut selected_day = local_today();

    println!("\nStudy planner. Selected day: {selected_day}");
    println!("Commands: on <YYYY-MM-DD>, list, all, add, rm <id-prefix>, back.\n");

    loop {
        print!("plan {selected_day}> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Input error, leaving the planner.");
            break;
        }
        let cmd = input.trim();

        if cmd.eq_ignore_ascii_case("back") {
            println!();
            break;
        }

        if let Some(rest) = cmd.strip_prefix("on ") {
            match NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d") {
                Ok(day) => {
                    selected_day = day;
                    print_day(selected_day, store);
                }
                Err(_) => println!("Expected a date like 2024-05-01."),
            }
            continue;
        }

        if let Some(rest) = cmd.strip_prefix("rm ") {
            let prefix = rest.trim();
            if prefix.is_empty() {
                println!("Usage: rm <id-prefix>");
            } else {
                remove_by_prefix(store, prefix);
            }
            continue;
        }

        match cmd {
            "" => {}
            "list" => print_day(selected_day, store),
            "all" => print_all(store),
            "add" => add_task_interactive(store, selected_day),
            "rm" => println!("Usage: rm <id-prefix>"),
            _ => println!("Unknown command. Try on <date>, list, all, add, rm <id-prefix> or back."),
        }
    }
}

fn print_day(day: NaiveDate, store: &MemoryTaskStore) {
    let bucket = tasks_on(day, store.tasks());
    if bucket.is_empty() {
        println!("No tasks scheduled for {day}.");
        return;
    }

    let summary = summarize_day(day, store.tasks());
    println!(
        "{day}: {} task(s), {} planned",
        summary.task_count,
        format_duration(summary.total_minutes)
    );
    for task in bucket {
        print_task_line(task);
    }
}

fn print_all(store: &MemoryTaskStore) {
    if store.is_empty() {
        println!("No tasks yet.");
        return;
    }
    for task in store.tasks() {
        print_task_line(task);
    }
}

fn print_task_line(task: &StudyTask) {
    println!(
        "  [{}] {} on {} ({}, {})",
        short_id(task.id),
        task.title,
        task.date,
        format_duration(task.duration_minutes),
        task.priority
    );
    if !task.description.is_empty() {
        println!("       {}", task.description);
    }
}

fn add_task_interactive(store: &mut MemoryTaskStore, selected_day: NaiveDate) {
    let mut draft = TaskDraft::seeded(selected_day);

    draft.title = match prompt("Title", "") {
        Ok(value) => value,
        Err(err) => {
            println!("Failed to read title: {err}");
            return;
        }
    };
    draft.description = prompt("Description", "").unwrap_or_default();

    let date_input = prompt("Date (YYYY-MM-DD)", &draft.date.to_string()).unwrap_or_default();
    match NaiveDate::parse_from_str(date_input.trim(), "%Y-%m-%d") {
        Ok(day) => draft.date = day,
        Err(_) => println!("Could not read a date, keeping {}.", draft.date),
    }

    let duration_input =
        prompt("Duration", &format_duration(draft.duration_minutes)).unwrap_or_default();
    match parse_duration(&duration_input) {
        Some(minutes) => draft.duration_minutes = minutes,
        None => println!(
            "Could not read a duration, keeping {}.",
            format_duration(draft.duration_minutes)
        ),
    }

    let priority_input = prompt("Priority (low/medium/high)", draft.priority.label())
        .unwrap_or_default();
    match priority_input.parse::<Priority>() {
        Ok(priority) => draft.priority = priority,
        Err(message) => println!("{message}; keeping {}.", draft.priority),
    }

    if !draft.can_submit() {
        println!("A task needs a title. Nothing was added.");
        return;
    }

    let scheduled_for = draft.date;
    match draft.submit(store) {
        Ok(id) => println!("Added task {} for {scheduled_for}.", short_id(id)),
        Err(err) => println!("Could not add the task: {err}"),
    }
}

fn remove_by_prefix(store: &mut MemoryTaskStore, prefix: &str) {
    let matches: Vec<TaskId> = store
        .tasks()
        .iter()
        .filter(|task| task.id.to_string().starts_with(prefix))
        .map(|task| task.id)
        .collect();

    match matches.as_slice() {
        [] => println!("No task id starts with `{prefix}`."),
        [id] => {
            store.remove_task(*id);
            println!("Removed {}.", short_id(*id));
        }
        many => println!(
            "`{prefix}` matches {} tasks; give more characters.",
            many.len()
        ),
    }
}

fn run_mock_test() {
    let mut session = TestSession::with_default_bank();
    println!(
        "\nMock test: {} questions, time limit {}.",
        session.question_count(),
        format_clock(TIME_LIMIT_SECS)
    );
    println!("Answer with the option number, or n(ext), p(revious), q(uit).\n");

    loop {
        while !session.is_completed() {
            let question = session.current_question();
            println!(
                "Question {}/{}: {}",
                session.current_index() + 1,
                session.question_count(),
                question.text
            );
            for (index, option) in question.options.iter().enumerate() {
                let marker = if session.selected_answer() == Some(index) {
                    "*"
                } else {
                    " "
                };
                println!(" {marker}{}. {option}", index + 1);
            }

            print!("test> ");
            io::stdout().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                println!("Input error, leaving the test.\n");
                return;
            }
            let cmd = input.trim();

            match cmd {
                "q" | "quit" => {
                    println!("Test abandoned.\n");
                    return;
                }
                "n" | "next" | "" => session.next(),
                "p" | "prev" | "previous" => session.previous(),
                _ => match cmd.parse::<usize>() {
                    Ok(number) if number >= 1 => {
                        if let Err(err) = session.select_answer(number - 1) {
                            println!("{err}");
                        }
                    }
                    _ => println!("Answer with a number, n, p or q."),
                },
            }
        }

        println!(
            "\nScore: {}/{} ({}%)",
            session.score(),
            session.question_count(),
            session.percent()
        );
        for row in session.review() {
            let mark = if row.is_correct { "+" } else { "-" };
            let chosen = row.chosen.unwrap_or_else(|| "no answer".to_string());
            println!(" {mark} Q{}: {}", row.question_id, row.text);
            println!("      your answer: {chosen} | correct: {}", row.correct);
        }

        print!("\nType r to retry, anything else to leave: ");
        io::stdout().flush().ok();
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!();
            return;
        }
        if input.trim().eq_ignore_ascii_case("r") {
            session.restart();
            println!();
            continue;
        }
        println!();
        return;
    }
}

fn doubt_console() {
    let mut session = DoubtSession::new();

    println!();
    for message in session.messages() {
        print_chat_message(message);
    }
    println!("Type a question, or back to leave.\n");

    loop {
        print!("ask> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Input error, leaving the chat.\n");
            return;
        }
        let question = input.trim();

        if question.eq_ignore_ascii_case("back") {
            println!();
            break;
        }

        match session.ask(question) {
            Ok(reply) => {
                let content = reply.content.clone();
                // Typing pause, presentation only.
                thread::sleep(Duration::from_millis(1500));
                println!("ResearchAI: {content}\n");
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn print_chat_message(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "You",
        ChatRole::Assistant => "ResearchAI",
    };
    println!("{speaker}: {}", message.content);
}

fn run_video(prompt_text: &str) {
    let request = match VideoRequest::from_prompt(prompt_text) {
        Ok(request) => request,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    let mut job = VideoJob::start(request);
    println!("Generating video for: {}", job.prompt);

    while !job.is_finished() {
        let phase = job.advance();
        println!("  {phase}...");
        thread::sleep(Duration::from_millis(1000));
    }
    println!("Video ready (job {}).\n", short_id(job.id));
}

fn prompt(field: &str, default_val: &str) -> io::Result<String> {
    print!("{field} [{default_val}]: ");
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    let trimmed = buf.trim();
    if trimmed.is_empty() {
        Ok(default_val.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn short_id(id: TaskId) -> String {
    id.to_string().chars().take(8).collect()
}
