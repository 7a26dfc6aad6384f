//! Rollbook menu
//!
//! Interactive text menu over a student record file.

use std::io::{self, BufRead, StdinLock, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rollbook::{Config, Manager, Record, Result, RollbookError, SortOrder, StudentId};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollbook
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Manage student records stored in a flat file")]
#[command(version)]
struct Args {
    /// Data file (one student per line)
    #[arg(short, long, default_value = "students.txt")]
    file: PathBuf,

    /// Cosmetic pause before each change, in milliseconds
    #[arg(short, long, default_value = "0")]
    delay_ms: u64,

    /// Overwrite the data file in place instead of write-then-rename
    #[arg(long)]
    no_atomic_save: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rollbook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Rollbook v{}", rollbook::VERSION);

    let config = Config::builder()
        .data_file(&args.file)
        .atomic_save(!args.no_atomic_save)
        .loading_delay_ms(args.delay_ms)
        .build();

    let mut manager = Manager::open(config);
    report_load(&manager);

    let mut console = Console::new();

    loop {
        print_menu();

        // End of input saves like option 9
        let Some(choice) = console.ask("Enter choice: ") else {
            break;
        };

        // Blank or non-numeric input just redisplays the menu
        let Ok(choice) = choice.trim().parse::<u32>() else {
            continue;
        };

        let outcome = match choice {
            1 => add_student(&mut manager, &mut console),
            2 => {
                view(&manager, SortOrder::Unsorted);
                Ok(())
            }
            3 => search_student(&manager, &mut console),
            4 => update_marks(&mut manager, &mut console),
            5 => delete_student(&mut manager, &mut console),
            6 => {
                view(&manager, SortOrder::ByMarksDescending);
                Ok(())
            }
            7 => {
                view(&manager, SortOrder::ByNameAscending);
                Ok(())
            }
            8 => update_email(&mut manager, &mut console),
            9 => break,
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("Error: {}", e);
        }
    }

    save_and_exit(manager);
}

// =============================================================================
// Menu Actions
// =============================================================================

fn add_student(manager: &mut Manager, console: &mut Console) -> Result<()> {
    println!("--- Add New Student ---");

    let id = parse_id(&console.ask_or_empty("Enter Roll No: "))?;
    let name = console.ask_or_empty("Enter Name: ");
    let email = console.ask_or_empty("Enter Email: ");
    let course = console.ask_or_empty("Enter Course: ");
    let marks = parse_marks(&console.ask_or_empty("Enter Marks (0-100, blank = unrecorded): "))?;

    let record = Record::new(id, name.trim(), email.trim(), course.trim(), marks)?;
    if manager.store().contains(id) {
        return Err(RollbookError::DuplicateId(id));
    }

    loading("Adding student record", manager);
    manager.add(record)?;

    println!("Student added successfully.");
    print_record(manager.search(id)?);
    Ok(())
}

fn search_student(manager: &Manager, console: &mut Console) -> Result<()> {
    let id = parse_id(&console.ask_or_empty("Enter Roll No to search: "))?;
    let record = manager.search(id)?;

    println!("--- Student Found ---");
    print_record(record);
    println!("---------------------");
    Ok(())
}

fn update_marks(manager: &mut Manager, console: &mut Console) -> Result<()> {
    let id = parse_id(&console.ask_or_empty("Enter Roll No to update marks: "))?;
    manager.search(id)?;
    let marks = parse_marks(&console.ask_or_empty("Enter New Marks (0-100, blank = unrecorded): "))?;
    rollbook::record::validate_marks(marks)?;

    loading("Updating marks", manager);
    let record = manager.update_marks(id, marks)?;

    println!("Marks updated and grade recalculated.");
    print_record(record);
    Ok(())
}

fn update_email(manager: &mut Manager, console: &mut Console) -> Result<()> {
    let id = parse_id(&console.ask_or_empty("Enter Roll No to update email: "))?;
    let current = manager.search(id)?.email().to_string();
    let email = console.ask_or_empty(&format!("Enter new Email (current: {}): ", current));

    let email = email.trim();
    if email.is_empty() {
        return Err(RollbookError::validation("email cannot be empty"));
    }

    loading("Updating email", manager);
    let record = manager.update_email(id, email)?;

    println!("Email updated.");
    print_record(record);
    Ok(())
}

fn delete_student(manager: &mut Manager, console: &mut Console) -> Result<()> {
    let id = parse_id(&console.ask_or_empty("Enter Roll No to delete: "))?;
    manager.search(id)?;

    loading("Deleting record", manager);
    manager.delete(id)?;

    println!("Student with Roll No {} deleted successfully.", id);
    Ok(())
}

fn view(manager: &Manager, order: SortOrder) {
    let records = manager.list(order);
    if records.is_empty() {
        println!("The student list is currently empty.");
        return;
    }

    let title = match order {
        SortOrder::Unsorted => "All Student Records (Unsorted)",
        SortOrder::ByMarksDescending => "Students by MARKS (Descending)",
        SortOrder::ByNameAscending => "Students by NAME (Ascending)",
    };
    println!("\n--- {} ---", title);

    for record in records {
        print_record(record);
        println!("---------------------");
    }
}

fn save_and_exit(manager: Manager) {
    loading("Saving data to file", &manager);
    let path = manager.data_file().display().to_string();

    match manager.save_and_exit() {
        Ok(count) => {
            println!("Saved {} records to {}.", count, path);
            println!("Exiting application. Goodbye!");
        }
        Err(e) => {
            println!("Error saving records to {}: {}", path, e);
            println!("Exiting application. Unsaved changes were lost.");
            std::process::exit(1);
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn print_menu() {
    println!("\n===== Student Management System =====");
    println!("1. Add Student");
    println!("2. View All Students");
    println!("3. Search by Roll No");
    println!("4. Update Marks by Roll No");
    println!("5. Delete by Roll No");
    println!("6. View Sorted by Marks (Descending)");
    println!("7. View Sorted by Name (Ascending)");
    println!("8. Update Email by Roll No");
    println!("9. Save and Exit");
    println!("=====================================");
}

fn print_record(record: &Record) {
    for (label, value) in record.describe() {
        println!("{}: {}", title_case(label), value);
    }
}

fn report_load(manager: &Manager) {
    let report = manager.load_report();
    let path = manager.data_file().display();

    if report.file_missing {
        println!("Data file {} not found. Starting with an empty student list.", path);
        return;
    }

    println!("Loaded {} records from {}.", report.records_loaded, path);
    if report.lines_skipped() > 0 {
        println!("Skipped {} malformed line(s).", report.lines_skipped());
    }
    if let Some(error) = &report.read_error {
        println!("Warning: could not read the whole file ({}).", error);
    }
}

/// "id" → "Id", "email" → "Email"
fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Blocking progress dots; never runs concurrently with a store change
fn loading(label: &str, manager: &Manager) {
    let delay = manager.config().loading_delay_ms;
    if delay == 0 {
        return;
    }

    print!("{}...", label);
    let _ = io::stdout().flush();
    for _ in 0..3 {
        thread::sleep(Duration::from_millis(delay / 3));
        print!(".");
        let _ = io::stdout().flush();
    }
    println!();
}

// =============================================================================
// Input
// =============================================================================

/// Line-based prompt reader over stdin
struct Console {
    lines: io::Lines<StdinLock<'static>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    /// Prompt and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        self.lines.next().and_then(|line| line.ok())
    }

    /// Like `ask`, but end of input reads as an empty answer
    fn ask_or_empty(&mut self, prompt: &str) -> String {
        self.ask(prompt).unwrap_or_default()
    }
}

fn parse_id(input: &str) -> Result<StudentId> {
    input
        .trim()
        .parse()
        .map_err(|_| RollbookError::validation(format!("invalid roll number {:?}", input.trim())))
}

/// Blank input means "unrecorded"
fn parse_marks(input: &str) -> Result<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| RollbookError::validation(format!("invalid marks {:?}", input)))
}
