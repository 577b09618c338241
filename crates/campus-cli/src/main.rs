// Rust guideline compliant 2026-02-06

//! Campus CLI Application
//!
//! Command-line interface for the Campus records and task management system.

use campus_app::{AppError, CampusContext, ErrorEnvelope, Session};
use campus_cli::commands;
use campus_cli::output_mode::{is_json_output, set_json_output};
use campus_cli::{create_formatter, should_use_color, terminal};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "campus",
    version,
    about = "Campus: single-institution records and task tracking",
    long_about = "Campus manages students, faculty, grades, attendance, and hierarchical task assignments for a single institution, with role-gated access and exportable reports.",
    after_help = "Examples:\n  campus init\n  campus --caller admin --password admin@123 register student AB12CD34EF56 Alice\n  campus --caller prof1 task create \"Essay\" --category Writing --assign AB12CD34EF56\n  campus --caller AB12CD34EF56 task list --mine\n  campus --caller prof1 report all --format csv --out students.csv\n"
)]
struct Cli {
    /// Identity id acting for this invocation
    #[arg(long, global = true)]
    caller: Option<String>,

    /// Credential for the caller (falls back to CAMPUS_PASSWORD)
    #[arg(long, global = true)]
    password: Option<String>,

    /// Data directory root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize the Campus data directory and seed the administrator
    Init {
        /// Credential for the seeded administrator
        #[arg(long)]
        admin_password: Option<String>,
    },

    /// Register a new identity
    Register {
        #[command(subcommand)]
        role: RegisterRole,
    },

    /// Deactivate an identity, keeping its records
    Deactivate {
        /// Identity id
        id: String,
    },

    /// Reset an identity's credential
    Passwd {
        /// Identity id
        id: String,

        /// New credential
        new_password: String,
    },

    /// Show the resolved session and its capabilities
    Whoami,

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage grades
    Grade {
        #[command(subcommand)]
        action: GradeAction,
    },

    /// Manage attendance
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Generate reports
    Report {
        #[command(subcommand)]
        target: ReportTarget,
    },
}

#[derive(Debug, clap::Subcommand)]
enum RegisterRole {
    /// Register a student
    Student {
        /// Roll number (12 uppercase alphanumeric characters)
        id: String,

        /// Student name
        name: String,

        /// Initial credential (defaults to the configured value)
        #[arg(long)]
        initial_password: Option<String>,
    },

    /// Register a faculty member
    Faculty {
        /// Faculty user id (alphanumeric, at least 4 characters)
        id: String,

        /// Faculty name
        name: String,

        /// Course taught
        #[arg(long)]
        course: String,

        /// Initial credential (defaults to the configured value)
        #[arg(long)]
        initial_password: Option<String>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,

        /// Category (defaults to the configured value)
        #[arg(long)]
        category: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,

        /// Parent task id (full or partial)
        #[arg(long)]
        parent: Option<String>,

        /// Assign to a student after creation
        #[arg(long)]
        assign: Option<String>,
    },

    /// Assign a task to a student, replacing any existing assignment
    Assign {
        /// Task id (full or partial)
        id: String,

        /// Student id
        student: String,
    },

    /// Transition a task's status
    Transition {
        /// Task id (full or partial)
        id: String,

        /// Target status (open, in_progress, done, cancelled)
        status: String,
    },

    /// Move a task under a new parent
    Reparent {
        /// Task id (full or partial)
        id: String,

        /// New parent task id; omit to move to the root
        #[arg(long)]
        parent: Option<String>,
    },

    /// Delete a task and its subtree
    Delete {
        /// Task id (full or partial)
        id: String,
    },

    /// Show details of a task
    Show {
        /// Task id (full or partial)
        id: String,
    },

    /// List tasks
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// List tasks assigned to a student
        #[arg(long)]
        student: Option<String>,

        /// List tasks assigned to the caller
        #[arg(long)]
        mine: bool,

        /// Sort by field (title, priority, deadline, created_at, updated_at)
        #[arg(long)]
        sort: Option<String>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum GradeAction {
    /// Record or update a grade
    Record {
        /// Student id
        student: String,

        /// Subject name
        subject: String,

        /// Marks (0-100)
        marks: u8,
    },

    /// Remove a grade
    Remove {
        /// Student id
        student: String,

        /// Subject name
        subject: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum AttendanceAction {
    /// Record or update an attendance entry
    Record {
        /// Student id
        student: String,

        /// Session date (YYYY-MM-DD)
        date: String,

        /// Mark the student absent instead of present
        #[arg(long)]
        absent: bool,
    },

    /// Remove an attendance entry
    Remove {
        /// Student id
        student: String,

        /// Session date (YYYY-MM-DD)
        date: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ReportTarget {
    /// Report for one student
    Student {
        /// Student id
        id: String,

        /// Document format (csv, json, table)
        #[arg(long)]
        format: Option<String>,

        /// Write the document to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Report covering every student
    All {
        /// Document format (csv, json, table)
        #[arg(long)]
        format: Option<String>,

        /// Write the document to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = match &cli.format {
        Some(OutputFormatArg::Json) => "json",
        Some(OutputFormatArg::Table) => "table",
        Some(OutputFormatArg::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    set_json_output(format == "json");
    let use_color = !cli.no_color && should_use_color();

    match dispatch(cli, format, use_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error) {
    if let Some(app_err) = err.downcast_ref::<AppError>() {
        if is_json_output() {
            let envelope = ErrorEnvelope::from_error(app_err);
            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => println!("{}", json),
                Err(_) => terminal::print_error(&app_err.to_string()),
            }
            return;
        }
    }
    terminal::print_error(&format!("{:#}", err));
}

/// Resolves the session for commands that require authentication.
fn resolve_session(cli: &Cli, ctx: &CampusContext) -> anyhow::Result<Session> {
    let id = cli.caller.clone().ok_or_else(|| {
        AppError::InvalidInput("--caller is required for this command".to_string())
    })?;
    let secret = cli
        .password
        .clone()
        .or_else(|| std::env::var("CAMPUS_PASSWORD").ok())
        .ok_or_else(|| {
            AppError::InvalidInput("Provide --password or set CAMPUS_PASSWORD".to_string())
        })?;

    let roster = ctx.load_roster()?;
    Ok(campus_app::resolve(&roster, &id, &secret)?)
}

fn dispatch(cli: Cli, format: &str, use_color: bool) -> anyhow::Result<()> {
    let formatter = create_formatter(format, use_color);

    let command = match cli.command {
        Some(ref command) => command,
        None => {
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    if let Commands::Init { admin_password } = command {
        let root = cli
            .root
            .clone()
            .map_or_else(std::env::current_dir, Ok)?;
        return commands::init::execute(&root, admin_password.clone());
    }

    let ctx = CampusContext::discover(cli.root.as_deref())?;
    let session = resolve_session(&cli, &ctx)?;

    match command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Register { role } => match role {
            RegisterRole::Student {
                id,
                name,
                initial_password,
            } => commands::register::execute_student(
                &ctx,
                &session,
                id.clone(),
                name.clone(),
                initial_password.clone(),
            ),
            RegisterRole::Faculty {
                id,
                name,
                course,
                initial_password,
            } => commands::register::execute_faculty(
                &ctx,
                &session,
                id.clone(),
                name.clone(),
                course.clone(),
                initial_password.clone(),
            ),
        },
        Commands::Deactivate { id } => commands::deactivate::execute(&ctx, &session, id.clone()),
        Commands::Passwd { id, new_password } => {
            commands::passwd::execute(&ctx, &session, id.clone(), new_password.clone())
        }
        Commands::Whoami => commands::whoami::execute(&session),
        Commands::Task { action } => match action {
            TaskAction::Create {
                title,
                category,
                priority,
                deadline,
                parent,
                assign,
            } => commands::create::execute(
                &ctx,
                &session,
                commands::create::CreateArgs {
                    title: title.clone(),
                    category: category.clone(),
                    priority: priority.clone(),
                    deadline: deadline.clone(),
                    parent: parent.clone(),
                    assign: assign.clone(),
                },
            ),
            TaskAction::Assign { id, student } => {
                commands::assign::execute(&ctx, &session, id.clone(), student.clone())
            }
            TaskAction::Transition { id, status } => {
                commands::transition::execute(&ctx, &session, id.clone(), status.clone())
            }
            TaskAction::Reparent { id, parent } => {
                commands::reparent::execute(&ctx, &session, id.clone(), parent.clone())
            }
            TaskAction::Delete { id } => commands::delete::execute(&ctx, &session, id.clone()),
            TaskAction::Show { id } => {
                commands::show::execute(&ctx, &session, id.clone(), formatter.as_ref())
            }
            TaskAction::List {
                status,
                category,
                student,
                mine,
                sort,
            } => commands::list::execute(
                &ctx,
                &session,
                commands::list::ListArgs {
                    status: status.clone(),
                    category: category.clone(),
                    student: student.clone(),
                    mine: *mine,
                    sort: sort.clone(),
                },
                formatter.as_ref(),
            ),
        },
        Commands::Grade { action } => match action {
            GradeAction::Record {
                student,
                subject,
                marks,
            } => commands::grade::execute_record(
                &ctx,
                &session,
                student.clone(),
                subject.clone(),
                *marks,
            ),
            GradeAction::Remove { student, subject } => {
                commands::grade::execute_remove(&ctx, &session, student.clone(), subject.clone())
            }
        },
        Commands::Attendance { action } => match action {
            AttendanceAction::Record {
                student,
                date,
                absent,
            } => commands::attendance::execute_record(
                &ctx,
                &session,
                student.clone(),
                date.clone(),
                !absent,
            ),
            AttendanceAction::Remove { student, date } => {
                commands::attendance::execute_remove(&ctx, &session, student.clone(), date.clone())
            }
        },
        Commands::Report { target } => match target {
            ReportTarget::Student { id, format, out } => commands::report::execute_student(
                &ctx,
                &session,
                id.clone(),
                format.clone(),
                out.clone(),
            ),
            ReportTarget::All { format, out } => {
                commands::report::execute_all(&ctx, &session, format.clone(), out.clone())
            }
        },
    }
}
