use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use repkit_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repkit")]
#[command(about = "Personalized weekly workout planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and show the weekly plan (default)
    Week {
        /// Week start date (YYYY-MM-DD, defaults to Monday of this week)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Emit the plan as JSON instead of formatted output
        #[arg(long)]
        json: bool,

        /// Validate the generated plan against the profile
        #[arg(long)]
        check: bool,
    },

    /// Generate a single workout session
    Day {
        /// Workout day ordinal (1-based, among workout days)
        #[arg(long, default_value_t = 1)]
        index: u32,

        /// Pre-workout energy level (1-5); triggers a check-in adjustment
        #[arg(long)]
        energy: Option<i32>,

        /// Pre-workout knee pain level (0-2); triggers a check-in adjustment
        #[arg(long)]
        knee_pain: Option<i32>,

        /// Emit the session as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved user profile
    Profile {
        /// Write a starter config file before showing the profile
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    repkit_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path)?,
        Some(path) => {
            tracing::info!("No config file at {:?}, using defaults", path);
            Config::default()
        }
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Week {
            start_date,
            json,
            check,
        }) => cmd_week(&config, start_date, json, check),
        Some(Commands::Day {
            index,
            energy,
            knee_pain,
            json,
        }) => cmd_day(&config, index, energy, knee_pain, json),
        Some(Commands::Profile { init }) => cmd_profile(&config, cli.config.as_deref(), init),
        None => cmd_week(&config, None, false, false),
    }
}

fn load_catalog() -> Result<&'static Catalog> {
    let catalog = default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Catalog("Invalid catalog".into()));
    }
    Ok(catalog)
}

fn cmd_week(config: &Config, start_date: Option<NaiveDate>, json: bool, check: bool) -> Result<()> {
    let catalog = load_catalog()?;
    let profile = config.user_profile();
    let start = start_date.unwrap_or_else(start_of_current_week);

    let plan = generate_week(catalog, &profile, start);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan, &profile);
    }

    if check {
        let result = validate_plan(catalog, &plan, &profile);
        if result.is_valid {
            println!("✓ Plan satisfies all profile constraints");
        } else {
            println!("✗ Plan has {} issue(s):", result.issues.len());
            for issue in &result.issues {
                println!("  - {}", issue);
            }
        }
    }

    Ok(())
}

fn cmd_day(
    config: &Config,
    index: u32,
    energy: Option<i32>,
    knee_pain: Option<i32>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog()?;
    let profile = config.user_profile();
    let date = chrono::Local::now().date_naive();

    let mut session = generate_session(catalog, &profile, index, date);

    if energy.is_some() || knee_pain.is_some() {
        let check_in = PreWorkoutCheckIn::new(energy.unwrap_or(3), knee_pain.unwrap_or(0), "");
        if !json {
            println!(
                "Check-in: energy {} / knee pain {}",
                check_in.energy_description(),
                check_in.knee_pain_description()
            );
            if check_in.should_adjust_workout() {
                println!("→ Reducing each exercise by {} set\n", check_in.sets_reduction());
            }
        }
        session = adjust(&session, &check_in);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        display_session(catalog, &session);
    }

    Ok(())
}

fn cmd_profile(config: &Config, config_path: Option<&std::path::Path>, init: bool) -> Result<()> {
    if init {
        match config_path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        println!("✓ Config written");
    }

    let profile = config.user_profile();

    println!("╭─────────────────────────────────────────╮");
    println!("│  PROFILE                                │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    if !profile.name.is_empty() {
        println!("  Name: {}", profile.name);
    }
    println!("  Goal: {}", profile.primary_goal.label());
    println!("  Knees: {}", profile.knee_profile.label());
    println!(
        "  Schedule: {} days/week, {} min/session",
        profile.schedule.days_per_week, profile.schedule.minutes_per_session
    );
    let equipment: Vec<&str> = profile.equipment.iter().map(|e| e.label()).collect();
    println!("  Equipment: {}", equipment.join(", "));

    Ok(())
}

fn display_plan(plan: &WeeklyPlan, profile: &UserProfile) {
    println!("╭─────────────────────────────────────────╮");
    println!("│  WEEKLY PLAN                            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Week of {}", plan.week_start_date);
    println!("  Goal: {}", profile.primary_goal.label());
    println!(
        "  {} workout days, {} rest days",
        plan.planned_workouts(),
        plan.sessions.len() - plan.planned_workouts()
    );
    println!();

    for session in &plan.sessions {
        match session.day_type {
            DayType::Rest => {
                println!("  {} — Rest day", session.date.format("%a %Y-%m-%d"));
            }
            DayType::Workout => {
                println!(
                    "  {} — Workout ({} exercises)",
                    session.date.format("%a %Y-%m-%d"),
                    session.exercise_count()
                );
                for exercise in &session.exercises {
                    println!(
                        "      {} — {} x {} [{}]",
                        exercise.exercise_name,
                        exercise.target_sets,
                        exercise.target_reps,
                        exercise.primary_muscle.label()
                    );
                }
            }
        }
    }

    println!();
}

fn display_session(catalog: &Catalog, session: &WorkoutSession) {
    let stats = session_statistics(session);

    println!("╭─────────────────────────────────────────╮");
    println!("│  WORKOUT — DAY {}", session.day_index);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Date: {}", session.date);
    println!(
        "  {} exercises, {} total sets",
        stats.exercise_count, stats.total_sets
    );
    println!();

    for exercise in &session.exercises {
        println!(
            "  → {} — {} x {} [{} knee load]",
            exercise.exercise_name,
            exercise.target_sets,
            exercise.target_reps,
            exercise.knee_load.label()
        );
        if let Some(source) = catalog.by_id(&exercise.exercise_id) {
            if !source.instructions.is_empty() {
                println!("      {}", source.instructions);
            }
        }
    }

    println!();
}
