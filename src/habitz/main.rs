use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use habitz::api::{CmdMessage, ConfigAction, HabitSelector, HabitUpdate, MessageLevel};
use habitz::commands::HabitSummary;
use habitz::editor::{edit_content, EditorContent};
use habitz::error::{HabitzError, Result};
use habitz::init::{initialize, HabitzContext};
use habitz::model::{Outcome, Standing};
use habitz::record;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = initialize(cli.data_dir.as_deref())?;

    match cli.command {
        Some(Commands::Create {
            title,
            description,
            start_date,
            no_editor,
        }) => handle_create(&mut ctx, title, description, start_date, no_editor),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { habits }) => handle_show(&ctx, habits),
        Some(Commands::Mark { habit, result }) => handle_mark(&mut ctx, habit, result),
        Some(Commands::Backfill {
            habit,
            results,
            including_today,
        }) => handle_backfill(&mut ctx, habit, results, including_today),
        Some(Commands::Edit { habit }) => handle_edit(&mut ctx, habit),
        Some(Commands::Remove { habit, yes }) => handle_remove(&mut ctx, habit, yes),
        Some(Commands::Path { habits }) => handle_paths(&ctx, habits),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn handle_create(
    ctx: &mut HabitzContext,
    title: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (final_title, final_description) = if no_editor {
        (title.unwrap_or_default(), description.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), description.unwrap_or_default());
        let edited = edit_content(&initial)?;
        (edited.title, edited.description)
    };

    let start = match start_date {
        Some(s) => Some(record::parse_date(&s).ok_or_else(|| {
            HabitzError::Validation(format!("unreadable date '{}' (expected YYYY-M-D)", s))
        })?),
        None => None,
    };

    let result = ctx.api.create_habit(final_title, final_description, start)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &HabitzContext) -> Result<()> {
    let result = ctx.api.list_habits()?;
    print_habits(&result.listed_habits);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &HabitzContext, habits: Vec<String>) -> Result<()> {
    let result = ctx.api.show_habits(&habits)?;
    print_full_habits(&result.listed_habits);
    print_messages(&result.messages);
    Ok(())
}

fn handle_mark(ctx: &mut HabitzContext, habit: String, result_arg: Option<String>) -> Result<()> {
    let outcome = match result_arg {
        Some(s) => s.parse::<Outcome>().map_err(HabitzError::Validation)?,
        None => ctx.config.default_result,
    };
    let result = ctx.api.mark_today(&habit, outcome)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backfill(
    ctx: &mut HabitzContext,
    habit: String,
    results: Vec<String>,
    including_today: bool,
) -> Result<()> {
    let outcomes = parse_outcomes(&results)?;
    let result = ctx.api.backfill(&habit, &outcomes, including_today)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut HabitzContext, habit: String) -> Result<()> {
    let found = ctx.api.find_habit(&habit)?;
    let initial = EditorContent::new(found.title.clone(), found.description.clone());
    let edited = edit_content(&initial)?;

    if edited.title == found.title && edited.description == found.description {
        println!("No changes.");
        return Ok(());
    }

    // Update by id: the title may just have changed under the selector.
    let update = HabitUpdate::new(HabitSelector::Id(found.id), edited.title, edited.description);
    let result = ctx.api.update_habits(&[update])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut HabitzContext, habit: String, yes: bool) -> Result<()> {
    if !yes {
        let found = ctx.api.find_habit(&habit)?;
        print!("The habit '{}' will be removed. Proceed? (y/N) ", found.title);
        io::stdout().flush().map_err(HabitzError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(HabitzError::Io)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            // Declining is a clean exit, but a non-zero one.
            println!("Operation cancelled.");
            std::process::exit(1);
        }
    }

    let result = ctx.api.remove_habit(&habit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &HabitzContext, habits: Vec<String>) -> Result<()> {
    let result = ctx.api.record_paths(&habits)?;
    for path in &result.record_paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &HabitzContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-result = {}", config.default_result);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_outcomes(args: &[String]) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for arg in args {
        if let Ok(outcome) = arg.parse::<Outcome>() {
            outcomes.push(outcome);
            continue;
        }
        // A compact run like "++-?" counts one result per character.
        let mut run = Vec::with_capacity(arg.len());
        for c in arg.chars() {
            match Outcome::from_code(c) {
                Some(outcome) => run.push(outcome),
                None => {
                    return Err(HabitzError::Validation(format!("unknown result '{}'", arg)))
                }
            }
        }
        outcomes.append(&mut run);
    }
    Ok(outcomes)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STANDING_WIDTH: usize = 16;

fn print_habits(habits: &[HabitSummary]) {
    if habits.is_empty() {
        println!("No habits found.");
        return;
    }

    for hs in habits {
        let idx_str = format!("{}. ", hs.habit.id);

        let desc_preview: String = hs
            .habit
            .description
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if desc_preview.is_empty() {
            hs.habit.title.clone()
        } else {
            format!("{} {}", hs.habit.title, desc_preview)
        };

        let fixed_width = 4 + idx_str.width() + STANDING_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let standing_padded = format!(
            "{:<width$}",
            standing_label(hs.standing),
            width = STANDING_WIDTH
        );
        let standing_colored = match hs.standing {
            Standing::UpToDate => standing_padded.green(),
            Standing::TodayPending => standing_padded.yellow(),
            Standing::Behind(_) => standing_padded.red(),
        };

        let time_colored = format_time_ago(hs.habit.start_date()).dimmed();

        println!(
            "    {}{}{}{}{}",
            idx_str,
            title_display,
            " ".repeat(padding),
            standing_colored,
            time_colored
        );
    }
}

fn print_full_habits(habits: &[HabitSummary]) {
    for (i, hs) in habits.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", hs.habit.id).yellow(),
            hs.habit.title.bold()
        );
        println!("--------------------------------");
        if !hs.habit.description.is_empty() {
            println!("{}", hs.habit.description);
        }
        println!(
            "Started {} ({})",
            record::format_date(hs.habit.start_date()),
            format_time_ago(hs.habit.start_date()).trim()
        );
        if !hs.habit.series().is_empty() {
            print!("Series: ");
            for outcome in hs.habit.series() {
                let code = outcome.code().to_string();
                let colored = match outcome {
                    Outcome::Good => code.green(),
                    Outcome::Bad => code.red(),
                    Outcome::Unknown => code.dimmed(),
                };
                print!("{}", colored);
            }
            println!();
        }
        let standing = standing_label(hs.standing);
        let standing_colored = match hs.standing {
            Standing::UpToDate => standing.green(),
            Standing::TodayPending => standing.yellow(),
            Standing::Behind(_) => standing.red(),
        };
        println!("Status: {}", standing_colored);
    }
}

fn standing_label(standing: Standing) -> String {
    match standing {
        Standing::UpToDate => "up to date".to_string(),
        Standing::TodayPending => "today pending".to_string(),
        Standing::Behind(1) => "1 day behind".to_string(),
        Standing::Behind(n) => format!("{} days behind", n),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(start: NaiveDate) -> String {
    let today = Local::now().date_naive();
    let days = (today - start).num_days().max(0) as u64;

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(std::time::Duration::from_secs(days * 86_400));

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
