use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::json;

use crate::cli::commands::*;
use crate::io::pack_io;
use crate::io::state::{self, SavedState};
use crate::model::query::{ListQuery, SourceFilter, StatusFilter, TierScope};
use crate::model::task::{Task, TaskTier};
use crate::ops::{pipeline, progress};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let ctx = Context::load(cli.pack.as_deref())?;

    match cli.command {
        None => {
            // Unreachable: main launches the TUI when no subcommand is given
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(ctx, args, json),
            Commands::Show(args) => cmd_show(ctx, args, json),
            Commands::Roll => cmd_roll(ctx, json),
            Commands::Current => cmd_current(ctx, json),
            Commands::Done(args) => cmd_done(ctx, args),
            Commands::Undone(args) => cmd_undone(ctx, args),
            Commands::Stats => cmd_stats(ctx, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Pack plus persisted state, loaded once per invocation
struct Context {
    tasks: Vec<Task>,
    state: SavedState,
    state_dir: PathBuf,
}

impl Context {
    fn load(pack: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let pack_path = PathBuf::from(pack.unwrap_or("tasks.json"));
        let tasks = pack_io::load_pack(&pack_path)?;
        let state_dir = pack_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let state = state::read_state(&state_dir).unwrap_or_default();
        Ok(Context {
            tasks,
            state,
            state_dir,
        })
    }

    fn is_completed(&self, task: &Task) -> bool {
        self.state.completed.contains_key(&task.id)
    }

    fn find(&self, id: &str) -> Result<&Task, String> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("no task with id '{id}'"))
    }

    fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        state::write_state(&self.state_dir, &self.state)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(ctx: Context, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let query = query_from_args(&args)?;
    let tier = args.tier.as_deref().map(parse_tier).transpose()?;

    let mut visible = pipeline::apply_query(&ctx.tasks, &query, |t| ctx.is_completed(t));
    if let Some(tier) = tier {
        visible.retain(|t| t.tier == Some(tier));
    }

    if json {
        let rows: Vec<_> = visible.iter().map(|t| task_json(t, &ctx)).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for task in &visible {
        let done = if ctx.is_completed(task) { "x" } else { " " };
        let tier_label = task.tier.map_or("—", TaskTier::label);
        println!(
            "[{done}] {:<12} {:<11} [{}] {}",
            task.id,
            tier_label,
            task.source.badge(),
            task.name
        );
    }
    if visible.is_empty() {
        println!("no tasks match");
    }
    Ok(())
}

fn cmd_show(ctx: Context, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let task = ctx.find(&args.id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&task_json(task, &ctx))?);
        return Ok(());
    }
    println!("{}", task.name);
    println!("  id:     {}", task.id);
    println!("  tier:   {}", task.tier.map_or("—", TaskTier::label));
    println!("  source: {}", task.source.badge());
    match ctx.state.completed.get(&task.id) {
        Some(when) => println!("  done:   {}", when.format("%Y-%m-%d")),
        None => println!("  done:   no"),
    }
    if let Some(desc) = &task.description {
        println!("  desc:   {desc}");
    }
    if let Some(prereqs) = &task.prereqs {
        println!("  prereqs: {prereqs}");
    }
    if let Some(url) = &task.wiki_url {
        println!("  wiki:   {url}");
    }
    Ok(())
}

fn cmd_current(ctx: Context, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let current = ctx
        .state
        .current_task
        .as_deref()
        .and_then(|id| ctx.tasks.iter().find(|t| t.id == id));
    if json {
        let value = current.map(|t| task_json(t, &ctx));
        println!("{}", serde_json::to_string_pretty(&json!({ "current": value }))?);
        return Ok(());
    }
    match current {
        Some(task) => println!("current: {} ({})", task.name, task.id),
        None => println!("no current task — try `tt roll`"),
    }
    Ok(())
}

fn cmd_stats(ctx: Context, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let tiers: Vec<_> = TaskTier::ALL
            .into_iter()
            .map(|tier| {
                json!({
                    "tier": tier.label(),
                    "done": progress::tier_done(&ctx.tasks, tier, |t| ctx.is_completed(t)),
                    "total": progress::tier_total(&ctx.tasks, tier),
                    "percent": progress::tier_percent(&ctx.tasks, tier, |t| ctx.is_completed(t)),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tiers)?);
        return Ok(());
    }
    for tier in TaskTier::ALL {
        let label = progress::tier_progress_label(&ctx.tasks, tier, |t| ctx.is_completed(t));
        let marker = if Some(tier) == progress::current_tier(&ctx.tasks, |t| ctx.is_completed(t)) {
            "»"
        } else {
            " "
        };
        println!("{marker} {:<11} {label}", tier.label());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_roll(mut ctx: Context, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = ctx.state.current_task.clone()
        && !ctx.state.completed.contains_key(&id)
    {
        return Err(format!("current task '{id}' is still open; finish it with `tt done {id}`").into());
    }

    let mut rng = rand::thread_rng();
    let picked = progress::roll_random(&ctx.tasks, |t| ctx.is_completed(t), &mut rng)
        .map(|t| t.id.clone());
    let Some(id) = picked else {
        return Err("nothing left to roll — every task is complete".into());
    };
    ctx.state.current_task = Some(id.clone());
    ctx.save()?;

    let task = ctx.find(&id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&task_json(task, &ctx))?);
    } else {
        println!("rolled: {} ({})", task.name, task.id);
    }
    Ok(())
}

fn cmd_done(mut ctx: Context, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let task = ctx.find(&args.id)?;
    let name = task.name.clone();
    if ctx.state.completed.contains_key(&args.id) {
        println!("already done: {name}");
        return Ok(());
    }
    ctx.state.completed.insert(args.id.clone(), Utc::now());
    if ctx.state.current_task.as_deref() == Some(args.id.as_str()) {
        ctx.state.current_task = None;
    }
    ctx.save()?;
    println!("done: {name}");
    Ok(())
}

fn cmd_undone(mut ctx: Context, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let task = ctx.find(&args.id)?;
    let name = task.name.clone();
    if ctx.state.completed.shift_remove(&args.id).is_none() {
        println!("not done yet: {name}");
        return Ok(());
    }
    ctx.save()?;
    println!("reopened: {name}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn query_from_args(args: &ListArgs) -> Result<ListQuery, String> {
    let mut query = ListQuery {
        search_text: args.search.clone().unwrap_or_default(),
        // The CLI list always spans all tiers; --tier narrows afterwards
        tier_scope: TierScope::AllTiers,
        sort_by_tier: args.sort_tier,
        sort_by_completion: args.sort_completion,
        ..ListQuery::default()
    };
    if let Some(source) = &args.source {
        query.source_filter = match source.as_str() {
            "ca" => SourceFilter::Ca,
            "clog" => SourceFilter::Clogs,
            other => return Err(format!("unknown source '{other}' (expected ca or clog)")),
        };
    }
    if let Some(status) = &args.status {
        query.status_filter = match status.as_str() {
            "open" => StatusFilter::Incomplete,
            "done" => StatusFilter::Complete,
            other => return Err(format!("unknown status '{other}' (expected open or done)")),
        };
    }
    Ok(query)
}

fn parse_tier(text: &str) -> Result<TaskTier, String> {
    TaskTier::ALL
        .into_iter()
        .find(|t| t.label().eq_ignore_ascii_case(text))
        .ok_or_else(|| format!("unknown tier '{text}'"))
}

fn task_json(task: &Task, ctx: &Context) -> serde_json::Value {
    json!({
        "id": task.id,
        "name": task.name,
        "source": task.source.badge(),
        "tier": task.tier.map(TaskTier::label),
        "done": ctx.is_completed(task),
        "completed_at": ctx.state.completed.get(&task.id),
        "description": task.description,
        "prereqs": task.prereqs,
        "wiki_url": task.wiki_url,
    })
}
