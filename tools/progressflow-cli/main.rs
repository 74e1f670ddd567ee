use clap::Parser;
use progressflow::prelude::*;
use progressflow::ui::UiSnapshot;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Replays flowchart edit scripts and prints the resulting diagram
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON array of edit commands to replay
    script_path: Option<String>,

    /// Load a built-in example before replaying ("Hello World", "Print 1 to 10", "Age Check")
    #[arg(short, long)]
    preset: Option<String>,

    /// Path to an editor config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Use random node ids seeded with this value instead of sequential ones
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the routed SVG path of every edge
    #[arg(short, long)]
    routes: bool,

    /// Run in interactive mode and type commands at a prompt
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut editor = build_editor(&cli);

    if let Some(name) = &cli.preset {
        editor
            .load_preset(name)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }

    if cli.human {
        run_interactive(&mut editor);
    } else {
        run_non_interactive(&cli, &mut editor);
    }
}

fn build_editor(cli: &Cli) -> Editor {
    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => EditorConfig::default(),
    };
    let builder = Editor::builder().with_config(config);
    match cli.seed {
        Some(seed) => builder.with_ids(RandomIds::seeded(seed)).build(),
        None => builder.with_ids(SequentialIds::new()).build(),
    }
}

/// Replays the script (if any) and prints the final snapshot.
fn run_non_interactive(cli: &Cli, editor: &mut Editor) {
    if let Some(path) = &cli.script_path {
        let script = fs::read_to_string(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read script '{}': {}", path, e)));
        let commands: Vec<EditCommand> = serde_json::from_str(&script)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse script JSON: {}", e)));

        info!(count = commands.len(), "replaying script");
        for (index, command) in commands.into_iter().enumerate() {
            if let Err(e) = command.apply(editor) {
                warn!(step = index, "{}", e);
            }
        }
    }

    print_snapshot(editor);
    if cli.routes {
        print_routes(editor);
    }
}

fn print_snapshot(editor: &Editor) {
    let json = UiSnapshot::from(editor.snapshot())
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize snapshot: {}", e)));
    println!("{}", json);
}

fn print_routes(editor: &Editor) {
    let config = editor.config();
    for (id, path) in route_all(editor.snapshot(), &config.drop, &config.routing) {
        println!("{}: {}", id, path.to_svg_path());
    }
}

/// Runs a read-eval-print loop over editor commands.
fn run_interactive(editor: &mut Editor) {
    println!("--- progressflow Interactive Mode ---");
    println!("Commands: add <kind> <x> <y> | move <id> <x> <y> | connect <src> <dst> [handle] [target-handle]");
    println!("          delete <node> | unlink <edge> | remove <id>... | label <id> <text> | edit <id> | done");
    println!("          undo | redo | clear | preset <name> | show | routes | quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => return,
            ["show"] => print_snapshot(editor),
            ["routes"] => print_routes(editor),
            _ => match parse_command(&words) {
                Ok(command) => match command.apply(editor) {
                    Ok(outcome) => println!("  -> {:?}", outcome),
                    Err(e) => println!("  -> Rejected: {}", e),
                },
                Err(message) => println!("  -> {}", message),
            },
        }
    }
}

/// Turns one prompt line into an edit command.
fn parse_command(words: &[&str]) -> Result<EditCommand, String> {
    match words {
        ["add", kind, x, y] => Ok(EditCommand::DropNewNode {
            kind: kind.parse().map_err(|e: ParseError| e.to_string())?,
            position: Position::new(number(x)?, number(y)?),
        }),
        ["move", id, x, y] => Ok(EditCommand::DropExistingNode {
            id: id.to_string(),
            position: Position::new(number(x)?, number(y)?),
        }),
        ["connect", source, target, rest @ ..] if rest.len() <= 2 => Ok(EditCommand::ProposeConnection {
            source: source.to_string(),
            target: target.to_string(),
            source_handle: handle(rest.first())?,
            target_handle: handle(rest.get(1))?,
        }),
        ["delete", id] => Ok(EditCommand::DeleteNode { id: id.to_string() }),
        ["unlink", id] => Ok(EditCommand::DeleteEdge { id: id.to_string() }),
        ["remove", ids @ ..] if !ids.is_empty() => Ok(EditCommand::DeleteSelection {
            node_ids: ids.iter().map(|s| s.to_string()).collect(),
            edge_ids: ids.iter().map(|s| s.to_string()).collect(),
        }),
        ["label", id, text @ ..] if !text.is_empty() => Ok(EditCommand::SetLabel {
            id: id.to_string(),
            label: text.join(" ").replace("\\n", "\n"),
        }),
        ["edit", id] => Ok(EditCommand::StartEditing { id: id.to_string() }),
        ["done"] => Ok(EditCommand::StopEditing),
        ["undo"] => Ok(EditCommand::Undo),
        ["redo"] => Ok(EditCommand::Redo),
        ["clear"] => Ok(EditCommand::ClearAll),
        ["preset", name @ ..] if !name.is_empty() => Ok(EditCommand::LoadPreset { name: name.join(" ") }),
        _ => Err(format!("Unrecognized command '{}'", words.join(" "))),
    }
}

fn number(s: &str) -> Result<f64, String> {
    s.parse::<f64>().map_err(|_| format!("'{}' is not a number", s))
}

/// `-` or a missing word stands for the unlabeled handle.
fn handle(word: Option<&&str>) -> Result<Option<Handle>, String> {
    match word {
        None | Some(&"-") => Ok(None),
        Some(h) => h.parse::<Handle>().map(Some).map_err(|e| e.to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
