use clap::Parser;

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Markdown,
}

mod commands;
mod output;
mod tty;

use commands::{config, env, guide, layout, mkdocs, name, pyproject};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "scaffold-kit")]
#[command(version = VERSION)]
#[command(about = "Derive Python package names and project scaffold templates")]
struct Cli {
    /// Path to a scaffold-kit.json config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Normalize a package name and derive its repository name
    Name(name::NameArgs),
    /// Show the folder tree and the shell commands that create it
    Layout(layout::LayoutArgs),
    /// Generate a conda environment.yml
    Env(env::EnvArgs),
    /// Generate a pyproject.toml
    Pyproject(pyproject::PyprojectArgs),
    /// Generate mkdocs.yml and docs/index.md snippets
    Mkdocs(mkdocs::MkdocsArgs),
    /// Print the full scaffolding walkthrough as Markdown
    Guide(guide::GuideArgs),
    /// Inspect scaffold-kit configuration
    Config(config::ConfigArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Guide(_) => ResponseMode::Markdown,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs { config: cli.config };

    if let ResponseMode::Markdown = response_mode(&cli.command) {
        let markdown_result = commands::run_markdown(cli.command, &global);

        match markdown_result {
            Ok((content, exit_code)) => {
                print!("{}", content);
                return std::process::ExitCode::from(exit_code_to_u8(exit_code));
            }
            Err(err) => {
                let exit_code = output::exit_code_for_error(err.code);
                let _ = output::print_result::<serde_json::Value>(Err(err));
                return std::process::ExitCode::from(exit_code_to_u8(exit_code));
            }
        }
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    let _ = output::print_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
