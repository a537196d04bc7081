use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use verd::cli::Cli;
use verd::core::telemetry::logging::init_logging;
use verd::services::fs::entries::sort_entries;
use verd::services::fs::listing::{list_dir, ListOptions};
use verd::ui::report::render_report;
use verd::ui::theme::{Role, Theme};

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let theme = Theme::for_stream(std::io::stderr().is_terminal());
            eprintln!("  {}", theme.paint(Role::Error, &format!("error: {err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let target = cli.target();
    let opts = ListOptions {
        show_all: cli.all,
        files_only: cli.files,
    };

    let mut entries = list_dir(&target, opts)
        .with_context(|| format!("cannot list {}", target.display()))?;
    sort_entries(&mut entries);

    let theme = Theme::for_stream(std::io::stdout().is_terminal());
    Ok(render_report(&entries, &theme))
}
