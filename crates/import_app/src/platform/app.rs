use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use import_core::{update, Msg, WizardState};
use import_engine::{EngineConfig, LabelCatalog};
use import_logging::{import_debug, import_warn, set_dispatch_seq};
use log::LevelFilter;

use super::console::{commands, render};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};

/// Collect external file URLs for a dataset import.
#[derive(Debug, Parser)]
#[command(name = "import_app", version)]
struct Args {
    /// JSON label catalog overlaid on the built-in English strings.
    #[arg(long)]
    labels: Option<PathBuf>,
    /// Directory that receives sources.json when the wizard reaches the upload step.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
    /// Log verbosity.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log, args.log_level);

    let labels = match &args.labels {
        Some(path) => LabelCatalog::load(path).unwrap_or_else(|err| {
            import_warn!("{err}; using built-in labels");
            eprintln!("Warning: {err}; using built-in labels");
            LabelCatalog::default()
        }),
        None => LabelCatalog::default(),
    };
    let config = EngineConfig {
        output_dir: args.output_dir,
        ..EngineConfig::default()
    };

    let mut host = ConsoleHost::new(labels, EffectRunner::new(config));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", host.render())?;
    writeln!(out, "type `help` for commands")?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        match command {
            commands::Command::Quit => break,
            commands::Command::Help => writeln!(out, "{}", commands::HELP)?,
            commands::Command::Show => write!(out, "{}", host.render())?,
            command => {
                let step = host.state.host().active_step();
                if host.dispatch_all(command.into_msgs(step)) {
                    write!(out, "{}", host.render())?;
                }
            }
        }
        out.flush()?;
    }
    Ok(())
}

struct ConsoleHost {
    state: WizardState,
    runner: EffectRunner,
    labels: LabelCatalog,
    inbox: VecDeque<Msg>,
    seq: u64,
}

impl ConsoleHost {
    fn new(labels: LabelCatalog, runner: EffectRunner) -> Self {
        Self {
            state: WizardState::new(),
            runner,
            labels,
            inbox: VecDeque::new(),
            seq: 0,
        }
    }

    /// Processes the messages and everything their effects feed back, in
    /// order. Returns whether the view needs rendering.
    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> bool {
        self.inbox.extend(msgs);
        let mut was_dirty = false;
        while let Some(msg) = self.inbox.pop_front() {
            was_dirty |= self.dispatch_msg(msg);
        }
        was_dirty
    }

    fn dispatch_msg(&mut self, msg: Msg) -> bool {
        self.seq += 1;
        set_dispatch_seq(self.seq);
        import_debug!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let follow_up = self.runner.run(effects, state.host().sources());
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.inbox.extend(follow_up);
        was_dirty
    }

    fn render(&self) -> String {
        render::render(&self.state.view(), &self.labels)
    }
}
