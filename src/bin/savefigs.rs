use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use savefigs::context::stem_of;
use savefigs::{
    CallerContext, ConflictMode, ExportConfig, ExportRequest, FigureManifest, GraphicsEngine,
    HistoryCaller, StaticCaller, SvgEngine, export_with_caller, plan_exports,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "savefigs", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save every figure in every requested format.
    Export(ExportArgs),
    /// Print the paths an export would write, without writing anything.
    Plan(ExportArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// SVG files to open as figures, in order.
    svgs: Vec<PathBuf>,

    /// JSON manifest listing figures; opened before positional SVG files.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Label each positional SVG with its file stem.
    #[arg(long, default_value_t = false)]
    label_from_stem: bool,

    /// JSON export configuration; the flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Destination directory (must exist). Defaults to the current directory.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Prefix for every file name. Defaults to the stem of --source or the manifest, plus `_`.
    #[arg(long)]
    prefix: Option<String>,

    /// File whose stem names the outputs when --prefix is absent.
    #[arg(long)]
    source: Option<String>,

    /// Session history, one command per line, searched for `runfile(...)` when --source is
    /// interactive.
    #[arg(long, requires = "source")]
    history: Option<PathBuf>,

    /// Output format; repeat for several. Defaults to png.
    #[arg(short = 'f', long = "format")]
    formats: Vec<String>,

    /// Writer option as KEY=VALUE; VALUE is parsed as JSON, else used as a string.
    #[arg(long = "opt", value_parser = parse_writer_option)]
    opts: Vec<(String, serde_json::Value)>,

    /// Keep existing files instead of replacing them.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// What to do when --no-overwrite meets a taken path.
    #[arg(long, value_enum)]
    conflict: Option<ConflictChoice>,

    /// Log progress details for this export.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConflictChoice {
    Raise,
    AddNum,
}

impl From<ConflictChoice> for ConflictMode {
    fn from(choice: ConflictChoice) -> Self {
        match choice {
            ConflictChoice::Raise => ConflictMode::Raise,
            ConflictChoice::AddNum => ConflictMode::AddNum,
        }
    }
}

fn parse_writer_option(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty option key in '{s}'"));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn open_engine(args: &ExportArgs) -> anyhow::Result<SvgEngine> {
    let mut engine = SvgEngine::with_system_fonts();

    if let Some(path) = &args.manifest {
        let manifest = FigureManifest::from_path(path)?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        manifest.open_into(root, &mut engine)?;
    }
    for svg in &args.svgs {
        let label = if args.label_from_stem {
            stem_of(svg).unwrap_or_default()
        } else {
            String::new()
        };
        engine
            .add_svg_file(label, svg)
            .with_context(|| format!("open figure '{}'", svg.display()))?;
    }
    Ok(engine)
}

fn build_request(args: &ExportArgs) -> anyhow::Result<ExportRequest> {
    let mut request = ExportRequest::new();
    if let Some(path) = &args.config {
        request = ExportConfig::from_path(path)?.apply_to(request);
    }

    if let Some(dir) = &args.dir {
        request.directory = Some(dir.clone());
    }
    if let Some(prefix) = &args.prefix {
        request.prefix = Some(prefix.clone());
    }
    if !args.formats.is_empty() {
        request.formats = args.formats.clone();
    }
    request.writer_options.extend(args.opts.iter().cloned());
    if args.no_overwrite {
        request.overwrite = false;
    }
    if let Some(choice) = args.conflict {
        request.conflict_mode = choice.into();
    }
    if args.debug {
        request.debug = true;
    }
    Ok(request)
}

fn caller(args: &ExportArgs) -> anyhow::Result<Box<dyn CallerContext>> {
    if let (Some(source), Some(history)) = (&args.source, &args.history) {
        let text = std::fs::read_to_string(history)
            .with_context(|| format!("read history {}", history.display()))?;
        let lines = text.lines().map(str::to_owned).collect();
        return Ok(Box::new(HistoryCaller::new(source.as_str(), lines)));
    }
    Ok(Box::new(match (&args.source, &args.manifest) {
        (Some(source), _) => StaticCaller::from_source(source),
        (None, Some(manifest)) => StaticCaller::new(Some(manifest.clone())),
        (None, None) => StaticCaller::none(),
    }))
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut engine = open_engine(&args)?;
    let request = build_request(&args)?;

    let caller = caller(&args)?;
    let report = export_with_caller(&mut engine, &request, &*caller)?;
    for path in report.paths() {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_plan(args: ExportArgs) -> anyhow::Result<()> {
    let engine = open_engine(&args)?;
    let mut request = build_request(&args)?;
    if request.prefix.is_none() && request.caller_path.is_none() {
        request.caller_path = caller(&args)?.caller_path(request.stack_level);
    }

    let plan = plan_exports(&engine.open_figures(), &request)?;
    for entry in &plan.entries {
        println!("{}", entry.path.display());
    }
    Ok(())
}
