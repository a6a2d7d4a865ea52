use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "kinema", version)]
struct Cli {
    /// Log verbosity on stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one element at one instant and print its properties as JSON.
    Sample(SampleArgs),
    /// Evaluate one element over a frame range (30 fps), one JSON line per frame.
    Scrub(ScrubArgs),
    /// Print a generated preset animation as a document.
    Preset(PresetArgs),
    /// Load and validate a document.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Element id.
    #[arg(long)]
    element: String,

    /// Active phase.
    #[arg(long, value_enum, default_value_t = PhaseChoice::In)]
    phase: PhaseChoice,

    /// Query time in milliseconds.
    #[arg(long, allow_hyphen_values = true)]
    time: f64,

    /// Override every matching animation's duration.
    #[arg(long)]
    phase_duration: Option<f64>,

    /// Overlay the result onto the element's default properties.
    #[arg(long)]
    resolve: bool,

    /// Include the per-animation timeline decisions in the output.
    #[arg(long)]
    trace: bool,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Element id.
    #[arg(long)]
    element: String,

    /// Active phase.
    #[arg(long, value_enum, default_value_t = PhaseChoice::In)]
    phase: PhaseChoice,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: i64,

    /// Last frame (exclusive).
    #[arg(long)]
    to: i64,

    /// Override every matching animation's duration.
    #[arg(long)]
    phase_duration: Option<f64>,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Element id the animation is attached to.
    #[arg(long)]
    element: String,

    /// Template id recorded on the animation.
    #[arg(long, default_value = "default")]
    template: String,

    /// Phase to generate for.
    #[arg(long, value_enum, default_value_t = PhaseChoice::In)]
    phase: PhaseChoice,

    /// Archetype name (e.g. `fade`, `slide-left`, `pulse`; chart: `grow`, `stagger`).
    #[arg(long)]
    kind: String,

    /// Interpret `--kind` as a chart archetype.
    #[arg(long)]
    chart: bool,

    /// Chart data, comma separated (used by `stagger`).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    data: Vec<f64>,

    /// Rescale relative keyframe positions to milliseconds.
    #[arg(long)]
    scale: bool,

    /// Preset timing JSON (`entry_ms`, `exit_ms`, `loop_ms`; all optional).
    #[arg(long)]
    timing: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PhaseChoice {
    In,
    Loop,
    Out,
}

impl From<PhaseChoice> for kinema::Phase {
    fn from(choice: PhaseChoice) -> Self {
        match choice {
            PhaseChoice::In => kinema::Phase::In,
            PhaseChoice::Loop => kinema::Phase::Loop,
            PhaseChoice::Out => kinema::Phase::Out,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Scrub(args) => cmd_scrub(args),
        Command::Preset(args) => cmd_preset(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(path: &Path) -> anyhow::Result<kinema::Document> {
    let doc = kinema::Document::from_path(path)
        .with_context(|| format!("load document '{}'", path.display()))?;
    if let Err(e) = doc.validate() {
        tracing::warn!("{}: {e}; evaluating anyway", path.display());
    }
    Ok(doc)
}

fn find_element<'a>(doc: &'a kinema::Document, id: &str) -> anyhow::Result<&'a kinema::Element> {
    doc.element(id)
        .with_context(|| format!("no element '{id}' in document"))
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let element = find_element(&doc, &args.element)?;

    let mut query = kinema::EvalQuery::new(args.time, args.phase.into());
    if let Some(ms) = args.phase_duration {
        query = query.with_phase_duration(ms);
    }

    let mut events: Vec<kinema::TraceEvent> = Vec::new();
    let props = kinema::Evaluator::eval_element_traced(
        element,
        &doc.animations,
        &doc.keyframes,
        query,
        &mut events,
    );
    let props = if args.resolve {
        element.resolve(&props)
    } else {
        props
    };

    let mut out = json!({
        "element": element.id,
        "time": kinema::format_time(args.time, false),
        "properties": props,
    });
    if args.trace {
        out["trace"] = serde_json::to_value(&events).context("serialize trace")?;
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.from <= args.to,
        "empty frame range {}..{}",
        args.from,
        args.to
    );
    let doc = read_document(&args.in_path)?;
    let element = find_element(&doc, &args.element)?;

    let frames = kinema::Evaluator::sample_frames(
        element,
        &doc.animations,
        &doc.keyframes,
        args.phase.into(),
        args.phase_duration,
        args.from..args.to,
    );
    for (frame, props) in frames {
        let line = json!({
            "frame": frame,
            "time": kinema::format_time(kinema::frames_to_ms(frame), true),
            "properties": props,
        });
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn read_timing(path: &Path) -> anyhow::Result<kinema::PresetTiming> {
    let f = File::open(path).with_context(|| format!("open timing '{}'", path.display()))?;
    let timing =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse timing JSON")?;
    Ok(timing)
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let timing = match &args.timing {
        Some(path) => read_timing(path)?,
        None => kinema::PresetTiming::default(),
    };
    let phase = kinema::Phase::from(args.phase);

    let (animation, mut keyframes) = if args.chart {
        let kind: kinema::ChartPresetKind = args.kind.parse()?;
        let data = (!args.data.is_empty()).then_some(args.data.as_slice());
        kinema::create_chart_animation_with(
            &args.element,
            &args.template,
            phase,
            kind,
            data,
            &timing,
        )
    } else {
        let kind: kinema::PresetKind = args.kind.parse()?;
        kinema::create_default_animation_with(&args.element, &args.template, phase, kind, &timing)
    };
    if args.scale {
        kinema::scale_keyframes(&mut keyframes, animation.duration_ms);
    }

    let mut doc = kinema::Document {
        elements: vec![kinema::Element::new(args.element.as_str())],
        ..Default::default()
    };
    doc.push_animation(animation, keyframes);
    println!("{}", doc.to_json_pretty()?);
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = kinema::Document::from_path(&args.in_path)
        .with_context(|| format!("load document '{}'", args.in_path.display()))?;
    doc.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    println!(
        "ok: {} elements, {} animations, {} keyframes",
        doc.elements.len(),
        doc.animations.len(),
        doc.keyframes.len()
    );
    Ok(())
}
