use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "easekit", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every curve name published by the registry.
    List,
    /// Evaluate a named curve and print `x<TAB>y` lines.
    Eval(EvalArgs),
    /// Plot the reference scene (or a JSON scene) to SVG or PNG.
    Plot(PlotArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Registry name, e.g. `in3`, `inOut`, `inLinearOut`.
    name: String,

    /// Exponent (ease-in exponent for `inLinearOut`).
    #[arg(long)]
    p: Option<f64>,

    /// Ease-out exponent for `inLinearOut`.
    #[arg(long)]
    q: Option<f64>,

    /// Inflection point for `inOut`.
    #[arg(long)]
    i: Option<f64>,

    /// Linear proportion for `inLinearOut`.
    #[arg(long)]
    s: Option<f64>,

    /// Evaluate at this many evenly spaced intervals over [0, 1].
    #[arg(long, conflicts_with = "xs")]
    samples: Option<u32>,

    /// Explicit inputs. Defaults to 10 intervals over [0, 1].
    #[arg(allow_negative_numbers = true)]
    xs: Vec<f64>,
}

#[derive(Parser, Debug)]
struct PlotArgs {
    /// Output path (.svg or .png).
    #[arg(long)]
    out: PathBuf,

    /// Scene description JSON. Uses the reference scene when omitted.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Output format; inferred from the file extension by default.
    #[arg(long, value_enum, default_value_t = FormatChoice::Auto)]
    format: FormatChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Auto,
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Eval(args) => cmd_eval(args),
        Command::Plot(args) => cmd_plot(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list() -> anyhow::Result<()> {
    for (name, curve) in easekit::registry().iter() {
        if curve.is_parametric() {
            println!("{name}\t(parametric)");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let curve = easekit::lookup(&args.name).inspect_err(|_| {
        tracing::warn!(name = %args.name, "rejected unknown curve name");
    })?;

    let defaults = easekit::CurveParams::default();
    let params = easekit::CurveParams {
        p: args.p.unwrap_or(defaults.p),
        q: args.q.unwrap_or(defaults.q),
        i: args.i.unwrap_or(defaults.i),
        s: args.s.unwrap_or(defaults.s),
    };
    let ease = curve.to_ease(&args.name, params)?;
    ease.validate().with_context(|| format!("parameters for '{}'", args.name))?;
    tracing::debug!(%ease, "evaluating");

    let xs: Vec<f64> = if args.xs.is_empty() {
        let n = args.samples.unwrap_or(10).max(1);
        (0..=n).map(|k| f64::from(k) / f64::from(n)).collect()
    } else {
        args.xs
    };

    for x in xs {
        println!("{x}\t{}", curve.eval(x, params));
    }
    Ok(())
}

fn resolve_format(choice: FormatChoice, out: &Path) -> anyhow::Result<FormatChoice> {
    if choice != FormatChoice::Auto {
        return Ok(choice);
    }
    match out.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(FormatChoice::Svg),
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(FormatChoice::Png),
        _ => anyhow::bail!(
            "cannot infer output format from '{}'; pass --format svg|png",
            out.display()
        ),
    }
}

fn cmd_plot(args: PlotArgs) -> anyhow::Result<()> {
    let format = resolve_format(args.format, &args.out)?;

    let spec = match &args.spec {
        Some(path) => easekit::plot::PlotSpec::load(path)?,
        None => easekit::plot::PlotSpec::default(),
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match format {
        FormatChoice::Svg => {
            let svg = easekit::plot::render_svg(&spec, args.width, args.height)?;
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        FormatChoice::Png | FormatChoice::Auto => {
            let rgba = easekit::plot::render_rgba(&spec, args.width, args.height)?;
            easekit::plot::write_png(&args.out, &rgba, args.width, args.height)?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
