use std::io::Write as _;

use anyhow::Context as _;
use clap::Parser as _;
use clap_verbosity_flag::{
    InfoLevel,
    Verbosity,
};
use ori_wrap::{
    Layout,
    RenderContext,
    Stream,
};
use yansi::Paint as _;

const LOREM: &str = include_str!("../sample_text/lorem.txt");
const FROST: &str = include_str!("../sample_text/frost.txt");

#[derive(clap::Parser)]
#[command(name = "ori", version, about)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// The indent of every printed line, in columns.
    indent: u16,

    /// The number of columns to keep free at the right edge of the terminal.
    #[arg(default_value_t = 0)]
    right_padding: u16,

    /// Whether words that have to be cut get a trailing hyphen.
    #[arg(default_value = "0", value_parser = parse_flag, action = clap::ArgAction::Set)]
    hyphenate_cutoffs: bool,

    /// Print to standard error instead of standard output.
    #[arg(long)]
    stderr: bool,

    /// The sample text to print before the cut-off demonstration.
    #[arg(long, short, value_enum, default_value_t = Sample::All)]
    sample: Sample,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Sample {
    Lorem,
    Frost,
    All,
    None,
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(format!("expected 0, 1, true or false, got '{value}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    yansi::whenever(yansi::Condition::TTY_AND_COLOR);

    // Trying to imitate clap to get a consistent experience.
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .format(|buffer, record| {
            let level = match record.level() {
                log::Level::Error => "error:".red().bold(),
                log::Level::Warn => "warn:".yellow().bold(),
                log::Level::Info => "info:".green().bold(),
                log::Level::Debug => "debug:".blue().bold(),
                log::Level::Trace => "trace:".cyan().bold(),
            };

            writeln!(buffer, "{level} {arguments}", arguments = record.args())
        })
        .init();

    let stream = if cli.stderr { Stream::Stderr } else { Stream::Stdout };
    let layout = Layout::default().right_padding(cli.right_padding);

    let mut context = RenderContext::new();
    context.set_indent(cli.indent);

    log::debug!(
        "printing to {stream} with indent {indent} and right padding {right_padding}",
        indent = cli.indent,
        right_padding = cli.right_padding,
    );

    let samples = match cli.sample {
        Sample::Lorem => &[LOREM][..],
        Sample::Frost => &[FROST][..],
        Sample::All => &[LOREM, FROST][..],
        Sample::None => &[][..],
    };

    demo(&mut context, stream, layout, samples, cli.hyphenate_cutoffs)
}

fn demo(
    context: &mut RenderContext,
    stream: Stream,
    layout: Layout,
    samples: &[&str],
    hyphenate_cutoffs: bool,
) -> anyhow::Result<()> {
    for sample in samples {
        context
            .println_to(stream, sample.trim_end(), layout)
            .context("failed to print sample text")?;
        context
            .blank_line(stream)
            .context("failed to separate sample texts")?;
    }

    context
        .print_to(stream, "foo ", layout)
        .context("failed to print cut-off demonstration")?;
    context
        .print_to(
            stream,
            format!("{}\n", "bar".repeat(32)),
            layout.hyphenate(hyphenate_cutoffs),
        )
        .context("failed to print cut-off demonstration")?;
    context
        .print_to(stream, "baz (on newline)\n", layout)
        .context("failed to print cut-off demonstration")?;

    Ok(())
}
