//! Option table and invocation plan for the compiler driver.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use packopt::{
    parse, HandlerFailure, HelpPolicy, OptionBuilder, ParserConfig, Registry, UnknownOptionPolicy,
};
use packopt_help::HelpConfig;

/// Everything the command line can set.
#[derive(Debug, Default)]
pub struct DriverOptions {
    pub output: Option<PathBuf>,
    pub opt_level: u8,
    pub warnings: Vec<String>,
    pub include_dirs: Vec<PathBuf>,
    pub defines: Vec<String>,
    pub verbose: u32,
    pub debug_info: bool,
    pub compile_only: bool,
    pub std: Option<String>,
    pub color: bool,
}

/// What the driver would run.
#[derive(Debug)]
pub struct Plan {
    pub options: DriverOptions,
    pub inputs: Vec<String>,
}

impl Plan {
    fn output(&self) -> PathBuf {
        match (&self.options.output, self.inputs.first()) {
            (Some(path), _) => path.clone(),
            (None, Some(input)) if self.options.compile_only => {
                PathBuf::from(input).with_extension("o")
            }
            _ => PathBuf::from("a.out"),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = &self.options;
        let stage = if opts.compile_only { "compile" } else { "build" };
        writeln!(
            f,
            "{} {} -> {}",
            stage,
            self.inputs.join(" "),
            self.output().display()
        )?;
        writeln!(f, "  optimization: -O{}", opts.opt_level)?;
        if let Some(std) = &opts.std {
            writeln!(f, "  standard: {}", std)?;
        }
        if opts.debug_info {
            writeln!(f, "  debug info: on")?;
        }
        if opts.color {
            writeln!(f, "  color diagnostics: on")?;
        }
        for dir in &opts.include_dirs {
            writeln!(f, "  include: {}", dir.display())?;
        }
        for define in &opts.defines {
            writeln!(f, "  define: {}", define)?;
        }
        if !opts.warnings.is_empty() {
            writeln!(f, "  warnings: {}", opts.warnings.join(", "))?;
        }
        write!(f, "  verbosity: {}", opts.verbose)
    }
}

fn parser_config(program: &str) -> ParserConfig {
    let mut config = ParserConfig::new()
        .program_name(program)
        .unknown_policy(UnknownOptionPolicy::ThrowWithLeading)
        .help_policy(HelpPolicy::Exit { code: 0 });
    config.help_renderer = Some(packopt_help::renderer(
        HelpConfig::new().about("Pretend to compile C sources, printing what would run."),
    ));
    config
}

/// Parses `args` (program name excluded) into a [`Plan`].
pub fn plan(program: &str, args: &[String]) -> Result<Plan> {
    plan_with(parser_config(program), args)
}

fn plan_with(config: ParserConfig, args: &[String]) -> Result<Plan> {
    let mut options = DriverOptions::default();
    let inputs: Vec<String> = {
        let output = &mut options.output;
        let opt_level = &mut options.opt_level;
        let registry = Registry::with_config(
            [
                OptionBuilder::new('o')
                    .with_alias("output")
                    .with_help("Place the output into FILE")
                    .call(move |path: PathBuf| {
                        *output = Some(path);
                        Ok(())
                    }),
                OptionBuilder::new('O')
                    .with_help("Optimization level, 0 to 3")
                    .call(move |level: u8| {
                        if level > 3 {
                            return Err(HandlerFailure::new("optimization level must be 0 to 3"));
                        }
                        *opt_level = level;
                        Ok(())
                    }),
                OptionBuilder::new('W')
                    .with_help("Enable the named warning")
                    .append(&mut options.warnings),
                OptionBuilder::new('I')
                    .with_alias("include")
                    .with_help("Add DIR to the include search path")
                    .append(&mut options.include_dirs),
                OptionBuilder::new('D')
                    .with_help("Define a preprocessor macro")
                    .append(&mut options.defines),
                OptionBuilder::new('v')
                    .with_alias("verbose")
                    .with_help("Increase verbosity")
                    .accumulate(&mut options.verbose),
                OptionBuilder::new('g')
                    .with_help("Emit debug information")
                    .store(&mut options.debug_info),
                OptionBuilder::new('c')
                    .with_help("Compile only, do not link")
                    .store(&mut options.compile_only),
                OptionBuilder::new("std")
                    .with_help("Language standard")
                    .call(|standard: String| {
                        options.std = Some(standard);
                        Ok(())
                    }),
                OptionBuilder::new("color")
                    .with_help("Colorize diagnostics")
                    .store(&mut options.color),
            ],
            config,
        )
        .context("invalid option table")?;

        let operands = parse(&registry, args)?;
        operands.into_iter().map(String::from).collect()
    };

    if inputs.is_empty() {
        bail!("no input files");
    }
    tracing::info!(inputs = inputs.len(), verbose = options.verbose, "parsed command line");
    Ok(Plan { options, inputs })
}
