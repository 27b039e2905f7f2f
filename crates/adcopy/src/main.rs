use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use adcopy::{
    CaptionGenerator, Settings,
    config::load_env_file,
    form::CaptionForm,
    openai::OpenAiAdapter,
    present::{render_banner, render_prompt, render_result},
    types::{CaptionRequest, fragments::build_prompt},
};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "adcopy",
    version,
    about = "Generate on-brand Meta ad captions with GPT-4o",
    long_about = "Collects a short product brief (brand, hook, CTA keywords and four USPs with \
                  emojis), turns it into a strict caption-format instruction and asks GPT-4o \
                  for three caption variants.\n\nRequires OPENAI_API_KEY in the environment \
                  or in a .env file."
)]
struct Cli {
    /// Brand and product name
    #[arg(long)]
    product: Option<String>,

    /// Opening hook, conventionally ending with ☕
    #[arg(long)]
    hook: Option<String>,

    /// Call-to-action keywords
    #[arg(long)]
    cta: Option<String>,

    #[arg(long)]
    usp1: Option<String>,
    #[arg(long)]
    emoji1: Option<String>,
    #[arg(long)]
    usp2: Option<String>,
    #[arg(long)]
    emoji2: Option<String>,
    #[arg(long)]
    usp3: Option<String>,
    #[arg(long)]
    emoji3: Option<String>,
    #[arg(long)]
    usp4: Option<String>,
    #[arg(long)]
    emoji4: Option<String>,

    /// Read the brief from a JSON file; individual flags override its fields
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,

    /// Skip the form: generate once from flags and exit
    #[arg(long)]
    batch: bool,

    /// Print the instruction sent to the model
    #[arg(long)]
    show_prompt: bool,

    /// Print the instruction and exit without calling the API
    #[arg(long, conflicts_with = "batch")]
    dry_run: bool,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// The brief the form starts from (or, in batch mode, the brief sent).
    fn initial_request(&self) -> Result<CaptionRequest> {
        let mut request = match &self.request {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("{} is not a valid caption brief", path.display()))?
            }
            None => CaptionRequest::default(),
        };

        let overrides = [
            (&self.product, &mut request.product_name),
            (&self.hook, &mut request.hook),
            (&self.cta, &mut request.cta_keywords),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                field.clone_from(value);
            }
        }

        let usp_flags = [
            (&self.usp1, &self.emoji1),
            (&self.usp2, &self.emoji2),
            (&self.usp3, &self.emoji3),
            (&self.usp4, &self.emoji4),
        ];
        for (usp, (text, emoji)) in request.usps.iter_mut().zip(usp_flags) {
            if let Some(text) = text {
                usp.text.clone_from(text);
            }
            if let Some(emoji) = emoji {
                usp.emoji.clone_from(emoji);
            }
        }

        Ok(request)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Before tracing so RUST_LOG may come from the file.
    let env_file = load_env_file(cli.env_file.as_deref())?;
    init_tracing(cli.verbose);
    if let Some(path) = env_file {
        debug!(path = %path.display(), "loaded environment file");
    }

    let request = cli.initial_request()?;

    if cli.dry_run {
        render_prompt(&build_prompt(&request), &mut io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", style(err).red().bold());
            return Ok(ExitCode::FAILURE);
        }
    };
    let generator = CaptionGenerator::new(settings.backend()?);
    info!(base_url = generator.backend().base_url(), "backend ready");

    if cli.batch {
        run_batch(&generator, &request, cli.show_prompt).await
    } else {
        run_interactive(&generator, request, cli.show_prompt).await
    }
}

async fn run_batch(
    generator: &CaptionGenerator<OpenAiAdapter>,
    request: &CaptionRequest,
    show_prompt: bool,
) -> Result<ExitCode> {
    if show_prompt {
        render_prompt(&build_prompt(request), &mut io::stderr())?;
    }

    let result = generator.generate(request).await;
    if result.is_error() {
        render_result(&result, &mut io::stderr())?;
        return Ok(ExitCode::FAILURE);
    }

    render_result(&result, &mut io::stdout())?;
    Ok(ExitCode::SUCCESS)
}

async fn run_interactive(
    generator: &CaptionGenerator<OpenAiAdapter>,
    mut request: CaptionRequest,
    show_prompt: bool,
) -> Result<ExitCode> {
    let mut stdout = io::stdout();
    render_banner(&mut stdout)?;

    let form = CaptionForm::new();
    loop {
        request = form.collect(&request)?;

        if form.confirm_generate()? {
            if show_prompt {
                render_prompt(&build_prompt(&request), &mut stdout)?;
            }
            writeln!(stdout, "{}", style("Generating captions…").dim())?;

            let result = generator.generate(&request).await;
            writeln!(stdout)?;
            render_result(&result, &mut stdout)?;
            writeln!(stdout)?;
        }

        if !form.confirm_again()? {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
