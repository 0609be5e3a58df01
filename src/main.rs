use clap::Parser;
use form_autofill::cli::commands::{PageSource, cmd_detect, cmd_fill, cmd_serve};
use form_autofill::cli::config::{Cli, Commands, load_config, resolve_settings, resolve_trace_path};
use form_autofill::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let tracer = match resolve_trace_path(&config, cli.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Detect { page, url } => {
            let source = PageSource::from_args(page, url)?;
            cmd_detect(&source, cli.verbose)?;
        }
        Commands::Fill {
            page,
            url,
            out,
            fill_empty_only,
            skip_passwords,
            visual_feedback,
            fill_dropdowns,
        } => {
            let source = PageSource::from_args(page, url)?;
            let settings = resolve_settings(
                &config,
                fill_empty_only,
                skip_passwords,
                visual_feedback,
                fill_dropdowns,
            );
            cmd_fill(&source, &settings, cli.seed, out.as_deref(), &tracer, cli.verbose)?;
        }
        Commands::Serve { page } => {
            cmd_serve(&page, cli.seed, tracer, cli.verbose)?;
        }
    }

    Ok(())
}
