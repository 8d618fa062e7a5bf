//! pkg-scaffold's application entry point.
//! Parses the command line, wires the real capabilities into the generator
//! and reports the outcome.

use std::time::Instant;

use pkg_scaffold::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    fs::LocalFileSystem,
    generator::Generator,
    installer::CommandInstaller,
    logger::init_logger,
};

/// Main application entry point.
#[tokio::main]
async fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

/// Main application logic execution.
async fn run(args: Args) -> Result<()> {
    let started = Instant::now();

    let source = args.template_source();
    log::debug!("Using {source}");
    let templates = source.open();
    let installer = CommandInstaller::default();
    let generator = Generator::new(&*templates, &LocalFileSystem, &installer);

    let cwd = std::env::current_dir().map_err(|e| Error::write(".", e))?;
    let project_dir = generator.generate(&cwd, &args.project_input()).await?;

    println!("Finished! Project created in {}.", project_dir.display());
    println!("time used: {:.2?}", started.elapsed());
    Ok(())
}
