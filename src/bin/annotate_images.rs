use clap::Parser;
use pincode_catalog::app::pipelines::image_pipeline::default_image_urls;
use pincode_catalog::utils::error::Result;
use pincode_catalog::utils::{logger, validation};
use pincode_catalog::{EtlEngine, ImageAnnotationPipeline, LocalStorage};

#[derive(Parser, Debug)]
#[command(name = "annotate-images")]
#[command(about = "Attach a random product image URL to every product in a data file")]
struct Args {
    /// Products file to read
    #[arg(short, long, default_value = "data.json")]
    input: String,

    /// Where to write the annotated file
    #[arg(short, long, default_value = "data_with_images.json")]
    output: String,

    /// Candidate image URL; repeat to replace the built-in list
    #[arg(long = "image-url")]
    image_urls: Vec<String>,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn candidate_urls(&self) -> Result<Vec<String>> {
        if self.image_urls.is_empty() {
            return Ok(default_image_urls());
        }
        for url in &self.image_urls {
            validation::validate_url("image-url", url)?;
        }
        Ok(self.image_urls.clone())
    }
}

async fn run(args: &Args) -> Result<String> {
    validation::validate_path("input", &args.input)?;
    validation::validate_path("output", &args.output)?;

    let pipeline = ImageAnnotationPipeline::new(
        LocalStorage::default(),
        args.input.clone(),
        args.output.clone(),
        args.candidate_urls()?,
    )?
    .with_seed(args.seed);

    EtlEngine::new(pipeline).run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    match run(&args).await {
        Ok(output_path) => {
            println!("Successfully added product images and saved to {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Annotation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    }
}
