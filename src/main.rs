use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use shade_family::{Family, FamilyKey};
use shades::api;
use shades::models::AppConfig;
use shades::server;
use shades::services::SwatchPage;

#[derive(Parser)]
#[command(name = "shades")]
#[command(about = "Classify colors into families and generate random shades")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print random shades of a family
    Random {
        /// Family name (case-insensitive), defaults to ALL
        #[arg(short, long)]
        family: Option<String>,

        /// Seed for a reproducible sequence
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of shades to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
    /// Print the family a color belongs to
    Find {
        /// Hex color, e.g. "#e58677"
        color: String,
    },
    /// Print the digit-wise inverse of a color
    Invert {
        /// Hex color, e.g. "#19547A"
        color: String,
    },
    /// List all family names
    List,
    /// Render the swatch page to an HTML file
    Page {
        /// Output HTML file path
        #[arg(short, long)]
        output: PathBuf,

        /// Seed for a reproducible page
        #[arg(short, long)]
        seed: Option<u64>,

        /// Swatches per family
        #[arg(short, long, default_value_t = shades::models::DEFAULT_SWATCHES)]
        count: usize,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shades API",
        description = "Classify colors into families and generate random shades",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_family_list,
        api::handle_family_find,
        api::handle_random,
        api::handle_random_family,
        api::handle_invert,
        api::handle_swatches,
    ),
    components(schemas(api::ColorForm)),
    tags(
        (name = "Family", description = "Color family lookup"),
        (name = "Random", description = "Random shade generation"),
        (name = "Color", description = "Color utilities")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Random {
            family,
            seed,
            count,
        }) => run_random_command(family.as_deref(), seed, count),
        Some(Commands::Find { color }) => run_find_command(&color),
        Some(Commands::Invert { color }) => run_invert_command(&color),
        Some(Commands::List) => {
            for key in shade_family::list() {
                println!("{key}");
            }
            Ok(())
        }
        Some(Commands::Page {
            output,
            seed,
            count,
        }) => run_page_command(&output, seed, count),
        None => run_demo_command(),
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shades=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Print one random shade of red
fn run_demo_command() -> anyhow::Result<()> {
    init_cli_logging();

    let shade = Family::new("RED")
        .map_err(|e| anyhow::anyhow!("could not get color family: {e}"))?;
    let color = shade.random(&mut make_rng(None));

    println!("color: {color}");
    Ok(())
}

fn run_random_command(family: Option<&str>, seed: Option<u64>, count: usize) -> anyhow::Result<()> {
    init_cli_logging();

    let key = match family {
        Some(name) => name
            .parse::<FamilyKey>()
            .map_err(|e| anyhow::anyhow!("could not get color family: {e}"))?,
        None => FamilyKey::default(),
    };
    let family = key.family();
    let mut rng = make_rng(seed);

    tracing::debug!(family = %key, ?seed, count, "Generating shades");
    for _ in 0..count {
        println!("{}", family.random(&mut rng));
    }
    Ok(())
}

fn run_find_command(color: &str) -> anyhow::Result<()> {
    init_cli_logging();

    let color = color.to_uppercase();
    match shade_family::find_family(&color) {
        Some(key) => {
            println!("{key}");
            Ok(())
        }
        None if shade_family::is_grayscale(&color) => {
            anyhow::bail!("{}", shades::error::ApiError::Grayscale)
        }
        None => anyhow::bail!("{}", shades::error::ApiError::InvalidColor),
    }
}

fn run_invert_command(color: &str) -> anyhow::Result<()> {
    init_cli_logging();

    let inverted = shade_family::invert(color)
        .map_err(|e| anyhow::anyhow!("could not invert {color:?}: {e}"))?;
    println!("{inverted}");
    Ok(())
}

/// Render the swatch page to a file (no server needed)
fn run_page_command(output: &Path, seed: Option<u64>, count: usize) -> anyhow::Result<()> {
    init_cli_logging();

    let page = SwatchPage::new()?;
    let bytes = page.write_to(output, &mut make_rng(seed), count)?;
    println!("Rendered {} ({} bytes)", output.display(), bytes);
    Ok(())
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shades=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let state = server::create_app_state(&config)?;

    let app = server::build_router(state)
        // OpenAPI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        seeded = config.seed.is_some(),
        swatches = config.swatches,
        "Shades server listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
