use clyst_search::catalog::store::ListingStore;
use clyst_search::catalog::types::ListingDraft;
use clyst_search::search::engine::execute_search;
use clyst_search::search::types::{SearchOptions, TokenMode};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --query <text> [--catalog <file.json>] [--limit <n>] [--offset <n>] [--match-any]",
            args[0]
        );
        eprintln!("Example: {} --query \"blue portrait under 2000\"", args[0]);
        eprintln!(
            "Example: {} --query \"minimalist abstracts under ₹5k\" --catalog listings.json --limit 5",
            args[0]
        );

        std::process::exit(1);
    }

    let mut query: Option<String> = None;
    let mut catalog_path: Option<PathBuf> = None;
    let mut options = SearchOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--query" => {
                query = Some(args[i + 1].clone());
                i += 2;
            }
            "--catalog" => {
                catalog_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--limit" => {
                options.limit = args[i + 1].parse()?;
                i += 2;
            }
            "--offset" => {
                options.offset = args[i + 1].parse()?;
                i += 2;
            }
            "--match-any" => {
                options.mode = TokenMode::Any;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    let query = query.expect("--query is required");

    // 1. Catalog:
    let store = ListingStore::new();
    match catalog_path {
        Some(path) => {
            let count = store.load_json_file(&path)?;
            tracing::info!("Catalog loaded from {:?} ({} listings)", path, count);
        }
        None => {
            for draft in sample_listings() {
                store.insert(draft);
            }
            tracing::info!(
                "Using the built-in sample catalog ({} listings)",
                store.len()
            );
        }
    }

    // 2. Search:
    let response = execute_search(&store, &query, &options);

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn sample_listings() -> Vec<ListingDraft> {
    [
        (
            "Monsoon Skies",
            "Aarav Mehta",
            "Moody monsoon landscape in oils, deep blues and greys",
            Some(7500.0),
        ),
        (
            "Minimalist Study in White",
            "Ishita Rao",
            "Minimalist monochrome abstract on stretched canvas",
            Some(4800.0),
        ),
        (
            "Portrait of a Dancer",
            "Kabir Sen",
            "Expressive blue toned portrait in acrylic",
            Some(2000.0),
        ),
        (
            "Terracotta Dreams",
            "Meera Pillai",
            "Warm terracotta abstract with gold leaf accents",
            Some(12000.0),
        ),
        (
            "Street Sketch No. 4",
            "Aarav Mehta",
            "Ink sketch of an old bazaar street",
            Some(950.0),
        ),
        (
            "Untitled (Blue Period)",
            "Ishita Rao",
            "Large format blue abstract, mixed media, price on request",
            None,
        ),
    ]
    .into_iter()
    .map(|(title, artist, description, price)| ListingDraft {
        title: title.to_string(),
        artist: artist.to_string(),
        description: description.to_string(),
        price,
        img_url: None,
    })
    .collect()
}
