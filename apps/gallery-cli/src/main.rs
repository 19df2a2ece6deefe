mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokedex_gallery::{CatalogSource, GalleryView, ViewState, render_page};
use pokedex_pokeapi::Client;

use config::GalleryConfig;

/// Renders a gallery of Pokemon cards from PokeAPI to an HTML page.
#[derive(Debug, Parser)]
#[command(name = "pokedex-gallery", version, about)]
struct Args {
    /// Config file (defaults to ~/.config/pokedex-gallery/config.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// PokeAPI base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// First catalog entry to show.
    #[arg(long)]
    offset: Option<u32>,

    /// Number of entries to show.
    #[arg(long)]
    limit: Option<u32>,

    /// Write the page here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    /// Applies command-line overrides on top of the file configuration.
    fn apply(self, mut cfg: GalleryConfig) -> GalleryConfig {
        if let Some(url) = self.base_url {
            cfg.base_url = url;
        }
        if let Some(offset) = self.offset {
            cfg.offset = offset;
        }
        if let Some(limit) = self.limit {
            cfg.limit = limit;
        }
        if let Some(output) = self.output {
            cfg.output = output.to_string_lossy().into_owned();
        }
        cfg
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pokedex=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let file_cfg = match &args.config {
        Some(path) => GalleryConfig::load_from(path)?,
        None => GalleryConfig::load()?,
    };
    let cfg = args.apply(file_cfg);

    let client = Client::new()
        .context("failed to build HTTP client")?
        .with_base_url(&cfg.base_url);
    tracing::info!(base_url = %client.base_url(), "using catalog");

    run(&cfg, Arc::new(client)).await
}

/// Loads the gallery from `source` and writes the rendered page.
///
/// The page is written whatever the outcome; the exit code reports whether
/// the load succeeded.
async fn run(cfg: &GalleryConfig, source: Arc<dyn CatalogSource>) -> anyhow::Result<ExitCode> {
    tracing::info!(offset = cfg.offset, limit = cfg.limit, "loading gallery");

    let view = GalleryView::mount(source, cfg.page_request());
    let state = tokio::select! {
        state = view.settled() => state,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, cancelling load");
            view.unmount();
            return Ok(ExitCode::from(130));
        }
    };

    write_page(cfg.output_path().as_deref(), &state)?;

    Ok(match state {
        ViewState::Loaded(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Renders `state` to `path`, or to stdout when no path is configured.
fn write_page(path: Option<&Path>, state: &ViewState) -> anyhow::Result<()> {
    let html = render_page(state)?;
    match path {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "gallery written");
        }
        None => println!("{html}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_gallery::loader::CatalogFuture;
    use pokedex_pokeapi::{Error as CatalogError, NamedResource, Pokemon, PokemonPage};

    /// In-memory catalog; detail lookups for `failing` answer 500.
    struct FixedCatalog {
        entries: Vec<Pokemon>,
        failing: Option<&'static str>,
    }

    impl FixedCatalog {
        fn new(entries: &[(u32, &str, &str)], failing: Option<&'static str>) -> Self {
            let entries = entries
                .iter()
                .map(|(id, name, kind)| {
                    serde_json::from_value(serde_json::json!({
                        "id": id,
                        "name": name,
                        "sprites": {"other": {"official-artwork": {
                            "front_default": format!("https://img.example/{id}.png")
                        }}},
                        "types": [{"slot": 1, "type": {"name": kind, "url": ""}}],
                    }))
                    .unwrap()
                })
                .collect();
            Self { entries, failing }
        }
    }

    impl CatalogSource for FixedCatalog {
        fn list_pokemons(&self, offset: u32, limit: u32) -> CatalogFuture<'_, PokemonPage> {
            let results = self
                .entries
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .map(|p| NamedResource {
                    name: p.name.clone(),
                    url: String::new(),
                })
                .collect();
            Box::pin(async move {
                Ok(PokemonPage {
                    results,
                    ..Default::default()
                })
            })
        }

        fn get_pokemon_by_name<'a>(&'a self, name: &'a str) -> CatalogFuture<'a, Pokemon> {
            Box::pin(async move {
                if self.failing == Some(name) {
                    return Err(CatalogError::Api {
                        status: 500,
                        body: "unavailable".into(),
                    });
                }
                self.entries
                    .iter()
                    .find(|p| p.name == name)
                    .cloned()
                    .ok_or_else(|| CatalogError::Api {
                        status: 404,
                        body: "Not Found".into(),
                    })
            })
        }
    }

    const KANTO: [(u32, &str, &str); 2] = [(25, "pikachu", "electric"), (151, "mew", "psychic")];

    fn output_config(path: &Path) -> GalleryConfig {
        GalleryConfig {
            output: path.to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[tokio::test]
    async fn loaded_gallery_is_written_and_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gallery.html");
        let source = Arc::new(FixedCatalog::new(&KANTO, None));

        let code = run(&output_config(&path), source).await.unwrap();

        assert!(same_code(code, ExitCode::SUCCESS), "{code:?}");
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(">Pikachu<"));
        assert!(html.contains(">Mew<"));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[tokio::test]
    async fn failed_load_still_writes_page_and_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gallery.html");
        let source = Arc::new(FixedCatalog::new(&KANTO, Some("mew")));

        let code = run(&output_config(&path), source).await.unwrap();

        assert!(same_code(code, ExitCode::FAILURE), "{code:?}");
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(r#"role="alert""#), "{html}");
        assert!(html.contains("mew"), "{html}");
        assert!(!html.contains("#25"), "{html}");
    }

    #[test]
    fn write_page_reports_unwritable_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("gallery.html");

        let err = write_page(Some(&path), &ViewState::Loading).unwrap_err();
        assert!(err.to_string().contains("failed to write"), "{err}");
    }

    #[test]
    fn args_override_file_config() {
        let args = Args::parse_from([
            "pokedex-gallery",
            "--base-url",
            "http://localhost:9000/api/v2",
            "--limit",
            "12",
            "-o",
            "out.html",
        ]);
        let cfg = args.apply(GalleryConfig {
            offset: 3,
            ..Default::default()
        });
        assert_eq!(cfg.base_url, "http://localhost:9000/api/v2");
        assert_eq!(cfg.offset, 3);
        assert_eq!(cfg.limit, 12);
        assert_eq!(cfg.output_path(), Some(PathBuf::from("out.html")));
    }

    #[test]
    fn no_args_keep_file_config() {
        let args = Args::parse_from(["pokedex-gallery"]);
        let cfg = args.apply(GalleryConfig::default());
        assert_eq!(cfg, GalleryConfig::default());
    }
}
