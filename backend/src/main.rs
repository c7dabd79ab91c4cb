use backend::{build_rocket, config::StoreSettings, routes::AppState};
use rocket::{routes, fs::NamedFile};
use shuttle_runtime::CustomError;
use std::path::PathBuf;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Serves the embedded frontend, falling back to `index.html` for client routes.
#[rocket::get("/<path..>", rank = 20)]
async fn spa_handler(path: PathBuf, static_root: &rocket::State<PathBuf>) -> Option<NamedFile> {
    if path.starts_with("api") {
        return None;
    }

    let file_path = static_root.join(&path);
    if file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(static_root.join("index.html")).await.ok()
    }
}

fn extract_static_files() -> Result<PathBuf, std::io::Error> {
    let root = std::env::temp_dir().join(format!("miradas_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root)?;
    STATIC_DIR.extract(&root)?;
    Ok(root)
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting Miradas vote server");

    let settings = StoreSettings::from_lookup(|key| {
        secret_store.get(key).or_else(|| std::env::var(key).ok())
    });
    let app_state = AppState::from_settings(settings);

    let static_root = extract_static_files().map_err(CustomError::new)?;
    info!("📦 Frontend extracted to {}", static_root.display());

    let rocket = build_rocket(app_state)
        .manage(static_root)
        .mount("/", routes![spa_handler]);

    Ok(rocket.into())
}
