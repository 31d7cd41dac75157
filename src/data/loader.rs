use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{Context, Result, bail};
use eframe::egui;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a local file.  Only `.json` is understood.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_dataset(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Fetch the dataset with a single blocking GET.
pub fn fetch_url(url: &str) -> Result<Dataset> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status from {url}"))?;
    let text = response.text().context("reading response body")?;
    parse_dataset(&text)
}

/// Run [`fetch_url`] on a background thread.
///
/// The single result arrives on the returned channel; `ctx` is asked to
/// repaint once it has been sent so the UI thread picks it up promptly.
pub fn spawn_fetch(url: String, ctx: egui::Context) -> Receiver<Result<Dataset>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        log::info!("Fetching dataset from {url}");
        let result = fetch_url(&url);
        // The receiver only disappears when the app is shutting down.
        let _ = tx.send(result);
        ctx.request_repaint();
    });
    rx
}

// ---------------------------------------------------------------------------
// JSON parsing
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "baseTemperature": 8.66,
///   "monthlyVariance": [
///     { "year": 1753, "month": 1, "variance": -1.366 },
///     ...
///   ]
/// }
/// ```
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(text).context("parsing JSON")?;
    dataset.validate().context("validating dataset")?;
    Ok(dataset)
}
