use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::models::{ArtifactFormat, Notice};
use crate::utils::{encode_artifact, probe_encoders, render_icon, sha256_hex, write_artifact};
use crossbeam_channel::Sender;
use std::fs;
use tracing::{debug, info, warn};

/// Draws the icon and writes both artifacts, sending a notice after each write.
pub fn generate(config: &GeneratorConfig, tx: &Sender<Notice>) -> Result<(), IconError> {
    generate_with_probe(config, tx, probe_encoders)
}

/// Same as [`generate`], with the capability check supplied by the caller.
/// The probe runs before anything is drawn or created on disk.
pub fn generate_with_probe<P>(
    config: &GeneratorConfig,
    tx: &Sender<Notice>,
    probe: P,
) -> Result<(), IconError>
where
    P: FnOnce() -> Result<(), IconError>,
{
    probe()?;

    let canvas = render_icon();
    debug!(width = canvas.width(), height = canvas.height(), "icon drawn");

    fs::create_dir_all(&config.out_dir).map_err(|e| IconError::io(&config.out_dir, e))?;

    let artifacts = [
        (ArtifactFormat::Ico, config.ico_path()),
        (ArtifactFormat::Png, config.png_path()),
    ];
    for (format, path) in artifacts {
        let bytes = encode_artifact(&canvas, format)?;
        write_artifact(&path, &bytes)?;

        let sha256 = sha256_hex(&bytes);
        info!(path = %path.display(), bytes = bytes.len(), %sha256, "artifact written");
        let notice = Notice::Written {
            path,
            bytes: bytes.len() as u64,
            sha256,
        };
        if tx.send(notice).is_err() {
            warn!("notice receiver dropped");
        }
    }
    Ok(())
}

/// Runs the generator and reports the outcome as notices instead of an error.
/// This is the top-level boundary: nothing escapes it.
pub fn run(config: &GeneratorConfig, tx: &Sender<Notice>) {
    run_with_probe(config, tx, probe_encoders)
}

/// Same as [`run`], with the capability check supplied by the caller.
pub fn run_with_probe<P>(config: &GeneratorConfig, tx: &Sender<Notice>, probe: P)
where
    P: FnOnce() -> Result<(), IconError>,
{
    if let Err(e) = generate_with_probe(config, tx, probe) {
        report_failure(&e, tx);
    }
}

fn report_failure(error: &IconError, tx: &Sender<Notice>) {
    if error.is_missing_dependency() {
        warn!(%error, "raster toolkit incomplete");
    } else {
        warn!(%error, "icon generation failed");
    }
    if tx.send(error.to_notice()).is_err() {
        warn!("notice receiver dropped");
    }
}
