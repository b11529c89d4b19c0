use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::phrases::{self, ANNOUNCEMENTS, CLINICS};
use crate::tts::Synthesizer;

/// Creates the output directory if it is missing and returns the path.
/// Safe to call before every generator; an existing directory is left alone.
pub fn ensure_output_dir(dir: &str) -> anyhow::Result<PathBuf> {
    let path = PathBuf::from(dir);
    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create output directory {}", path.display()))?;
    Ok(path)
}

async fn write_clip(synth: &dyn Synthesizer, text: &str, out_path: &Path) -> anyhow::Result<()> {
    let audio = synth
        .synthesize(text)
        .await
        .with_context(|| format!("TTS synthesis failed for {}", out_path.display()))?;
    fs::write(out_path, &audio)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    info!("Generated: {}", out_path.display());
    Ok(())
}

/// Call-out clips for queue numbers 1..=max_number, saved as `{i}.mp3`.
/// Fail-fast: the first failed item aborts the rest of the batch.
pub async fn generate_number_clips(
    synth: &dyn Synthesizer,
    dir: &str,
    max_number: u32,
) -> anyhow::Result<()> {
    let dir = ensure_output_dir(dir)?;
    info!("Generating number audio files (1..={})", max_number);
    for i in 1..=max_number {
        let out_path = dir.join(format!("{}.mp3", i));
        if let Err(e) = write_clip(synth, &phrases::number_phrase(i), &out_path).await {
            error!("Failed on number clip {}: {:?}", i, e);
            return Err(e);
        }
    }
    info!("Number audio files generated successfully");
    Ok(())
}

/// Clinic-direction clips, saved as `clinic{id}.mp3` in ascending id order.
pub async fn generate_clinic_clips(synth: &dyn Synthesizer, dir: &str) -> anyhow::Result<()> {
    let dir = ensure_output_dir(dir)?;
    info!("Generating clinic audio files ({} clinics)", CLINICS.len());
    for (id, text) in CLINICS {
        let out_path = dir.join(format!("clinic{}.mp3", id));
        if let Err(e) = write_clip(synth, text, &out_path).await {
            error!("Failed on clinic clip {}: {:?}", id, e);
            return Err(e);
        }
    }
    info!("Clinic audio files generated successfully");
    Ok(())
}

/// Waiting-room announcement clips, saved as `instant{pos}.mp3` with
/// 1-based positions in list order.
pub async fn generate_announcement_clips(synth: &dyn Synthesizer, dir: &str) -> anyhow::Result<()> {
    let dir = ensure_output_dir(dir)?;
    info!(
        "Generating announcement audio files ({} messages)",
        ANNOUNCEMENTS.len()
    );
    for (i, text) in ANNOUNCEMENTS.iter().enumerate() {
        let pos = i + 1;
        let out_path = dir.join(format!("instant{}.mp3", pos));
        if let Err(e) = write_clip(synth, text, &out_path).await {
            error!("Failed on announcement clip {}: {:?}", pos, e);
            return Err(e);
        }
    }
    info!("Announcement audio files generated successfully");
    Ok(())
}

/// The full batch in strict order. Fail-fast across generators too: the
/// first failed clip skips every later step, including the chime notice.
pub async fn run_batch(synth: &dyn Synthesizer, dir: &str, max_number: u32) -> anyhow::Result<()> {
    generate_number_clips(synth, dir, max_number).await?;
    generate_clinic_clips(synth, dir).await?;
    generate_announcement_clips(synth, dir).await?;
    crate::chime::chime_notice();
    Ok(())
}
