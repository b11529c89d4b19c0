use tracing::{info, warn};

/// Deliberate stub: probes the default audio output but never synthesizes or
/// writes a chime file. The real ding sound has to be supplied externally.
/// Device-init failure is absorbed here so the batch keeps going.
pub fn chime_notice() {
    match rodio::OutputStreamBuilder::open_default_stream() {
        Ok(_stream) => {
            info!("Audio output available; chime sound must still be supplied externally");
        }
        Err(e) => {
            warn!("Could not initialize audio output for chime check: {}", e);
            info!("Chime sound must be supplied externally");
        }
    }
}
