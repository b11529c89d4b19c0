use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use tracing::debug;

const TRANSLATE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// A text-to-speech backend producing MP3 bytes for a phrase.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> anyhow::Result<Vec<u8>>;
}

/// Google Translate's TTS endpoint, the same service gTTS wraps.
/// Unauthenticated, no retry; a non-2xx status or transport error fails the
/// call outright.
pub struct GoogleTts {
    client: reqwest::Client,
    lang: String,
}

impl GoogleTts {
    pub fn new(lang: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            lang: lang.to_string(),
        }
    }
}

#[async_trait]
impl Synthesizer for GoogleTts {
    async fn synthesize(&self, text: &str) -> anyhow::Result<Vec<u8>> {
        debug!("Requesting TTS ({} chars): {}", text.chars().count(), text);
        let bytes = self
            .client
            .get(TRANSLATE_TTS_URL)
            .header(USER_AGENT, "Mozilla/5.0 (X11; Linux x86_64)")
            .query(&[
                ("ie", "UTF-8"),
                ("tl", self.lang.as_str()),
                ("client", "tw-ob"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
