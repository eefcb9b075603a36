//! HTTP client for a local Bark inference server.
//!
//! Endpoints (all `POST`, JSON bodies):
//!
//! | path                    | response                       |
//! |-------------------------|--------------------------------|
//! | `/preload`              | empty                          |
//! | `/generate_audio`       | WAV bytes                      |
//! | `/semantic`             | `{"semantic_tokens": [u32]}`   |
//! | `/semantic_to_waveform` | WAV bytes                      |

use std::time::Duration;

use podcaster_domain::{AudioBuffer, VoiceEmbedding, VoiceError, VoicePreset};
use serde::{Deserialize, Serialize};

use super::{SemanticParams, SemanticPrompt, SpeechEngine};
use crate::audio::decode_wav;
use crate::config::EngineConfig;

#[derive(Debug, Serialize)]
struct PreloadRequest {
    use_small_models: bool,
    offload_cpu: bool,
}

#[derive(Debug, Serialize)]
struct GenerateAudioRequest<'a> {
    text: &'a str,
    history_prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct AudioPrompt<'a> {
    samples: &'a [f32],
    sample_rate: u32,
}

#[derive(Debug, Serialize)]
struct SemanticRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_prompt: Option<AudioPrompt<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    semantic_prompt: Option<&'a [u32]>,
    temperature: f32,
    min_eos_p: f32,
}

#[derive(Debug, Deserialize)]
struct SemanticResponse {
    semantic_tokens: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct WaveformRequest<'a> {
    semantic_tokens: &'a [u32],
}

#[derive(Debug, Clone)]
pub struct BarkHttpEngine {
    inner: reqwest::Client,
    base_url: String,
    sample_rate: u32,
    use_small_models: bool,
    offload_cpu: bool,
}

impl BarkHttpEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, VoiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let inner = builder
            .build()
            .map_err(|e| VoiceError::Engine(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sample_rate: config.sample_rate,
            use_small_models: config.use_small_models,
            offload_cpu: config.offload_cpu,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response, VoiceError> {
        let resp = self
            .inner
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| VoiceError::Engine(format!("{path}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(VoiceError::Engine(format!(
                "{path} returned {status}: {}",
                detail.trim()
            )));
        }
        Ok(resp)
    }

    async fn post_for_wav<B: Serialize>(&self, path: &str, body: &B) -> Result<AudioBuffer, VoiceError> {
        let bytes = self
            .post(path, body)
            .await?
            .bytes()
            .await
            .map_err(|e| VoiceError::Engine(format!("{path}: {e}")))?;
        decode_wav(std::io::Cursor::new(bytes))
    }
}

impl SpeechEngine for BarkHttpEngine {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    async fn preload(&self) -> Result<(), VoiceError> {
        tracing::info!(
            url = %self.base_url,
            small_models = self.use_small_models,
            offload_cpu = self.offload_cpu,
            "preloading speech models"
        );
        self.post(
            "preload",
            &PreloadRequest {
                use_small_models: self.use_small_models,
                offload_cpu: self.offload_cpu,
            },
        )
        .await?;
        Ok(())
    }

    async fn generate_audio(
        &self,
        text: &str,
        preset: &VoicePreset,
    ) -> Result<AudioBuffer, VoiceError> {
        self.post_for_wav(
            "generate_audio",
            &GenerateAudioRequest {
                text,
                history_prompt: preset.id(),
            },
        )
        .await
        .map_err(|e| VoiceError::Synthesis(e.to_string()))
    }

    async fn generate_semantic(
        &self,
        text: &str,
        prompt: SemanticPrompt<'_>,
        params: &SemanticParams,
    ) -> Result<VoiceEmbedding, VoiceError> {
        let (audio_prompt, semantic_prompt) = match prompt {
            SemanticPrompt::Audio(sample) => (
                Some(AudioPrompt {
                    samples: sample.samples(),
                    sample_rate: sample.sample_rate(),
                }),
                None,
            ),
            SemanticPrompt::Embedding(embedding) => (None, Some(embedding.tokens())),
        };

        let resp: SemanticResponse = self
            .post(
                "semantic",
                &SemanticRequest {
                    text,
                    audio_prompt,
                    semantic_prompt,
                    temperature: params.temperature,
                    min_eos_p: params.min_eos_p,
                },
            )
            .await?
            .json()
            .await
            .map_err(|e| VoiceError::Embedding(format!("bad semantic response: {e}")))?;

        if resp.semantic_tokens.is_empty() {
            return Err(VoiceError::Embedding("engine returned no semantic tokens".into()));
        }
        Ok(VoiceEmbedding::new(resp.semantic_tokens))
    }

    async fn semantic_to_waveform(
        &self,
        tokens: &VoiceEmbedding,
    ) -> Result<AudioBuffer, VoiceError> {
        self.post_for_wav(
            "semantic_to_waveform",
            &WaveformRequest {
                semantic_tokens: tokens.tokens(),
            },
        )
        .await
        .map_err(|e| VoiceError::Synthesis(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CannedServer, wav_bytes};

    #[test]
    fn semantic_request_with_embedding_omits_audio() {
        let tokens = [1u32, 2, 3];
        let body = SemanticRequest {
            text: "hello",
            audio_prompt: None,
            semantic_prompt: Some(&tokens),
            temperature: 0.7,
            min_eos_p: 0.05,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("audio_prompt").is_none());
        assert_eq!(json["semantic_prompt"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn semantic_request_with_audio_carries_rate() {
        let sample = AudioBuffer::new(vec![0.0, 0.5], 24_000);
        let body = SemanticRequest {
            text: "hello",
            audio_prompt: Some(AudioPrompt {
                samples: sample.samples(),
                sample_rate: sample.sample_rate(),
            }),
            semantic_prompt: None,
            temperature: 0.7,
            min_eos_p: 0.05,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["audio_prompt"]["sample_rate"], 24_000);
        assert!(json.get("semantic_prompt").is_none());
    }

    #[test]
    fn urls_join_cleanly() {
        let config = EngineConfig {
            base_url: "http://localhost:8765/".to_string(),
            ..EngineConfig::default()
        };
        let engine = BarkHttpEngine::new(&config).unwrap();
        assert_eq!(engine.url("/preload"), "http://localhost:8765/preload");
        assert_eq!(engine.sample_rate(), 24_000);
    }

    fn engine_at(url: &str) -> BarkHttpEngine {
        BarkHttpEngine::new(&EngineConfig {
            base_url: url.to_string(),
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn preload_sends_model_flags() {
        let server = CannedServer::json(200, "{}").await;
        engine_at(&server.url).preload().await.unwrap();

        let request = &server.requests()[0];
        assert!(request.starts_with("POST /preload "));
        assert!(request.contains(r#""use_small_models":true"#));
        assert!(request.contains(r#""offload_cpu":false"#));
    }

    #[tokio::test]
    async fn generate_audio_decodes_wav_body() {
        let server = CannedServer::start(200, "audio/wav", wav_bytes(24_000, 480)).await;
        let audio = engine_at(&server.url)
            .generate_audio("Hi there.", &VoicePreset::english_speaker(6))
            .await
            .unwrap();

        assert_eq!(audio.sample_rate(), 24_000);
        assert_eq!(audio.len(), 480);
        let request = &server.requests()[0];
        assert!(request.starts_with("POST /generate_audio "));
        assert!(request.contains(r#""history_prompt":"v2/en_speaker_6""#));
    }

    #[tokio::test]
    async fn generate_audio_error_status_is_synthesis_failure() {
        let server = CannedServer::json(500, r#"{"detail":"CUDA out of memory"}"#).await;
        let err = engine_at(&server.url)
            .generate_audio("Hi there.", &VoicePreset::english_speaker(6))
            .await
            .unwrap_err();

        match err {
            VoiceError::Synthesis(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("CUDA out of memory"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_audio_is_synthesis_failure() {
        let server = CannedServer::start(200, "audio/wav", b"definitely not riff".to_vec()).await;
        let err = engine_at(&server.url)
            .semantic_to_waveform(&VoiceEmbedding::new(vec![1, 2, 3]))
            .await
            .unwrap_err();
        assert!(matches!(err, VoiceError::Synthesis(_)));
    }

    #[tokio::test]
    async fn semantic_tokens_come_back_as_embedding() {
        let server = CannedServer::json(200, r#"{"semantic_tokens":[10,20,30]}"#).await;
        let sample = AudioBuffer::new(vec![0.0; 100], 24_000);
        let embedding = engine_at(&server.url)
            .generate_semantic("Hello", SemanticPrompt::Audio(&sample), &SemanticParams::default())
            .await
            .unwrap();

        assert_eq!(embedding.tokens(), &[10, 20, 30]);
        assert!(server.requests()[0].contains(r#""min_eos_p":0.05"#));
    }

    #[tokio::test]
    async fn empty_semantic_tokens_are_rejected() {
        let server = CannedServer::json(200, r#"{"semantic_tokens":[]}"#).await;
        let embedding = VoiceEmbedding::new(vec![1]);
        let err = engine_at(&server.url)
            .generate_semantic(
                "Hello",
                SemanticPrompt::Embedding(&embedding),
                &SemanticParams::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, VoiceError::Embedding(_)));
    }
}
