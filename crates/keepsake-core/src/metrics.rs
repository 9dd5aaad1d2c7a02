//! Usage metrics collection for pipeline activity.

use parking_lot::Mutex;

/// One usage sample emitted by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsageMetrics {
    /// Prompt tokens consumed by the LLM.
    pub llm_prompt_tokens: u64,
    /// Completion tokens produced by the LLM.
    pub llm_completion_tokens: u64,
    /// Characters synthesized by TTS.
    pub tts_characters: u64,
    /// Seconds of audio transcribed by STT.
    pub stt_audio_seconds: f64,
}

/// Sink interface for pipeline usage samples.
pub trait MetricsSink: Send + Sync {
    /// Record one usage sample.
    fn collect(&self, sample: &UsageMetrics);
}

/// Accumulates usage samples across a session.
#[derive(Debug, Default)]
pub struct UsageCollector {
    totals: Mutex<UsageMetrics>,
}

impl UsageCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the accumulated totals.
    pub fn summary(&self) -> UsageMetrics {
        *self.totals.lock()
    }
}

impl MetricsSink for UsageCollector {
    fn collect(&self, sample: &UsageMetrics) {
        let mut totals = self.totals.lock();
        totals.llm_prompt_tokens += sample.llm_prompt_tokens;
        totals.llm_completion_tokens += sample.llm_completion_tokens;
        totals.tts_characters += sample.tts_characters;
        totals.stt_audio_seconds += sample.stt_audio_seconds;
    }
}
