use serde::Deserialize;
use synthmon_core::error::{Result, SynthmonError};
use synthmon_core::metric::VALUE_BOUND;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub sampling: SamplingSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            sampling: SamplingSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SynthmonError::Config("version must be 1".into()));
        }
        self.sampling.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingSection {
    /// Delay between samples on each stream.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Un-consumed samples buffered per stream before the generator
    /// suspends.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Exclusive upper bound for generated samples.
    #[serde(default = "default_value_bound")]
    pub value_bound: u64,
}

impl Default for SamplingSection {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            queue_capacity: default_queue_capacity(),
            value_bound: default_value_bound(),
        }
    }
}

impl SamplingSection {
    pub fn validate(&self) -> Result<()> {
        if !(10..=60_000).contains(&self.tick_ms) {
            return Err(SynthmonError::Config(
                "sampling.tick_ms must be between 10 and 60000".into(),
            ));
        }
        if !(1..=1024).contains(&self.queue_capacity) {
            return Err(SynthmonError::Config(
                "sampling.queue_capacity must be between 1 and 1024".into(),
            ));
        }
        if self.value_bound == 0 {
            return Err(SynthmonError::Config(
                "sampling.value_bound must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_tick_ms() -> u64 {
    1000
}
fn default_queue_capacity() -> usize {
    10
}
fn default_value_bound() -> u64 {
    VALUE_BOUND
}
