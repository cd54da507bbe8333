use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "SEQLOG")]
#[allow(non_snake_case)]
pub struct SeqLogConfig {
    /// strftime pattern applied to the local wall clock of every record.
    #[from_env(default = "%Y-%m-%d %H:%M:%S%.3f")]
    pub TIMESTAMP_FORMAT: String,
}

pub static SEQLOG_CONFIG: LazyLock<SeqLogConfig> =
    LazyLock::new(|| SeqLogConfig::from_env().unwrap());
