//! Defines the processing modes for chunked decryption.
//!
//! 定义了分块解密的处理模式。

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Specifies the execution strategy for the chunked decryption path.
/// Both strategies produce byte-identical output.
///
/// 指定分块解密路径的执行策略。两种策略的输出完全一致。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProcessingMode {
    /// In-memory, single-threaded processing. Best for the short payloads
    /// typical of encrypted configuration values.
    ///
    /// 内存中、单线程处理。最适合加密配置值这类短数据。
    #[default]
    Ordinary,

    /// In-memory, parallel processing using Rayon. Chunks are decrypted on the
    /// global pool and reassembled by index.
    ///
    /// 使用 Rayon 进行内存中并行处理。数据块在全局线程池中解密，并按索引重新组装。
    Parallel,
}

impl ProcessingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Ordinary => "ordinary",
            ProcessingMode::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ordinary") {
            Ok(ProcessingMode::Ordinary)
        } else if s.eq_ignore_ascii_case("parallel") {
            Ok(ProcessingMode::Parallel)
        } else {
            Err(())
        }
    }
}
