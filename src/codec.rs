//! Reversible byte transforms applied at the I/O boundary of the decryptor.
//!
//! 在解密器输入输出边界上应用的可逆字节变换。

use crate::error::EncodingError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outer encoding of a payload.
///
/// `None` is an explicit passthrough so that "no encoding" is a checked branch
/// rather than a missing value.
///
/// 载荷的外层编码。`None` 表示不做任何变换。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EncodingKind {
    #[default]
    None,
    /// Standard alphabet with padding. ASCII whitespace is ignored on decode.
    Base64,
    /// Case-insensitive on decode, lowercase on encode.
    Hex,
}

impl EncodingKind {
    /// Encodes `data`. Passthrough borrows the input.
    pub fn encode<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            EncodingKind::None => Cow::Borrowed(data),
            EncodingKind::Base64 => Cow::Owned(STANDARD.encode(data).into_bytes()),
            EncodingKind::Hex => Cow::Owned(hex::encode(data).into_bytes()),
        }
    }

    /// Decodes `data`, failing if it is not valid for this encoding.
    pub fn decode<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>, EncodingError> {
        match self {
            EncodingKind::None => Ok(Cow::Borrowed(data)),
            EncodingKind::Base64 => {
                let compact = strip_ascii_whitespace(data);
                Ok(Cow::Owned(STANDARD.decode(&*compact)?))
            }
            EncodingKind::Hex => {
                let compact = strip_ascii_whitespace(data);
                Ok(Cow::Owned(hex::decode(&*compact)?))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingKind::None => "none",
            EncodingKind::Base64 => "base64",
            EncodingKind::Hex => "hex",
        }
    }
}

fn strip_ascii_whitespace(data: &[u8]) -> Cow<'_, [u8]> {
    if data.iter().any(u8::is_ascii_whitespace) {
        Cow::Owned(
            data.iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect(),
        )
    } else {
        Cow::Borrowed(data)
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [EncodingKind::None, EncodingKind::Base64, EncodingKind::Hex]
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.as_str()))
            .ok_or(())
    }
}
