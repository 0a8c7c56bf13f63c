//! Core data types for function name trimming.

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule family applied to a frame's function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// C, C++, Rust and other native display names.
    Native,
    /// .NET / Unity frames.
    CSharp,
    /// Swift frames, including Objective-C bridged ones.
    Cocoa,
    /// Objective-C frames. Shares the Cocoa rules.
    Objc,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Native,
        Platform::CSharp,
        Platform::Cocoa,
        Platform::Objc,
    ];

    /// Resolve a platform tag as reported by an SDK.
    ///
    /// Returns `None` for tags that have no trimming rules; such frames are
    /// left untouched.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "native" | "c" => Some(Platform::Native),
            "csharp" => Some(Platform::CSharp),
            "cocoa" | "swift" => Some(Platform::Cocoa),
            "objc" => Some(Platform::Objc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Native => "native",
            Platform::CSharp => "csharp",
            Platform::Cocoa => "cocoa",
            Platform::Objc => "objc",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::from_tag(s).ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}

/// Knobs that change how names are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimOptions {
    /// Collapse compiler-generated lambda names (`$_0`, `{lambda()#1}`,
    /// `lambda_<hash>`) and MSVC inline anonymous namespaces.
    pub normalize_lambdas: bool,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            normalize_lambdas: true,
        }
    }
}

/// A function name as reported by a symbolicated frame, plus the frame's
/// platform tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawName {
    pub function: String,
    pub platform: String,
}

impl RawName {
    pub fn new(function: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            platform: platform.into(),
        }
    }
}
