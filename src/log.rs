//! Leveled debug logging for the lexer and combinator engine, gated behind
//! `cfg(debug_assertions)`. The CLI binary, which is not on the hot parsing
//! path, uses `tracing` instead (see `bin/basis.rs`).

use std::fmt::{Debug, Display, Formatter};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Log {
    None,
    Default,
    Success,
    Result,
    Verbose,
}

impl Log {
    pub fn order(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Default => 1,
            Log::Success => 2,
            Log::Result => 3,
            Log::Verbose => 4,
        }
    }

    #[cfg(debug_assertions)]
    pub fn log_success(&self, label: &str, detail: impl Debug) {
        if self.order() >= Log::Success.order() {
            println!("[{}; Success]: {:?}", label, detail);
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn log_success(&self, _label: &str, _detail: impl Debug) {}

    #[cfg(debug_assertions)]
    pub fn log_result(&self, label: &str, detail: impl Display) {
        if self.order() >= Log::Result.order() {
            println!("[{}; Result]: {}", label, detail);
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn log_result(&self, _label: &str, _detail: impl Display) {}
}

impl Default for Log {
    fn default() -> Self {
        Log::None
    }
}
