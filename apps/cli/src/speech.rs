//! External-process pronunciation sink.

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use worddeck_core::Pronouncer;

/// Default engine for the platform; overridable with `--tts`.
pub fn default_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak"
    }
}

/// Pronouncer that hands each utterance to an external TTS command.
///
/// At most one utterance is active: the previous child is killed before a
/// new one is spawned. Spawn failures are logged and dropped; they never
/// reach the deck.
pub struct CommandPronouncer {
    program: String,
    args: Vec<String>,
    current: Mutex<Option<Child>>,
}

impl CommandPronouncer {
    /// Build from a command line such as `"espeak -v en"`. The word to
    /// pronounce is appended as the final argument.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts
            .next()
            .unwrap_or_else(|| default_command().to_string());
        Self {
            program,
            args: parts.collect(),
            current: Mutex::new(None),
        }
    }
}

impl Pronouncer for CommandPronouncer {
    fn pronounce(&self, text: &str) {
        let mut slot = self.current.lock().expect("speaker lock");
        if let Some(mut child) = slot.take() {
            // Interrupt the in-flight utterance.
            child.kill().ok();
            child.wait().ok();
        }
        match Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => *slot = Some(child),
            Err(err) => tracing::warn!("speech command {:?} failed: {err}", self.program),
        }
    }
}

impl Drop for CommandPronouncer {
    fn drop(&mut self) {
        if let Some(mut child) = self.current.lock().expect("speaker lock").take() {
            child.kill().ok();
            child.wait().ok();
        }
    }
}
