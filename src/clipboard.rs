use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard command available")]
    Unavailable,

    #[error("Clipboard command '{command}' exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write-only text clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the platform's copy command.
///
/// Commands are tried in order; the first one that exists receives the text on
/// its standard input.
pub struct SystemClipboard {
    commands: Vec<(String, Vec<String>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_commands(vec![
            ("pbcopy", vec![]),
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("clip", vec![]),
        ])
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            commands: commands
                .into_iter()
                .map(|(program, args)| {
                    (
                        program.to_string(),
                        args.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in &self.commands {
            let mut child = match Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("Clipboard command {} not found", program);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let written = match child.stdin.take() {
                Some(mut stdin) => stdin.write_all(text.as_bytes()).await,
                None => Ok(()),
            };

            // Reap the child even when it stopped reading early
            let status = child.wait().await?;
            written?;
            if status.success() {
                debug!("Copied {} bytes with {}", text.len(), program);
                return Ok(());
            }
            return Err(ClipboardError::CommandFailed {
                command: program.clone(),
                status: status.to_string(),
            });
        }

        Err(ClipboardError::Unavailable)
    }
}
