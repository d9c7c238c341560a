//! Scripted command runner for tests
//!
//! Records every command it is asked to run and answers from a list of
//! rules matched against the rendered command line. The first matching rule
//! wins; unmatched commands exit with status 1.

use crate::error::ProcessError;
use crate::process::{CommandOutput, CommandRunner, CommandSpec};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Matcher {
    Exact(String),
    Prefix(String),
    Contains(String),
}

impl Matcher {
    fn matches(&self, rendered: &str) -> bool {
        match self {
            Matcher::Exact(expected) => rendered == expected,
            Matcher::Prefix(prefix) => rendered.starts_with(prefix.as_str()),
            Matcher::Contains(needle) => rendered.contains(needle.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
enum Response {
    Output(CommandOutput),
    SpawnError,
}

/// A [`CommandRunner`] that replays canned responses
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    rules: Vec<(Matcher, Response)>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the exact command line `rendered` with `output`
    pub fn on_command(mut self, rendered: &str, output: CommandOutput) -> Self {
        self.rules
            .push((Matcher::Exact(rendered.to_string()), Response::Output(output)));
        self
    }

    /// Answer every command line starting with `prefix`
    pub fn on_prefix(mut self, prefix: &str, output: CommandOutput) -> Self {
        self.rules
            .push((Matcher::Prefix(prefix.to_string()), Response::Output(output)));
        self
    }

    /// Answer every command line containing `needle`
    pub fn on_contains(mut self, needle: &str, output: CommandOutput) -> Self {
        self.rules
            .push((Matcher::Contains(needle.to_string()), Response::Output(output)));
        self
    }

    /// Fail to spawn the exact command line `rendered`
    pub fn spawn_error_for(mut self, rendered: &str) -> Self {
        self.rules
            .push((Matcher::Exact(rendered.to_string()), Response::SpawnError));
        self
    }

    /// Fail to spawn every command line starting with `prefix`
    pub fn spawn_error_for_prefix(mut self, prefix: &str) -> Self {
        self.rules
            .push((Matcher::Prefix(prefix.to_string()), Response::SpawnError));
        self
    }

    /// All commands run so far, in order
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Rendered command lines run so far, in order
    pub fn rendered_calls(&self) -> Vec<String> {
        self.calls().iter().map(CommandSpec::render).collect()
    }

    /// Rendered command lines whose program is `program`
    pub fn rendered_calls_to(&self, program: &str) -> Vec<String> {
        self.calls()
            .iter()
            .filter(|spec| spec.program == program)
            .map(CommandSpec::render)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(spec.clone());
        }

        let rendered = spec.render();
        let response = self
            .rules
            .iter()
            .find(|(matcher, _)| matcher.matches(&rendered))
            .map(|(_, response)| response.clone());

        match response {
            Some(Response::Output(output)) => Ok(output),
            Some(Response::SpawnError) => Err(ProcessError::Spawn {
                command: rendered,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted spawn error"),
            }),
            None => Ok(CommandOutput::failed(
                1,
                format!("unscripted command: {}", rendered),
            )),
        }
    }
}
