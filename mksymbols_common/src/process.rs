//! Running external programs.
//!
//! Everything that launches a child process goes through [`CommandRunner`], so callers can be
//! tested against a scripted fake instead of real executables.

use anyhow::*;
use std::{
    ffi::OsString,
    fmt::{Display, Formatter},
    process::{Command, Stdio},
};
use tracing::debug;

/// The captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// The exit code, or `None` if the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}
impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Executes a command line and blocks until it finishes.
///
/// `argv[0]` is the program to run; the remaining entries are passed as arguments unmodified.
pub trait CommandRunner {
    fn run(&self, argv: &[OsString]) -> Result<CommandOutput>;
}
impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, argv: &[OsString]) -> Result<CommandOutput> {
        (**self).run(argv)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;
impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[OsString]) -> Result<CommandOutput> {
        let Some((program, args)) = argv.split_first() else {
            bail!("Cannot run an empty command line.");
        };

        debug!("Spawning {:?}...", program);
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute {:?}", program))?;
        debug!("{:?} exited with {}", program, output.status);

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Displays a command line the way a user would type it into a shell.
pub struct CommandLine<'a>(pub &'a [OsString]);
impl<'a> Display for CommandLine<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for arg in self.0 {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            f.write_str(&arg.to_string_lossy())?;
        }
        std::fmt::Result::Ok(())
    }
}
