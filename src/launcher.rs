use std::{borrow::Cow, io::{self, Write}, path::{Path, PathBuf}, process::{Command, Stdio}};

use rust_i18n::t;

use crate::Error;

/// Wraps `path` in double quotes if it contains a space. Nothing is escaped.
pub fn smart_quote(path: &str) -> Cow<'_, str> {
    if path.contains(' ') {
        Cow::Owned(format!("\"{}\"", path))
    }
    else {
        Cow::Borrowed(path)
    }
}

/// A delegated launch: `shell` is asked to open `target` with `args`.
#[derive(Clone, Debug)]
pub struct Launch {
    shell: PathBuf,
    target: PathBuf,
    args: String
}

impl Launch {
    pub fn new(shell: impl Into<PathBuf>, target: impl Into<PathBuf>, args: impl Into<String>) -> Launch {
        Launch {
            shell: shell.into(),
            target: target.into(),
            args: args.into()
        }
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn forwarded(&self) -> &str {
        &self.args
    }

    /// The argument string handed to the shell. Forwarded arguments are
    /// appended verbatim, so an empty set leaves a trailing space.
    pub fn arguments(&self) -> String {
        format!("{} {}", smart_quote(&self.target.to_string_lossy()), self.args)
    }

    pub fn command_line(&self) -> String {
        format!("{} {}", smart_quote(&self.shell.to_string_lossy()), self.arguments())
    }
}

pub trait Spawn {
    /// Starts the launch's shell and returns without waiting for it.
    /// The child must not inherit this process's standard streams.
    fn spawn_detached(&mut self, launch: &Launch) -> io::Result<()>;
}

/// Spawns real processes.
pub struct DetachedSpawner;

impl Spawn for DetachedSpawner {
    fn spawn_detached(&mut self, launch: &Launch) -> io::Result<()> {
        let mut command = Command::new(launch.shell());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const DETACHED_PROCESS: u32 = 0x00000008;
            // Passed through as-is; CreateProcess gets exactly the printed string.
            command.raw_arg(launch.arguments()).creation_flags(DETACHED_PROCESS);
        }

        // The target goes over as its own argument; the forwarded string was
        // built with `shlex` quoting, so splitting it gives back the original argv.
        #[cfg(not(windows))]
        {
            let argv = shlex::split(launch.forwarded()).ok_or_else(|| io::Error::new(
                io::ErrorKind::InvalidInput,
                "unbalanced quotes in argument string"
            ))?;
            command.arg(launch.target()).args(argv);
        }

        let child = command.spawn()?;
        tracing::debug!(pid = child.id(), program = %launch.shell().display(), "spawned");
        Ok(())
    }
}

/// Prints the command line to `out`, then hands it to `spawner`.
pub fn execute(launch: &Launch, spawner: &mut impl Spawn, out: &mut impl Write) -> Result<(), Error> {
    writeln!(out, "{}", t!("launch.running", command = launch.command_line()))?;
    out.flush()?;

    spawner
        .spawn_detached(launch)
        .map_err(|source| {
            tracing::error!(shell = %launch.shell().display(), error = %source, "spawn failed");
            Error::Launch {
                shell: launch.shell().to_path_buf(),
                source
            }
        })
}
