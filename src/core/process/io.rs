// gitwrap: thin facade over the git binary
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concurrent draining of a child's stdout and stderr.
//!
//! Both pipes are read on their own tasks while the child runs, so a chatty
//! stream cannot fill its pipe buffer and stall the process. Each pipe is
//! read as raw bytes until EOF: captured text keeps line endings and invalid
//! UTF-8 is replaced, never a reason to stop reading.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, StreamFlags};
use super::output::ProcessOutput;

impl ProcessBuilder {
    /// Waits for `child` while reading its piped streams.
    pub(super) async fn drain(&self, name: &str, child: &mut Child) -> std::io::Result<ProcessOutput> {
        let stdout = spawn_reader(child.stdout.take(), self.stdout_flags(), name, "stdout");
        let stderr = spawn_reader(child.stderr.take(), self.stderr_flags(), name, "stderr");

        let status = child.wait().await?;

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            collect(stdout).await,
            collect(stderr).await,
        ))
    }
}

fn spawn_reader<R>(
    pipe: Option<R>,
    flags: StreamFlags,
    process: &str,
    stream: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let pipe = pipe?;
    let process = process.to_string();
    Some(tokio::spawn(async move {
        read_stream(pipe, flags, &process, stream).await
    }))
}

async fn collect(reader: Option<JoinHandle<String>>) -> String {
    match reader {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

async fn read_stream<R>(pipe: R, flags: StreamFlags, process: &str, stream: &str) -> String
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(pipe);
    let mut captured = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(process, stream, error = %e, "stopped reading output");
                break;
            }
        }
        if flags.contains(StreamFlags::LOG) {
            let text = String::from_utf8_lossy(&line);
            trace!(process, stream, "{}", text.trim_end_matches(['\r', '\n']));
        }
        if flags.contains(StreamFlags::CAPTURE) {
            captured.extend_from_slice(&line);
        }
    }
    String::from_utf8_lossy(&captured).into_owned()
}
