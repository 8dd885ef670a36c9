#![allow(dead_code)]
//! Common test utilities for cb-cli integration tests.
//!
//! The [`Terminal`] type spawns `cb-cli` inside a pseudo terminal and answers
//! the cursor position queries (CSI 6n) reedline sends on startup. Without
//! those answers reedline blocks before it draws the first prompt.
//!
//! The harness is Unix-only: crossterm's `cursor::position()` goes through
//! WinAPI on Windows, which does not work inside ConPTY.
#![cfg(unix)]

use portable_pty::{Child, CommandBuilder, PtySize, native_pty_system};
use regex::Regex;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Default timeout for waiting on terminal output (in milliseconds).
const DEFAULT_TIMEOUT_MS: u64 = 15000;

/// Default terminal size.
const DEFAULT_ROWS: u16 = 24;
const DEFAULT_COLS: u16 = 80;

/// Shared state between the test thread and the PTY reader.
struct SharedState {
    /// Accumulated output from the terminal (raw bytes as string)
    output_buffer: String,
    /// Whether the terminal is still running
    running: bool,
    /// Screen rows as rendered by vt100
    lines: Vec<String>,
    /// Cursor row (0-indexed)
    cursor_row: u16,
}

/// A `cb-cli` process running in a PTY.
pub struct Terminal {
    state: Arc<Mutex<SharedState>>,
    pty_writer: Arc<Mutex<Box<dyn Write + Send>>>,
    _reader_handle: JoinHandle<()>,
    child: Box<dyn Child + Send + Sync>,
    shutdown: Arc<AtomicBool>,
    /// Isolated XDG home so tests never touch the user's config or history.
    _home: TempDir,
}

impl Terminal {
    /// Spawn cb-cli with history disabled.
    pub fn spawn() -> Result<Self, String> {
        Self::spawn_with_args(&[])
    }

    /// Spawn cb-cli with additional arguments.
    ///
    /// `--no-history` is added unless `--history-file` is given.
    pub fn spawn_with_args(args: &[&str]) -> Result<Self, String> {
        let bin_path = env!("CARGO_BIN_EXE_cb-cli");
        let home = TempDir::new().map_err(|e| format!("Failed to create temp dir: {}", e))?;

        let pty_system = native_pty_system();
        let pair = pty_system
            .openpty(PtySize {
                rows: DEFAULT_ROWS,
                cols: DEFAULT_COLS,
                pixel_width: 0,
                pixel_height: 0,
            })
            .map_err(|e| format!("Failed to open PTY: {}", e))?;

        let mut cmd = CommandBuilder::new(bin_path);
        cmd.env("XDG_CONFIG_HOME", home.path().join("config"));
        cmd.env("XDG_DATA_HOME", home.path().join("data"));
        if !args.contains(&"--history-file") {
            cmd.arg("--no-history");
        }
        for arg in args {
            cmd.arg(*arg);
        }

        let child = pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| format!("Failed to spawn cb-cli: {}", e))?;

        let pty_writer = pair
            .master
            .take_writer()
            .map_err(|e| format!("Failed to get PTY writer: {}", e))?;
        let mut pty_reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| format!("Failed to get PTY reader: {}", e))?;

        drop(pair.slave);

        let state = Arc::new(Mutex::new(SharedState {
            output_buffer: String::new(),
            running: true,
            lines: vec![String::new(); DEFAULT_ROWS as usize],
            cursor_row: 0,
        }));
        let pty_writer = Arc::new(Mutex::new(pty_writer));
        let shutdown = Arc::new(AtomicBool::new(false));

        let state_clone = Arc::clone(&state);
        let writer_clone = Arc::clone(&pty_writer);
        let shutdown_clone = Arc::clone(&shutdown);

        let reader_handle = thread::spawn(move || {
            let (query_tx, query_rx) = std::sync::mpsc::channel::<()>();

            struct CursorQueryDetector {
                query_tx: std::sync::mpsc::Sender<()>,
            }

            impl vt100::Callbacks for CursorQueryDetector {
                fn unhandled_csi(
                    &mut self,
                    _screen: &mut vt100::Screen,
                    _prefix: Option<u8>,
                    _intermediate: Option<u8>,
                    params: &[&[u16]],
                    c: char,
                ) {
                    if c == 'n' {
                        let is_dsr = params.is_empty()
                            || (params.len() == 1 && params[0].len() == 1 && params[0][0] == 6);
                        if is_dsr {
                            let _ = self.query_tx.send(());
                        }
                    }
                }
            }

            let mut parser = vt100::Parser::new_with_callbacks(
                DEFAULT_ROWS,
                DEFAULT_COLS,
                0,
                CursorQueryDetector { query_tx },
            );
            let mut buf = [0u8; 4096];

            loop {
                if shutdown_clone.load(Ordering::Relaxed) {
                    break;
                }

                match pty_reader.read(&mut buf) {
                    Ok(0) => {
                        if let Ok(mut state) = state_clone.lock() {
                            state.running = false;
                        }
                        break;
                    }
                    Ok(n) => {
                        let data = &buf[..n];
                        parser.process(data);

                        if let Ok(mut state) = state_clone.lock() {
                            state.output_buffer.push_str(&String::from_utf8_lossy(data));

                            let screen = parser.screen();
                            state.cursor_row = screen.cursor_position().0;
                            for row in 0..DEFAULT_ROWS {
                                state.lines[row as usize] =
                                    screen.contents_between(row, 0, row, DEFAULT_COLS - 1);
                            }
                        }

                        while query_rx.try_recv().is_ok() {
                            let (row, col) = parser.screen().cursor_position();
                            let response = format!("\x1b[{};{}R", row + 1, col + 1);
                            if let Ok(mut writer) = writer_clone.lock() {
                                let _ = writer.write_all(response.as_bytes());
                                let _ = writer.flush();
                            }
                        }
                    }
                    Err(e) => {
                        if e.kind() != std::io::ErrorKind::WouldBlock
                            && e.kind() != std::io::ErrorKind::Interrupted
                        {
                            if let Ok(mut state) = state_clone.lock() {
                                state.running = false;
                            }
                            break;
                        }
                    }
                }
            }
        });

        Ok(Terminal {
            state,
            pty_writer,
            _reader_handle: reader_handle,
            child,
            shutdown,
            _home: home,
        })
    }

    /// Wait until `matches` accepts the accumulated output.
    fn wait_for(&self, what: &str, matches: impl Fn(&str) -> bool) -> Result<(), String> {
        let timeout = Duration::from_millis(DEFAULT_TIMEOUT_MS);
        let start = Instant::now();

        while start.elapsed() < timeout {
            {
                let state = self.state.lock().map_err(|e| e.to_string())?;
                if matches(&state.output_buffer) {
                    return Ok(());
                }
                if !state.running {
                    return Err(format!(
                        "Process exited before finding {}. Output:\n{}",
                        what, state.output_buffer
                    ));
                }
            }
            thread::sleep(Duration::from_millis(50));
        }

        let output = self.get_output().unwrap_or_default();
        Err(format!(
            "Timeout waiting for {}. Current output:\n{}",
            what, output
        ))
    }

    /// Wait for a string pattern in the output.
    pub fn expect(&mut self, pattern: &str) -> Result<(), String> {
        self.wait_for(&format!("pattern '{}'", pattern), |out| out.contains(pattern))
    }

    /// Wait for a regex pattern in the output.
    pub fn expect_regex(&mut self, pattern: &str) -> Result<(), String> {
        let re = Regex::new(pattern).map_err(|e| format!("Invalid regex: {}", e))?;
        self.wait_for(&format!("regex '{}'", pattern), |out| re.is_match(out))
    }

    /// Wait for the prompt to appear.
    pub fn wait_for_prompt(&mut self) -> Result<(), String> {
        self.expect("cb-cli")?;
        self.expect("> ")
    }

    /// Clear the output buffer.
    pub fn clear_buffer(&mut self) -> Result<(), String> {
        let mut state = self.state.lock().map_err(|e| e.to_string())?;
        state.output_buffer.clear();
        Ok(())
    }

    /// Get the current output buffer contents.
    pub fn get_output(&self) -> Result<String, String> {
        let state = self.state.lock().map_err(|e| e.to_string())?;
        Ok(state.output_buffer.clone())
    }

    /// Text of the screen row holding the cursor.
    pub fn current_line(&self) -> Result<String, String> {
        let state = self.state.lock().map_err(|e| e.to_string())?;
        Ok(state
            .lines
            .get(state.cursor_row as usize)
            .cloned()
            .unwrap_or_default())
    }

    /// Send a line of input followed by Enter.
    pub fn send_line(&mut self, text: &str) -> Result<(), String> {
        self.send(&format!("{}\r", text))
    }

    /// Send raw text without newline.
    pub fn send(&mut self, text: &str) -> Result<(), String> {
        let mut writer = self.pty_writer.lock().map_err(|e| e.to_string())?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| format!("Failed to send: {}", e))?;
        writer
            .flush()
            .map_err(|e| format!("Failed to flush: {}", e))
    }

    /// Send Ctrl+C.
    pub fn send_interrupt(&mut self) -> Result<(), String> {
        self.send("\x03")
    }

    /// Send Ctrl+D (EOF).
    pub fn send_eof(&mut self) -> Result<(), String> {
        self.send("\x04")
    }

    /// Wait for the process to exit and return whether it succeeded.
    pub fn wait_for_exit(&mut self) -> Result<bool, String> {
        let timeout = Duration::from_millis(DEFAULT_TIMEOUT_MS);
        let start = Instant::now();

        while start.elapsed() < timeout {
            match self.child.try_wait() {
                Ok(Some(status)) => return Ok(status.success()),
                Ok(None) => thread::sleep(Duration::from_millis(50)),
                Err(e) => return Err(format!("Failed to wait for cb-cli: {}", e)),
            }
        }
        Err("Timeout waiting for cb-cli to exit".to_string())
    }

    /// Gracefully quit cb-cli.
    pub fn quit(&mut self) -> Result<(), String> {
        let _ = self.send_line(".quit");
        thread::sleep(Duration::from_millis(500));

        let still_running = self.state.lock().map_err(|e| e.to_string())?.running;
        if still_running {
            let _ = self.send_eof();
        }

        self.shutdown.store(true, Ordering::Relaxed);
        let _ = self.child.kill();
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        let _ = self.child.kill();
    }
}
