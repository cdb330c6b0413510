//! Best-effort notifications to the running compositor.
//!
//! The compositor owns effect loading; this side only tells it the
//! desired state. Notifications are JSON-RPC 2.0 notification frames
//! (no id, no response) written to the compositor's control socket:
//! connect, write one line, disconnect. A failed notification is logged
//! and dropped. The compositor treats a repeated load or unload of an
//! effect as a no-op, so a missed frame is corrected by the next full
//! model load.

use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use serde::Serialize;

/// Socket file name under `$XDG_RUNTIME_DIR`.
pub const SOCKET_NAME: &str = "compositor-effects.sock";

const LOAD_METHOD: &str = "loadEffect";
const UNLOAD_METHOD: &str = "unloadEffect";

/// Handle on the running compositor's effects endpoint.
pub trait CompositorHandle: Send + Sync {
    /// Tell the compositor to load an effect. Best effort; the caller
    /// never observes success or failure.
    fn load_effect(&self, service_name: &str);

    /// Tell the compositor to unload an effect. Best effort.
    fn unload_effect(&self, service_name: &str);
}

/// JSON-RPC 2.0 notification frame.
#[derive(Debug, Serialize)]
struct Notification<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: [&'a str; 1],
}

/// Notifier writing to the compositor's Unix control socket.
pub struct SocketNotifier {
    socket: PathBuf,
}

impl SocketNotifier {
    /// Create a notifier for the given socket path.
    pub fn new(socket: impl Into<PathBuf>) -> Self {
        Self { socket: socket.into() }
    }

    /// Well-known socket path: `$XDG_RUNTIME_DIR/compositor-effects.sock`,
    /// falling back to `/tmp` when the runtime dir is unset.
    pub fn default_socket() -> PathBuf {
        std::env::var_os("XDG_RUNTIME_DIR")
            .map_or_else(|| PathBuf::from("/tmp"), PathBuf::from)
            .join(SOCKET_NAME)
    }

    fn notify(&self, method: &str, service_name: &str) {
        let frame = Notification { jsonrpc: "2.0", method, params: [service_name] };
        if let Err(e) = self.send(&frame) {
            tracing::debug!(
                method,
                service_name,
                socket = %self.socket.display(),
                error = %e,
                "Compositor notification dropped"
            );
        }
    }

    fn send(&self, frame: &Notification<'_>) -> std::io::Result<()> {
        let mut stream = UnixStream::connect(&self.socket)?;
        let mut line = serde_json::to_vec(frame)?;
        line.push(b'\n');
        stream.write_all(&line)
    }
}

impl CompositorHandle for SocketNotifier {
    fn load_effect(&self, service_name: &str) {
        self.notify(LOAD_METHOD, service_name);
    }

    fn unload_effect(&self, service_name: &str) {
        self.notify(UNLOAD_METHOD, service_name);
    }
}
