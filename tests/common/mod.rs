use std::io;
use std::sync::{Arc, Mutex};

use testdox::color::SupportsColor;

/// In-memory output target. Clones share the underlying buffer, so a test
/// can hand one clone to the reporter and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.flush()
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    pub fn contents(&self) -> String {
        let guard = self.0.lock().expect("buffer mutex is never poisoned");
        String::from_utf8(guard.to_vec()).expect("transcript is valid utf-8")
    }
}
