use std::io::{self, Read, Write};
use std::net::TcpStream;
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use rmpv::Value;

use crate::error::PbcopyError;

const REQUEST: u64 = 0;
const RESPONSE: u64 = 1;
const NOTIFICATION: u64 = 2;

/// Where a Neovim instance listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Tcp(String),
    Unix(PathBuf),
}

impl Address {
    /// `host:port` is TCP; anything else (absolute or relative path) is a
    /// Unix-domain socket
    pub fn parse(address: &str) -> Self {
        if address.contains(':') && !address.starts_with('/') && !address.starts_with('.') {
            Address::Tcp(address.to_string())
        } else {
            Address::Unix(PathBuf::from(address))
        }
    }
}

/// Connected socket to Neovim
pub enum Stream {
    Tcp(TcpStream),
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Stream::Tcp(s) => s.read(buf),
            #[cfg(unix)]
            Stream::Unix(s) => s.read(buf),
        }
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Stream::Tcp(s) => s.write(buf),
            #[cfg(unix)]
            Stream::Unix(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Stream::Tcp(s) => s.flush(),
            #[cfg(unix)]
            Stream::Unix(s) => s.flush(),
        }
    }
}

/// Synchronous msgpack-rpc client, one request in flight at a time
pub struct RpcClient<S = Stream> {
    address: String,
    stream: S,
    next_id: u32,
}

impl RpcClient<Stream> {
    pub fn connect(address: &str) -> Result<Self, PbcopyError> {
        let stream = match Address::parse(address) {
            Address::Tcp(addr) => TcpStream::connect(addr).map(Stream::Tcp),
            #[cfg(unix)]
            Address::Unix(path) => UnixStream::connect(path).map(Stream::Unix),
            #[cfg(not(unix))]
            Address::Unix(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "unix sockets are not available on this platform",
            )),
        }
        .map_err(|e| PbcopyError::remote(address, e))?;

        Ok(Self::new(address, stream))
    }
}

impl<S: Read + Write> RpcClient<S> {
    pub fn new(address: &str, stream: S) -> Self {
        RpcClient {
            address: address.to_string(),
            stream,
            next_id: 0,
        }
    }

    /// Send `[0, msgid, method, args]` and wait for the matching response
    ///
    /// Notifications arriving in between are skipped.
    pub fn call(&mut self, method: &str, args: Vec<Value>) -> Result<Value, PbcopyError> {
        let msgid = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let request = Value::Array(vec![
            Value::from(REQUEST),
            Value::from(msgid),
            Value::from(method),
            Value::Array(args),
        ]);
        rmpv::encode::write_value(&mut self.stream, &request)
            .map_err(|e| PbcopyError::remote(&self.address, e))?;
        self.stream
            .flush()
            .map_err(|e| PbcopyError::remote(&self.address, e))?;

        loop {
            let message = rmpv::decode::read_value(&mut self.stream)
                .map_err(|e| PbcopyError::remote(&self.address, e))?;
            let fields = message
                .as_array()
                .ok_or_else(|| PbcopyError::remote(&self.address, "malformed message"))?;

            match fields.first().and_then(Value::as_u64) {
                Some(RESPONSE) if fields.len() == 4 => {
                    if fields[1].as_u64() != Some(u64::from(msgid)) {
                        log::debug!("Skipping response to unknown request {}", fields[1]);
                        continue;
                    }
                    if !fields[2].is_nil() {
                        return Err(PbcopyError::remote(&self.address, error_message(&fields[2])));
                    }
                    return Ok(fields[3].clone());
                }
                Some(NOTIFICATION) => continue,
                _ => {
                    return Err(PbcopyError::remote(
                        &self.address,
                        format!("unexpected message {}", message),
                    ));
                }
            }
        }
    }

    /// Evaluate a Vimscript expression, expecting a string result
    pub fn eval(&mut self, expr: &str) -> Result<String, PbcopyError> {
        let value = self.call("nvim_eval", vec![Value::from(expr)])?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| PbcopyError::remote(&self.address, format!("non-string result {}", value)))
    }
}

/// Neovim reports errors as `[type, message]`
fn error_message(error: &Value) -> String {
    error
        .as_array()
        .and_then(|fields| fields.get(1))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}
