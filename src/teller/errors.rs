/// Faults that end a session. Everything else is printed and the loop goes on.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    #[error("input ended while waiting for {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("expected {expected}, got {input:?}")]
    InvalidNumber {
        input: String,
        expected: &'static str,
    },
}
