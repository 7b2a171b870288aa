pub mod adapters;
pub mod channel;
pub mod error;
pub mod mem;
pub mod release;

pub use adapters::{ReadChannel, WriteChannel};
pub use channel::{write_all, ByteChannel};
pub use error::ChannelError;
pub use mem::MemChannel;
pub use release::best_effort;
