pub mod rc_sink;
pub mod scripted;

pub use rc_sink::RcSink;
pub use scripted::ScriptedChannel;
