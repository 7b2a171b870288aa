use std::io::SeekFrom;

use byte_channel::{ByteChannel, ChannelError, MemChannel};
use byte_channel_mocked::ScriptedChannel;
use channel_io::HeadReader;

#[test]
fn happy_path() {
    let source = MemChannel::from_vec(b"Hello, World!".to_vec());
    let mut head = HeadReader::new(source, 5);

    let mut buf = [0u8; 16];
    let n = head.read(&mut buf).expect("Should read the window");
    assert_eq!(&buf[..n], b"Hello");

    assert_eq!(head.read(&mut buf).expect("Should be eof"), 0);
    assert_eq!(head.read(&mut buf).expect("Should stay eof"), 0);
}

#[test]
fn window_served_in_chunks() {
    let source = ScriptedChannel::new(b"Hello, World!".to_vec(), &[2]);
    let mut head = HeadReader::new(source, 5);

    let mut collected = Vec::new();
    let mut buf = [0u8; 16];
    loop {
        let n = head.read(&mut buf).expect("Should read a chunk");
        if n == 0 {
            break;
        }
        collected.extend_from_slice(&buf[..n]);
    }

    assert_eq!(collected, b"Hello");
}

#[test]
fn zero_limit_is_immediate_eof() {
    let source = MemChannel::from_vec(b"data".to_vec());
    let mut head = HeadReader::new(source, 0);

    let mut buf = [0u8; 4];
    assert_eq!(head.read(&mut buf).expect("Should be eof"), 0);
}

#[test]
fn short_source_ends_first() {
    let source = MemChannel::from_vec(b"abc".to_vec());
    let mut head = HeadReader::new(source, 100);

    let mut buf = [0u8; 16];
    let n = head.read(&mut buf).expect("Should read all of the source");
    assert_eq!(&buf[..n], b"abc");
    assert_eq!(head.read(&mut buf).expect("Should be eof"), 0);
}

#[test]
fn write_is_unsupported() {
    let source = MemChannel::from_vec(b"abc".to_vec());
    let mut head = HeadReader::new(source, 2);

    let err = head.write(b"x").expect_err("Should reject writes");
    assert!(err.is_unsupported(), "got: {err}");
}

#[test]
fn seek_stays_inside_the_window() {
    let source = MemChannel::from_vec((0u8..20).collect());
    let mut head = HeadReader::new(source, 10);

    assert_eq!(head.seek(SeekFrom::Start(7)).expect("Should seek"), 7);
    let mut buf = [0u8; 16];
    let n = head.read(&mut buf).expect("Should read the window rest");
    assert_eq!(&buf[..n], &[7, 8, 9]);

    // Past the window: clamped to the limit, so the cursor is at eof.
    assert_eq!(head.seek(SeekFrom::Start(15)).expect("Should clamp"), 10);
    assert_eq!(head.read(&mut buf).expect("Should be eof"), 0);

    assert_eq!(head.seek(SeekFrom::End(-3)).expect("Should seek"), 7);
    assert_eq!(head.seek(SeekFrom::Current(-100)).expect("Should clamp"), 0);
    let n = head.read(&mut buf).expect("Should read from the start");
    assert_eq!(n, 10);
    assert_eq!(head.processed(), 10);
}

#[test]
fn seek_needs_a_seekable_source() {
    let source = ScriptedChannel::new(b"abc".to_vec(), &[]);
    let mut head = HeadReader::new(source, 2);

    let err = head
        .seek(SeekFrom::Start(1))
        .expect_err("Should propagate unsupported seek");
    assert!(matches!(err, ChannelError::Unsupported(_)), "got: {err}");
}

#[test]
fn std_read_bridge() {
    use std::io::Read;

    let source = MemChannel::from_vec(b"Hello, World!".to_vec());
    let mut head = HeadReader::new(source, 5);

    let mut result = String::new();
    head.read_to_string(&mut result)
        .expect("Should read through the std bridge");
    assert_eq!(result, "Hello");
}
