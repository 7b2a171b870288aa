use std::io::SeekFrom;

use byte_channel::{write_all, ByteChannel, ChannelError, MemChannel};

#[test]
fn write_then_read_back() {
    let mut channel = MemChannel::new();
    channel.write(b"Hello,").expect("Should write");
    channel.write(b" world!").expect("Should write");

    channel.seek(SeekFrom::Start(0)).expect("Should rewind");
    let mut buf = [0u8; 32];
    let n = channel.read(&mut buf).expect("Should read back");
    assert_eq!(&buf[..n], b"Hello, world!");
    assert_eq!(channel.read(&mut buf).expect("Should be eof"), 0);
}

#[test]
fn overwrite_at_the_cursor() {
    let mut channel = MemChannel::from_vec(b"0123456789".to_vec());
    channel.seek(SeekFrom::Start(4)).expect("Should seek");
    channel.write(b"abc").expect("Should overwrite");

    assert_eq!(channel.as_slice(), b"0123abc789");
    assert_eq!(channel.position(), 7);
}

#[test]
fn write_past_the_end_extends() {
    let mut channel = MemChannel::from_vec(b"ab".to_vec());
    channel.seek(SeekFrom::End(0)).expect("Should seek to the end");
    channel.write(b"cd").expect("Should extend");
    assert_eq!(channel.as_slice(), b"abcd");

    // A gap left by seeking past the end is zero-filled.
    channel.seek(SeekFrom::Current(2)).expect("Should seek past the end");
    channel.write(b"ef").expect("Should extend with a gap");
    assert_eq!(channel.as_slice(), b"abcd\0\0ef");
}

#[test]
fn seek_whence_variants() {
    let mut channel = MemChannel::from_vec(b"0123456789".to_vec());

    assert_eq!(channel.seek(SeekFrom::End(-2)).expect("Should seek"), 8);
    assert_eq!(channel.seek(SeekFrom::Current(-3)).expect("Should seek"), 5);

    let err = channel
        .seek(SeekFrom::Current(-100))
        .expect_err("Should reject seeking before the start");
    assert!(matches!(err, ChannelError::Io(_)), "got: {err}");
}

#[test]
fn closed_channel_reads_eof_and_accepts_nothing() {
    let mut channel = MemChannel::from_vec(b"data".to_vec());
    channel.close().expect("Should close");
    channel.close().expect("Close is idempotent");

    let mut buf = [0u8; 4];
    assert_eq!(channel.read(&mut buf).expect("Should be eof"), 0);
    assert_eq!(channel.write(b"x").expect("Should accept nothing"), 0);
    assert_eq!(channel.into_inner(), b"data");
}

#[test]
fn write_all_drains_the_whole_buffer() {
    let mut channel = MemChannel::new();
    write_all(&mut channel, b"all of it").expect("Should drain");
    assert_eq!(channel.as_slice(), b"all of it");
}

#[test]
fn write_all_fails_on_a_stalled_channel() {
    let mut channel = MemChannel::new();
    channel.close().expect("Should close");

    let err = write_all(&mut channel, b"x").expect_err("Should detect the stall");
    assert!(matches!(err, ChannelError::Io(_)), "got: {err}");
}

#[test]
fn std_traits_bridge() {
    use std::io::{Read, Seek, Write};

    let mut channel = MemChannel::new();
    Write::write_all(&mut channel, b"bridged").expect("Should write");
    Seek::rewind(&mut channel).expect("Should rewind");

    let mut result = String::new();
    Read::read_to_string(&mut channel, &mut result).expect("Should read");
    assert_eq!(result, "bridged");
}
