use simspad_core::device::defaults::{j30020, rb10020_dual};
use simspad_core::file::framed::{decode_framed, encode_framed, read_framed, write_framed, Recording, SignalRole};
use simspad_core::file::{sniff, FileFormat};
use simspad_core::file::raw::encode_raw;
use simspad_core::{Channels, SimspadError};

fn dual_recording() -> Recording {
    Recording::new(
        rb10020_dual().into(),
        SignalRole::Stimulus,
        Channels::Dual(vec![0.0, 1.0, 2.0, 3.0], vec![9.0, 8.0, 7.0, 6.0]),
    )
}

#[test]
fn framed_dual_channel_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dual.spd");
    let rec = dual_recording();

    write_framed(&path, &rec).unwrap();
    let back = read_framed(&path).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn framed_single_response_roundtrip() {
    let rec = Recording::new(
        j30020().into(),
        SignalRole::Response,
        Channels::Single(vec![1e-14, 2e-14, 0.0]),
    );
    let bytes = encode_framed(&rec).unwrap();
    assert_eq!(decode_framed(&bytes).unwrap(), rec);
}

#[test]
fn framed_empty_signal_roundtrip() {
    let rec = Recording::new(j30020().into(), SignalRole::Response, Channels::Single(vec![]));
    let bytes = encode_framed(&rec).unwrap();
    assert_eq!(decode_framed(&bytes).unwrap(), rec);
}

#[test]
fn framed_detects_corruption() {
    let mut bytes = encode_framed(&dual_recording()).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0x01;
    let err = decode_framed(&bytes).unwrap_err();
    assert!(format!("{err}").contains("crc32"));
}

#[test]
fn framed_rejects_bad_magic() {
    let mut bytes = encode_framed(&dual_recording()).unwrap();
    bytes[0] = b'X';
    assert!(matches!(decode_framed(&bytes), Err(SimspadError::Format(_))));
}

#[test]
fn framed_rejects_truncation() {
    let bytes = encode_framed(&dual_recording()).unwrap();
    assert!(decode_framed(&bytes[..bytes.len() - 9]).is_err());
    assert!(decode_framed(&bytes[..6]).is_err());
}

#[test]
fn sniff_tells_formats_apart() {
    let framed = encode_framed(&dual_recording()).unwrap();
    let raw = encode_raw(&j30020().into(), &Channels::Single(vec![1.0])).unwrap();
    assert_eq!(sniff(&framed), FileFormat::Framed);
    assert_eq!(sniff(&raw), FileFormat::Raw);
}
