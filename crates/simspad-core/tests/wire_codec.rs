use simspad_core::device::defaults::{j30020, j30020_dual};
use simspad_core::wire::values::{bytes_to_values, values_to_bytes};
use simspad_core::wire::{decode_reply, decode_reply_with, encode_request};
use simspad_core::{Channels, Framing, SimspadError, SingleChannelParams, SipmModel};

fn reference_model() -> SipmModel {
    SingleChannelParams::new(
        1e-11, 14410.0, 27.5, 24.5, 3.08e-8, 0.46, 2.04, 4.6e-14, 1.5e-9, 0.0,
    )
    .into()
}

#[test]
fn reference_request_is_104_bytes() {
    let body = encode_request(&reference_model(), &Channels::Single(vec![10.0, 10.0, 10.0])).unwrap();
    assert_eq!(body.len(), 104);

    let values = bytes_to_values(&body).unwrap();
    assert_eq!(values.len(), 13);
    assert_eq!(&values[..10], reference_model().values().as_slice());
    assert_eq!(&values[10..], &[10.0, 10.0, 10.0]);
}

#[test]
fn request_is_little_endian_f64() {
    let body = encode_request(&reference_model(), &Channels::Single(vec![1.0])).unwrap();
    assert_eq!(&body[0..8], &1e-11f64.to_le_bytes());
    assert_eq!(&body[80..88], &1.0f64.to_le_bytes());
}

#[test]
fn dual_request_interleaves_after_eleven_fields() {
    let model: SipmModel = j30020_dual().into();
    let stim = Channels::Dual(vec![1.0, 2.0, 3.0], vec![7.0, 8.0, 9.0]);
    let values = bytes_to_values(&encode_request(&model, &stim).unwrap()).unwrap();

    assert_eq!(values.len(), 11 + 6);
    assert_eq!(&values[..11], model.values().as_slice());
    assert_eq!(&values[11..], &[1.0, 7.0, 2.0, 8.0, 3.0, 9.0]);
}

#[test]
fn dual_request_rejects_unequal_channels() {
    let model: SipmModel = j30020_dual().into();
    let stim = Channels::Dual(vec![1.0, 2.0, 3.0], vec![7.0]);
    assert!(matches!(
        encode_request(&model, &stim),
        Err(SimspadError::LengthMismatch { left: 3, right: 1 })
    ));
}

#[test]
fn request_channel_count_must_match_model() {
    let single: SipmModel = j30020().into();
    let err = encode_request(&single, &Channels::Dual(vec![1.0], vec![2.0])).unwrap_err();
    assert!(matches!(err, SimspadError::ChannelMismatch { model: 1, stimulus: 2 }));

    let dual: SipmModel = j30020_dual().into();
    let err = encode_request(&dual, &Channels::Single(vec![1.0])).unwrap_err();
    assert!(matches!(err, SimspadError::ChannelMismatch { model: 2, stimulus: 1 }));
}

#[test]
fn encoding_is_deterministic() {
    let stim = Channels::Single((0..1000).map(|i| (i as f64).sin()).collect());
    let a = encode_request(&reference_model(), &stim).unwrap();
    let b = encode_request(&reference_model(), &stim).unwrap();
    assert_eq!(a, b);
}

#[test]
fn reply_drops_ten_header_values_and_trailer() {
    let response = vec![0.5, 1.5, -2.25, 3.0e-15];
    let mut reply = vec![0.0; 10];
    reply.extend_from_slice(&response);
    reply.push(0.0);

    assert_eq!(decode_reply(&values_to_bytes(&reply)).unwrap(), response);
}

#[test]
fn reply_with_only_framing_is_empty() {
    let reply = values_to_bytes(&[0.0; 11]);
    assert!(decode_reply(&reply).unwrap().is_empty());
}

#[test]
fn reply_rejects_misaligned_length() {
    let mut reply = values_to_bytes(&[0.0; 12]);
    reply.push(0xFF);
    assert!(matches!(decode_reply(&reply), Err(SimspadError::MalformedReply(_))));
}

#[test]
fn reply_rejects_short_buffer() {
    let reply = values_to_bytes(&[0.0; 10]);
    assert!(matches!(decode_reply(&reply), Err(SimspadError::MalformedReply(_))));
    assert!(matches!(decode_reply(&[]), Err(SimspadError::MalformedReply(_))));
}

#[test]
fn model_framing_covers_dual_header() {
    let model: SipmModel = j30020_dual().into();
    let framing = Framing::for_model(&model);
    assert_eq!(framing, Framing { header: 11, trailer: 1 });

    let mut reply = model.values();
    reply.extend_from_slice(&[4.0, 5.0]);
    reply.push(0.0);
    let bytes = values_to_bytes(&reply);

    assert_eq!(decode_reply_with(&bytes, framing).unwrap(), vec![4.0, 5.0]);
    // The deployed framing keeps the 11th echoed field as a response sample.
    let legacy = decode_reply_with(&bytes, Framing::LEGACY).unwrap();
    assert_eq!(legacy, vec![model.values()[10], 4.0, 5.0]);
}

#[test]
fn every_byte_value_survives_the_value_layer() {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(256 * 8).collect();
    let values = bytes_to_values(&bytes).unwrap();
    // NaN payloads are kept too: compare bits, not floats.
    let back: Vec<u8> = values.iter().flat_map(|v| v.to_bits().to_le_bytes()).collect();
    assert_eq!(back, bytes);
    assert_eq!(values_to_bytes(&values), bytes);
}

#[test]
fn oversized_framing_is_rejected_not_panicking() {
    let reply = values_to_bytes(&[0.0; 12]);

    let overflowing = Framing { header: usize::MAX, trailer: 1 };
    assert_eq!(overflowing.overhead(), None);
    assert!(matches!(
        decode_reply_with(&reply, overflowing),
        Err(SimspadError::MalformedReply(_))
    ));

    let huge = Framing { header: usize::MAX - 1, trailer: 1 };
    assert!(matches!(decode_reply_with(&reply, huge), Err(SimspadError::MalformedReply(_))));
}
