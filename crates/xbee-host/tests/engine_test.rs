//! Integration tests for the receive engine and send path, driven over an
//! in-memory duplex transport standing in for the serial port.

use std::time::Duration;

use tokio::io::{duplex, split, AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::time::timeout;

use xbee_api::{
    checksum, Addr64, AnyFrame, ApiFrame, AtCommand, FrameKind, NetAddr16, UartFrame,
    ZigBeeReceivePacket,
};
use xbee_host::{EngineConfig, LinkEvent, XBee};

const TICK: Duration = Duration::from_secs(1);

type Host = XBee<tokio::io::WriteHalf<DuplexStream>>;

/// Spin up a connection; returns the handle and the "device" end of the
/// wire.
fn connect() -> (Host, DuplexStream) {
    let _ = env_logger::builder().is_test(true).try_init();
    let (host_side, device_side) = duplex(4096);
    let (reader, writer) = split(host_side);
    (XBee::spawn(reader, writer), device_side)
}

fn framed(body: &[u8]) -> Vec<u8> {
    UartFrame::new(body.to_vec()).unwrap().raw_bytes()
}

#[tokio::test]
async fn dispatches_typed_frame() {
    let (xbee, mut device) = connect();
    let mut frames = xbee.subscribe();

    let body = AtCommand::new(1, *b"NJ", Some(&[0xFF]));
    device.write_all(&framed(body.wire_bytes())).await.unwrap();

    let frame = timeout(TICK, frames.recv()).await.unwrap().unwrap();
    match frame {
        AnyFrame::AtCommand(cmd) => {
            assert_eq!(cmd.frame_id(), 1);
            assert_eq!(cmd.at_command(), *b"NJ");
            assert_eq!(cmd.parameter_value(), Some(&[0xFF][..]));
        }
        other => panic!("expected AtCommand, got {other}"),
    }
}

#[tokio::test]
async fn corrupted_checksum_drops_frame_and_reports() {
    let (xbee, mut device) = connect();
    let mut frames = xbee.subscribe();
    let mut events = xbee.events();

    // Same frame twice: first with a flipped checksum byte, then intact.
    let mut bad = framed(&[0x8A, 0x06]);
    let last = bad.len() - 1;
    bad[last] ^= 0xFF;
    device.write_all(&bad).await.unwrap();
    device.write_all(&framed(&[0x8A, 0x06])).await.unwrap();

    let event = timeout(TICK, events.recv()).await.unwrap().unwrap();
    assert_eq!(
        event,
        LinkEvent::ChecksumMismatch {
            expected: checksum::checksum(&[0x8A, 0x06]),
            actual: checksum::checksum(&[0x8A, 0x06]) ^ 0xFF,
        }
    );

    // Only the intact frame came through; the loop survived the bad one.
    let frame = timeout(TICK, frames.recv()).await.unwrap().unwrap();
    assert!(matches!(frame, AnyFrame::ModemStatus(ref s) if s.status() == 0x06));
    assert!(frames.try_recv().is_err());
}

#[tokio::test]
async fn noise_before_delimiter_is_discarded() {
    let (xbee, mut device) = connect();
    let mut frames = xbee.subscribe();

    let mut wire = vec![0x00, 0x42, 0x13, 0x11]; // pre-frame line noise
    wire.extend_from_slice(&framed(&[0x8A, 0x02]));
    device.write_all(&wire).await.unwrap();

    let frame = timeout(TICK, frames.recv()).await.unwrap().unwrap();
    assert!(matches!(frame, AnyFrame::ModemStatus(ref s) if s.status() == 0x02));
}

#[tokio::test]
async fn transport_close_mid_frame_reports_truncation() {
    let (xbee, mut device) = connect();
    let mut events = xbee.events();

    // Delimiter + length announcing 5 payload bytes, then only 2 of them.
    device
        .write_all(&[0x7E, 0x00, 0x05, 0x08, 0x01])
        .await
        .unwrap();
    drop(device);

    let event = timeout(TICK, events.recv()).await.unwrap().unwrap();
    assert_eq!(event, LinkEvent::TruncatedFrame { expected: 5 });
    let event = timeout(TICK, events.recv()).await.unwrap().unwrap();
    assert_eq!(event, LinkEvent::Closed);

    // The task winds down once the transport is gone.
    timeout(TICK, xbee.shutdown()).await.unwrap().unwrap();
}

#[tokio::test]
async fn malformed_body_reported_and_loop_survives() {
    let (xbee, mut device) = connect();
    let mut frames = xbee.subscribe();
    let mut events = xbee.events();

    // Valid checksum, but an AT command response needs five bytes.
    device.write_all(&framed(&[0x88, 0x01])).await.unwrap();
    device.write_all(&framed(&[0x8A, 0x00])).await.unwrap();

    let event = timeout(TICK, events.recv()).await.unwrap().unwrap();
    assert_eq!(
        event,
        LinkEvent::MalformedFrame {
            kind: FrameKind::AtCommandResponse,
            expected: 5,
            actual: 2,
        }
    );
    let frame = timeout(TICK, frames.recv()).await.unwrap().unwrap();
    assert!(matches!(frame, AnyFrame::ModemStatus(_)));
}

#[tokio::test]
async fn recognized_but_undecoded_kind_delivered_raw() {
    let (xbee, mut device) = connect();
    let mut frames = xbee.subscribe();
    let mut events = xbee.events();

    device
        .write_all(&framed(&[0xA1, 0x01, 0x02, 0x03]))
        .await
        .unwrap();

    let event = timeout(TICK, events.recv()).await.unwrap().unwrap();
    assert_eq!(event, LinkEvent::UnknownKind { byte: 0xA1 });

    let frame = timeout(TICK, frames.recv()).await.unwrap().unwrap();
    match frame {
        AnyFrame::Unknown(raw) => {
            assert_eq!(raw.kind(), FrameKind::RouteRecordIndicator);
            assert_eq!(raw.wire_bytes(), &[0xA1, 0x01, 0x02, 0x03]);
        }
        other => panic!("expected Unknown, got {other}"),
    }
}

#[tokio::test]
async fn every_subscriber_sees_every_frame() {
    let (xbee, mut device) = connect();
    let mut first = xbee.subscribe();
    let mut second = xbee.subscribe();

    let body = ZigBeeReceivePacket::new(
        Addr64::from(0x0013A200AABBCCDD),
        NetAddr16::from(0x1234),
        0x01,
        b"hello",
    );
    device.write_all(&framed(body.wire_bytes())).await.unwrap();

    for receiver in [&mut first, &mut second] {
        let frame = timeout(TICK, receiver.recv()).await.unwrap().unwrap();
        match frame {
            AnyFrame::ZigBeeReceivePacket(pkt) => {
                assert_eq!(pkt.payload(), Some(&b"hello"[..]));
                assert_eq!(pkt.net_addr().to_u16(), 0x1234);
            }
            other => panic!("expected ZigBeeReceivePacket, got {other}"),
        }
    }
}

#[tokio::test]
async fn frames_arrive_in_validation_order() {
    let (host_side, mut device) = duplex(4096);
    let (reader, writer) = split(host_side);
    let xbee = XBee::spawn_with_config(
        reader,
        writer,
        EngineConfig {
            frame_channel_capacity: 8,
            event_channel_capacity: 8,
        },
    );
    let mut frames = xbee.subscribe();

    for status in 0..4u8 {
        device.write_all(&framed(&[0x8A, status])).await.unwrap();
    }
    for expected in 0..4u8 {
        let frame = timeout(TICK, frames.recv()).await.unwrap().unwrap();
        assert!(matches!(frame, AnyFrame::ModemStatus(ref s) if s.status() == expected));
    }
}

#[tokio::test]
async fn send_wraps_api_frames_in_uart_envelope() {
    let (mut xbee, mut device) = connect();

    let cmd = AtCommand::new(1, *b"NJ", Some(&[0xFF]));
    let expected = framed(cmd.wire_bytes());
    xbee.send(AnyFrame::from(cmd)).await.unwrap();

    let mut read = vec![0u8; expected.len()];
    timeout(TICK, device.read_exact(&mut read))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read, expected);
}

#[tokio::test]
async fn send_passes_raw_bytes_verbatim() {
    let (mut xbee, mut device) = connect();

    xbee.send(vec![0x01, 0x02, 0x03]).await.unwrap();
    let uart = UartFrame::new(vec![0x8A, 0x00]).unwrap();
    xbee.send(uart.clone()).await.unwrap();

    let mut read = vec![0u8; 3 + uart.raw_bytes().len()];
    timeout(TICK, device.read_exact(&mut read))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&read[..3], &[0x01, 0x02, 0x03]);
    assert_eq!(&read[3..], uart.raw_bytes().as_slice());
}

#[tokio::test]
async fn shutdown_mid_frame_discards_partial_state() {
    let (xbee, mut device) = connect();
    let mut frames = xbee.subscribe();

    // Delimiter and half a length field, then silence: the engine is
    // parked inside the frame when shutdown arrives.
    device.write_all(&[0x7E, 0x00]).await.unwrap();
    tokio::task::yield_now().await;

    assert!(xbee.is_running());
    timeout(TICK, xbee.shutdown()).await.unwrap().unwrap();
    assert!(frames.try_recv().is_err());
}
