//! Tests de la boîte aux lettres jeu/son

use pixel_arcade_raster::*;
use std::thread;

#[test]
fn test_request_then_poll() {
    let mut mailbox = InterCpuMailbox::new();
    mailbox.request_sound(5);
    assert_eq!(mailbox.status(), REQUEST_PENDING);

    assert_eq!(mailbox.poll_request(), 5);
    assert_eq!(mailbox.status(), 0);
    // La commande reste lisible
    assert_eq!(mailbox.poll_request(), 5);
}

#[test]
fn test_acknowledge_is_not_consumed() {
    let mut mailbox = InterCpuMailbox::new();
    mailbox.acknowledge(5);
    assert_eq!(mailbox.check_ack(), 5);
    assert_eq!(mailbox.check_ack(), 5);
}

#[test]
fn test_request_resets_ack() {
    let mut mailbox = InterCpuMailbox::new();
    mailbox.acknowledge(9);
    mailbox.request_sound(3);
    assert_eq!(mailbox.check_ack(), 0);
}

#[test]
fn test_second_request_overwrites() {
    let mut mailbox = InterCpuMailbox::new();
    mailbox.request_sound(1);
    mailbox.request_sound(2);
    assert_eq!(mailbox.poll_request(), 2);
    assert_eq!(mailbox.status(), 0);
}

#[test]
fn test_closed_gate_drops_request() {
    let mut mailbox = InterCpuMailbox::new();
    mailbox.request_sound(4);
    mailbox.poll_request();
    mailbox.acknowledge(4);

    mailbox.set_gate(GateLine::Closed);
    mailbox.request_sound(8);
    assert_eq!(
        mailbox.state(),
        &MailboxState {
            pending_command: 4,
            request_flag: false,
            ack_value: 4,
        }
    );

    mailbox.set_gate(GateLine::Floating);
    mailbox.request_sound(8);
    assert_eq!(mailbox.state().pending_command, 8);
}

#[test]
fn test_pcr_decodes_cb2() {
    assert_eq!(GateLine::from_pcr(0xC0), GateLine::Closed);
    assert_eq!(GateLine::from_pcr(0xCE), GateLine::Closed);
    assert_eq!(GateLine::from_pcr(0xE0), GateLine::Open);
    assert_eq!(GateLine::from_pcr(0x20), GateLine::Floating);
    assert_eq!(GateLine::default(), GateLine::Floating);
}

#[test]
fn test_via_register_views() {
    let shared = SharedMailbox::default();
    let mut game = shared.game_side();
    let mut sound = shared.sound_side();

    game.write(VIA_PCR, 0xE0);
    game.write(VIA_ORA, 0x21);
    assert_eq!(sound.read(VIA_IFR), REQUEST_PENDING);
    assert_eq!(sound.read(VIA_ORA), 0x21);
    assert_eq!(sound.read(VIA_IFR), 0);

    sound.write(VIA_ORB, 0x21);
    assert_eq!(game.read(VIA_ORB), 0x21);

    // CB2 bas : le CPU son est en reset
    game.write(VIA_PCR, 0xC0);
    game.write(VIA_ORA, 0x30);
    assert_eq!(sound.read(VIA_IFR), 0);
    assert_eq!(shared.lock().gate(), GateLine::Closed);
}

#[test]
fn test_handshake_across_threads() {
    let shared = SharedMailbox::default();
    let mut sound = shared.sound_side();

    let sound_cpu = thread::spawn(move || {
        let mut handled = Vec::new();
        while handled.len() < 3 {
            if sound.read(VIA_IFR) == REQUEST_PENDING {
                let command = sound.read(VIA_ORA);
                handled.push(command);
                sound.write(VIA_ORB, command);
            } else {
                thread::yield_now();
            }
        }
        handled
    });

    let mut game = shared.game_side();
    for command in [1u8, 2, 3] {
        game.write(VIA_ORA, command);
        while game.read(VIA_ORB) != command {
            thread::yield_now();
        }
    }

    assert_eq!(sound_cpu.join().unwrap(), vec![1, 2, 3]);
}
