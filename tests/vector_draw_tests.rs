//! Tests du processeur de tracé GamePlan

use pixel_arcade_raster::*;

fn engine() -> VectorDrawEngine {
    VectorDrawEngine::new(VariantQuirks::empty())
}

#[test]
fn test_initial_state() {
    let engine = engine();
    assert_eq!(engine.state(), &DrawState::default());
    assert_eq!(engine.state().color, 7);
    assert_eq!(engine.state().mode, None);
}

#[test]
fn test_offset1_ignored_before_mode_is_set() {
    let mut engine = engine();
    engine.write(1, 0x55);
    assert_eq!(engine.state(), &DrawState::default());
}

#[test]
fn test_absolute_position_and_clear() {
    let mut engine = engine();
    engine.write(0, 1);
    engine.write(1, 0x50);
    assert_eq!(engine.state().x, 0x50);

    engine.write(0, 2);
    engine.write(1, 0x60);
    assert_eq!(engine.state().y, 0x60);

    // Couleur 4 mémorisée comme couleur d'effacement
    engine.write(0, 0);
    engine.write(3, 0x04);
    engine.write(2, 7);
    assert_eq!(engine.state().clear_color, 4);

    engine.write(0, 0);
    engine.write(1, 0x00);
    assert_eq!(engine.state().clear_color, 4);
    assert!(engine.bitmap().pixels().iter().all(|&p| p == 4));
    assert!(engine.display().pixels().iter().all(|&p| p == 4));
    // L'effacement ne déplace pas le curseur
    assert_eq!((engine.state().x, engine.state().y), (0x50, 0x60));
}

#[test]
fn test_mode3_zero_clears() {
    let mut engine = engine();
    engine.write(0, 3);
    engine.write(1, 0x00);
    assert!(engine.display().pixels().iter().all(|&p| p == 0));

    engine.write(1, 0x12);
    assert_eq!(engine.state().x, 0);
}

#[test]
fn test_move_down_right_and_plot() {
    let mut engine = engine();
    engine.write(0, 1);
    engine.write(1, 10);
    engine.write(0, 2);
    engine.write(1, 20);
    engine.write(0, 0);
    engine.write(3, 0x05);

    engine.write(1, 0x37);

    assert_eq!((engine.state().x, engine.state().y), (11, 21));
    assert_eq!(engine.display().pixel(11, 21), Some(5));
    assert_eq!(engine.bitmap().pixel(11, 21), Some(5));
    assert_eq!(engine.display().pixel(10, 20), Some(0));
}

#[test]
fn test_move_up_left() {
    let mut engine = engine();
    engine.write(0, 0);
    // 0x20|0x80 : y-1, 0x10|0x40 : x-1, depuis (0, 0) : débordement
    engine.write(1, 0xF0);
    assert_eq!((engine.state().x, engine.state().y), (0xFF, 0xFF));
    assert_eq!(engine.display().pixel(255, 255), Some(7));

    // Aucun bit de déplacement : tracé sur place
    engine.write(1, 0x01);
    assert_eq!((engine.state().x, engine.state().y), (0xFF, 0xFF));
}

#[test]
fn test_kaos_colour_from_draw_command() {
    let mut engine = VectorDrawEngine::new(GamePlanVariant::Kaos.quirks());
    engine.write(0, 0);
    engine.write(1, 0x12);
    // !0x12 & 7 = 5
    assert_eq!(engine.state().color, 5);
    assert_eq!(engine.display().pixel(1, 0), Some(5));
}

#[test]
fn test_colour_register_masks_to_three_bits() {
    let mut engine = engine();
    engine.write(0, 0);
    engine.write(3, 0xFE);
    assert_eq!(engine.state().color, 6);
}

#[test]
fn test_clear_latch_requires_seven() {
    let mut engine = engine();
    engine.write(0, 0);
    engine.write(3, 3);
    engine.write(2, 6);
    assert_eq!(engine.state().clear_color, 0);
    engine.write(2, 7);
    assert_eq!(engine.state().clear_color, 3);
}

#[test]
fn test_unusual_colour_request_honoured_by_every_game() {
    for variant in GamePlanVariant::ALL {
        let mut engine = VectorDrawEngine::new(variant.quirks());
        engine.write(0, 1);
        engine.write(3, 0xFA);
        assert_eq!(engine.state().clear_color, 2, "{}", variant);
        assert_eq!(engine.state().clear_override, Some(2), "{}", variant);
    }
}

#[test]
fn test_override_masks_latch_only_on_megatack() {
    let mut engine = VectorDrawEngine::new(GamePlanVariant::KillerComet.quirks());
    engine.write(0, 1);
    engine.write(3, 0xFA);
    engine.write(0, 0);
    engine.write(3, 6);
    engine.write(2, 7);
    assert_eq!(engine.state().clear_color, 6);
    assert_eq!(engine.state().clear_override, Some(2));
}

/// Comportement reconnu comme bancal sur la carte d'origine : la couleur
/// imposée masque la mémorisation normale jusqu'au prochain effacement, puis
/// disparaît même si le jeu la redemande implicitement.
#[test]
fn test_known_quirk_clear_override_precedence() {
    let mut engine = VectorDrawEngine::new(GamePlanVariant::Megatack.quirks());

    engine.write(0, 1);
    engine.write(3, 0xFA);
    assert_eq!(engine.state().clear_color, 2);
    assert_eq!(engine.state().clear_override, Some(2));

    // La mémorisation normale est masquée
    engine.write(0, 0);
    engine.write(3, 6);
    engine.write(2, 7);
    assert_eq!(engine.state().clear_color, 2);

    engine.write(1, 0x00);
    assert!(engine.display().pixels().iter().all(|&p| p == 2));
    assert_eq!(engine.state().clear_override, None);
    // La couleur d'effacement reste celle imposée jusqu'au prochain latch
    assert_eq!(engine.state().clear_color, 2);

    engine.write(2, 7);
    assert_eq!(engine.state().clear_color, 6);
}

#[test]
fn test_unusual_colour_rejects_ff() {
    let mut engine = VectorDrawEngine::new(GamePlanVariant::Megatack.quirks());
    engine.write(0, 2);
    engine.write(3, 0xFF);
    assert_eq!(engine.state().clear_override, None);
    engine.write(3, 0xF7);
    assert_eq!(engine.state().clear_override, None);
}

#[test]
fn test_unknown_offsets_are_silent() {
    let mut engine = engine();
    engine.set_log_ignored_writes(true);
    let before = *engine.state();
    engine.write(4, 0x12);
    engine.write(0x100, 0x34);
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.read(0), 0);
}
