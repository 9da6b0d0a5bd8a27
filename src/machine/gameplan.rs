//! Carte GamePlan : processeur de tracé et liaison son

use log::info;

use crate::audio::{GameSide, InterCpuMailbox, SharedMailbox, SoundSide};
use crate::config::EmulatorConfig;
use crate::error::CoreResult;
use crate::video::{GamePlanVariant, PenSurface, VectorDrawEngine};

pub struct GamePlanBoard {
    variant: GamePlanVariant,
    video: VectorDrawEngine<PenSurface>,
    mailbox: SharedMailbox,
}

impl GamePlanBoard {
    pub fn new(variant: GamePlanVariant) -> Self {
        Self {
            variant,
            video: VectorDrawEngine::new(variant.quirks()),
            mailbox: SharedMailbox::default(),
        }
    }

    /// Construit la carte du jeu configuré
    pub fn from_config(config: &EmulatorConfig) -> CoreResult<Self> {
        let variant: GamePlanVariant = config.machine.game.parse()?;
        let log_ignored = config.debug.log_ignored_writes;

        let mut video = VectorDrawEngine::new(variant.quirks());
        video.set_log_ignored_writes(log_ignored);
        let mut mailbox = InterCpuMailbox::new();
        mailbox.set_log_ignored_writes(log_ignored);

        info!("Carte GamePlan prête pour {} ({:?})", variant, variant.quirks());
        Ok(Self {
            variant,
            video,
            mailbox: SharedMailbox::new(mailbox),
        })
    }

    pub fn variant(&self) -> GamePlanVariant {
        self.variant
    }

    pub fn video(&self) -> &VectorDrawEngine<PenSurface> {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut VectorDrawEngine<PenSurface> {
        &mut self.video
    }

    pub fn mailbox(&self) -> &SharedMailbox {
        &self.mailbox
    }

    pub fn game_side(&self) -> GameSide {
        self.mailbox.game_side()
    }

    pub fn sound_side(&self) -> SoundSide {
        self.mailbox.sound_side()
    }
}
