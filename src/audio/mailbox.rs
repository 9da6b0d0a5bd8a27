//! Boîte aux lettres requête/acquittement entre CPU
//!
//! Registres VIA utilisés :
//!
//! | Côté | Offset | Accès | Effet |
//! |------|--------|-------|-------|
//! | jeu  | $0 ORB | lecture  | valeur d'acquittement |
//! | jeu  | $1 ORA | écriture | commande sonore |
//! | jeu  | $C PCR | écriture | état de la ligne CB2 (porte) |
//! | son  | $0 ORB | écriture | acquittement |
//! | son  | $1 ORA | lecture  | commande en attente (efface la requête) |
//! | son  | $D IFR | lecture  | $40 tant qu'une requête est en attente |

use log::trace;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::memory::RegisterInterface;

/// Valeur du registre d'état tant qu'une requête n'a pas été lue
pub const REQUEST_PENDING: u8 = 0x40;

pub const VIA_ORB: u16 = 0x00;
pub const VIA_ORA: u16 = 0x01;
pub const VIA_PCR: u16 = 0x0C;
pub const VIA_IFR: u16 = 0x0D;

/// État de la ligne CB2 qui conditionne les commandes sonores.
///
/// Le décodage est le même pour tous les jeux GamePlan : seul un jeu pilote
/// réellement CB2 à l'état bas, les autres la laissent flottante (l'état de
/// reset), ce qui ne bloque aucune commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateLine {
    Open,
    /// Ligne basse : le CPU son est tenu en reset, les commandes sont perdues
    Closed,
    #[default]
    Floating,
}

impl GateLine {
    /// Décode les bits CB2 (7-5) du registre PCR
    pub fn from_pcr(pcr: u8) -> Self {
        match pcr & 0xE0 {
            0xC0 => GateLine::Closed,
            0xE0 => GateLine::Open,
            _ => GateLine::Floating,
        }
    }
}

/// Contenu des deux verrous
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MailboxState {
    pub pending_command: u8,
    pub request_flag: bool,
    pub ack_value: u8,
}

/// Verrous de requête et d'acquittement.
///
/// Une seule requête peut être en attente : une nouvelle commande écrase
/// la précédente.
#[derive(Debug, Default)]
pub struct InterCpuMailbox {
    state: MailboxState,
    gate: GateLine,
    log_ignored_writes: bool,
}

impl InterCpuMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_log_ignored_writes(&mut self, enabled: bool) {
        self.log_ignored_writes = enabled;
    }

    pub fn state(&self) -> &MailboxState {
        &self.state
    }

    pub fn gate(&self) -> GateLine {
        self.gate
    }

    pub fn set_gate(&mut self, gate: GateLine) {
        self.gate = gate;
    }

    /// Écriture du PCR côté jeu
    pub fn write_control(&mut self, pcr: u8) {
        self.gate = GateLine::from_pcr(pcr);
    }

    /// Côté jeu : dépose une commande sonore
    pub fn request_sound(&mut self, command: u8) {
        if self.gate == GateLine::Closed {
            if self.log_ignored_writes {
                trace!("commande sonore {:02x} ignorée: CB2 bas", command);
            }
            return;
        }

        self.state.pending_command = command;
        self.state.ack_value = 0;
        self.state.request_flag = true;
    }

    /// Côté son : lit la commande et efface la requête
    pub fn poll_request(&mut self) -> u8 {
        self.state.request_flag = false;
        self.state.pending_command
    }

    /// Côté son : registre d'état
    pub fn status(&self) -> u8 {
        if self.state.request_flag {
            REQUEST_PENDING
        } else {
            0
        }
    }

    /// Côté son : dépose l'acquittement
    pub fn acknowledge(&mut self, value: u8) {
        self.state.ack_value = value;
    }

    /// Côté jeu : relit l'acquittement sans le consommer
    pub fn check_ack(&self) -> u8 {
        self.state.ack_value
    }

    pub fn game_read(&self, offset: u16) -> u8 {
        match offset {
            VIA_ORB => self.check_ack(),
            _ => 0,
        }
    }

    pub fn game_write(&mut self, offset: u16, data: u8) {
        match offset {
            VIA_ORA => self.request_sound(data),
            VIA_PCR => self.write_control(data),
            _ => self.ignore("jeu", offset, data),
        }
    }

    pub fn sound_read(&mut self, offset: u16) -> u8 {
        match offset {
            VIA_ORA => self.poll_request(),
            VIA_IFR => self.status(),
            _ => 0,
        }
    }

    pub fn sound_write(&mut self, offset: u16, data: u8) {
        match offset {
            VIA_ORB => self.acknowledge(data),
            _ => self.ignore("son", offset, data),
        }
    }

    fn ignore(&self, side: &str, offset: u16, data: u8) {
        if self.log_ignored_writes {
            trace!("VIA {}: écriture ignorée offset {:x} = {:02x}", side, offset, data);
        }
    }
}

/// Boîte aux lettres partagée entre deux CPU exécutés sur des threads
/// différents. Chaque opération prend le verrou une seule fois.
#[derive(Debug, Clone, Default)]
pub struct SharedMailbox {
    inner: Arc<Mutex<InterCpuMailbox>>,
}

impl SharedMailbox {
    pub fn new(mailbox: InterCpuMailbox) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mailbox)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, InterCpuMailbox> {
        self.inner.lock()
    }

    /// Vue des registres du CPU de jeu
    pub fn game_side(&self) -> GameSide {
        GameSide {
            mailbox: self.clone(),
        }
    }

    /// Vue des registres du CPU son
    pub fn sound_side(&self) -> SoundSide {
        SoundSide {
            mailbox: self.clone(),
        }
    }
}

/// Registres VIA vus par le CPU de jeu
#[derive(Debug, Clone)]
pub struct GameSide {
    mailbox: SharedMailbox,
}

impl RegisterInterface for GameSide {
    fn read(&mut self, offset: u16) -> u8 {
        self.mailbox.lock().game_read(offset)
    }

    fn write(&mut self, offset: u16, data: u8) {
        self.mailbox.lock().game_write(offset, data);
    }
}

/// Registres VIA vus par le CPU son
#[derive(Debug, Clone)]
pub struct SoundSide {
    mailbox: SharedMailbox,
}

impl RegisterInterface for SoundSide {
    fn read(&mut self, offset: u16) -> u8 {
        self.mailbox.lock().sound_read(offset)
    }

    fn write(&mut self, offset: u16, data: u8) {
        self.mailbox.lock().sound_write(offset, data);
    }
}
