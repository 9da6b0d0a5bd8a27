//! Interface commune des registres mappés

/// Trait définissant l'accès d'un CPU hôte à un bloc de registres.
///
/// Les offsets sont relatifs à la base du bloc ; le décodage d'adresse
/// global reste à la charge de la carte mémoire de l'émulateur. Un offset
/// non décodé est ignoré en écriture, comme sur le matériel.
pub trait RegisterInterface {
    /// Lit un registre
    fn read(&mut self, offset: u16) -> u8;

    /// Écrit un registre
    fn write(&mut self, offset: u16, data: u8);

    /// Écrit une suite d'octets à des offsets consécutifs
    fn write_block(&mut self, offset: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.write(offset.wrapping_add(i as u16), byte);
        }
    }

    /// Rejoue la même valeur sur un registre unique
    fn write_repeated(&mut self, offset: u16, data: u8, count: usize) {
        for _ in 0..count {
            self.write(offset, data);
        }
    }
}
