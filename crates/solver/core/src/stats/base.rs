use super::ivs::{IvTriple, StatKind};

/// Fixed per-species (or per-form) base stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: u16,
    pub defense: u16,
    pub stamina: u16,
}

impl BaseStats {
    pub const fn new(attack: u16, defense: u16, stamina: u16) -> Self {
        Self {
            attack,
            defense,
            stamina,
        }
    }

    pub const fn get(&self, stat: StatKind) -> u16 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Stamina => self.stamina,
        }
    }

    /// Base stats plus individual values, per stat.
    pub const fn with_ivs(&self, ivs: IvTriple) -> (u32, u32, u32) {
        (
            self.attack as u32 + ivs.attack as u32,
            self.defense as u32 + ivs.defense as u32,
            self.stamina as u32 + ivs.stamina as u32,
        )
    }
}

impl core::fmt::Display for BaseStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}/{}", self.attack, self.defense, self.stamina)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_add_ivs_per_stat() {
        let base = BaseStats::new(198, 189, 190);
        let ivs = IvTriple::new(15, 0, 7).unwrap();
        assert_eq!(base.with_ivs(ivs), (213, 189, 197));
        assert_eq!(base.get(StatKind::Defense), 189);
        assert_eq!(base.to_string(), "198/189/190");
    }
}
