//! HUD text formatting

use super::snapshot::Snapshot;

/// Score as a zero-padded six digit string
pub fn score_label(score: u64) -> String {
    format!("{:06}", score)
}

pub fn high_score_label(high_score: u64) -> String {
    format!("High Score: {:06}", high_score)
}

/// Live tunables readout
pub fn tunables_label(snapshot: &Snapshot) -> String {
    format!(
        "Gravity: {:.2}  Jump: {:.1}  Speed: x{:.1}",
        snapshot.tunables.gravity, snapshot.tunables.jump_strength, snapshot.speed_multiplier
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::RunState;

    #[test]
    fn test_labels() {
        assert_eq!(score_label(0), "000000");
        assert_eq!(score_label(42), "000042");
        assert_eq!(score_label(1_234_567), "1234567");
        assert_eq!(high_score_label(7), "High Score: 000007");
    }

    #[test]
    fn test_tunables_label() {
        let config = Config::default();
        let state = RunState::new(&config);
        let snapshot = Snapshot::capture(&state, &config.player);
        assert_eq!(tunables_label(&snapshot), "Gravity: 0.20  Jump: 6.0  Speed: x1.0");
    }
}
