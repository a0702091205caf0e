use crate::error::SimError;
use crate::types::Mode;

pub const DEFAULT_INSERT_SIZE: usize = 180;
pub const DEFAULT_REGION_LENGTH: usize = 200_000;

/// Resolved settings for one simulation run. Assembled from the CLI layer,
/// validated once, then read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub mode: Mode,
    pub read_length: usize,
    pub coverage: f64,
    pub insert_size: usize,
    pub systematic: bool,
    pub region_length: usize,
    pub name_prefix: String,
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.read_length == 0 {
            return Err(SimError::Config("read length must be positive".into()));
        }
        if !(self.coverage > 0.0) {
            return Err(SimError::Config("coverage must be positive".into()));
        }
        if self.insert_size == 0 {
            return Err(SimError::Config("insert size must be positive".into()));
        }
        if self.region_length == 0 {
            return Err(SimError::Config("region length must be positive".into()));
        }
        if self.mode == Mode::Contig && self.systematic {
            return Err(SimError::Config(
                "systematic placement is not supported in contig mode".into(),
            ));
        }
        if self.mode == Mode::Pacbio && !self.systematic && self.read_length <= 5 {
            return Err(SimError::Config(
                "read length must exceed 5 for the long-read length model".into(),
            ));
        }
        Ok(())
    }

    /// The span an offset must leave room for within its region: one read
    /// for single-read modes, one whole insert for paired modes.
    pub fn anchor_length(&self) -> usize {
        match self.mode {
            Mode::Pe | Mode::Mp => self.insert_size,
            Mode::Se | Mode::Pacbio | Mode::Contig => self.read_length,
        }
    }

    /// Overlap carried between adjacent regions of a chunked sequence, so
    /// fragments placed near a region's nominal end still fit entirely.
    pub fn region_margin(&self) -> usize {
        match self.mode {
            Mode::Se | Mode::Pe | Mode::Mp => self.insert_size,
            Mode::Pacbio | Mode::Contig => self.read_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(mode: Mode) -> SimConfig {
        SimConfig {
            mode,
            read_length: 100,
            coverage: 2.0,
            insert_size: DEFAULT_INSERT_SIZE,
            systematic: false,
            region_length: DEFAULT_REGION_LENGTH,
            name_prefix: "r".to_string(),
            seed: Some(1),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        for mode in [Mode::Se, Mode::Pe, Mode::Mp, Mode::Pacbio, Mode::Contig] {
            assert!(base_config(mode).validate().is_ok(), "{mode} should validate");
        }
    }

    #[test]
    fn test_zero_arguments_rejected() {
        let mut config = base_config(Mode::Se);
        config.read_length = 0;
        assert!(config.validate().is_err());

        let mut config = base_config(Mode::Se);
        config.coverage = 0.0;
        assert!(config.validate().is_err());

        let mut config = base_config(Mode::Pe);
        config.insert_size = 0;
        assert!(config.validate().is_err());

        let mut config = base_config(Mode::Se);
        config.region_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_contig_rejects_systematic() {
        let mut config = base_config(Mode::Contig);
        config.systematic = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pacbio_needs_room_for_length_model() {
        let mut config = base_config(Mode::Pacbio);
        config.read_length = 5;
        assert!(config.validate().is_err());
        config.systematic = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_anchor_and_margin_follow_mode() {
        assert_eq!(base_config(Mode::Se).anchor_length(), 100);
        assert_eq!(base_config(Mode::Pe).anchor_length(), DEFAULT_INSERT_SIZE);
        assert_eq!(base_config(Mode::Pacbio).anchor_length(), 100);

        assert_eq!(base_config(Mode::Se).region_margin(), DEFAULT_INSERT_SIZE);
        assert_eq!(base_config(Mode::Mp).region_margin(), DEFAULT_INSERT_SIZE);
        assert_eq!(base_config(Mode::Contig).region_margin(), 100);
    }
}
