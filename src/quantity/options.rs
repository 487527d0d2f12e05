use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Construction choices and electrical counts for a room.
///
/// Counts are signed because host records may carry unchecked values;
/// [`MaterialOptions::validate`] rejects negatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialOptions {
    pub use_osb_floor: bool,
    pub use_suspended_ceiling: bool,
    pub socket_count: i32,
    pub switch_count: i32,
}

/// Validated electrical fixture counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureCounts {
    pub sockets: u32,
    pub switches: u32,
}

impl MaterialOptions {
    /// Enables the OSB subfloor.
    #[must_use]
    pub fn with_osb_floor(mut self) -> Self {
        self.use_osb_floor = true;
        self
    }

    /// Enables the suspended ceiling.
    #[must_use]
    pub fn with_suspended_ceiling(mut self) -> Self {
        self.use_suspended_ceiling = true;
        self
    }

    /// Sets socket and switch counts.
    #[must_use]
    pub fn with_fixtures(mut self, sockets: i32, switches: i32) -> Self {
        self.socket_count = sockets;
        self.switch_count = switches;
        self
    }

    /// Checks the counts are non-negative.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::NegativeCount` for the first negative count.
    pub fn validate(&self) -> Result<FixtureCounts, OptionsError> {
        Ok(FixtureCounts {
            sockets: count("socketCount", self.socket_count)?,
            switches: count("switchCount", self.switch_count)?,
        })
    }
}

fn count(field: &'static str, value: i32) -> Result<u32, OptionsError> {
    u32::try_from(value).map_err(|_| OptionsError::NegativeCount {
        field,
        value: i64::from(value),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bare_room() {
        let options = MaterialOptions::default();
        assert!(!options.use_osb_floor && !options.use_suspended_ceiling);
        assert_eq!(options.validate().unwrap(), FixtureCounts::default());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = MaterialOptions::default().with_fixtures(2, -1).validate().unwrap_err();
        assert_eq!(
            err,
            OptionsError::NegativeCount {
                field: "switchCount",
                value: -1
            }
        );
    }

    #[test]
    fn partial_record_uses_defaults() {
        let options: MaterialOptions = serde_json::from_str(r#"{"useOsbFloor":true}"#).unwrap();
        assert_eq!(options, MaterialOptions::default().with_osb_floor());
    }
}
