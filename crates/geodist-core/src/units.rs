//! Display units for rendered distances.

/// Unit suffix appended by [`format_distance`](crate::format_distance).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
}

impl DistanceUnit {
    /// Short symbol used as the rendered suffix.
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meters     => "m",
            DistanceUnit::Kilometers => "km",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
