/// Which set of order timestamps an aggregation run reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Actually recorded execution timestamps.
    Realized,
    /// Originally scheduled waypoint / time-slot values.
    Foreseen,
}

impl AggregationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMode::Realized => "realized",
            AggregationMode::Foreseen => "foreseen",
        }
    }
}
