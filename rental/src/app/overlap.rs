//! Double-booking policy
//!
//! By default two leases of the same car may cover the same days. The
//! `Reject` policy refuses a lease whose period overlaps another lease of the
//! same car. The check reads the car's leases before writing and takes no
//! lock, so concurrent bookings can still race past it.

use crate::domain::entities::{LeaseId, LeasePeriod, LeaseRecord};

/// How the lease manager treats overlapping bookings of one car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    #[default]
    Allow,
    Reject,
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlapPolicy::Allow => write!(f, "allow"),
            OverlapPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(OverlapPolicy::Allow),
            "reject" => Ok(OverlapPolicy::Reject),
            _ => Err(format!("Unknown overlap policy: {}", s)),
        }
    }
}

/// First lease in `existing` whose period overlaps `period`
///
/// The lease being updated is passed as `exclude` so it does not conflict
/// with its own stored row.
pub fn find_conflict<'a>(
    period: &LeasePeriod,
    existing: &'a [LeaseRecord],
    exclude: Option<LeaseId>,
) -> Option<&'a LeaseRecord> {
    existing
        .iter()
        .filter(|lease| Some(lease.id) != exclude)
        .find(|lease| lease.period.overlaps(period))
}
