pub mod availability;
pub mod specialization;

pub use availability::AvailabilityService;
pub use specialization::{IconLookup, SpecializationIcon};
