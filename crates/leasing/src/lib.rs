//! Leasing domain module: landlord, properties, tenants, leases and virtual tours.
//!
//! Pure domain data with construction-time validation (no IO, no storage).

pub mod landlord;
pub mod lease;
pub mod property;
pub mod tenant;
pub mod tour;

pub use landlord::Landlord;
pub use lease::LeaseAgreement;
pub use property::Property;
pub use tenant::Tenant;
pub use tour::{
    InspectionFinding, InspectionReport, OverallCondition, RoomPanorama, Severity, VirtualTour,
};
