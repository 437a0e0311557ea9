//! 360° virtual tours and the inspection reports derived from them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use proptech_core::{DomainError, DomainResult, Entity, PropertyId, TourId, ValueObject};

/// One room panorama within a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPanorama {
    pub room_name: String,
    pub panorama_url: String,
    pub description: String,
}

impl RoomPanorama {
    pub fn new(
        room_name: impl Into<String>,
        panorama_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            room_name: room_name.into(),
            panorama_url: panorama_url.into(),
            description: description.into(),
        }
    }
}

impl ValueObject for RoomPanorama {}

/// Overall property condition derived from a condition score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallCondition {
    Good,
    Fair,
    Poor,
    Critical,
}

impl OverallCondition {
    /// `>= 0.8` Good, `>= 0.6` Fair, `>= 0.4` Poor, otherwise Critical.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Good
        } else if score >= 0.6 {
            Self::Fair
        } else if score >= 0.4 {
            Self::Poor
        } else {
            Self::Critical
        }
    }
}

impl core::fmt::Display for OverallCondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

/// A single defect found during a virtual inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionFinding {
    pub room: String,
    pub issue: String,
    pub severity: Severity,
    pub estimated_cost: Decimal,
}

impl ValueObject for InspectionFinding {}

/// Condition report produced by analysing a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    property_id: PropertyId,
    overall_condition: OverallCondition,
    condition_score: f64,
    findings: Vec<InspectionFinding>,
    estimated_repair_cost: Decimal,
    confidence_score: f64,
    inspected_at: DateTime<Utc>,
}

impl InspectionReport {
    /// Scores are clamped to `[0, 1]`.
    pub fn new(
        property_id: PropertyId,
        overall_condition: OverallCondition,
        condition_score: f64,
        findings: Vec<InspectionFinding>,
        estimated_repair_cost: Decimal,
        confidence_score: f64,
    ) -> Self {
        Self {
            property_id,
            overall_condition,
            condition_score: clamp_unit(condition_score),
            findings,
            estimated_repair_cost,
            confidence_score: clamp_unit(confidence_score),
            inspected_at: Utc::now(),
        }
    }

    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    pub fn overall_condition(&self) -> OverallCondition {
        self.overall_condition
    }

    pub fn condition_score(&self) -> f64 {
        self.condition_score
    }

    pub fn findings(&self) -> &[InspectionFinding] {
        &self.findings
    }

    pub fn estimated_repair_cost(&self) -> Decimal {
        self.estimated_repair_cost
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    pub fn inspected_at(&self) -> DateTime<Utc> {
        self.inspected_at
    }
}

/// A set of room panoramas for one property plus its latest inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualTour {
    id: TourId,
    property_id: PropertyId,
    created_at: DateTime<Utc>,
    rooms: Vec<RoomPanorama>,
    inspection: Option<InspectionReport>,
}

impl VirtualTour {
    pub fn new(id: TourId, property_id: PropertyId, rooms: Vec<RoomPanorama>) -> DomainResult<Self> {
        if id.is_blank() {
            return Err(DomainError::validation("tour id is required"));
        }
        if property_id.is_blank() {
            return Err(DomainError::validation("tour property id is required"));
        }
        Ok(Self {
            id,
            property_id,
            created_at: Utc::now(),
            rooms,
            inspection: None,
        })
    }

    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn rooms(&self) -> &[RoomPanorama] {
        &self.rooms
    }

    pub fn inspection(&self) -> Option<&InspectionReport> {
        self.inspection.as_ref()
    }

    /// Replace (never merge) the current inspection report.
    pub fn set_inspection(&mut self, report: InspectionReport) {
        self.inspection = Some(report);
    }
}

impl Entity for VirtualTour {
    type Id = TourId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
