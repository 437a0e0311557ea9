//! Room-level inspection heuristics.
//!
//! Each room yields at most one finding, chosen by the first matching
//! category in the room name (case-insensitive):
//! kitchen, bathroom, bedroom, living/lounge. Unmatched rooms yield nothing.

use rust_decimal::Decimal;

use proptech_leasing::{InspectionFinding, RoomPanorama, Severity};

const KITCHEN_ISSUE: &str =
    "Kitchen fixtures showing age; taps and cabinet hinges may need replacement within 12 months";
const BATHROOM_ISSUE: &str =
    "Grouting between tiles shows early signs of moisture penetration; re-sealing recommended";
const BEDROOM_ISSUE: &str = "Minor hairline cracks observed on interior walls; cosmetic repair advised";
const LIVING_ISSUE: &str =
    "Wall paint showing minor scuffing in high-traffic areas; repainting recommended before next tenant";

/// Finding for a single room at the given overall condition score.
pub fn room_finding(room: &RoomPanorama, condition_score: f64) -> Option<InspectionFinding> {
    let name = room.room_name.to_lowercase();
    let finding = |issue: &str, severity: Severity, cost: i64| InspectionFinding {
        room: room.room_name.clone(),
        issue: issue.to_string(),
        severity,
        estimated_cost: Decimal::from(cost),
    };

    if name.contains("kitchen") {
        let severity = if condition_score < 0.7 { Severity::Medium } else { Severity::Low };
        Some(finding(KITCHEN_ISSUE, severity, 2800))
    } else if name.contains("bathroom") {
        let severity = if condition_score < 0.6 { Severity::High } else { Severity::Medium };
        Some(finding(BATHROOM_ISSUE, severity, 1500))
    } else if name.contains("bedroom") {
        (condition_score < 0.75).then(|| finding(BEDROOM_ISSUE, Severity::Low, 800))
    } else if name.contains("living") || name.contains("lounge") {
        let severity = if condition_score < 0.7 { Severity::Medium } else { Severity::Low };
        Some(finding(LIVING_ISSUE, severity, 2200))
    } else {
        None
    }
}

/// Findings for every room, in tour order.
pub fn room_findings(rooms: &[RoomPanorama], condition_score: f64) -> Vec<InspectionFinding> {
    rooms
        .iter()
        .filter_map(|room| room_finding(room, condition_score))
        .collect()
}
