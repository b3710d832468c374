//! # medmap-contracts
//!
//! Shared types and contracts for the MedMap Naga resource engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, data-adjacent helpers (the shared
//! status-from-stock rule, threshold defaults), and error types.

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod emergency;
pub mod error;
pub mod facility;
pub mod geo;
pub mod query;
pub mod resource;

#[cfg(test)]
mod tests {
    use super::*;
    use facility::{Facility, FacilityId, FacilityType};
    use resource::{status_for_stock, ResourceCategory, ResourceStatus};

    // ── Wire names ───────────────────────────────────────────────────────────

    #[test]
    fn facility_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FacilityType::HealthCenter).unwrap(),
            "\"health_center\""
        );
        assert_eq!(
            serde_json::to_string(&FacilityType::Pharmacy).unwrap(),
            "\"pharmacy\""
        );
    }

    #[test]
    fn resource_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ResourceStatus::OutOfStock).unwrap(),
            "\"out_of_stock\""
        );
        let decoded: ResourceStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(decoded, ResourceStatus::Available);
    }

    #[test]
    fn resource_category_round_trips() {
        for category in ResourceCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            let decoded: ResourceCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(category, decoded);
        }
    }

    // ── Status derivation ────────────────────────────────────────────────────

    #[test]
    fn zero_stock_is_out_of_stock_for_every_category() {
        for category in ResourceCategory::ALL {
            let threshold = category.default_low_stock_threshold();
            assert_eq!(status_for_stock(0, threshold), ResourceStatus::OutOfStock);
        }
    }

    #[test]
    fn stock_at_threshold_is_low() {
        for category in ResourceCategory::ALL {
            let threshold = category.default_low_stock_threshold();
            assert_eq!(status_for_stock(threshold, threshold), ResourceStatus::Low);
            assert_eq!(status_for_stock(1, threshold), ResourceStatus::Low);
        }
    }

    #[test]
    fn stock_above_threshold_is_available() {
        for category in ResourceCategory::ALL {
            let threshold = category.default_low_stock_threshold();
            assert_eq!(
                status_for_stock(threshold + 1, threshold),
                ResourceStatus::Available
            );
        }
    }

    #[test]
    fn default_thresholds_match_the_reference_table() {
        assert_eq!(ResourceCategory::Blood.default_low_stock_threshold(), 10);
        assert_eq!(ResourceCategory::Beds.default_low_stock_threshold(), 5);
        assert_eq!(ResourceCategory::Equipment.default_low_stock_threshold(), 5);
        assert_eq!(ResourceCategory::Medicines.default_low_stock_threshold(), 20);
    }

    // ── Facility helpers ─────────────────────────────────────────────────────

    #[test]
    fn only_hospitals_and_infirmaries_accept_emergencies() {
        assert!(FacilityType::Hospital.accepts_emergencies());
        assert!(FacilityType::Infirmary.accepts_emergencies());
        assert!(!FacilityType::HealthCenter.accepts_emergencies());
        assert!(!FacilityType::Pharmacy.accepts_emergencies());
    }

    #[test]
    fn facility_location_reads_coordinate_fields() {
        let facility = Facility {
            id: FacilityId(1),
            name: "Bicol Medical Center".to_string(),
            facility_type: FacilityType::Hospital,
            address: "Concepcion Pequeña, Naga City".to_string(),
            latitude: 13.6189,
            longitude: 123.1819,
            phone: "+63 54 472-8444".to_string(),
            is_public: true,
        };
        let point = facility.location();
        assert_eq!(point.lat, 13.6189);
        assert_eq!(point.lon, 123.1819);
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn error_access_denied_display() {
        let err = error::MedMapError::AccessDenied {
            reason: "staff role cannot edit stock".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("access denied"));
        assert!(msg.contains("staff role cannot edit stock"));
    }

    #[test]
    fn error_unknown_record_display() {
        let err = error::MedMapError::UnknownRecord {
            id: "3-blood-7".to_string(),
        };
        assert!(err.to_string().contains("3-blood-7"));
    }

    #[test]
    fn error_query_in_flight_display() {
        let err = error::MedMapError::QueryInFlight;
        assert!(err.to_string().contains("already in flight"));
    }

    #[test]
    fn error_invalid_request_display() {
        let err = error::MedMapError::InvalidRequest {
            reason: "contact number is required".to_string(),
        };
        assert!(err.to_string().contains("contact number is required"));
    }
}
