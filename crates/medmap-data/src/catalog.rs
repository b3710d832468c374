//! Static reference data for Naga City.
//!
//! All data in this module is hardcoded and fictional-but-plausible. It
//! stands in for a real facility registry and formulary in a production
//! deployment. Catalogs are built once at process start and are immutable
//! for the session.

use medmap_contracts::{
    facility::{Facility, FacilityId, FacilityType},
    resource::{ResourceCategory, ResourceDefinition, ResourceId},
};

fn facility(
    id: u32,
    name: &str,
    facility_type: FacilityType,
    address: &str,
    latitude: f64,
    longitude: f64,
    phone: &str,
) -> Facility {
    Facility {
        id: FacilityId(id),
        name: name.to_string(),
        facility_type,
        address: address.to_string(),
        latitude,
        longitude,
        phone: phone.to_string(),
        is_public: true,
    }
}

/// The eight city health facilities tracked by MedMap.
pub fn facilities() -> Vec<Facility> {
    vec![
        facility(
            1,
            "Bicol Medical Center",
            FacilityType::Hospital,
            "Concepcion Pequeña, Naga City",
            13.6189,
            123.1819,
            "+63 54 472-8444",
        ),
        facility(
            2,
            "Naga City Hospital",
            FacilityType::Hospital,
            "Balatas Road, Naga City",
            13.6290,
            123.1870,
            "+63 54 473-1100",
        ),
        facility(
            3,
            "San Antonio Infirmary",
            FacilityType::Infirmary,
            "San Antonio, Naga City",
            13.6250,
            123.1750,
            "+63 54 473-2200",
        ),
        facility(
            4,
            "Triangulo Health Center",
            FacilityType::HealthCenter,
            "Triangulo, Naga City",
            13.6200,
            123.1800,
            "+63 54 473-3300",
        ),
        facility(
            5,
            "Peñafrancia Health Center",
            FacilityType::HealthCenter,
            "Peñafrancia, Naga City",
            13.6150,
            123.1780,
            "+63 54 473-4400",
        ),
        facility(
            6,
            "Naga Central Pharmacy",
            FacilityType::Pharmacy,
            "Panganiban Drive, Naga City",
            13.6175,
            123.1825,
            "+63 54 473-5500",
        ),
        facility(
            7,
            "Mercury Drug Naga",
            FacilityType::Pharmacy,
            "Magsaysay Avenue, Naga City",
            13.6220,
            123.1840,
            "+63 54 473-6600",
        ),
        facility(
            8,
            "Lerma Health Center",
            FacilityType::HealthCenter,
            "Lerma, Naga City",
            13.6280,
            123.1760,
            "+63 54 473-7700",
        ),
    ]
}

fn definition(id: u32, name: &str, category: ResourceCategory) -> ResourceDefinition {
    ResourceDefinition {
        id: ResourceId(id),
        name: name.to_string(),
        category,
    }
}

/// The medicine formulary. Every facility stocks these.
pub fn medicines() -> Vec<ResourceDefinition> {
    [
        "Amoxicillin 500mg",
        "Paracetamol 500mg",
        "Ibuprofen 400mg",
        "Cetirizine 10mg",
        "Losartan 50mg",
        "Metformin 500mg",
        "Omeprazole 20mg",
        "Salbutamol Inhaler",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| definition(i as u32 + 1, name, ResourceCategory::Medicines))
    .collect()
}

/// The eight blood types. Stocked by hospitals and infirmaries.
///
/// Definition names are the bare type ("O+"); availability records carry
/// the display name "Blood Type O+".
pub fn blood_types() -> Vec<ResourceDefinition> {
    ["O+", "O-", "A+", "A-", "B+", "B-", "AB+", "AB-"]
        .iter()
        .enumerate()
        .map(|(i, name)| definition(i as u32 + 1, name, ResourceCategory::Blood))
        .collect()
}

/// Bed types. Stocked by hospitals and infirmaries.
pub fn bed_types() -> Vec<ResourceDefinition> {
    ["ER Beds", "Ward Beds", "ICU Beds"]
        .iter()
        .enumerate()
        .map(|(i, name)| definition(i as u32 + 1, name, ResourceCategory::Beds))
        .collect()
}

/// Equipment. Stocked by hospitals only.
pub fn equipment() -> Vec<ResourceDefinition> {
    ["Oxygen Tanks", "Ventilators", "Defibrillators", "Nebulizers"]
        .iter()
        .enumerate()
        .map(|(i, name)| definition(i as u32 + 1, name, ResourceCategory::Equipment))
        .collect()
}

/// The specific-resource choices offered by the SOS intake form, per
/// category. Blood options are bare types; the selector's substring match
/// finds the corresponding "Blood Type …" records.
pub fn sos_resource_options(category: ResourceCategory) -> &'static [&'static str] {
    match category {
        ResourceCategory::Medicines => {
            &["Amoxicillin", "Paracetamol", "Ibuprofen", "Other Medicine"]
        }
        ResourceCategory::Blood => &["O+", "O-", "A+", "A-", "B+", "B-", "AB+", "AB-"],
        ResourceCategory::Beds => &["ER Bed", "Ward Bed", "ICU Bed"],
        ResourceCategory::Equipment => {
            &["Oxygen Tank", "Ventilator", "Defibrillator", "Nebulizer"]
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_eight_facilities_with_unique_ids() {
        let all = facilities();
        assert_eq!(all.len(), 8);

        let ids: HashSet<u32> = all.iter().map(|f| f.id.0).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn catalog_counts_match_the_formulary() {
        assert_eq!(medicines().len(), 8);
        assert_eq!(blood_types().len(), 8);
        assert_eq!(bed_types().len(), 3);
        assert_eq!(equipment().len(), 4);
    }

    #[test]
    fn definitions_carry_their_category() {
        assert!(medicines()
            .iter()
            .all(|d| d.category == ResourceCategory::Medicines));
        assert!(blood_types()
            .iter()
            .all(|d| d.category == ResourceCategory::Blood));
        assert!(bed_types().iter().all(|d| d.category == ResourceCategory::Beds));
        assert!(equipment()
            .iter()
            .all(|d| d.category == ResourceCategory::Equipment));
    }

    #[test]
    fn sos_options_exist_for_every_category() {
        for category in ResourceCategory::ALL {
            assert!(!sos_resource_options(category).is_empty());
        }
    }
}
