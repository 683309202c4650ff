//! # Checklist Seeds
//!
//! The compliance items each variant starts a session with. The field kit
//! ships eight entries, all pending and unscoped. The global mesh ships six
//! entries, all already completed, each tagged with a deployment site.

use serde::Serialize;

use guardian_core::{
    ChecklistEntry, ComplianceCategory, DeploymentSite, EntryId, EntryStatus, GuardianError,
    Requirement, Variant,
};

/// A compiled-in checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedEntry {
    pub id: &'static str,
    pub category: ComplianceCategory,
    pub site: Option<DeploymentSite>,
    pub label: &'static str,
    pub description: &'static str,
    pub status: EntryStatus,
    pub requirement: Requirement,
}

impl SeedEntry {
    /// Build the owned, session-local entry.
    pub fn to_entry(&self) -> Result<ChecklistEntry, GuardianError> {
        Ok(ChecklistEntry {
            id: EntryId::new(self.id)?,
            category: self.category,
            site: self.site,
            label: self.label.to_string(),
            description: self.description.to_string(),
            status: self.status,
            requirement: self.requirement,
        })
    }
}

/// Seed table for `variant`.
pub fn seed(variant: Variant) -> &'static [SeedEntry] {
    match variant {
        Variant::FieldKit => FIELD_KIT,
        Variant::GlobalMesh => GLOBAL_MESH,
    }
}

const FIELD_KIT: &[SeedEntry] = &[
    SeedEntry {
        id: "coppa-1",
        category: ComplianceCategory::Coppa,
        site: None,
        label: "Zero-Retention Kernel Lock",
        description: "Persistent storage is mounted read-only and all writable paths live in RAM. No audio, transcript or identifier survives a power cycle.",
        status: EntryStatus::Pending,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "coppa-2",
        category: ComplianceCategory::Coppa,
        site: None,
        label: "No Account, No Enrollment",
        description: "The device has no user accounts, pairing flow or companion app. Nothing about a child is ever requested or entered.",
        status: EntryStatus::Pending,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "gdpr-9",
        category: ComplianceCategory::Gdpr,
        site: None,
        label: "Article 9 Special Category Isolation",
        description: "Distress detection runs on a local amplitude and cadence heuristic. No biometric template or voiceprint is derived or kept.",
        status: EntryStatus::Pending,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "hw-1",
        category: ComplianceCategory::Hardware,
        site: None,
        label: "Radio Hardware Disabled",
        description: "WiFi and Bluetooth are disabled by device-tree overlay in /boot/config.txt. The unit is physically air-gapped.",
        status: EntryStatus::Pending,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "hw-2",
        category: ComplianceCategory::Hardware,
        site: None,
        label: "Fire-Retardant Enclosure",
        description: "UL-marked ABS enclosure with tamper wax on every mounting point. Speaker grille sealed against moisture.",
        status: EntryStatus::Pending,
        requirement: Requirement::Recommended,
    },
    SeedEntry {
        id: "ethics-1",
        category: ComplianceCategory::Ethics,
        site: None,
        label: "Non-Personal Affirmation Set",
        description: "Every recorded affirmation is reviewed to be generic, calm and free of instructions. The device never asks a child questions.",
        status: EntryStatus::Pending,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "disposal-1",
        category: ComplianceCategory::Disposal,
        site: None,
        label: "SD Card Destruction Protocol",
        description: "Retired units have their SD card physically destroyed. Because nothing is written at runtime, destruction is a courtesy, not a requirement.",
        status: EntryStatus::Pending,
        requirement: Requirement::Recommended,
    },
    SeedEntry {
        id: "audit-1",
        category: ComplianceCategory::Audit,
        site: None,
        label: "Reproducible Public Image",
        description: "The OS image is built from a public script. Anyone can rebuild it and compare checksums with a deployed card.",
        status: EntryStatus::Pending,
        requirement: Requirement::Mandatory,
    },
];

const GLOBAL_MESH: &[SeedEntry] = &[
    SeedEntry {
        id: "syn-1",
        category: ComplianceCategory::Syntropic,
        site: Some(DeploymentSite::Global),
        label: "Planetary Lattice Handshake",
        description: "Establishment of zero-data peer-to-peer mesh. Bodies recognize each other via local cryptographic salt without central cloud indexing.",
        status: EntryStatus::Completed,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "coppa-1",
        category: ComplianceCategory::Coppa,
        site: Some(DeploymentSite::Global),
        label: "Zero-Retention Kernel Lock",
        description: "Hardware-level enforcement of zero data collection. Device logic is read-only; persistent storage is locked to prevent any audio logging or identity storage.",
        status: EntryStatus::Completed,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "gdpr-9",
        category: ComplianceCategory::Gdpr,
        site: Some(DeploymentSite::Global),
        label: "Article 9 Special Category Isolation",
        description: "Special category data (trauma triggers/biometrics) is never processed. Logic is deterministic and strictly local. No user profiling is possible.",
        status: EntryStatus::Completed,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "tx-1",
        category: ComplianceCategory::TexasRegulatory,
        site: Some(DeploymentSite::HoustonHub),
        label: "TX § 161.007 Consent Workflow",
        description: "Bilingual (ES/EN) physical consent manifest. Legally verified for deployment in Texas domestic violence shelters and CASA networks.",
        status: EntryStatus::Completed,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "thermal-1",
        category: ComplianceCategory::Thermal,
        site: Some(DeploymentSite::HoustonHub),
        label: "120°F Heat Hardening (Vector-T)",
        description: "Pi 4 CPU clocked to 800MHz with undervoltage. Copper passive heatsinks verified for grid-fail scenarios in Texas heat waves.",
        status: EntryStatus::Completed,
        requirement: Requirement::Mandatory,
    },
    SeedEntry {
        id: "audit-1",
        category: ComplianceCategory::Audit,
        site: Some(DeploymentSite::Global),
        label: "GPLv3 Licensing Manifest",
        description: "Perpetual, royalty-free nonprofit license. The code is public and the build is reproducible.",
        status: EntryStatus::Completed,
        requirement: Requirement::Mandatory,
    },
];
