//! # Mesh Telemetry and Language Packs
//!
//! Decorative global-mesh content. Node coherence values are fixed display
//! data; they are not fed by, and do not feed, the compliance tracker.

use serde::Serialize;

use guardian_core::{DeploymentSite, Variant};

/// Display state of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Active,
    Pulsing,
    Latent,
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Active => "active",
            Self::Pulsing => "pulsing",
            Self::Latent => "latent",
        })
    }
}

/// A node on the mesh map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshNode {
    pub id: &'static str,
    pub name: &'static str,
    pub site: DeploymentSite,
    /// Map position as (x, y) percentages.
    pub coords: (u8, u8),
    pub status: NodeStatus,
    /// In `[0.0, 1.0]`.
    pub coherence: f64,
}

/// Review state of a language pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackStatus {
    Verified,
    Pending,
}

impl std::fmt::Display for PackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
        })
    }
}

/// A recorded affirmation set in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguagePack {
    pub code: &'static str,
    pub name: &'static str,
    pub status: PackStatus,
    pub checksum: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// Arithmetic mean of node coherence. `0.0` for no nodes.
pub fn mean_coherence(nodes: &[MeshNode]) -> f64 {
    if nodes.is_empty() {
        return 0.0;
    }
    nodes.iter().map(|n| n.coherence).sum::<f64>() / nodes.len() as f64
}

pub fn nodes(variant: Variant) -> &'static [MeshNode] {
    match variant {
        Variant::FieldKit => &[],
        Variant::GlobalMesh => NODES,
    }
}

pub fn language_packs(variant: Variant) -> &'static [LanguagePack] {
    match variant {
        Variant::FieldKit => &[],
        Variant::GlobalMesh => LANGUAGE_PACKS,
    }
}

pub fn full_build_script(variant: Variant) -> Option<&'static str> {
    match variant {
        Variant::FieldKit => None,
        Variant::GlobalMesh => Some(FULL_BUILD_SCRIPT),
    }
}

pub fn pictogram_guide(variant: Variant) -> Option<&'static str> {
    match variant {
        Variant::FieldKit => None,
        Variant::GlobalMesh => Some(PICTOGRAM_GUIDE),
    }
}

const NODES: &[MeshNode] = &[
    MeshNode {
        id: "hou",
        name: "Houston Hub",
        site: DeploymentSite::HoustonHub,
        coords: (20, 45),
        status: NodeStatus::Active,
        coherence: 0.98,
    },
    MeshNode {
        id: "lon",
        name: "London Reach",
        site: DeploymentSite::LondonReach,
        coords: (48, 25),
        status: NodeStatus::Pulsing,
        coherence: 0.84,
    },
    MeshNode {
        id: "kyi",
        name: "Kyiv Core",
        site: DeploymentSite::KyivCore,
        coords: (55, 28),
        status: NodeStatus::Active,
        coherence: 0.91,
    },
    MeshNode {
        id: "nai",
        name: "Nairobi Node",
        site: DeploymentSite::NairobiNode,
        coords: (54, 60),
        status: NodeStatus::Latent,
        coherence: 0.12,
    },
    MeshNode {
        id: "syd",
        name: "Sydney Link",
        site: DeploymentSite::SydneyLink,
        coords: (85, 80),
        status: NodeStatus::Active,
        coherence: 0.77,
    },
    MeshNode {
        id: "sao",
        name: "São Paulo Arc",
        site: DeploymentSite::SaoPauloArc,
        coords: (32, 75),
        status: NodeStatus::Active,
        coherence: 0.89,
    },
];

const LANGUAGE_PACKS: &[LanguagePack] = &[
    LanguagePack {
        code: "en-TX",
        name: "Texas English",
        status: PackStatus::Verified,
        checksum: "tx01",
        note: Some("Rural accent comfort anchors"),
    },
    LanguagePack {
        code: "es-TX",
        name: "Texas Spanish",
        status: PackStatus::Verified,
        checksum: "tx02",
        note: Some("Regional dialect alignment"),
    },
    LanguagePack {
        code: "uk",
        name: "Ukrainian",
        status: PackStatus::Verified,
        checksum: "g7h8",
        note: Some("Resilience prompts"),
    },
    LanguagePack {
        code: "sw",
        name: "Swahili",
        status: PackStatus::Pending,
        checksum: "sw09",
        note: Some("East African regional anchor"),
    },
    LanguagePack {
        code: "en-UK",
        name: "British English",
        status: PackStatus::Verified,
        checksum: "uk01",
        note: None,
    },
    LanguagePack {
        code: "pt-BR",
        name: "Portuguese (BR)",
        status: PackStatus::Verified,
        checksum: "pt02",
        note: None,
    },
];

const FULL_BUILD_SCRIPT: &str = r#"#!/bin/bash
# GuardianOS v4.0.0 - PLANETARY LATTICE
set -e

echo "[VECTOR: GLOBAL_MESH] INITIALIZING HANDSHAKE..."
echo "lattice_id=$(cat /proc/sys/kernel/random/uuid)" > /etc/guardian_mesh.conf

echo "[VECTOR: HARDENING] THROTTLING HARDWARE..."
echo "arm_freq=800" >> /boot/config.txt
echo "temp_limit=60" >> /boot/config.txt

echo "[VECTOR: AIR-GAP] KILLING RADIOS..."
echo "dtoverlay=disable-wifi" >> /boot/config.txt
echo "dtoverlay=disable-bt" >> /boot/config.txt

echo "[VECTOR: PRIVACY] READ-ONLY OVERLAY..."
sed -i 's/$/ overlayroot=tmpfs/' /boot/cmdline.txt

sync
echo "WORLD VECTOR ACTIVE. LATTICE SEALED.""#;

const PICTOGRAM_GUIDE: &str = r#"[ PLANETARY VECTOR MAP ]

    ( NORTH )       ( EUROPE )
        |               |
    [ NODE_HOU ] <---> [ NODE_LON ]
        |               |
    [ NODE_SAO ] <---> [ NODE_KYI ]
        |               |
    ( SOUTH )       ( EAST )"#;
