//! # Ethics and Safety Statement

use serde::Serialize;

use guardian_core::Variant;

/// A headline guarantee shown on the statement view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guarantee {
    pub title: &'static str,
    pub description: &'static str,
}

/// The ethics statement body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EthicsStatement {
    pub version: &'static str,
    pub what_it_is: &'static [&'static str],
    pub what_it_is_not: &'static [&'static str],
    pub boundary: &'static str,
    pub seal: &'static str,
}

pub fn core_guarantees(variant: Variant) -> &'static [Guarantee] {
    match variant {
        Variant::FieldKit => FIELD_KIT_GUARANTEES,
        Variant::GlobalMesh => GLOBAL_MESH_GUARANTEES,
    }
}

pub fn statement(_variant: Variant) -> &'static EthicsStatement {
    &STATEMENT
}

const FIELD_KIT_GUARANTEES: &[Guarantee] = &[
    Guarantee {
        title: "NO INTERNET",
        description: "The radios are disabled in hardware configuration. There is nothing to connect to and nothing to phone home.",
    },
    Guarantee {
        title: "NO STORAGE",
        description: "The root filesystem is read-only and logs live in RAM. Pulling the plug erases everything that happened.",
    },
    Guarantee {
        title: "NO IDENTITY",
        description: "The device does not know who is speaking and has no way to find out.",
    },
    Guarantee {
        title: "OPEN SOURCE",
        description: "GPLv3. The build script is public and every card can be rebuilt and compared.",
    },
];

const GLOBAL_MESH_GUARANTEES: &[Guarantee] = &[
    Guarantee {
        title: "PLANETARY LATTICE",
        description: "Six nodes active. Every child connected to the silence of the mesh, not the noise of the net.",
    },
    Guarantee {
        title: "VECTOR: PRIVACY",
        description: "No internet. No storage. No identity. The child's voice remains in the air, never in the silicon.",
    },
    Guarantee {
        title: "VECTOR: RESILIENCE",
        description: "Climate-hardened. Battery-optimized. Works when the grid fails and the heat rises.",
    },
    Guarantee {
        title: "VECTOR: LEGION",
        description: "GPLv3 Open Source. A tool that belongs to the community, not a company.",
    },
];

static STATEMENT: EthicsStatement = EthicsStatement {
    version: "Version 0.1 - Immutable Core Principles",
    what_it_is: &[
        "Offline standalone device",
        "Listens for vocal distress",
        "Responds with pre-recorded affirmations",
    ],
    what_it_is_not: &[
        "NOT a surveillance system",
        "NOT cloud-dependent",
        "NOT connected to authorities",
    ],
    boundary: "If any component of this system violates your trust: Remove the SD card. Destroy it. This system ceases to exist. No exceptions.",
    seal: "bryer_continuation_seal::v0.1::a1b2c3d4e5f6",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_lists_are_balanced() {
        let s = statement(Variant::FieldKit);
        assert_eq!(s.what_it_is.len(), s.what_it_is_not.len());
        assert!(s.what_it_is_not.iter().all(|line| line.starts_with("NOT ")));
    }

    #[test]
    fn test_guarantees_serialize() {
        let json = serde_json::to_value(core_guarantees(Variant::GlobalMesh)).unwrap();
        assert_eq!(json[0]["title"], "PLANETARY LATTICE");
    }
}
