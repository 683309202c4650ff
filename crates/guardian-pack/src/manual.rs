//! # Field Manual Content
//!
//! Hardware bill of materials, calibration steps, the immutable-image build
//! pipeline, the two system configuration files it produces, and the open
//! decisions listed at the foot of the manual.

use serde::Serialize;

use guardian_core::Variant;

/// One line of the hardware bill of materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HardwareSpec {
    pub component: &'static str,
    pub detail: &'static str,
}

/// One stage of the image build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStep {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// A configuration file written into the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    pub path: &'static str,
    pub purpose: &'static str,
    pub contents: &'static str,
}

/// An open engineering decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn hardware(variant: Variant) -> &'static [HardwareSpec] {
    match variant {
        Variant::FieldKit => FIELD_KIT_HARDWARE,
        Variant::GlobalMesh => GLOBAL_MESH_HARDWARE,
    }
}

pub fn calibration_steps(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::FieldKit => FIELD_KIT_CALIBRATION,
        Variant::GlobalMesh => GLOBAL_MESH_CALIBRATION,
    }
}

/// Both variants build the same image.
pub fn build_steps(_variant: Variant) -> &'static [BuildStep] {
    BUILD_STEPS
}

pub fn system_configs(_variant: Variant) -> &'static [ConfigFile] {
    SYSTEM_CONFIGS
}

pub fn next_decisions(variant: Variant) -> &'static [Decision] {
    match variant {
        Variant::FieldKit => FIELD_KIT_DECISIONS,
        Variant::GlobalMesh => GLOBAL_MESH_DECISIONS,
    }
}

const FIELD_KIT_HARDWARE: &[HardwareSpec] = &[
    HardwareSpec {
        component: "Processing Core",
        detail: "Raspberry Pi 4 (2GB) - Heat-sinked",
    },
    HardwareSpec {
        component: "Storage",
        detail: "16GB Industrial microSD (read-only root)",
    },
    HardwareSpec {
        component: "Microphone",
        detail: "USB omnidirectional, hardware gain fixed",
    },
    HardwareSpec {
        component: "Speaker",
        detail: "Moisture-sealed 8Ω 3W",
    },
    HardwareSpec {
        component: "Enclosure",
        detail: "UL-Marked Fire-Retardant ABS",
    },
];

const GLOBAL_MESH_HARDWARE: &[HardwareSpec] = &[
    HardwareSpec {
        component: "Processing Core",
        detail: "Raspberry Pi 4 (2GB) - Heat-sinked",
    },
    HardwareSpec {
        component: "Power Backup",
        detail: "Anker 20,000mAh Battery (120°F Tested)",
    },
    HardwareSpec {
        component: "Enclosure",
        detail: "UL-Marked Fire-Retardant ABS",
    },
    HardwareSpec {
        component: "Speaker",
        detail: "Moisture-sealed 8Ω High-Fidelity",
    },
];

const FIELD_KIT_CALIBRATION: &[&str] = &[
    "Verify physical air-gap (Bluetooth/WiFi hardware disabled).",
    "Set microphone gain with the supplied reference tone.",
    "Play every affirmation once and confirm speaker volume at 1 meter.",
    "Apply security wax to all enclosure mounting points.",
    "Confirm read-only root partition state (overlayroot).",
];

const GLOBAL_MESH_CALIBRATION: &[&str] = &[
    "Verify physical air-gap (Bluetooth/WiFi hardware disabled).",
    "Lock CPU governor to 800MHz (Low thermal profile).",
    "Apply security wax to all enclosure mounting points.",
    "Run 24hr loop in 110°F stress environment.",
    "Confirm read-only root partition state (overlayroot).",
];

const BUILD_STEPS: &[BuildStep] = &[
    BuildStep {
        title: "Throttle",
        description: "Cap clock and temperature for enclosed operation.",
        code: "echo \"arm_freq=800\" >> /boot/config.txt\necho \"temp_limit=60\" >> /boot/config.txt",
    },
    BuildStep {
        title: "Air-Gap",
        description: "Disable both radios in the device tree.",
        code: "echo \"dtoverlay=disable-wifi\" >> /boot/config.txt\necho \"dtoverlay=disable-bt\" >> /boot/config.txt",
    },
    BuildStep {
        title: "Seal",
        description: "Mount the root filesystem read-only with a RAM overlay.",
        code: "sed -i 's/$/ overlayroot=tmpfs/' /boot/cmdline.txt\nsync",
    },
];

const SYSTEM_CONFIGS: &[ConfigFile] = &[
    ConfigFile {
        path: "/boot/config.txt",
        purpose: "HARDWARE ENFORCEMENT",
        contents: "arm_freq=800\ntemp_limit=60\ndtoverlay=disable-wifi\ndtoverlay=disable-bt\ndtparam=audio=on",
    },
    ConfigFile {
        path: "/etc/fstab",
        purpose: "VOLATILE RAM STORAGE",
        contents: "proc            /proc     proc   defaults             0 0\n/dev/mmcblk0p1  /boot     vfat   defaults,ro          0 2\n/dev/mmcblk0p2  /         ext4   defaults,noatime,ro  0 1\ntmpfs           /tmp      tmpfs  nosuid,nodev,size=64M 0 0\ntmpfs           /var/log  tmpfs  nosuid,nodev,size=16M 0 0",
    },
];

const FIELD_KIT_DECISIONS: &[Decision] = &[
    Decision {
        title: "Thermal Tuning",
        description: "Refine CPU caps and watchdog behavior for safe enclosed operation.",
    },
    Decision {
        title: "Audio Pack",
        description: "Finalize the set of ethically reviewed, non-personal affirmations.",
    },
    Decision {
        title: "Deployment Sheet",
        description: "Draft the grandmother-readable, one-page printed setup manual.",
    },
];

const GLOBAL_MESH_DECISIONS: &[Decision] = &[
    Decision {
        title: "Swahili Pack",
        description: "Complete the East African language pack and its review.",
    },
    Decision {
        title: "Nairobi Node",
        description: "Bring the latent Nairobi node up to active coherence.",
    },
    Decision {
        title: "Clinical Review",
        description: "Define the clinical review track for affirmation content.",
    },
];
