//! Compiled-in target profiles

use super::{RegistryNode, TargetProfile};
use std::path::PathBuf;

const PROFILES: &[&str] = &["zscaler"];

pub fn builtin_profile_names() -> &'static [&'static str] {
    PROFILES
}

/// Zscaler Client Connector, per the vendor's manual uninstall procedure.
///
/// Tamper protection must be off (or the machine booted in safe mode) for
/// the process and service steps to succeed.
pub fn zscaler() -> TargetProfile {
    TargetProfile {
        name: "zscaler".to_string(),
        process_prefix: "ZSA".to_string(),
        services: ["ZSAService", "ZSATrayManager", "ZSATunnel", "ZSAUpdater", "ZSAUpm"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        registry_keys: vec![
            RegistryNode::local_machine(
                r"SOFTWARE\Classes\Installer\Products\F3BAA9CF5789C0A4BBFBC36E47F0DCE4",
            ),
            RegistryNode::local_machine(r"SOFTWARE\Classes\zsa"),
            RegistryNode::local_machine(r"SOFTWARE\Zscaler Inc."),
        ],
        directories: vec![
            PathBuf::from(r"C:\Program Files\Zscaler"),
            PathBuf::from(r"C:\ProgramData\Zscaler"),
        ],
    }
}
