// Authored reference content for the dashboard

use super::{Catalog, tint};
use crate::models::{CleanupMethod, Danger, FolderEntry};
use egui::Color32;

/// The built-in catalog, constant for the lifetime of the process.
pub static CATALOG: Catalog = Catalog::new(&FOLDERS);

static FOLDERS: [FolderEntry; 2] = [
    FolderEntry {
        key: "WinSxS",
        icon: "⬡",
        color: Color32::from_rgb(0xff, 0x6a, 0x00),
        glow: tint(0xff, 0x6a, 0x00, 0x66),
        size: "8–15 GB",
        location: r"C:\Windows\WinSxS",
        description: "The Windows Component Store. Houses all Windows component versions ever \
            installed — including superseded updates, rollback data, and side-by-side assemblies. \
            It is intentionally large and managed by the OS.",
        risks: "Never manually delete files here. Windows manages it exclusively.",
        methods: &[
            CleanupMethod {
                label: "Disk Cleanup (built-in)",
                cmd: "cleanmgr /sageset:1\ncleanmgr /sagerun:1",
                note: "Select 'Windows Update Cleanup' — removes superseded components.",
                danger: Danger::Low,
            },
            CleanupMethod {
                label: "DISM StartComponentCleanup",
                cmd: "Dism.exe /online /Cleanup-Image /StartComponentCleanup",
                note: "Removes superseded component versions after a 30-day safety window.",
                danger: Danger::Low,
            },
            CleanupMethod {
                label: "DISM + ResetBase (aggressive)",
                cmd: "Dism.exe /online /Cleanup-Image /StartComponentCleanup /ResetBase",
                note: "Removes ALL superseded components. Disables rollback of installed updates. \
                    Irreversible.",
                danger: Danger::High,
            },
            CleanupMethod {
                label: "PowerShell — Analyze size",
                cmd: r#"Get-ChildItem C:\Windows\WinSxS | Measure-Object -Property Length -Sum | Select-Object @{N="Size(GB)";E={[math]::Round($_.Sum/1GB,2)}}"#,
                note: "Accurate WinSxS size audit before cleanup.",
                danger: Danger::Safe,
            },
        ],
    },
    FolderEntry {
        key: "Installer",
        icon: "◈",
        color: Color32::from_rgb(0x00, 0xc9, 0xff),
        glow: tint(0x00, 0xc9, 0xff, 0x55),
        size: "3–12 GB",
        location: r"C:\Windows\Installer",
        description: "Windows Installer cache. Stores .msi and .msp patch files used by Windows \
            Installer for repair, modify, and uninstall operations. Orphaned files accumulate \
            over years of software churn.",
        risks: "Deleting active patch files breaks repair/uninstall of installed apps. Use tools \
            that detect orphans only.",
        methods: &[
            CleanupMethod {
                label: "PatchCleaner (GUI — recommended)",
                cmd: "# Download: https://www.hendesoftware.com/patchcleaner.aspx\n\
                      # Detects orphaned vs. active installer files safely.",
                note: "Move orphans to another drive rather than delete — safest approach.",
                danger: Danger::Low,
            },
            CleanupMethod {
                label: "msizap.exe (legacy SDK tool)",
                cmd: "msizap.exe G!",
                note: "Removes orphaned installer entries from registry and cache. Deprecated — \
                    use only on older systems.",
                danger: Danger::Medium,
            },
            CleanupMethod {
                label: "PowerShell — Find orphans",
                cmd: r#"$valid = Get-ChildItem "HKLM:\SOFTWARE\Microsoft\Windows\CurrentVersion\Installer\UserData" -Recurse |
  Where-Object { $_.Property -contains "LocalPackage" } |
  ForEach-Object { (Get-ItemProperty $_.PSPath).LocalPackage }

Get-ChildItem "C:\Windows\Installer\*.ms?" |
  Where-Object { $_.FullName -notin $valid } |
  Select-Object FullName, @{N="MB";E={[math]::Round($_.Length/1MB,1)}}"#,
                note: "Lists orphaned files by cross-referencing registry. Review before deleting.",
                danger: Danger::Safe,
            },
            CleanupMethod {
                label: "Disk Cleanup",
                cmd: "cleanmgr /d C:",
                note: "Limited effectiveness here — won't touch active installer files but clears \
                    temp variants.",
                danger: Danger::Low,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_verbatim() {
        let winsxs = CATALOG.lookup("WinSxS").unwrap();
        assert_eq!(winsxs.methods[0].cmd.lines().count(), 2);
        assert!(winsxs.methods[3].cmd.starts_with(r"Get-ChildItem C:\Windows\WinSxS |"));

        let installer = CATALOG.lookup("Installer").unwrap();
        let orphans = installer.methods[2].cmd;
        assert_eq!(orphans.lines().count(), 7);
        assert!(orphans.contains(r#""C:\Windows\Installer\*.ms?""#));
        assert_eq!(
            installer.methods[0].cmd,
            "# Download: https://www.hendesoftware.com/patchcleaner.aspx\n# Detects orphaned vs. active installer files safely."
        );
    }

    #[test]
    fn only_resetbase_is_high_risk() {
        let high: Vec<_> = CATALOG
            .folders()
            .iter()
            .flat_map(|f| f.methods)
            .filter(|m| m.danger == Danger::High)
            .map(|m| m.label)
            .collect();
        assert_eq!(high, ["DISM + ResetBase (aggressive)"]);
    }

    #[test]
    fn continued_lines_keep_single_spaces() {
        for folder in CATALOG.folders() {
            assert!(!folder.description.contains("  "), "{}", folder.key);
            assert!(!folder.risks.contains("  "), "{}", folder.key);
        }
    }
}
