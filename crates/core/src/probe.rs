use sysinfo::System;
use tracing::debug;

/// Placeholder for host queries the platform does not answer.
const UNKNOWN: &str = "unknown";

/// Notice attached when the pixel surface could not be allocated.
const GRAPHICS_DISABLED: &str = "Disabled (Low Memory)";

/// Host identification printed at the top of a benchmark run.
///
/// Built once at startup; every field is written exactly once. Frequency and
/// RAM are optional because not every host answers those queries, in which
/// case they render as `unknown`.
#[derive(Debug, Clone)]
pub struct HardwareInfo {
    cpu_freq_mhz: Option<u64>,
    platform: String,
    firmware: String,
    total_ram_kb: Option<u64>,
    graphics_notice: Option<&'static str>,
}

impl HardwareInfo {
    /// Build from explicit values, for embedders and tests.
    pub fn new(
        cpu_freq_mhz: Option<u64>,
        platform: impl Into<String>,
        firmware: impl Into<String>,
        total_ram_kb: Option<u64>,
    ) -> Self {
        Self {
            cpu_freq_mhz,
            platform: platform.into(),
            firmware: firmware.into(),
            total_ram_kb,
            graphics_notice: None,
        }
    }

    /// Query the host synchronously. Never fails: unsupported queries
    /// degrade to the `unknown` placeholder.
    pub fn probe() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_freq_mhz = sys
            .cpus()
            .first()
            .map(|cpu| cpu.frequency())
            .filter(|mhz| *mhz > 0);
        let platform = format!(
            "{} {}",
            System::name().unwrap_or_else(|| UNKNOWN.to_string()),
            std::env::consts::ARCH
        );
        let firmware = System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string());
        let total_ram_kb = match sys.total_memory() {
            0 => None,
            bytes => Some(bytes / 1024),
        };

        debug!(
            "Host probe complete: platform='{}', firmware='{}'",
            platform, firmware
        );

        Self {
            cpu_freq_mhz,
            platform,
            firmware,
            total_ram_kb,
            graphics_notice: None,
        }
    }

    /// Record that the graphics workload is disabled for this run.
    pub fn mark_graphics_disabled(&mut self) {
        self.graphics_notice = Some(GRAPHICS_DISABLED);
    }

    /// Label/value pairs in report order. The `Graphics` notice, when
    /// present, is always last.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (
                "CPU Freq",
                match self.cpu_freq_mhz {
                    Some(mhz) => format!("{} MHz", mhz),
                    None => UNKNOWN.to_string(),
                },
            ),
            ("Platform", self.platform.clone()),
            ("Firmware", self.firmware.clone()),
            (
                "Total RAM",
                match self.total_ram_kb {
                    Some(kb) => format!("{} KB", kb),
                    None => UNKNOWN.to_string(),
                },
            ),
        ];
        if let Some(notice) = self.graphics_notice {
            entries.push(("Graphics", notice.to_string()));
        }
        entries
    }
}
