use std::cmp::Ordering;
use std::env;
use std::process::Command;

// CPU features that have a ReLU kernel variant in this crate
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    // names the feature goes by in /proc/cpuinfo or CARGO_CFG_TARGET_FEATURE
    aliases: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Lowest number == widest kernel
    fn priority(&self) -> usize {
        match self.name {
            "avx" => 0,
            "sse2" => 1,
            "neon" => 2,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                aliases: &["sse2"],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "avx",
                aliases: &["avx"],
                cfg_flag: "avx",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                aliases: &["neon", "asimd"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let flags: Vec<String> = cpuinfo
                .lines()
                .filter(|line| line.starts_with("flags") || line.starts_with("Features"))
                .flat_map(|line| line.split_whitespace().map(str::to_lowercase))
                .collect();

            for feature in features.iter_mut() {
                feature.detected = feature
                    .aliases
                    .iter()
                    .any(|alias| flags.iter().any(|flag| flag == alias));
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected = match feature.name {
                    "avx" => contents.contains("hw.optional.avx1_0: 1"),
                    "sse2" => contents.contains("hw.optional.sse2: 1"),
                    "neon" => contents.contains("hw.optional.neon: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// Cross builds: trust the target features rustc was configured with
struct TargetFeatureDetector;
impl CpuFeatureDetector for TargetFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

        for feature in features.iter_mut() {
            feature.detected = feature
                .aliases
                .iter()
                .any(|alias| target_features.split(',').any(|enabled| enabled == *alias));
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature], is_native_build: bool) {
        if is_native_build {
            for detector in Self::cpu_features_detectors() {
                if detector.is_applicable() {
                    detector.detect_features(features);
                    return;
                }
            }
        }

        TargetFeatureDetector.detect_features(features);
    }

    fn apply(features: &mut [CpuFeature]) {
        let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let x86 = target_arch == "x86" || target_arch == "x86_64";

        features.sort();

        // A feature only counts when the target architecture can use it
        let enabled: Vec<&CpuFeature> = features
            .iter()
            .filter(|feature| feature.detected)
            .filter(|feature| match feature.name {
                "neon" => target_arch == "aarch64",
                _ => x86,
            })
            .collect();

        for feature in &enabled {
            println!("cargo:rustc-cfg={}", feature.cfg_flag);
        }

        match enabled.first() {
            Some(widest) => println!("applying: {} (default kernel)", widest.cfg_flag),
            None => {
                println!("applying: fallback (scalar kernel)");
                println!("cargo:rustc-cfg=fallback");
            }
        }

        println!("cargo::rustc-check-cfg=cfg(avx)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut features = CpuFeature::features();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    PlatformDetector::detect_cpu_features(&mut features, host == target);
    PlatformDetector::apply(&mut features);
}
