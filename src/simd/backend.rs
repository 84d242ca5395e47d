use std::fmt;
use std::sync::OnceLock;

use log::debug;

/// Instruction set used for lane groups.
///
/// A variant can exist without being usable: [`Backend::is_available`] is
/// true only when its lane module was built (see `build.rs`) and the running
/// CPU reports the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 256-bit registers, 8 lanes.
    Avx2,
    /// 128-bit registers, 4 lanes.
    Sse,
    /// 128-bit registers, 4 lanes.
    Neon,
    /// One element at a time.
    Scalar,
}

impl Backend {
    /// Widest first.
    pub const ALL: [Backend; 4] = [Backend::Avx2, Backend::Neon, Backend::Sse, Backend::Scalar];

    /// Returns the widest available backend.
    ///
    /// Probed once per process.
    pub fn detect() -> Backend {
        static DETECTED: OnceLock<Backend> = OnceLock::new();

        *DETECTED.get_or_init(|| {
            let backend = Backend::ALL
                .into_iter()
                .find(|backend| backend.is_available())
                .unwrap_or(Backend::Scalar);

            debug!("selected {backend} backend ({} lanes)", backend.lanes());

            backend
        })
    }

    /// Every backend usable on this machine, widest first.
    pub fn available() -> Vec<Backend> {
        Backend::ALL
            .into_iter()
            .filter(|backend| backend.is_available())
            .collect()
    }

    pub fn is_available(self) -> bool {
        match self {
            Backend::Avx2 => avx2_available(),
            Backend::Sse => sse_available(),
            Backend::Neon => neon_available(),
            Backend::Scalar => true,
        }
    }

    /// Number of f32 values processed per instruction.
    pub const fn lanes(self) -> usize {
        match self {
            Backend::Avx2 => 8,
            Backend::Sse | Backend::Neon => 4,
            Backend::Scalar => 1,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Avx2 => "avx2",
            Backend::Sse => "sse",
            Backend::Neon => "neon",
            Backend::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
fn avx2_available() -> bool {
    is_x86_feature_detected!("avx2")
}

#[cfg(not(all(avx2, any(target_arch = "x86", target_arch = "x86_64"))))]
fn avx2_available() -> bool {
    false
}

#[cfg(all(any(avx2, sse), any(target_arch = "x86", target_arch = "x86_64")))]
fn sse_available() -> bool {
    is_x86_feature_detected!("sse")
}

#[cfg(not(all(any(avx2, sse), any(target_arch = "x86", target_arch = "x86_64"))))]
fn sse_available() -> bool {
    false
}

#[cfg(all(neon, target_arch = "aarch64"))]
fn neon_available() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

#[cfg(not(all(neon, target_arch = "aarch64")))]
fn neon_available() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_always_available() {
        assert!(Backend::Scalar.is_available());
        assert_eq!(Backend::available().last(), Some(&Backend::Scalar));
    }

    #[test]
    fn test_detect_is_widest_available() {
        let detected = Backend::detect();
        assert!(detected.is_available());
        assert_eq!(Backend::available()[0], detected);
        assert_eq!(Backend::detect(), detected);
    }

    #[test]
    fn test_lanes() {
        assert_eq!(Backend::Avx2.lanes(), 8);
        assert_eq!(Backend::Sse.lanes(), 4);
        assert_eq!(Backend::Neon.lanes(), 4);
        assert_eq!(Backend::Scalar.lanes(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Backend::Avx2.to_string(), "avx2");
        assert_eq!(Backend::Scalar.to_string(), "scalar");
    }
}
