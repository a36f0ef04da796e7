//! Device identity: a stable identifier for this installation, derived from
//! the local machine's descriptors and the user name.
//!
//! The server uses it to recognize a returning device, so the same machine
//! and user name must always give the same [DeviceId].

use crate::types::DeviceId;
use md5::{Digest, Md5};

/// MD5 of the UTF-8 bytes of `input`, as lowercase hexadecimal.
pub fn md5_digest(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Ordered machine descriptors: kernel name, host name, kernel release,
/// kernel version, hardware architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineFingerprint(Vec<String>);

impl MachineFingerprint {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Descriptors of the machine this process runs on.
    #[cfg(unix)]
    pub fn local() -> Self {
        match nix::sys::utsname::uname() {
            Ok(uts) => Self::new(
                [
                    uts.sysname(),
                    uts.nodename(),
                    uts.release(),
                    uts.version(),
                    uts.machine(),
                ]
                .map(|s| s.to_string_lossy().into_owned()),
            ),
            Err(e) => {
                log::warn!("uname failed ({}), falling back to compile-time descriptors", e);
                Self::fallback()
            }
        }
    }

    /// Descriptors of the machine this process runs on.
    #[cfg(not(unix))]
    pub fn local() -> Self {
        use sysinfo::System;
        Self::new([
            System::name().unwrap_or_default(),
            System::host_name().unwrap_or_default(),
            System::kernel_version().unwrap_or_default(),
            System::os_version().unwrap_or_default(),
            std::env::consts::ARCH.to_string(),
        ])
    }

    #[cfg(unix)]
    fn fallback() -> Self {
        Self::new([std::env::consts::OS, "", "", "", std::env::consts::ARCH])
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Descriptors joined with `.`, e.g. `Linux.myhost.6.1.0.#1 SMP.x86_64`
    pub fn dot_joined(&self) -> String {
        self.0.join(".")
    }
}

impl DeviceId {
    /// `md5(fingerprint + user_name)`, with no separator between the two.
    pub fn derive(fingerprint: &MachineFingerprint, user_name: &str) -> Self {
        let machine_id = fingerprint.dot_joined();
        DeviceId::new(md5_digest(&format!("{}{}", machine_id, user_name)))
    }
}

/// Derive the [DeviceId] of this machine for the given user.
pub fn derive_device_id(user_name: &str) -> DeviceId {
    DeviceId::derive(&MachineFingerprint::local(), user_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn fingerprint() -> MachineFingerprint {
        MachineFingerprint::new(["Linux", "lab-pc", "6.1.0", "#1 SMP", "x86_64"])
    }

    #[rstest]
    #[case("", "d41d8cd98f00b204e9800998ecf8427e")]
    #[case("abc", "900150983cd24fb0d6963f7d28e17f72")]
    #[case(
        "The quick brown fox jumps over the lazy dog",
        "9e107d9d372bb6826bd81d3542a419d6"
    )]
    fn test_md5_digest(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(md5_digest(input), expected);
    }

    #[rstest]
    fn test_dot_joined(fingerprint: MachineFingerprint) {
        assert_eq!(fingerprint.dot_joined(), "Linux.lab-pc.6.1.0.#1 SMP.x86_64");
    }

    #[rstest]
    fn test_derive_concatenates_without_separator(fingerprint: MachineFingerprint) {
        let device_id = DeviceId::derive(&fingerprint, "alice");
        let expected = md5_digest("Linux.lab-pc.6.1.0.#1 SMP.x86_64alice");
        assert_eq!(device_id.as_str(), expected);
    }

    #[rstest]
    fn test_derive_is_deterministic(fingerprint: MachineFingerprint) {
        let a = DeviceId::derive(&fingerprint, "alice");
        let b = DeviceId::derive(&fingerprint.clone(), "alice");
        assert_eq!(a, b);
        assert_ne!(a, DeviceId::derive(&fingerprint, "bob"));
    }

    #[test]
    fn test_device_id_format() {
        let device_id = derive_device_id("alice");
        assert_eq!(device_id.as_str().len(), 32);
        assert!(device_id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(device_id, derive_device_id("alice"));
    }

    #[test]
    fn test_local_fingerprint_has_five_parts() {
        assert_eq!(MachineFingerprint::local().parts().len(), 5);
    }
}
