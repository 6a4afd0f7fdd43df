//! Hashing probe: digest a fixed string with RustCrypto `sha2`.

use sha2::{Digest, Sha256, Sha512};

use super::Report;
use crate::config::{DigestAlgorithm, DigestConfig};
use crate::hexcode;

/// Hash `data` with `algorithm` and return the raw digest bytes.
pub fn digest_bytes(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

pub fn run(cfg: &DigestConfig, report: &mut Report) {
    let digest = digest_bytes(cfg.algorithm, cfg.input.as_bytes());
    tracing::debug!(
        algorithm = cfg.algorithm.label(),
        input_len = cfg.input.len(),
        "digest computed"
    );

    report.line(format!(
        "[sha2] {}('{}'): {}",
        cfg.algorithm.label(),
        cfg.input,
        hexcode::encode(&digest)
    ));
    report.line(format!("[sha2] digest size  : {} bytes", digest.len()));
    report.line("[sha2] backend      : RustCrypto sha2");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeKind;

    #[test]
    fn sha256_abc_known_vector() {
        let d = digest_bytes(DigestAlgorithm::Sha256, b"abc");
        assert_eq!(
            hexcode::encode(&d),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_empty_input() {
        let d = digest_bytes(DigestAlgorithm::Sha256, b"");
        assert_eq!(
            hexcode::encode(&d),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha512_abc_known_vector() {
        let d = digest_bytes(DigestAlgorithm::Sha512, b"abc");
        assert_eq!(d.len(), 64);
        assert_eq!(
            hexcode::encode(&d),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn report_lines() {
        let mut r = Report::new(ProbeKind::Digest);
        run(&DigestConfig::default(), &mut r);
        assert_eq!(
            r.lines,
            vec![
                "[sha2] SHA256('abc'): ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
                    .to_string(),
                "[sha2] digest size  : 32 bytes".to_string(),
                "[sha2] backend      : RustCrypto sha2".to_string(),
            ]
        );
    }
}
