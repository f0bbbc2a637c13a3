// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use keyward_core::DigestAlgorithm;

/// One-shot hash of `data`.
pub(crate) fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        DigestAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// ANSI X9.63 KDF: `Hash(Z || counter || shared_info)` for counter = 1, 2, ...
/// concatenated and truncated to `output_len`.
pub(crate) fn x963_kdf(
    algorithm: DigestAlgorithm,
    shared_secret: &[u8],
    shared_info: &[u8],
    output_len: usize,
) -> Zeroizing<Vec<u8>> {
    match algorithm {
        DigestAlgorithm::Sha1 => x963::<Sha1>(shared_secret, shared_info, output_len),
        DigestAlgorithm::Sha224 => x963::<Sha224>(shared_secret, shared_info, output_len),
        DigestAlgorithm::Sha256 => x963::<Sha256>(shared_secret, shared_info, output_len),
        DigestAlgorithm::Sha384 => x963::<Sha384>(shared_secret, shared_info, output_len),
        DigestAlgorithm::Sha512 => x963::<Sha512>(shared_secret, shared_info, output_len),
    }
}

fn x963<D: Digest>(
    shared_secret: &[u8],
    shared_info: &[u8],
    output_len: usize,
) -> Zeroizing<Vec<u8>> {
    // Preallocated: extending must not reallocate
    let mut out = Zeroizing::new(Vec::with_capacity(output_len));
    let mut counter: u32 = 1;

    while out.len() < output_len {
        let block = D::new()
            .chain_update(shared_secret)
            .chain_update(counter.to_be_bytes())
            .chain_update(shared_info)
            .finalize();

        let take = (output_len - out.len()).min(block.len());
        out.extend_from_slice(&block[..take]);
        counter = counter.wrapping_add(1);
    }

    out
}
