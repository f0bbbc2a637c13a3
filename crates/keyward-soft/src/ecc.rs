// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ECDSA, ECDH and X9.63 key encoding per supported curve.
//!
//! External representations follow X9.63: the uncompressed point
//! (`04 || X || Y`) for public keys and `04 || X || Y || K` for private keys.

macro_rules! curve_ops {
    ($module:ident, $krate:ident, $field_len:expr) => {
        pub(crate) mod $module {
            use ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
            use zeroize::Zeroizing;

            use $krate::ecdsa::{Signature, SigningKey, VerifyingKey};

            use keyward_util::wipe_bytes;

            use crate::error::SoftError;
            use crate::rng::EntropyRng;

            /// Field element length in bytes.
            pub(crate) const FIELD_LEN: usize = $field_len;

            /// Uncompressed point length in bytes.
            pub(crate) const POINT_LEN: usize = 1 + 2 * FIELD_LEN;

            pub(crate) fn generate<S: keyward_rand::EntropySource>(
                rng: &mut EntropyRng<S>,
            ) -> SigningKey {
                SigningKey::random(rng)
            }

            // Digests shorter than the field are zero-extended on the left,
            // which leaves their integer value unchanged.
            fn prehash(digest: &[u8]) -> Zeroizing<Vec<u8>> {
                let mut padded = Zeroizing::new(vec![0u8; FIELD_LEN.saturating_sub(digest.len())]);
                padded.extend_from_slice(digest);
                padded
            }

            pub(crate) fn sign_prehash(
                key: &SigningKey,
                digest: &[u8],
            ) -> Result<Vec<u8>, SoftError> {
                let signature: Signature = key
                    .sign_prehash(&prehash(digest))
                    .map_err(|_| SoftError::OperationFailed)?;

                Ok(signature.to_der().as_bytes().to_vec())
            }

            /// Malformed signatures verify as `false`.
            pub(crate) fn verify_prehash(
                key: &VerifyingKey,
                digest: &[u8],
                signature: &[u8],
            ) -> bool {
                match Signature::from_der(signature) {
                    Ok(signature) => key.verify_prehash(&prehash(digest), &signature).is_ok(),
                    Err(_) => false,
                }
            }

            pub(crate) fn export_public(key: &VerifyingKey) -> Vec<u8> {
                key.to_encoded_point(false).as_bytes().to_vec()
            }

            pub(crate) fn export_private(key: &SigningKey) -> Zeroizing<Vec<u8>> {
                let mut out = Zeroizing::new(Vec::with_capacity(POINT_LEN + FIELD_LEN));
                out.extend_from_slice(&export_public(key.verifying_key()));

                let mut scalar = key.to_bytes();
                out.extend_from_slice(&scalar);
                wipe_bytes(&mut scalar);

                out
            }

            pub(crate) fn import_public(bytes: &[u8]) -> Result<VerifyingKey, SoftError> {
                if bytes.len() != POINT_LEN {
                    return Err(SoftError::MalformedKey);
                }

                VerifyingKey::from_sec1_bytes(bytes).map_err(|_| SoftError::MalformedKey)
            }

            pub(crate) fn import_private(bytes: &[u8]) -> Result<SigningKey, SoftError> {
                if bytes.len() != POINT_LEN + FIELD_LEN {
                    return Err(SoftError::MalformedKey);
                }

                let (point, scalar) = bytes.split_at(POINT_LEN);
                let key = SigningKey::from_slice(scalar).map_err(|_| SoftError::MalformedKey)?;

                if export_public(key.verifying_key()) != point {
                    return Err(SoftError::MalformedKey);
                }

                Ok(key)
            }

            /// Raw ECDH shared secret (the x-coordinate, field length).
            pub(crate) fn diffie_hellman(
                private: &SigningKey,
                public: &VerifyingKey,
            ) -> Zeroizing<Vec<u8>> {
                let shared =
                    $krate::ecdh::diffie_hellman(private.as_nonzero_scalar(), public.as_affine());

                Zeroizing::new(shared.raw_secret_bytes().to_vec())
            }
        }
    };
}

curve_ops!(p256_ops, p256, 32);
curve_ops!(p384_ops, p384, 48);
