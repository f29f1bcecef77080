//! Response codecs for the public providers the scanner talks to.
//!
//! Every provider payload is untrusted: each decoder returns an
//! [`anyhow::Result`] and never panics on malformed input. Decoders only
//! extract raw candidate strings; validation happens later, against the
//! scanned domain.

pub mod anubis;
pub mod crtsh;
pub mod otx;
pub mod pattern;
pub mod urlscan;
pub mod wayback;
