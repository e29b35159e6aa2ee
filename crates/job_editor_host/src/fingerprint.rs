use sha2::{Digest, Sha256};

use job_editor_core::JobDraft;

use crate::JobId;

/// Content fingerprint of a draft: hex SHA-256 of its canonical JSON.
///
/// Two drafts with equal field values always share a fingerprint, which is
/// what dirty tracking compares against the last saved snapshot.
pub fn draft_fingerprint(draft: &JobDraft) -> String {
    // Serializing a plain struct of strings, numbers and enums cannot fail.
    let canonical = serde_json::to_vec(draft).unwrap_or_default();
    let digest = Sha256::digest(&canonical);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

/// `job-{id}.json`
pub fn job_filename(id: JobId) -> String {
    format!("job-{id}.json")
}

/// Inverse of [`job_filename`]; `None` for anything else in the store dir.
pub fn parse_job_filename(name: &str) -> Option<JobId> {
    name.strip_prefix("job-")?
        .strip_suffix(".json")?
        .parse()
        .ok()
}
