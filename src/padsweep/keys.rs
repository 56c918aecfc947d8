//! # Key Naming
//!
//! Every record the sweeps touch lives in one flat string-keyed namespace.
//! The key conventions are shared with the host editor and the MyPads plugin
//! and must not drift:
//!
//! ```text
//! mypads:group:<gid>              group record with a .pads array
//! mypads:pad:<pid>                MyPads-level pad metadata ("claimed" pad)
//! pad:<pid>                       host-native pad record
//! pad:<pid>:revs:<n>              revision records
//! pad:<pid>:chat:<n>              chat history records
//! pad2readonly:<pid>              forward alias: pad -> readonly id
//! readonly2pad:<roid>             reverse alias: readonly id -> pad
//! mypads:jobqueue:deletePad:<pid> queued cascade-deletion work item
//! mypads:conf:allowEtherPads      config gate for the orphan sweep
//! ```
//!
//! This module is the only place those strings are spelled out; the command
//! layer goes through these helpers so a typo'd prefix cannot silently scan
//! the wrong family of records.

const GROUP_PREFIX: &str = "mypads:group:";
const MYPADS_PAD_PREFIX: &str = "mypads:pad:";
const PAD_PREFIX: &str = "pad:";
const PAD_TO_READONLY_PREFIX: &str = "pad2readonly:";
const READONLY_TO_PAD_PREFIX: &str = "readonly2pad:";
const JOB_PREFIX: &str = "mypads:jobqueue:deletePad:";

/// Config key consulted by the orphan sweep before it will run.
pub const ALLOW_ETHERPADS_CONF: &str = "mypads:conf:allowEtherPads";

pub fn group_pattern() -> String {
    format!("{}*", GROUP_PREFIX)
}

pub fn mypads_pad_key(pad_id: &str) -> String {
    format!("{}{}", MYPADS_PAD_PREFIX, pad_id)
}

pub fn pad_key(pad_id: &str) -> String {
    format!("{}{}", PAD_PREFIX, pad_id)
}

pub fn revs_pattern(pad_id: &str) -> String {
    format!("{}{}:revs:*", PAD_PREFIX, pad_id)
}

pub fn chat_pattern(pad_id: &str) -> String {
    format!("{}{}:chat:*", PAD_PREFIX, pad_id)
}

pub fn pad_to_readonly_key(pad_id: &str) -> String {
    format!("{}{}", PAD_TO_READONLY_PREFIX, pad_id)
}

pub fn readonly_to_pad_key(readonly_id: &str) -> String {
    format!("{}{}", READONLY_TO_PAD_PREFIX, readonly_id)
}

pub fn readonly_pattern() -> String {
    format!("{}*", READONLY_TO_PAD_PREFIX)
}

pub fn job_key(pad_id: &str) -> String {
    format!("{}{}", JOB_PREFIX, pad_id)
}

pub fn job_pattern() -> String {
    format!("{}*", JOB_PREFIX)
}

/// Recover the pad id embedded in a `mypads:jobqueue:deletePad:<pid>` key.
pub fn pad_id_from_job_key(key: &str) -> Option<&str> {
    key.strip_prefix(JOB_PREFIX)
}

/// Recover the readonly id embedded in a `readonly2pad:<roid>` key.
pub fn readonly_id_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(READONLY_TO_PAD_PREFIX)
}

/// Glob match with `*` as the only wildcard (matches any run of characters,
/// including none). This is the matching the store's `find_keys` contract
/// promises, so both backends route through it.
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    fn matches(p: &[u8], k: &[u8]) -> bool {
        match (p.first(), k.first()) {
            (None, None) => true,
            (Some(b'*'), _) => {
                // Either the star consumes nothing, or it eats one key byte.
                matches(&p[1..], k) || (!k.is_empty() && matches(p, &k[1..]))
            }
            (Some(pc), Some(kc)) if pc == kc => matches(&p[1..], &k[1..]),
            _ => false,
        }
    }
    matches(pattern.as_bytes(), key.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern_is_exact_match() {
        assert!(pattern_matches("mypads:pad:abc", "mypads:pad:abc"));
        assert!(!pattern_matches("mypads:pad:abc", "mypads:pad:abcd"));
        assert!(!pattern_matches("mypads:pad:abc", "mypads:pad:ab"));
    }

    #[test]
    fn trailing_star_matches_prefix() {
        assert!(pattern_matches("pad:x:revs:*", "pad:x:revs:0"));
        assert!(pattern_matches("pad:x:revs:*", "pad:x:revs:"));
        assert!(!pattern_matches("pad:x:revs:*", "pad:x:chat:0"));
    }

    #[test]
    fn revs_pattern_does_not_swallow_longer_pad_ids() {
        // pad "x" must not match records belonging to pad "xy"
        assert!(!pattern_matches(&revs_pattern("x"), "pad:xy:revs:0"));
    }

    #[test]
    fn job_key_round_trip() {
        let key = job_key("42");
        assert_eq!(key, "mypads:jobqueue:deletePad:42");
        assert_eq!(pad_id_from_job_key(&key), Some("42"));
        assert_eq!(pad_id_from_job_key("mypads:pad:42"), None);
    }

    #[test]
    fn readonly_id_extraction() {
        assert_eq!(readonly_id_from_key("readonly2pad:r.abc"), Some("r.abc"));
        assert_eq!(readonly_id_from_key("pad2readonly:abc"), None);
    }
}
